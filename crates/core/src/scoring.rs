//! The five-part compatibility scorer: similarity, balance, structural
//! coverage, clash penalty, and the weighted final score with its
//! uncertainty band.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::flavor::{cosine_similarity, FlavorVector, DIMENSIONS};
use crate::ingredient::{DishIngredient, IngredientClass, StructuralRole};
use crate::method::DishType;

/// Weight of the similarity component in the final score.
pub const WEIGHT_SIMILARITY: f64 = 0.45;
/// Weight of the balance component.
pub const WEIGHT_BALANCE: f64 = 0.35;
/// Weight of structural coverage.
pub const WEIGHT_STRUCTURAL: f64 = 0.20;
/// Weight of the clash penalty (subtracted).
pub const WEIGHT_CLASH_PENALTY: f64 = 0.40;

/// Base uncertainty attached to every score.
pub const UNCERTAINTY_BASE: f64 = 0.06;
/// Additional uncertainty per unit of clash penalty; the clash model is the
/// least trusted input.
pub const UNCERTAINTY_CLASH_CONTRIB: f64 = 0.04;

/// Individual score components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponents {
    /// Cosine similarity to the target, in [-1, 1].
    pub similarity: f64,
    /// Weighted balance against the target, in [0, 1].
    pub balance: f64,
    /// Structural role coverage, in [0, 1].
    pub structural: f64,
    /// Pairwise clash penalty, in [0, 1].
    pub clash_penalty: f64,
}

/// Final score with its component breakdown and uncertainty estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub score: f64,
    pub uncertainty: f64,
    pub components: ScoreComponents,
}

/// Interpretation band for a final score. Thresholds are fixed, not
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    /// score > 0.75
    StrongCoherence,
    /// 0.55 <= score <= 0.75
    Workable,
    /// 0.30 <= score < 0.55
    Moderate,
    /// 0.00 <= score < 0.30
    HighClashRisk,
    /// score < 0
    Severe,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score > 0.75 {
            ScoreBand::StrongCoherence
        } else if score >= 0.55 {
            ScoreBand::Workable
        } else if score >= 0.30 {
            ScoreBand::Moderate
        } else if score >= 0.0 {
            ScoreBand::HighClashRisk
        } else {
            ScoreBand::Severe
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScoreBand::StrongCoherence => "Strong coherence, minimal clash",
            ScoreBand::Workable => "Workable, minor issues",
            ScoreBand::Moderate => "Moderate clash/imbalance; requires fixing",
            ScoreBand::HighClashRisk => "High clash risk; major intervention needed",
            ScoreBand::Severe => "Severe clash; incompatible combination",
        }
    }
}

/// Similarity between a normalized dish vector and a target profile.
pub fn compute_similarity(normalized: &FlavorVector, target: &FlavorVector) -> f64 {
    cosine_similarity(normalized, target)
}

/// Balance against a target profile:
/// `1 - sum(w * |V_norm - target|) / sum(w)`, clamped to [0, 1].
///
/// Zero total weight means no constraint and scores 1.
pub fn compute_balance_score(
    normalized: &FlavorVector,
    target: &FlavorVector,
    weights: &FlavorVector,
) -> f64 {
    let mut weighted_deviation = 0.0;
    let mut total_weight = 0.0;

    for k in 0..DIMENSIONS {
        weighted_deviation += weights[k] * (normalized[k] - target[k]).abs();
        total_weight += weights[k];
    }

    if total_weight == 0.0 {
        return 1.0;
    }

    (1.0 - weighted_deviation / total_weight).clamp(0.0, 1.0)
}

/// Outcome of the structural gate check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuralGateResult {
    pub passed: bool,
    pub coverage: f64,
    pub threshold: f64,
    pub present_roles: BTreeSet<StructuralRole>,
    pub required_roles: BTreeSet<StructuralRole>,
    pub missing_roles: BTreeSet<StructuralRole>,
}

const COMPLETE_PLATE_ROLES: &[StructuralRole] = &[
    StructuralRole::Protein,
    StructuralRole::Fat,
    StructuralRole::Acid,
    StructuralRole::Aromatic,
    StructuralRole::Starch,
    StructuralRole::Vegetable,
    StructuralRole::HerbFinish,
];

const REQUIRED_ROLES: &[(DishType, &[StructuralRole])] = &[
    (DishType::CompletePlate, COMPLETE_PLATE_ROLES),
    (DishType::Snack, &[StructuralRole::Fat, StructuralRole::Acid, StructuralRole::Aromatic]),
    (
        DishType::Sauce,
        &[
            StructuralRole::Fat,
            StructuralRole::Acid,
            StructuralRole::Aromatic,
            StructuralRole::UmamiBoost,
        ],
    ),
    (DishType::Side, &[StructuralRole::Fat, StructuralRole::Acid, StructuralRole::Vegetable]),
    (
        DishType::Soup,
        &[
            StructuralRole::Fat,
            StructuralRole::Aromatic,
            StructuralRole::UmamiBoost,
            StructuralRole::Vegetable,
            StructuralRole::HerbFinish,
        ],
    ),
    (
        DishType::Salad,
        &[
            StructuralRole::Fat,
            StructuralRole::Acid,
            StructuralRole::Vegetable,
            StructuralRole::TextureAgent,
        ],
    ),
    (
        DishType::Dessert,
        &[StructuralRole::Fat, StructuralRole::Sweetener, StructuralRole::TextureAgent],
    ),
];

const STRUCTURAL_THRESHOLDS: &[(DishType, f64)] = &[
    (DishType::CompletePlate, 0.85),
    (DishType::Snack, 0.60),
    (DishType::Sauce, 0.50),
    (DishType::Side, 0.60),
    (DishType::Soup, 0.70),
    (DishType::Salad, 0.60),
    (DishType::Dessert, 0.60),
];

fn required_roles(dish_type: DishType) -> &'static [StructuralRole] {
    REQUIRED_ROLES
        .iter()
        .find(|(key, _)| *key == dish_type)
        .map(|(_, roles)| *roles)
        .unwrap_or(COMPLETE_PLATE_ROLES)
}

fn structural_threshold(dish_type: DishType) -> f64 {
    STRUCTURAL_THRESHOLDS
        .iter()
        .find(|(key, _)| *key == dish_type)
        .map(|(_, threshold)| *threshold)
        .unwrap_or(0.85)
}

/// Evaluate structural role coverage:
/// `C = |present intersect required| / |required|`, gated against the
/// dish-type threshold. Missing roles are reported for the recommendation
/// engine.
pub fn evaluate_structural_coverage(
    ingredients: &[DishIngredient],
    dish_type: DishType,
) -> StructuralGateResult {
    let required: BTreeSet<StructuralRole> = required_roles(dish_type).iter().copied().collect();
    let threshold = structural_threshold(dish_type);

    let mut present = BTreeSet::new();
    for ingredient in ingredients {
        present.extend(ingredient.card.roles.iter().copied());
    }

    let covered = required.intersection(&present).count();
    let coverage =
        if required.is_empty() { 1.0 } else { covered as f64 / required.len() as f64 };
    let missing: BTreeSet<StructuralRole> =
        required.difference(&present).copied().collect();

    StructuralGateResult {
        passed: coverage >= threshold,
        coverage,
        threshold,
        present_roles: present,
        required_roles: required,
        missing_roles: missing,
    }
}

/// Symmetric clash coefficients by ingredient-class pair. Pairs absent from
/// the matrix carry no risk.
const CLASH_MATRIX: &[(IngredientClass, IngredientClass, f64)] = &[
    (IngredientClass::Citrus, IngredientClass::Milk, 0.7),
    (IngredientClass::BitterGreen, IngredientClass::SweetDessert, 0.5),
    (IngredientClass::Fishy, IngredientClass::StrongFloral, 0.6),
    (IngredientClass::Fishy, IngredientClass::Milk, 0.5),
    (IngredientClass::Cruciferous, IngredientClass::SweetDessert, 0.4),
    (IngredientClass::Fermented, IngredientClass::SweetDessert, 0.35),
    (IngredientClass::Fishy, IngredientClass::SweetDessert, 0.55),
    (IngredientClass::Spicy, IngredientClass::SweetDessert, 0.3),
];

fn clash_coefficient(a: IngredientClass, b: IngredientClass) -> f64 {
    CLASH_MATRIX
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, coefficient)| *coefficient)
        .unwrap_or(0.0)
}

/// Clash penalty over every unordered pair of ingredients.
///
/// Pair risk is `c * min(1, (alpha_i + alpha_j) / 2) * (1 + 0.5 * heat)`:
/// heat amplifies curdling and bitterness risks. The penalty is the average
/// pair risk, clamped to [0, 1], and 0 for fewer than two ingredients.
pub fn compute_clash_penalty(
    ingredients: &[DishIngredient],
    alphas: &[f64],
    heat_level: f64,
) -> f64 {
    let n = ingredients.len();
    if n < 2 {
        return 0.0;
    }

    let mut total_risk = 0.0;
    let mut pairs = 0usize;

    for i in 0..n {
        for j in (i + 1)..n {
            pairs += 1;

            let coefficient =
                clash_coefficient(ingredients[i].card.class, ingredients[j].card.class);
            if coefficient == 0.0 {
                continue;
            }

            let intensity = ((alphas[i] + alphas[j]) / 2.0).min(1.0);
            let heat_factor = 1.0 + 0.5 * heat_level;
            total_risk += coefficient * intensity * heat_factor;
        }
    }

    (total_risk / pairs as f64).clamp(0.0, 1.0)
}

/// Weighted final score and uncertainty:
///
/// `score = 0.45*sim + 0.35*bal + 0.20*struct - 0.40*clash`
///
/// The score is unbounded below; strongly clashing combinations land in the
/// negative Severe band. Uncertainty widens with clash risk.
pub fn compute_final_score(components: ScoreComponents) -> ScoredResult {
    let score = WEIGHT_SIMILARITY * components.similarity
        + WEIGHT_BALANCE * components.balance
        + WEIGHT_STRUCTURAL * components.structural
        - WEIGHT_CLASH_PENALTY * components.clash_penalty;

    let uncertainty = UNCERTAINTY_BASE + UNCERTAINTY_CLASH_CONTRIB * components.clash_penalty;

    ScoredResult { score, uncertainty, components }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::flavor::FlavorVector;
    use crate::ingredient::{IngredientCard, SolubilityClass};

    fn ingredient(
        id: &str,
        roles: &[StructuralRole],
        quantity: f64,
        class: IngredientClass,
    ) -> DishIngredient {
        DishIngredient {
            card: IngredientCard {
                id: id.to_owned(),
                name: id.to_owned(),
                vector: FlavorVector::zero(),
                potency: 0.5,
                volatility: 0.1,
                solubility: SolubilityClass::Water,
                roles: roles.iter().copied().collect::<BTreeSet<_>>(),
                class,
            },
            quantity,
        }
    }

    fn uniform_weights() -> FlavorVector {
        FlavorVector::from_array([1.0; DIMENSIONS])
    }

    #[test]
    fn balance_is_perfect_for_an_exact_match() {
        let mut values = [0.0; DIMENSIONS];
        values[0] = 0.5;
        values[3] = 0.4;
        let profile = FlavorVector::from_array(values);
        assert_eq!(compute_balance_score(&profile, &profile, &uniform_weights()), 1.0);
    }

    #[test]
    fn balance_drops_with_deviation_and_respects_weights() {
        let mut dish = [0.0; DIMENSIONS];
        dish[0] = 0.8;
        let mut target = [0.0; DIMENSIONS];
        target[0] = 0.3;
        let dish = FlavorVector::from_array(dish);
        let target = FlavorVector::from_array(target);

        let mut heavy = [1.0; DIMENSIONS];
        heavy[0] = 5.0;
        let mut light = [1.0; DIMENSIONS];
        light[0] = 0.1;

        let heavy_score =
            compute_balance_score(&dish, &target, &FlavorVector::from_array(heavy));
        let light_score =
            compute_balance_score(&dish, &target, &FlavorVector::from_array(light));
        assert!(heavy_score < light_score);
        assert!(light_score < 1.0);
    }

    #[test]
    fn zero_total_weight_is_trivially_balanced() {
        let dish = FlavorVector::from_array([0.7; DIMENSIONS]);
        let target = FlavorVector::zero();
        assert_eq!(compute_balance_score(&dish, &target, &FlavorVector::zero()), 1.0);
    }

    #[test]
    fn full_role_coverage_passes_the_gate() {
        let ingredients = vec![
            ingredient("protein", &[StructuralRole::Protein], 200.0, IngredientClass::Neutral),
            ingredient("fat", &[StructuralRole::Fat], 30.0, IngredientClass::Neutral),
            ingredient("acid", &[StructuralRole::Acid], 10.0, IngredientClass::Neutral),
            ingredient("aromatic", &[StructuralRole::Aromatic], 20.0, IngredientClass::Neutral),
            ingredient("starch", &[StructuralRole::Starch], 150.0, IngredientClass::Neutral),
            ingredient("veg", &[StructuralRole::Vegetable], 100.0, IngredientClass::Neutral),
            ingredient("herb", &[StructuralRole::HerbFinish], 5.0, IngredientClass::Neutral),
        ];

        let gate = evaluate_structural_coverage(&ingredients, DishType::CompletePlate);
        assert_eq!(gate.coverage, 1.0);
        assert!(gate.passed);
        assert!(gate.missing_roles.is_empty());
    }

    #[test]
    fn missing_roles_are_reported() {
        let ingredients = vec![ingredient(
            "protein",
            &[StructuralRole::Protein],
            200.0,
            IngredientClass::Neutral,
        )];

        let gate = evaluate_structural_coverage(&ingredients, DishType::CompletePlate);
        assert!(!gate.passed);
        assert!(!gate.missing_roles.is_empty());
        assert!(gate.missing_roles.contains(&StructuralRole::Acid));
    }

    #[test]
    fn lighter_dish_types_use_their_own_role_sets() {
        let ingredients = vec![
            ingredient("fat", &[StructuralRole::Fat], 30.0, IngredientClass::Neutral),
            ingredient("acid", &[StructuralRole::Acid], 10.0, IngredientClass::Neutral),
            ingredient("aromatic", &[StructuralRole::Aromatic], 20.0, IngredientClass::Neutral),
        ];

        let gate = evaluate_structural_coverage(&ingredients, DishType::Snack);
        assert_eq!(gate.coverage, 1.0);
        assert!(gate.passed);
        assert_eq!(gate.threshold, 0.60);
    }

    #[test]
    fn clash_penalty_is_zero_without_matrix_pairs() {
        let ingredients = vec![
            ingredient("a", &[StructuralRole::Protein], 200.0, IngredientClass::Neutral),
            ingredient("b", &[StructuralRole::Starch], 150.0, IngredientClass::Neutral),
        ];
        assert_eq!(compute_clash_penalty(&ingredients, &[1.0, 0.75], 0.5), 0.0);
    }

    #[test]
    fn clash_penalty_is_zero_below_two_ingredients() {
        let solo =
            vec![ingredient("one", &[StructuralRole::Protein], 200.0, IngredientClass::Fishy)];
        assert_eq!(compute_clash_penalty(&solo, &[1.0], 0.5), 0.0);
        assert_eq!(compute_clash_penalty(&[], &[], 0.5), 0.0);
    }

    #[test]
    fn clash_penalty_rises_with_heat() {
        let ingredients = vec![
            ingredient("citrus", &[StructuralRole::Acid], 20.0, IngredientClass::Citrus),
            ingredient("milk", &[StructuralRole::Fat], 100.0, IngredientClass::Milk),
        ];
        let alphas = [0.8, 0.8];

        let low = compute_clash_penalty(&ingredients, &alphas, 0.1);
        let high = compute_clash_penalty(&ingredients, &alphas, 0.9);
        assert!(low > 0.0);
        assert!(high > low);

        // coefficient 0.7, intensity 0.8, heat factor 1.45
        assert!((high - 0.7 * 0.8 * 1.45).abs() < 1e-9);
    }

    #[test]
    fn clash_lookup_is_symmetric() {
        let ab = vec![
            ingredient("fish", &[StructuralRole::Protein], 200.0, IngredientClass::Fishy),
            ingredient("cream", &[StructuralRole::Fat], 50.0, IngredientClass::Milk),
        ];
        let ba = vec![ab[1].clone(), ab[0].clone()];
        let forward = compute_clash_penalty(&ab, &[1.0, 1.0], 0.4);
        let backward = compute_clash_penalty(&ba, &[1.0, 1.0], 0.4);
        assert!(forward > 0.0);
        assert_eq!(forward, backward);
    }

    #[test]
    fn final_score_uses_the_fixed_weights() {
        let result = compute_final_score(ScoreComponents {
            similarity: 0.8,
            balance: 0.7,
            structural: 1.0,
            clash_penalty: 0.1,
        });
        // 0.45*0.8 + 0.35*0.7 + 0.20*1.0 - 0.40*0.1 = 0.765
        assert!((result.score - 0.765).abs() < 1e-9);
        assert!(result.uncertainty > 0.0);
        assert!(result.uncertainty < 0.15);
    }

    #[test]
    fn high_clash_drives_the_score_negative() {
        let result = compute_final_score(ScoreComponents {
            similarity: 0.2,
            balance: 0.2,
            structural: 0.3,
            clash_penalty: 1.0,
        });
        assert!(result.score < 0.0);
        assert_eq!(ScoreBand::from_score(result.score), ScoreBand::Severe);
        assert!((result.uncertainty - 0.10).abs() < 1e-9);
    }

    #[test]
    fn score_bands_match_the_fixed_thresholds() {
        assert_eq!(ScoreBand::from_score(0.85), ScoreBand::StrongCoherence);
        assert_eq!(ScoreBand::from_score(0.75), ScoreBand::Workable);
        assert_eq!(ScoreBand::from_score(0.65), ScoreBand::Workable);
        assert_eq!(ScoreBand::from_score(0.55), ScoreBand::Workable);
        assert_eq!(ScoreBand::from_score(0.40), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(0.15), ScoreBand::HighClashRisk);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::HighClashRisk);
        assert_eq!(ScoreBand::from_score(-0.3), ScoreBand::Severe);
        assert!(ScoreBand::Severe.description().contains("Severe"));
    }
}
