//! The four recommendation strategies.

use std::cmp::Ordering;

use crate::dish::{compute_dish_vector, DishConfig};
use crate::errors::DomainError;
use crate::flavor::{cosine_similarity, FlavorDimension};
use crate::ingredient::{
    component_category, ComponentCategory, DishIngredient, IngredientCard, SolubilityClass,
    StructuralRole,
};
use crate::method::{CookingMethod, DishType};
use crate::normalization::compute_alpha;
use crate::scoring::{
    compute_balance_score, compute_clash_penalty, compute_final_score, compute_similarity,
    evaluate_structural_coverage, ScoreComponents,
};

use super::types::{QuantityRange, Recommendation, RecommendationContext, RecommendationKind};
use super::{FIX_NOISE_FLOOR, MAX_BALANCE_FIXES, MIN_SUBSTITUTE_SIMILARITY};

/// Score a candidate ingredient list through the full pipeline. Each trial
/// is an independent pure evaluation against the context's dish settings.
fn evaluate_candidate(
    ctx: &RecommendationContext<'_>,
    ingredients: &[DishIngredient],
) -> Result<f64, DomainError> {
    let profile = compute_dish_vector(&DishConfig {
        ingredients,
        method: ctx.method,
        heat_level: ctx.heat_level,
        dish_type: ctx.dish_type,
        overrides: ctx.overrides,
    })?;

    let similarity = compute_similarity(&profile.normalized_vector, ctx.target_profile);
    let balance =
        compute_balance_score(&profile.normalized_vector, ctx.target_profile, ctx.balance_weights);
    let gate = evaluate_structural_coverage(ingredients, ctx.dish_type);
    let alphas: Vec<f64> = ingredients
        .iter()
        .map(|ingredient| {
            compute_alpha(ingredient.quantity, &ingredient.card.roles, ctx.dish_type)
        })
        .collect();
    let clash_penalty = compute_clash_penalty(ingredients, &alphas, ctx.heat_level);

    let scored = compute_final_score(ScoreComponents {
        similarity,
        balance,
        structural: gate.coverage,
        clash_penalty,
    });
    Ok(scored.score)
}

fn sort_by_delta(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| {
        b.delta_score.partial_cmp(&a.delta_score).unwrap_or(Ordering::Equal)
    });
}

/// Trial quantities for an add-in candidate, sized by its component
/// category.
fn trial_quantities(card: &IngredientCard, dish_type: DishType) -> &'static [f64] {
    match component_category(&card.roles) {
        ComponentCategory::Primary => {
            if dish_type == DishType::Snack {
                &[30.0, 60.0, 100.0]
            } else {
                &[50.0, 100.0, 200.0]
            }
        }
        ComponentCategory::Finish => &[3.0, 5.0, 10.0],
        ComponentCategory::Support => &[10.0, 25.0, 50.0],
    }
}

/// Try each absent candidate at a small set of role-sized quantities, keep
/// the best-performing quantity, and return the top `top_n` positive-delta
/// additions.
pub fn find_best_add_ins(
    ctx: &RecommendationContext<'_>,
    top_n: usize,
) -> Result<Vec<Recommendation>, DomainError> {
    let mut results = Vec::new();

    for candidate in ctx.candidates {
        if ctx.ingredients.iter().any(|ingredient| ingredient.card.id == candidate.id) {
            continue;
        }

        let quantities = trial_quantities(candidate, ctx.dish_type);
        let mut best_delta = f64::NEG_INFINITY;
        let mut best_quantity = quantities[0];

        for &quantity in quantities {
            let mut trial = ctx.ingredients.to_vec();
            trial.push(DishIngredient { card: candidate.clone(), quantity });

            let score = evaluate_candidate(ctx, &trial)?;
            let delta = score - ctx.current_score;
            if delta > best_delta {
                best_delta = delta;
                best_quantity = quantity;
            }
        }

        if best_delta > 0.0 {
            results.push(Recommendation {
                kind: RecommendationKind::AddIn {
                    ingredient_id: candidate.id.clone(),
                    quantity_range: QuantityRange {
                        min: (best_quantity * 0.5).round(),
                        max: (best_quantity * 1.5).round(),
                    },
                },
                description: format!("Add {} to improve flavor profile", candidate.name),
                delta_score: best_delta,
            });
        }
    }

    sort_by_delta(&mut results);
    results.truncate(top_n);
    Ok(results)
}

fn fill_suggestion(dim: FlavorDimension) -> &'static str {
    match dim {
        FlavorDimension::Umami => "add tomato paste, soy sauce, browning, or fermented element",
        FlavorDimension::Salt => "adjust seasoning with salt or soy sauce",
        FlavorDimension::Sweet => {
            "add a touch of sweetener, caramelized onion, or sweet vegetable"
        }
        FlavorDimension::Sour => "add acid finish (lemon, vinegar, pickled element)",
        FlavorDimension::Bitter => "add bitter greens, dark chocolate, or coffee element",
        FlavorDimension::HeatPepper => "add chili, black pepper, or hot sauce",
        FlavorDimension::WarmSpice => "bloom warm spices in fat (cumin, cinnamon, coriander)",
        FlavorDimension::Smoke => "add smoked ingredient or apply smoke method",
        FlavorDimension::Roasted => "increase browning, roast vegetables, or toast nuts",
        FlavorDimension::FatRich => "add butter, oil, or cream",
        FlavorDimension::Creamy => "add cream, yogurt, or coconut milk",
        FlavorDimension::Herbal => "add fresh herbs as raw finish",
        FlavorDimension::Citrus => "add citrus zest or juice as raw finish",
        FlavorDimension::Allium => "add sauteed or raw allium (onion, garlic, shallot)",
        FlavorDimension::Ferment => "add fermented element (miso, kimchi, fish sauce)",
        FlavorDimension::Earthy => "add mushrooms, root vegetables, or earthy spices",
        FlavorDimension::Nutty => "toast and add nuts or seeds",
        FlavorDimension::Floral => "add edible flowers, rose water, or lavender",
        FlavorDimension::TextureCrisp => {
            "add crispy element (toasted breadcrumbs, fried shallots)"
        }
        FlavorDimension::TextureTender => "braise or slow-cook for tender texture",
    }
}

/// Propose fixes for the largest weighted balance deviations, plus one fix
/// per missing required role when the structural gate failed.
///
/// Deviations below the noise floor are ignored; small residual deltas in
/// (-0.1, 0.1) are considered close enough to leave alone.
pub fn find_minimal_fixes(ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
    let mut fixes = Vec::new();

    let mut deviations: Vec<(FlavorDimension, f64, f64)> = Vec::new();
    for dim in FlavorDimension::ALL {
        let delta = ctx.normalized_vector[dim] - ctx.target_profile[dim];
        let weighted = delta.abs() * ctx.balance_weights[dim];
        if weighted > FIX_NOISE_FLOOR {
            deviations.push((dim, delta, weighted));
        }
    }

    deviations.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    for (dim, delta, _) in deviations.into_iter().take(MAX_BALANCE_FIXES) {
        if delta > 0.1 {
            fixes.push(Recommendation {
                kind: RecommendationKind::Fix,
                description: format!(
                    "Reduce {} intensity: scale back dominant contributors or balance with complementary flavors",
                    dim.label()
                ),
                delta_score: delta.abs() * 0.1,
            });
        } else if delta < -0.1 {
            fixes.push(Recommendation {
                kind: RecommendationKind::Fix,
                description: format!("Increase {}: {}", dim.label(), fill_suggestion(dim)),
                delta_score: delta.abs() * 0.1,
            });
        }
    }

    if !ctx.structural_gate.passed {
        for role in &ctx.structural_gate.missing_roles {
            fixes.push(Recommendation {
                kind: RecommendationKind::Fix,
                description: format!(
                    "Add ingredient with {role:?} role to meet structural requirements"
                ),
                delta_score: 0.05,
            });
        }
    }

    sort_by_delta(&mut fixes);
    fixes
}

/// Find role-preserving substitutions. A candidate must share at least one
/// structural role with the ingredient it replaces and sit within cosine
/// similarity of its base vector; trials with non-positive deltas are
/// discarded.
pub fn find_substitutions(
    ctx: &RecommendationContext<'_>,
    top_n: usize,
) -> Result<Vec<Recommendation>, DomainError> {
    let mut results = Vec::new();

    for existing in ctx.ingredients {
        for candidate in ctx.candidates {
            if candidate.id == existing.card.id {
                continue;
            }

            let shares_role =
                existing.card.roles.iter().any(|role| candidate.roles.contains(role));
            if !shares_role {
                continue;
            }

            if cosine_similarity(&existing.card.vector, &candidate.vector)
                < MIN_SUBSTITUTE_SIMILARITY
            {
                continue;
            }

            let trial: Vec<DishIngredient> = ctx
                .ingredients
                .iter()
                .map(|ingredient| {
                    if ingredient.card.id == existing.card.id {
                        DishIngredient { card: candidate.clone(), quantity: ingredient.quantity }
                    } else {
                        ingredient.clone()
                    }
                })
                .collect();

            let score = evaluate_candidate(ctx, &trial)?;
            let delta = score - ctx.current_score;
            if delta > 0.0 {
                results.push(Recommendation {
                    kind: RecommendationKind::Substitution {
                        replace_id: existing.card.id.clone(),
                        with_id: candidate.id.clone(),
                    },
                    description: format!(
                        "Replace {} with {}",
                        existing.card.name, candidate.name
                    ),
                    delta_score: delta,
                });
            }
        }
    }

    sort_by_delta(&mut results);
    results.truncate(top_n);
    Ok(results)
}

/// Heuristic method-change checks on specific target-vs-dish gaps.
pub fn find_method_adjustments(ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
    let mut adjustments = Vec::new();
    let gap = |dim: FlavorDimension| ctx.target_profile[dim] - ctx.normalized_vector[dim];

    let herbal_gap = gap(FlavorDimension::Herbal);
    let citrus_gap = gap(FlavorDimension::Citrus);
    if (herbal_gap > 0.1 || citrus_gap > 0.1) && ctx.heat_level > 0.5 {
        adjustments.push(Recommendation {
            kind: RecommendationKind::MethodAdjustment { method: CookingMethod::RawFinish },
            description: "Add a raw finishing step for herbs and citrus to preserve volatile \
                          aromatics lost during high-heat cooking"
                .to_owned(),
            delta_score: (herbal_gap + citrus_gap) * 0.05,
        });
    }

    let spice_gap = gap(FlavorDimension::WarmSpice);
    if spice_gap > 0.1 {
        let has_fat_soluble_aromatic = ctx.ingredients.iter().any(|ingredient| {
            ingredient.card.solubility == SolubilityClass::Fat
                && ingredient.card.roles.contains(&StructuralRole::Aromatic)
        });
        if has_fat_soluble_aromatic {
            adjustments.push(Recommendation {
                kind: RecommendationKind::MethodAdjustment { method: CookingMethod::BloomInFat },
                description:
                    "Bloom fat-soluble spices early in oil to maximize warm spice extraction"
                        .to_owned(),
                delta_score: spice_gap * 0.05,
            });
        }
    }

    let smoke_gap = gap(FlavorDimension::Smoke);
    if smoke_gap > 0.15 {
        adjustments.push(Recommendation {
            kind: RecommendationKind::MethodAdjustment { method: CookingMethod::SmokeMethod },
            description: "Apply smoke method or grill to develop smoky character".to_owned(),
            delta_score: smoke_gap * 0.05,
        });
    }

    let crisp_gap = gap(FlavorDimension::TextureCrisp);
    if crisp_gap > 0.15 {
        adjustments.push(Recommendation {
            kind: RecommendationKind::MethodAdjustment { method: CookingMethod::HighHeatSear },
            description: "Finish with high-heat sear or deep-fry for crispy texture".to_owned(),
            delta_score: crisp_gap * 0.05,
        });
    }

    sort_by_delta(&mut adjustments);
    adjustments
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::flavor::{FlavorVector, DIMENSIONS};
    use crate::ingredient::IngredientClass;
    use crate::scoring::StructuralGateResult;

    fn card(
        id: &str,
        values: [f64; DIMENSIONS],
        roles: &[StructuralRole],
        solubility: SolubilityClass,
    ) -> IngredientCard {
        IngredientCard {
            id: id.to_owned(),
            name: id.to_owned(),
            vector: FlavorVector::from_array(values),
            potency: 0.8,
            volatility: 0.2,
            solubility,
            roles: roles.iter().copied().collect::<BTreeSet<_>>(),
            class: IngredientClass::Neutral,
        }
    }

    fn dimension_card(id: &str, dim: FlavorDimension, intensity: f64, role: StructuralRole) -> IngredientCard {
        let mut values = [0.0; DIMENSIONS];
        values[dim.index()] = intensity;
        card(id, values, &[role], SolubilityClass::Water)
    }

    struct Fixture {
        ingredients: Vec<DishIngredient>,
        candidates: Vec<IngredientCard>,
        target: FlavorVector,
        weights: FlavorVector,
        normalized: FlavorVector,
        gate: StructuralGateResult,
        current_score: f64,
        components: ScoreComponents,
        heat_level: f64,
    }

    fn fixture(
        ingredients: Vec<DishIngredient>,
        candidates: Vec<IngredientCard>,
        target: FlavorVector,
        heat_level: f64,
    ) -> Fixture {
        let weights = FlavorVector::from_array([1.0; DIMENSIONS]);
        let profile = compute_dish_vector(&DishConfig {
            ingredients: &ingredients,
            method: CookingMethod::Raw,
            heat_level,
            dish_type: DishType::CompletePlate,
            overrides: None,
        })
        .unwrap();

        let gate = evaluate_structural_coverage(&ingredients, DishType::CompletePlate);
        let alphas: Vec<f64> = ingredients
            .iter()
            .map(|i| compute_alpha(i.quantity, &i.card.roles, DishType::CompletePlate))
            .collect();
        let components = ScoreComponents {
            similarity: compute_similarity(&profile.normalized_vector, &target),
            balance: compute_balance_score(&profile.normalized_vector, &target, &weights),
            structural: gate.coverage,
            clash_penalty: compute_clash_penalty(&ingredients, &alphas, heat_level),
        };
        let scored = compute_final_score(components);

        Fixture {
            ingredients,
            candidates,
            target,
            weights,
            normalized: profile.normalized_vector,
            gate,
            current_score: scored.score,
            components,
            heat_level,
        }
    }

    impl Fixture {
        fn context(&self) -> RecommendationContext<'_> {
            RecommendationContext {
                ingredients: &self.ingredients,
                method: CookingMethod::Raw,
                heat_level: self.heat_level,
                dish_type: DishType::CompletePlate,
                target_profile: &self.target,
                balance_weights: &self.weights,
                current_score: self.current_score,
                current_components: self.components,
                normalized_vector: &self.normalized,
                structural_gate: &self.gate,
                candidates: &self.candidates,
                overrides: None,
            }
        }
    }

    fn sour_target() -> FlavorVector {
        let mut values = [0.0; DIMENSIONS];
        values[FlavorDimension::Umami.index()] = 0.4;
        values[FlavorDimension::Sour.index()] = 0.6;
        FlavorVector::from_array(values)
    }

    #[test]
    fn add_ins_propose_only_absent_positive_delta_candidates() {
        let protein =
            dimension_card("protein", FlavorDimension::Umami, 2.0, StructuralRole::Protein);
        let acid = dimension_card("acid", FlavorDimension::Sour, 4.0, StructuralRole::Acid);

        let fx = fixture(
            vec![DishIngredient { card: protein.clone(), quantity: 200.0 }],
            vec![protein, acid],
            sour_target(),
            0.0,
        );

        let add_ins = find_best_add_ins(&fx.context(), 5).unwrap();
        assert!(!add_ins.is_empty());
        // The present protein is never re-proposed.
        for rec in &add_ins {
            match &rec.kind {
                RecommendationKind::AddIn { ingredient_id, quantity_range } => {
                    assert_eq!(ingredient_id, "acid");
                    assert!(rec.delta_score > 0.0);
                    assert!(quantity_range.min < quantity_range.max);
                }
                other => panic!("unexpected kind {other:?}"),
            }
        }
    }

    #[test]
    fn add_in_range_brackets_the_best_trial_quantity() {
        let protein =
            dimension_card("protein", FlavorDimension::Umami, 2.0, StructuralRole::Protein);
        let acid = dimension_card("acid", FlavorDimension::Sour, 4.0, StructuralRole::Acid);

        let fx = fixture(
            vec![DishIngredient { card: protein.clone(), quantity: 200.0 }],
            vec![acid],
            sour_target(),
            0.0,
        );

        let add_ins = find_best_add_ins(&fx.context(), 5).unwrap();
        let RecommendationKind::AddIn { quantity_range, .. } = &add_ins[0].kind else {
            panic!("expected an add-in");
        };
        // Support-role trials are 10/25/50g; the range is +/-50% of the best.
        let best = quantity_range.max / 1.5;
        assert!((quantity_range.min - (best * 0.5).round()).abs() < 1e-9);
        assert!([10.0, 25.0, 50.0].contains(&best));
    }

    #[test]
    fn add_ins_are_sorted_and_truncated() {
        let protein =
            dimension_card("protein", FlavorDimension::Umami, 2.0, StructuralRole::Protein);
        let acid = dimension_card("acid", FlavorDimension::Sour, 4.0, StructuralRole::Acid);
        let weak_acid = dimension_card("weak_acid", FlavorDimension::Sour, 1.0, StructuralRole::Acid);
        let herb =
            dimension_card("herb", FlavorDimension::Sour, 2.0, StructuralRole::HerbFinish);

        let fx = fixture(
            vec![DishIngredient { card: protein.clone(), quantity: 200.0 }],
            vec![acid, weak_acid, herb],
            sour_target(),
            0.0,
        );

        let all = find_best_add_ins(&fx.context(), 5).unwrap();
        for pair in all.windows(2) {
            assert!(pair[0].delta_score >= pair[1].delta_score);
        }

        let capped = find_best_add_ins(&fx.context(), 1).unwrap();
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0], all[0]);
    }

    #[test]
    fn minimal_fixes_rank_by_weighted_deviation() {
        let protein =
            dimension_card("protein", FlavorDimension::Umami, 2.0, StructuralRole::Protein);
        let mut target = [0.0; DIMENSIONS];
        target[FlavorDimension::Sour.index()] = 0.8;
        target[FlavorDimension::Herbal.index()] = 0.3;

        let fx = fixture(
            vec![DishIngredient { card: protein, quantity: 200.0 }],
            vec![],
            FlavorVector::from_array(target),
            0.0,
        );

        let fixes = find_minimal_fixes(&fx.context());
        // Undershoots on SOUR (0.8 gap) and HERBAL (0.3 gap), plus the
        // failed gate's missing-role fixes.
        let balance_fixes: Vec<_> = fixes
            .iter()
            .filter(|rec| rec.description.starts_with("Increase"))
            .collect();
        assert_eq!(balance_fixes.len(), 2);
        assert!(balance_fixes[0].description.contains("SOUR"));
        assert!(balance_fixes[0].delta_score > balance_fixes[1].delta_score);

        assert!(!fx.gate.passed);
        let role_fixes = fixes
            .iter()
            .filter(|rec| rec.description.contains("structural requirements"))
            .count();
        assert_eq!(role_fixes, fx.gate.missing_roles.len());
    }

    #[test]
    fn overshoot_gets_a_reduce_fix() {
        let umami_bomb =
            dimension_card("umami_bomb", FlavorDimension::Umami, 5.0, StructuralRole::Protein);
        let fx = fixture(
            vec![DishIngredient { card: umami_bomb, quantity: 200.0 }],
            vec![],
            FlavorVector::zero(),
            0.0,
        );

        let fixes = find_minimal_fixes(&fx.context());
        assert!(fixes.iter().any(|rec| rec.description.starts_with("Reduce UMAMI")));
    }

    #[test]
    fn substitutions_require_shared_role_and_similar_vector() {
        let mut chicken_values = [0.0; DIMENSIONS];
        chicken_values[FlavorDimension::Umami.index()] = 2.0;
        chicken_values[FlavorDimension::TextureTender.index()] = 3.0;
        let chicken =
            card("chicken", chicken_values, &[StructuralRole::Protein], SolubilityClass::Water);

        // Same shape, more of the target's umami.
        let mut beef_values = [0.0; DIMENSIONS];
        beef_values[FlavorDimension::Umami.index()] = 3.5;
        beef_values[FlavorDimension::TextureTender.index()] = 3.5;
        let beef = card("beef", beef_values, &[StructuralRole::Protein], SolubilityClass::Water);

        // Shares the role but points in an orthogonal direction.
        let mut floral_values = [0.0; DIMENSIONS];
        floral_values[FlavorDimension::Floral.index()] = 4.0;
        let floral =
            card("floral", floral_values, &[StructuralRole::Protein], SolubilityClass::Water);

        // Similar vector but no shared role.
        let mut stock_values = chicken_values;
        stock_values[FlavorDimension::Umami.index()] = 2.5;
        let stock =
            card("stock", stock_values, &[StructuralRole::LiquidBase], SolubilityClass::Water);

        let mut target = [0.0; DIMENSIONS];
        target[FlavorDimension::Umami.index()] = 0.8;
        target[FlavorDimension::TextureTender.index()] = 0.7;

        let fx = fixture(
            vec![DishIngredient { card: chicken, quantity: 200.0 }],
            vec![beef, floral, stock],
            FlavorVector::from_array(target),
            0.0,
        );

        let subs = find_substitutions(&fx.context(), 3).unwrap();
        assert_eq!(subs.len(), 1);
        match &subs[0].kind {
            RecommendationKind::Substitution { replace_id, with_id } => {
                assert_eq!(replace_id, "chicken");
                assert_eq!(with_id, "beef");
            }
            other => panic!("unexpected kind {other:?}"),
        }
        assert!(subs[0].delta_score > 0.0);
    }

    #[test]
    fn method_adjustments_fire_on_their_gap_checks() {
        let protein =
            dimension_card("protein", FlavorDimension::Umami, 3.0, StructuralRole::Protein);
        let cumin = {
            let mut values = [0.0; DIMENSIONS];
            values[FlavorDimension::WarmSpice.index()] = 3.5;
            card("cumin", values, &[StructuralRole::Aromatic], SolubilityClass::Fat)
        };

        let mut target = [0.0; DIMENSIONS];
        target[FlavorDimension::Herbal.index()] = 0.6;
        target[FlavorDimension::WarmSpice.index()] = 0.7;
        target[FlavorDimension::Smoke.index()] = 0.7;
        target[FlavorDimension::TextureCrisp.index()] = 0.5;

        let fx = fixture(
            vec![
                DishIngredient { card: protein, quantity: 200.0 },
                DishIngredient { card: cumin, quantity: 5.0 },
            ],
            vec![],
            FlavorVector::from_array(target),
            0.8,
        );

        let adjustments = find_method_adjustments(&fx.context());
        let methods: Vec<CookingMethod> = adjustments
            .iter()
            .map(|rec| match rec.kind {
                RecommendationKind::MethodAdjustment { method } => method,
                _ => panic!("unexpected kind"),
            })
            .collect();

        assert!(methods.contains(&CookingMethod::RawFinish));
        assert!(methods.contains(&CookingMethod::BloomInFat));
        assert!(methods.contains(&CookingMethod::SmokeMethod));
        assert!(methods.contains(&CookingMethod::HighHeatSear));
        for rec in &adjustments {
            assert!(rec.delta_score > 0.0);
        }
    }

    #[test]
    fn method_adjustments_respect_heat_and_solubility_preconditions() {
        let protein =
            dimension_card("protein", FlavorDimension::Umami, 3.0, StructuralRole::Protein);

        let mut target = [0.0; DIMENSIONS];
        target[FlavorDimension::Herbal.index()] = 0.6;
        target[FlavorDimension::WarmSpice.index()] = 0.7;

        // Low heat: no raw-finish suggestion. No fat-soluble aromatic: no
        // bloom suggestion.
        let fx = fixture(
            vec![DishIngredient { card: protein, quantity: 200.0 }],
            vec![],
            FlavorVector::from_array(target),
            0.2,
        );

        let adjustments = find_method_adjustments(&fx.context());
        assert!(adjustments.is_empty());
    }
}
