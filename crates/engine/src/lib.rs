//! Pipeline orchestrator: one entry point that composes dish computation,
//! scoring, and the recommendation search against pluggable data providers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use palate_core::{
    compute_alpha, compute_balance_score, compute_clash_penalty, compute_dish_vector,
    compute_final_score, compute_similarity, evaluate_structural_coverage, find_best_add_ins,
    find_method_adjustments, find_minimal_fixes, find_substitutions, CookingMethod, DishConfig,
    DishIngredient, DishType, DomainError, FlavorVector, IngredientContribution,
    IngredientProvider, MethodOverride, Recommendation, RecommendationContext, ScoreComponents,
    ScoredResult, StructuralGateResult, StyleTargetProvider, DEFAULT_TOP_ADD_INS,
    DEFAULT_TOP_SUBSTITUTIONS,
};

/// One ingredient reference in an evaluation request, resolved through the
/// ingredient provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub ingredient_id: String,
    /// Grams (mL for liquids).
    pub quantity: f64,
}

/// A full dish description for one evaluation.
#[derive(Clone, Debug)]
pub struct EngineInput {
    pub ingredients: Vec<IngredientQuantity>,
    pub method: CookingMethod,
    /// Heat level in [0, 1].
    pub heat_level: f64,
    pub dish_type: DishType,
    pub style_target_id: String,
    /// Per-ingredient method/heat replacements, keyed by ingredient id.
    pub overrides: HashMap<String, MethodOverride>,
    /// Candidate pool for recommendations; `None` means the provider's full
    /// library.
    pub candidate_ids: Option<Vec<String>>,
    pub top_add_ins: usize,
    pub top_substitutions: usize,
}

impl EngineInput {
    pub fn new(
        style_target_id: impl Into<String>,
        method: CookingMethod,
        dish_type: DishType,
    ) -> Self {
        Self {
            ingredients: Vec::new(),
            method,
            heat_level: 0.0,
            dish_type,
            style_target_id: style_target_id.into(),
            overrides: HashMap::new(),
            candidate_ids: None,
            top_add_ins: DEFAULT_TOP_ADD_INS,
            top_substitutions: DEFAULT_TOP_SUBSTITUTIONS,
        }
    }

    pub fn with_ingredient(mut self, ingredient_id: impl Into<String>, quantity: f64) -> Self {
        self.ingredients
            .push(IngredientQuantity { ingredient_id: ingredient_id.into(), quantity });
        self
    }

    pub fn with_heat_level(mut self, heat_level: f64) -> Self {
        self.heat_level = heat_level;
        self
    }

    pub fn with_override(
        mut self,
        ingredient_id: impl Into<String>,
        method_override: MethodOverride,
    ) -> Self {
        self.overrides.insert(ingredient_id.into(), method_override);
        self
    }

    pub fn with_candidates(mut self, candidate_ids: Vec<String>) -> Self {
        self.candidate_ids = Some(candidate_ids);
        self
    }

    pub fn with_top_add_ins(mut self, top_add_ins: usize) -> Self {
        self.top_add_ins = top_add_ins;
        self
    }

    pub fn with_top_substitutions(mut self, top_substitutions: usize) -> Self {
        self.top_substitutions = top_substitutions;
        self
    }
}

/// The full output record of one evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineOutput {
    pub dish_vector: FlavorVector,
    pub normalized_vector: FlavorVector,
    pub contributions: Vec<IngredientContribution>,
    pub scored: ScoredResult,
    pub structural_gate: StructuralGateResult,
    /// All four strategies concatenated, sorted by descending delta.
    pub recommendations: Vec<Recommendation>,
}

/// The orchestrator, generic over its two read-only data providers.
#[derive(Clone, Debug)]
pub struct FlavorEngine<S, I> {
    styles: S,
    ingredients: I,
}

impl<S, I> FlavorEngine<S, I>
where
    S: StyleTargetProvider,
    I: IngredientProvider,
{
    pub fn new(styles: S, ingredients: I) -> Self {
        Self { styles, ingredients }
    }

    /// Run the full pipeline for one dish description.
    ///
    /// Either the complete output record is produced or the call fails;
    /// there is no partial output. An unresolvable style target aborts
    /// before any scoring work.
    pub fn evaluate(&self, input: &EngineInput) -> Result<EngineOutput, DomainError> {
        let style_target = self
            .styles
            .style_target(&input.style_target_id)
            .ok_or_else(|| DomainError::UnknownStyleTarget(input.style_target_id.clone()))?;
        debug!(style_target = %style_target.id, "resolved style target");

        let ingredients: Vec<DishIngredient> = input
            .ingredients
            .iter()
            .map(|entry| {
                let card = self.ingredients.ingredient(&entry.ingredient_id)?;
                Ok(DishIngredient { card, quantity: entry.quantity })
            })
            .collect::<Result<_, DomainError>>()?;

        let overrides = (!input.overrides.is_empty()).then_some(&input.overrides);

        let profile = compute_dish_vector(&DishConfig {
            ingredients: &ingredients,
            method: input.method,
            heat_level: input.heat_level,
            dish_type: input.dish_type,
            overrides,
        })?;
        debug!(ingredients = ingredients.len(), "computed dish vector");

        let structural_gate = evaluate_structural_coverage(&ingredients, input.dish_type);
        let similarity = compute_similarity(&profile.normalized_vector, &style_target.profile);
        let balance = compute_balance_score(
            &profile.normalized_vector,
            &style_target.profile,
            &style_target.weights,
        );

        let alphas: Vec<f64> = ingredients
            .iter()
            .map(|ingredient| {
                compute_alpha(ingredient.quantity, &ingredient.card.roles, input.dish_type)
            })
            .collect();
        let clash_penalty = compute_clash_penalty(&ingredients, &alphas, input.heat_level);

        let components = ScoreComponents {
            similarity,
            balance,
            structural: structural_gate.coverage,
            clash_penalty,
        };
        let scored = compute_final_score(components);
        debug!(
            score = scored.score,
            similarity,
            balance,
            coverage = structural_gate.coverage,
            clash_penalty,
            "scored dish"
        );

        let candidates = match &input.candidate_ids {
            Some(ids) => ids
                .iter()
                .map(|id| self.ingredients.ingredient(id))
                .collect::<Result<Vec<_>, _>>()?,
            None => self.ingredients.all_ingredients(),
        };

        let ctx = RecommendationContext {
            ingredients: &ingredients,
            method: input.method,
            heat_level: input.heat_level,
            dish_type: input.dish_type,
            target_profile: &style_target.profile,
            balance_weights: &style_target.weights,
            current_score: scored.score,
            current_components: components,
            normalized_vector: &profile.normalized_vector,
            structural_gate: &structural_gate,
            candidates: &candidates,
            overrides,
        };

        let mut recommendations = find_best_add_ins(&ctx, input.top_add_ins)?;
        recommendations.extend(find_minimal_fixes(&ctx));
        recommendations.extend(find_substitutions(&ctx, input.top_substitutions)?);
        recommendations.extend(find_method_adjustments(&ctx));
        recommendations.sort_by(|a, b| {
            b.delta_score.partial_cmp(&a.delta_score).unwrap_or(std::cmp::Ordering::Equal)
        });
        debug!(count = recommendations.len(), "collected recommendations");

        Ok(EngineOutput {
            dish_vector: profile.dish_vector,
            normalized_vector: profile.normalized_vector,
            contributions: profile.contributions,
            scored,
            structural_gate,
            recommendations,
        })
    }
}
