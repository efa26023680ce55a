//! Types for the recommendation engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dish::MethodOverride;
use crate::flavor::FlavorVector;
use crate::ingredient::{DishIngredient, IngredientCard};
use crate::method::{CookingMethod, DishType};
use crate::scoring::{ScoreComponents, StructuralGateResult};

/// Suggested quantity window around the best-performing trial quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: f64,
    pub max: f64,
}

/// Kind-specific payload of a recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RecommendationKind {
    /// Add a new ingredient at a quantity inside the suggested range.
    AddIn { ingredient_id: String, quantity_range: QuantityRange },
    /// Replace one present ingredient with a role-compatible candidate.
    Substitution { replace_id: String, with_id: String },
    /// Rebalance or complete the dish without a specific candidate.
    Fix,
    /// Change (or add) a cooking step.
    MethodAdjustment { method: CookingMethod },
}

/// A single ranked suggestion. Immutable once produced; ranking is a flat
/// sort over the projected score delta.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub description: String,
    /// Projected change in final score if applied.
    pub delta_score: f64,
}

/// Everything the four strategies need to evaluate candidate changes
/// against the current dish.
#[derive(Clone, Debug)]
pub struct RecommendationContext<'a> {
    pub ingredients: &'a [DishIngredient],
    pub method: CookingMethod,
    pub heat_level: f64,
    pub dish_type: DishType,
    pub target_profile: &'a FlavorVector,
    pub balance_weights: &'a FlavorVector,
    pub current_score: f64,
    pub current_components: ScoreComponents,
    pub normalized_vector: &'a FlavorVector,
    pub structural_gate: &'a StructuralGateResult,
    pub candidates: &'a [IngredientCard],
    pub overrides: Option<&'a HashMap<String, MethodOverride>>,
}
