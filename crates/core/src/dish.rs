//! Dish-level aggregation: normalize, transform, and sum every ingredient
//! into one flavor vector plus its normalized profile.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::flavor::{FlavorVector, DIMENSIONS};
use crate::ingredient::DishIngredient;
use crate::method::{apply_method_kernel, CookingMethod, DishType};
use crate::normalization::compute_alpha;

/// Per-ingredient replacement for the dish-wide method and heat, keyed by
/// ingredient id. Absence of a key means "use the dish-wide default".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodOverride {
    pub method: CookingMethod,
    pub heat_level: f64,
}

/// Input to dish vector computation.
#[derive(Clone, Debug)]
pub struct DishConfig<'a> {
    pub ingredients: &'a [DishIngredient],
    /// Method applied to every ingredient without an override.
    pub method: CookingMethod,
    /// Heat level in [0, 1].
    pub heat_level: f64,
    pub dish_type: DishType,
    pub overrides: Option<&'a HashMap<String, MethodOverride>>,
}

/// One ingredient's recorded share of the dish vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientContribution {
    pub ingredient_id: String,
    pub ingredient_name: String,
    /// Per-dimension contribution `alpha * potency * V'`.
    pub contribution: FlavorVector,
    pub alpha: f64,
}

/// Aggregated dish vector, its normalized profile, and the contribution
/// breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DishProfile {
    pub dish_vector: FlavorVector,
    pub normalized_vector: FlavorVector,
    pub contributions: Vec<IngredientContribution>,
}

/// Compute the dish flavor vector.
///
/// Per ingredient, in order: resolve the effective method and heat, compute
/// alpha, apply the method kernel, then accumulate
/// `alpha * potency * V'[k]` into the running dish vector while recording
/// the full contribution for explainability. Recorded contributions sum to
/// the dish vector per dimension within tolerance. Finally
/// `V_norm = V_dish / max(5, ||V_dish||inf)`.
pub fn compute_dish_vector(config: &DishConfig<'_>) -> Result<DishProfile, DomainError> {
    let mut dish = [0.0; DIMENSIONS];
    let mut contributions = Vec::with_capacity(config.ingredients.len());

    for DishIngredient { card, quantity } in config.ingredients {
        let override_entry =
            config.overrides.and_then(|overrides| overrides.get(card.id.as_str()));
        let method = override_entry.map_or(config.method, |entry| entry.method);
        let heat_level = override_entry.map_or(config.heat_level, |entry| entry.heat_level);

        let alpha = compute_alpha(*quantity, &card.roles, config.dish_type);
        let transformed =
            apply_method_kernel(&card.vector, card.solubility, card.volatility, heat_level, method)?;

        let mut contribution = [0.0; DIMENSIONS];
        for (k, slot) in contribution.iter_mut().enumerate() {
            let value = alpha * card.potency * transformed[k];
            *slot = value;
            dish[k] += value;
        }

        contributions.push(IngredientContribution {
            ingredient_id: card.id.clone(),
            ingredient_name: card.name.clone(),
            contribution: FlavorVector::from_array(contribution),
            alpha,
        });
    }

    let dish_vector = FlavorVector::from_array(dish);
    let normalized_vector = dish_vector.normalize_to_profile();

    Ok(DishProfile { dish_vector, normalized_vector, contributions })
}
