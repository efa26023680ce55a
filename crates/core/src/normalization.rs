//! Quantity normalization: raw grams to a dimensionless influence scalar.

use std::collections::BTreeSet;

use crate::ingredient::{component_category, ComponentCategory, StructuralRole};
use crate::method::DishType;

/// Reference quantities (grams) at which each component category reaches
/// full influence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizationConstants {
    pub q_primary: f64,
    pub q_support: f64,
    pub q_finish: f64,
}

const COMPLETE_PLATE_CONSTANTS: NormalizationConstants =
    NormalizationConstants { q_primary: 200.0, q_support: 50.0, q_finish: 10.0 };

const NORMALIZATION_REGISTRY: &[(DishType, NormalizationConstants)] = &[
    (DishType::CompletePlate, COMPLETE_PLATE_CONSTANTS),
    (DishType::Snack, NormalizationConstants { q_primary: 100.0, q_support: 30.0, q_finish: 5.0 }),
    (DishType::Sauce, NormalizationConstants { q_primary: 100.0, q_support: 40.0, q_finish: 8.0 }),
    (DishType::Side, NormalizationConstants { q_primary: 150.0, q_support: 40.0, q_finish: 8.0 }),
    (DishType::Soup, NormalizationConstants { q_primary: 250.0, q_support: 50.0, q_finish: 10.0 }),
    (DishType::Salad, NormalizationConstants { q_primary: 150.0, q_support: 40.0, q_finish: 8.0 }),
    (DishType::Dessert, NormalizationConstants { q_primary: 150.0, q_support: 40.0, q_finish: 5.0 }),
];

/// Constants for a dish type. Registry misses degrade to the COMPLETE_PLATE
/// defaults rather than erroring.
pub fn normalization_constants(dish_type: DishType) -> NormalizationConstants {
    NORMALIZATION_REGISTRY
        .iter()
        .find(|(key, _)| *key == dish_type)
        .map(|(_, constants)| *constants)
        .unwrap_or(COMPLETE_PLATE_CONSTANTS)
}

/// Influence scalar `alpha = min(1, quantity / Q_category)` in [0, 1].
///
/// A quantity of zero or less yields 0: the ingredient is treated as
/// absent, not as an error.
pub fn compute_alpha(
    quantity: f64,
    roles: &BTreeSet<StructuralRole>,
    dish_type: DishType,
) -> f64 {
    if quantity <= 0.0 {
        return 0.0;
    }

    let constants = normalization_constants(dish_type);
    let reference = match component_category(roles) {
        ComponentCategory::Primary => constants.q_primary,
        ComponentCategory::Support => constants.q_support,
        ComponentCategory::Finish => constants.q_finish,
    };

    (quantity / reference).min(1.0)
}
