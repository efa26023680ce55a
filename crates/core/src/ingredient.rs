//! Ingredient signature cards and the structural vocabulary around them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::flavor::FlavorVector;

/// Structural roles an ingredient can fulfill in a dish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StructuralRole {
    Protein,
    Fat,
    Acid,
    Aromatic,
    Sweetener,
    Starch,
    Vegetable,
    UmamiBoost,
    HerbFinish,
    HeatAgent,
    TextureAgent,
    Garnish,
    LiquidBase,
}

/// Solubility class, which governs heat protection of volatile compounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolubilityClass {
    Water,
    Fat,
    Alcohol,
    Dry,
}

/// Ingredient class used for clash-matrix lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IngredientClass {
    Citrus,
    Milk,
    BitterGreen,
    SweetDessert,
    Fishy,
    StrongFloral,
    Fermented,
    RedMeat,
    Shellfish,
    Cruciferous,
    AlliumClass,
    Spicy,
    Neutral,
    PorkCured,
    Offal,
    Legume,
    FruitSweet,
}

/// Static signature of an ingredient type. Owned by the ingredient library;
/// read-only to the scoring core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientCard {
    pub id: String,
    pub name: String,
    /// Base flavor vector before any cooking transform.
    pub vector: FlavorVector,
    /// Overall intensity multiplier in [0, 1].
    pub potency: f64,
    /// Susceptibility to aroma loss under heat, in [0, 1].
    pub volatility: f64,
    pub solubility: SolubilityClass,
    pub roles: BTreeSet<StructuralRole>,
    pub class: IngredientClass,
}

/// One ingredient in one specific dish: a card paired with a quantity in
/// grams (mL for liquids).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DishIngredient {
    pub card: IngredientCard,
    pub quantity: f64,
}

/// Role-derived category deciding which reference quantity normalizes an
/// ingredient's influence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentCategory {
    Primary,
    Support,
    Finish,
}

const PRIMARY_ROLES: [StructuralRole; 3] =
    [StructuralRole::Protein, StructuralRole::Starch, StructuralRole::Vegetable];

/// Classify a role set. PRIMARY takes priority over FINISH; anything else
/// is SUPPORT.
pub fn component_category(roles: &BTreeSet<StructuralRole>) -> ComponentCategory {
    if roles.iter().any(|role| PRIMARY_ROLES.contains(role)) {
        return ComponentCategory::Primary;
    }
    if roles.contains(&StructuralRole::HerbFinish) {
        return ComponentCategory::Finish;
    }
    ComponentCategory::Support
}
