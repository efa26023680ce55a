//! Read-only seams to the external data libraries.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::flavor::FlavorVector;
use crate::ingredient::IngredientCard;

/// A cuisine/style signature: the target normalized flavor profile and the
/// per-dimension balance weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleTarget {
    pub id: String,
    pub name: String,
    pub profile: FlavorVector,
    pub weights: FlavorVector,
}

/// Lookup interface to the ingredient library.
pub trait IngredientProvider: Send + Sync {
    /// Resolve one ingredient card. A miss is `UnknownIngredient` and is
    /// never substituted with a default.
    fn ingredient(&self, id: &str) -> Result<IngredientCard, DomainError>;

    /// The full library, used as the default candidate pool for
    /// recommendations.
    fn all_ingredients(&self) -> Vec<IngredientCard>;
}

/// Lookup interface to the style-target library.
pub trait StyleTargetProvider: Send + Sync {
    fn style_target(&self, id: &str) -> Option<StyleTarget>;
}
