use thiserror::Error;

use crate::flavor::DIMENSIONS;
use crate::method::CookingMethod;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("flavor vector requires exactly {} dimensions, got {actual}", DIMENSIONS)]
    DimensionMismatch { actual: usize },
    #[error("style target not found: {0}")]
    UnknownStyleTarget(String),
    #[error("ingredient not found: {0}")]
    UnknownIngredient(String),
    #[error("no kernel registered for cooking method {0:?}")]
    UnknownMethod(CookingMethod),
}
