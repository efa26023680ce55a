//! Recommendation search: candidate add-ins, minimal fixes, substitutions,
//! and method adjustments, all ranked by projected score delta.
//!
//! Every strategy evaluates candidate dishes through the same pure oracle
//! (full dish computation plus scoring), so results are independent trials
//! with no shared state.

mod engine;
mod types;

pub use engine::{
    find_best_add_ins, find_method_adjustments, find_minimal_fixes, find_substitutions,
};
pub use types::{QuantityRange, Recommendation, RecommendationContext, RecommendationKind};

/// Default number of add-in recommendations returned.
pub const DEFAULT_TOP_ADD_INS: usize = 5;

/// Default number of substitution recommendations returned.
pub const DEFAULT_TOP_SUBSTITUTIONS: usize = 3;

/// Minimum base-vector cosine similarity for a substitution candidate;
/// anything less is too different to stand in, even with a shared role.
pub const MIN_SUBSTITUTE_SIMILARITY: f64 = 0.3;

/// Weighted-deviation noise floor below which balance fixes are not worth
/// proposing.
pub const FIX_NOISE_FLOOR: f64 = 0.05;

/// Maximum number of balance-deviation fixes proposed per evaluation.
pub const MAX_BALANCE_FIXES: usize = 3;
