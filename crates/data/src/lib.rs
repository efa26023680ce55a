//! Static ingredient and style-target libraries.
//!
//! All data lives in seed-constant tables and is served through the core's
//! read-only provider traits. Nothing here computes; the tables exist so
//! the engine and its tests have a realistic library to look up.

mod ingredients;
mod styles;

use palate_core::{
    DomainError, IngredientCard, IngredientProvider, StyleTarget, StyleTargetProvider,
};

/// In-memory library backed by the seed tables. Cheap to construct and safe
/// to share across threads; lookups build fresh owned cards.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticLibrary;

impl StaticLibrary {
    pub fn new() -> Self {
        Self
    }

    /// Ids of every ingredient in the library.
    pub fn ingredient_ids(&self) -> Vec<&'static str> {
        ingredients::CARD_SEEDS.iter().map(|seed| seed.id()).collect()
    }

    /// Ids of every style target in the library.
    pub fn style_target_ids(&self) -> Vec<&'static str> {
        styles::STYLE_SEEDS.iter().map(|seed| seed.id()).collect()
    }
}

impl IngredientProvider for StaticLibrary {
    fn ingredient(&self, id: &str) -> Result<IngredientCard, DomainError> {
        ingredients::CARD_SEEDS
            .iter()
            .find(|seed| seed.id() == id)
            .map(ingredients::CardSeed::build)
            .ok_or_else(|| DomainError::UnknownIngredient(id.to_owned()))
    }

    fn all_ingredients(&self) -> Vec<IngredientCard> {
        ingredients::CARD_SEEDS.iter().map(ingredients::CardSeed::build).collect()
    }
}

impl StyleTargetProvider for StaticLibrary {
    fn style_target(&self, id: &str) -> Option<StyleTarget> {
        styles::STYLE_SEEDS.iter().find(|seed| seed.id() == id).map(styles::StyleSeed::build)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use palate_core::{component_category, ComponentCategory, StructuralRole};

    use super::*;

    #[test]
    fn known_ingredients_resolve_and_unknown_ones_fail() {
        let library = StaticLibrary::new();

        let butter = library.ingredient("butter").unwrap();
        assert_eq!(butter.name, "Butter");
        assert!(butter.roles.contains(&StructuralRole::Fat));

        let err = library.ingredient("unobtainium").unwrap_err();
        assert_eq!(err, DomainError::UnknownIngredient("unobtainium".to_owned()));
    }

    #[test]
    fn library_ids_are_unique() {
        let library = StaticLibrary::new();
        let ids = library.ingredient_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn cards_stay_inside_documented_ranges() {
        let library = StaticLibrary::new();
        for card in library.all_ingredients() {
            assert!((0.0..=1.0).contains(&card.potency), "potency of {}", card.id);
            assert!((0.0..=1.0).contains(&card.volatility), "volatility of {}", card.id);
            assert!(!card.roles.is_empty(), "roles of {}", card.id);
            for &value in card.vector.as_slice() {
                assert!((0.0..=5.0).contains(&value), "vector of {}", card.id);
            }
        }
    }

    #[test]
    fn library_covers_every_component_category() {
        let library = StaticLibrary::new();
        let mut seen = HashSet::new();
        for card in library.all_ingredients() {
            seen.insert(component_category(&card.roles));
        }
        assert!(seen.contains(&ComponentCategory::Primary));
        assert!(seen.contains(&ComponentCategory::Support));
        assert!(seen.contains(&ComponentCategory::Finish));
    }

    #[test]
    fn style_targets_resolve_with_normalized_profiles() {
        let library = StaticLibrary::new();

        let italian = library.style_target("italian").unwrap();
        assert_eq!(italian.name, "Italian (Classic)");
        for &value in italian.profile.as_slice() {
            assert!((0.0..=1.0).contains(&value));
        }

        assert!(library.style_target("martian").is_none());
        assert_eq!(library.style_target_ids().len(), 8);
    }
}
