//! Ingredient signature cards covering the major structural roles and
//! ingredient classes.
//!
//! Vector order: [UMAMI, SALT, SWEET, SOUR, BITTER, HEAT_PEPPER, WARM_SPICE,
//! SMOKE, ROASTED, FAT_RICH, CREAMY, HERBAL, CITRUS, ALLIUM, FERMENT,
//! EARTHY, NUTTY, FLORAL, TEXTURE_CRISP, TEXTURE_TENDER]

use palate_core::{
    FlavorVector, IngredientCard, IngredientClass, SolubilityClass, StructuralRole, DIMENSIONS,
};

pub(crate) struct CardSeed {
    id: &'static str,
    name: &'static str,
    vector: [f64; DIMENSIONS],
    potency: f64,
    volatility: f64,
    solubility: SolubilityClass,
    roles: &'static [StructuralRole],
    class: IngredientClass,
}

impl CardSeed {
    pub(crate) fn build(&self) -> IngredientCard {
        IngredientCard {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            vector: FlavorVector::from_array(self.vector),
            potency: self.potency,
            volatility: self.volatility,
            solubility: self.solubility,
            roles: self.roles.iter().copied().collect(),
            class: self.class,
        }
    }

    pub(crate) fn id(&self) -> &'static str {
        self.id
    }
}

use IngredientClass as Class;
use SolubilityClass as Sol;
use StructuralRole as Role;

pub(crate) const CARD_SEEDS: &[CardSeed] = &[
    // Proteins
    CardSeed {
        id: "chicken_breast",
        name: "Chicken Breast",
        vector: [2.0, 0.5, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0],
        potency: 0.7,
        volatility: 0.1,
        solubility: Sol::Water,
        roles: &[Role::Protein],
        class: Class::Neutral,
    },
    CardSeed {
        id: "beef_chuck",
        name: "Beef Chuck",
        vector: [3.5, 0.5, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 3.5],
        potency: 0.85,
        volatility: 0.15,
        solubility: Sol::Water,
        roles: &[Role::Protein],
        class: Class::RedMeat,
    },
    CardSeed {
        id: "salmon",
        name: "Salmon Fillet",
        vector: [3.0, 0.3, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.5],
        potency: 0.8,
        volatility: 0.2,
        solubility: Sol::Water,
        roles: &[Role::Protein, Role::Fat],
        class: Class::Fishy,
    },
    CardSeed {
        id: "shrimp",
        name: "Shrimp",
        vector: [3.5, 0.8, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 2.5],
        potency: 0.8,
        volatility: 0.15,
        solubility: Sol::Water,
        roles: &[Role::Protein],
        class: Class::Shellfish,
    },
    CardSeed {
        id: "tofu",
        name: "Firm Tofu",
        vector: [1.5, 0.2, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.0, 0.0, 0.0, 3.0],
        potency: 0.5,
        volatility: 0.05,
        solubility: Sol::Water,
        roles: &[Role::Protein],
        class: Class::Neutral,
    },
    // Fats
    CardSeed {
        id: "butter",
        name: "Butter",
        vector: [0.5, 0.3, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 4.5, 3.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.5],
        potency: 0.9,
        volatility: 0.3,
        solubility: Sol::Fat,
        roles: &[Role::Fat],
        class: Class::Milk,
    },
    CardSeed {
        id: "olive_oil",
        name: "Extra Virgin Olive Oil",
        vector: [0.3, 0.0, 0.0, 0.0, 0.5, 0.3, 0.0, 0.0, 0.0, 4.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0],
        potency: 0.85,
        volatility: 0.4,
        solubility: Sol::Fat,
        roles: &[Role::Fat],
        class: Class::Neutral,
    },
    CardSeed {
        id: "cream",
        name: "Heavy Cream",
        vector: [0.3, 0.1, 0.8, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.5, 4.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        potency: 0.8,
        volatility: 0.1,
        solubility: Sol::Fat,
        roles: &[Role::Fat],
        class: Class::Milk,
    },
    CardSeed {
        id: "sesame_oil",
        name: "Toasted Sesame Oil",
        vector: [0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 3.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.5, 3.5, 0.0, 0.0, 0.0],
        potency: 0.9,
        volatility: 0.6,
        solubility: Sol::Fat,
        roles: &[Role::Fat, Role::Aromatic],
        class: Class::Neutral,
    },
    // Acids
    CardSeed {
        id: "lemon_juice",
        name: "Lemon Juice",
        vector: [0.0, 0.0, 0.3, 4.5, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 4.5, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0],
        potency: 0.9,
        volatility: 0.7,
        solubility: Sol::Water,
        roles: &[Role::Acid, Role::HerbFinish],
        class: Class::Citrus,
    },
    CardSeed {
        id: "lime_juice",
        name: "Lime Juice",
        vector: [0.0, 0.0, 0.2, 4.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 4.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0],
        potency: 0.9,
        volatility: 0.7,
        solubility: Sol::Water,
        roles: &[Role::Acid, Role::HerbFinish],
        class: Class::Citrus,
    },
    CardSeed {
        id: "red_wine_vinegar",
        name: "Red Wine Vinegar",
        vector: [0.3, 0.0, 0.2, 4.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 1.5, 0.3, 0.0, 0.0, 0.0, 0.0],
        potency: 0.85,
        volatility: 0.5,
        solubility: Sol::Water,
        roles: &[Role::Acid],
        class: Class::Fermented,
    },
    CardSeed {
        id: "rice_vinegar",
        name: "Rice Vinegar",
        vector: [0.2, 0.0, 0.5, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 1.0, 0.0, 0.0, 0.3, 0.0, 0.0],
        potency: 0.7,
        volatility: 0.4,
        solubility: Sol::Water,
        roles: &[Role::Acid],
        class: Class::Fermented,
    },
    // Aromatics and alliums
    CardSeed {
        id: "garlic",
        name: "Garlic",
        vector: [1.5, 0.0, 0.3, 0.0, 0.0, 0.5, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 4.5, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0],
        potency: 0.95,
        volatility: 0.6,
        solubility: Sol::Water,
        roles: &[Role::Aromatic],
        class: Class::AlliumClass,
    },
    CardSeed {
        id: "onion",
        name: "Yellow Onion",
        vector: [0.5, 0.0, 1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.3, 0.0, 0.0, 0.5, 0.0],
        potency: 0.7,
        volatility: 0.4,
        solubility: Sol::Water,
        roles: &[Role::Aromatic, Role::Vegetable],
        class: Class::AlliumClass,
    },
    CardSeed {
        id: "ginger",
        name: "Fresh Ginger",
        vector: [0.0, 0.0, 0.3, 0.3, 0.0, 1.5, 1.5, 0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 0.0, 0.0, 0.5, 0.0, 0.5, 0.0, 0.0],
        potency: 0.9,
        volatility: 0.7,
        solubility: Sol::Water,
        roles: &[Role::Aromatic, Role::HeatAgent],
        class: Class::Spicy,
    },
    CardSeed {
        id: "shallot",
        name: "Shallot",
        vector: [0.3, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 3.5, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0],
        potency: 0.7,
        volatility: 0.4,
        solubility: Sol::Water,
        roles: &[Role::Aromatic],
        class: Class::AlliumClass,
    },
    // Fresh herb finishes
    CardSeed {
        id: "basil",
        name: "Fresh Basil",
        vector: [0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5, 0.0, 0.0],
        potency: 0.8,
        volatility: 0.85,
        solubility: Sol::Water,
        roles: &[Role::HerbFinish],
        class: Class::Neutral,
    },
    CardSeed {
        id: "cilantro",
        name: "Fresh Cilantro",
        vector: [0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.5, 1.5, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        potency: 0.75,
        volatility: 0.9,
        solubility: Sol::Water,
        roles: &[Role::HerbFinish],
        class: Class::Neutral,
    },
    CardSeed {
        id: "parsley",
        name: "Fresh Parsley",
        vector: [0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.5, 0.5, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0],
        potency: 0.6,
        volatility: 0.8,
        solubility: Sol::Water,
        roles: &[Role::HerbFinish],
        class: Class::Neutral,
    },
    CardSeed {
        id: "mint",
        name: "Fresh Mint",
        vector: [0.0, 0.0, 0.5, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5, 0.0, 0.0],
        potency: 0.75,
        volatility: 0.85,
        solubility: Sol::Water,
        roles: &[Role::HerbFinish],
        class: Class::Neutral,
    },
    CardSeed {
        id: "rosemary",
        name: "Fresh Rosemary",
        vector: [0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, 0.0, 0.0],
        potency: 0.85,
        volatility: 0.5,
        solubility: Sol::Fat,
        roles: &[Role::HerbFinish, Role::Aromatic],
        class: Class::Neutral,
    },
    // Spices
    CardSeed {
        id: "cumin",
        name: "Ground Cumin",
        vector: [0.0, 0.0, 0.0, 0.0, 0.3, 0.3, 3.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 1.0, 0.0, 0.0, 0.0],
        potency: 0.9,
        volatility: 0.5,
        solubility: Sol::Fat,
        roles: &[Role::Aromatic],
        class: Class::Spicy,
    },
    CardSeed {
        id: "paprika_smoked",
        name: "Smoked Paprika",
        vector: [0.3, 0.0, 0.5, 0.0, 0.0, 1.5, 1.5, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        potency: 0.85,
        volatility: 0.4,
        solubility: Sol::Fat,
        roles: &[Role::Aromatic, Role::HeatAgent],
        class: Class::Spicy,
    },
    CardSeed {
        id: "black_pepper",
        name: "Black Pepper",
        vector: [0.0, 0.0, 0.0, 0.0, 0.3, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.5, 0.0, 0.3, 0.0, 0.0],
        potency: 0.9,
        volatility: 0.5,
        solubility: Sol::Fat,
        roles: &[Role::HeatAgent],
        class: Class::Spicy,
    },
    CardSeed {
        id: "cinnamon",
        name: "Ground Cinnamon",
        vector: [0.0, 0.0, 2.0, 0.0, 0.3, 0.0, 4.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 1.0, 0.0, 0.0],
        potency: 0.95,
        volatility: 0.6,
        solubility: Sol::Fat,
        roles: &[Role::Aromatic],
        class: Class::Spicy,
    },
    CardSeed {
        id: "chili_flakes",
        name: "Red Chili Flakes",
        vector: [0.0, 0.0, 0.0, 0.0, 0.0, 4.5, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0],
        potency: 0.9,
        volatility: 0.3,
        solubility: Sol::Fat,
        roles: &[Role::HeatAgent],
        class: Class::Spicy,
    },
    // Umami boosters
    CardSeed {
        id: "soy_sauce",
        name: "Soy Sauce",
        vector: [4.5, 4.0, 0.5, 0.3, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.5, 0.0, 0.0, 0.0, 0.0],
        potency: 0.95,
        volatility: 0.3,
        solubility: Sol::Water,
        roles: &[Role::UmamiBoost],
        class: Class::Fermented,
    },
    CardSeed {
        id: "miso",
        name: "White Miso Paste",
        vector: [4.0, 3.5, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 0.0, 0.0, 0.0, 3.5, 0.5, 0.0, 0.0, 0.0, 0.0],
        potency: 0.9,
        volatility: 0.2,
        solubility: Sol::Water,
        roles: &[Role::UmamiBoost],
        class: Class::Fermented,
    },
    CardSeed {
        id: "tomato_paste",
        name: "Tomato Paste",
        vector: [3.5, 0.5, 1.5, 1.5, 0.0, 0.0, 0.0, 0.0, 1.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0],
        potency: 0.85,
        volatility: 0.1,
        solubility: Sol::Water,
        roles: &[Role::UmamiBoost, Role::Acid],
        class: Class::Neutral,
    },
    CardSeed {
        id: "fish_sauce",
        name: "Fish Sauce",
        vector: [5.0, 4.5, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        potency: 0.95,
        volatility: 0.3,
        solubility: Sol::Water,
        roles: &[Role::UmamiBoost],
        class: Class::Fishy,
    },
    CardSeed {
        id: "parmesan",
        name: "Parmesan Cheese",
        vector: [4.5, 3.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.5, 1.5, 0.0, 0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.5, 0.0],
        potency: 0.9,
        volatility: 0.15,
        solubility: Sol::Fat,
        roles: &[Role::UmamiBoost, Role::Fat],
        class: Class::Milk,
    },
    // Starches
    CardSeed {
        id: "rice_white",
        name: "White Rice",
        vector: [0.3, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 3.5],
        potency: 0.4,
        volatility: 0.05,
        solubility: Sol::Dry,
        roles: &[Role::Starch],
        class: Class::Neutral,
    },
    CardSeed {
        id: "pasta",
        name: "Dried Pasta",
        vector: [0.5, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.5, 0.0, 0.0, 3.0],
        potency: 0.4,
        volatility: 0.05,
        solubility: Sol::Dry,
        roles: &[Role::Starch],
        class: Class::Neutral,
    },
    CardSeed {
        id: "potato",
        name: "Potato",
        vector: [0.3, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.5, 3.0],
        potency: 0.4,
        volatility: 0.05,
        solubility: Sol::Water,
        roles: &[Role::Starch, Role::Vegetable],
        class: Class::Neutral,
    },
    // Vegetables
    CardSeed {
        id: "broccoli",
        name: "Broccoli",
        vector: [0.3, 0.0, 0.3, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.5, 2.0],
        potency: 0.5,
        volatility: 0.15,
        solubility: Sol::Water,
        roles: &[Role::Vegetable],
        class: Class::Cruciferous,
    },
    CardSeed {
        id: "spinach",
        name: "Spinach",
        vector: [0.3, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 1.5, 0.0, 0.0, 0.0, 2.5],
        potency: 0.5,
        volatility: 0.2,
        solubility: Sol::Water,
        roles: &[Role::Vegetable],
        class: Class::BitterGreen,
    },
    CardSeed {
        id: "bell_pepper",
        name: "Bell Pepper",
        vector: [0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.5, 1.0],
        potency: 0.5,
        volatility: 0.3,
        solubility: Sol::Water,
        roles: &[Role::Vegetable],
        class: Class::Neutral,
    },
    CardSeed {
        id: "mushroom",
        name: "Button Mushroom",
        vector: [2.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 3.0, 0.5, 0.0, 0.5, 2.5],
        potency: 0.6,
        volatility: 0.15,
        solubility: Sol::Water,
        roles: &[Role::Vegetable, Role::UmamiBoost],
        class: Class::Neutral,
    },
    CardSeed {
        id: "carrot",
        name: "Carrot",
        vector: [0.0, 0.0, 2.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5, 0.0, 0.0, 1.0, 2.0],
        potency: 0.4,
        volatility: 0.1,
        solubility: Sol::Water,
        roles: &[Role::Vegetable],
        class: Class::Neutral,
    },
    // Sweeteners
    CardSeed {
        id: "honey",
        name: "Honey",
        vector: [0.0, 0.0, 4.5, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5, 0.0, 0.5],
        potency: 0.85,
        volatility: 0.3,
        solubility: Sol::Water,
        roles: &[Role::Sweetener],
        class: Class::SweetDessert,
    },
    CardSeed {
        id: "brown_sugar",
        name: "Brown Sugar",
        vector: [0.0, 0.0, 4.5, 0.0, 0.0, 0.0, 0.5, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0],
        potency: 0.9,
        volatility: 0.1,
        solubility: Sol::Water,
        roles: &[Role::Sweetener],
        class: Class::SweetDessert,
    },
    // Texture agents
    CardSeed {
        id: "breadcrumbs_panko",
        name: "Panko Breadcrumbs",
        vector: [0.0, 0.0, 0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.0, 4.0, 0.0],
        potency: 0.3,
        volatility: 0.05,
        solubility: Sol::Dry,
        roles: &[Role::TextureAgent],
        class: Class::Neutral,
    },
    CardSeed {
        id: "walnuts",
        name: "Walnuts",
        vector: [0.3, 0.0, 0.3, 0.0, 0.5, 0.0, 0.0, 0.0, 0.5, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 4.0, 0.0, 3.0, 0.0],
        potency: 0.6,
        volatility: 0.1,
        solubility: Sol::Fat,
        roles: &[Role::TextureAgent, Role::Fat],
        class: Class::Neutral,
    },
];
