//! Style/cuisine target profiles: the ideal normalized flavor shape and
//! per-dimension balance weights for common cuisine signatures.
//!
//! Vector order: [UMAMI, SALT, SWEET, SOUR, BITTER, HEAT_PEPPER, WARM_SPICE,
//! SMOKE, ROASTED, FAT_RICH, CREAMY, HERBAL, CITRUS, ALLIUM, FERMENT,
//! EARTHY, NUTTY, FLORAL, TEXTURE_CRISP, TEXTURE_TENDER]

use palate_core::{FlavorVector, StyleTarget, DIMENSIONS};

pub(crate) struct StyleSeed {
    id: &'static str,
    name: &'static str,
    profile: [f64; DIMENSIONS],
    weights: [f64; DIMENSIONS],
}

impl StyleSeed {
    pub(crate) fn build(&self) -> StyleTarget {
        StyleTarget {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            profile: FlavorVector::from_array(self.profile),
            weights: FlavorVector::from_array(self.weights),
        }
    }

    pub(crate) fn id(&self) -> &'static str {
        self.id
    }
}

const UNIFORM_WEIGHTS: [f64; DIMENSIONS] = [1.0; DIMENSIONS];

pub(crate) const STYLE_SEEDS: &[StyleSeed] = &[
    StyleSeed {
        id: "italian",
        name: "Italian (Classic)",
        profile: [0.65, 0.50, 0.30, 0.35, 0.15, 0.10, 0.15, 0.05, 0.30, 0.55, 0.30, 0.60, 0.25, 0.55, 0.20, 0.20, 0.15, 0.10, 0.25, 0.50],
        weights: [1.2, 0.8, 0.6, 0.9, 0.5, 0.4, 0.5, 0.3, 0.7, 1.0, 0.6, 1.2, 0.8, 1.1, 0.6, 0.5, 0.4, 0.3, 0.5, 0.7],
    },
    StyleSeed {
        id: "japanese",
        name: "Japanese (Washoku)",
        profile: [0.80, 0.40, 0.25, 0.20, 0.10, 0.05, 0.05, 0.05, 0.15, 0.30, 0.10, 0.15, 0.15, 0.20, 0.40, 0.15, 0.10, 0.10, 0.30, 0.60],
        weights: [1.5, 0.8, 0.6, 0.7, 0.4, 0.3, 0.3, 0.3, 0.5, 0.7, 0.4, 0.5, 0.6, 0.6, 1.2, 0.5, 0.4, 0.3, 0.7, 0.9],
    },
    StyleSeed {
        id: "mexican",
        name: "Mexican (Traditional)",
        profile: [0.50, 0.45, 0.25, 0.40, 0.10, 0.60, 0.40, 0.30, 0.35, 0.40, 0.25, 0.45, 0.50, 0.40, 0.15, 0.30, 0.10, 0.05, 0.35, 0.45],
        weights: [0.8, 0.7, 0.5, 1.0, 0.4, 1.2, 0.9, 0.8, 0.6, 0.8, 0.5, 1.0, 1.1, 0.8, 0.5, 0.6, 0.3, 0.2, 0.7, 0.6],
    },
    StyleSeed {
        id: "thai",
        name: "Thai",
        profile: [0.55, 0.50, 0.45, 0.55, 0.05, 0.65, 0.20, 0.05, 0.10, 0.30, 0.25, 0.55, 0.50, 0.35, 0.30, 0.10, 0.20, 0.15, 0.25, 0.40],
        weights: [0.9, 0.8, 1.0, 1.2, 0.3, 1.3, 0.5, 0.2, 0.3, 0.6, 0.5, 1.1, 1.1, 0.7, 0.8, 0.3, 0.5, 0.4, 0.5, 0.6],
    },
    StyleSeed {
        id: "french",
        name: "French (Classic)",
        profile: [0.55, 0.45, 0.30, 0.30, 0.15, 0.05, 0.10, 0.05, 0.35, 0.65, 0.55, 0.55, 0.20, 0.45, 0.15, 0.20, 0.15, 0.20, 0.20, 0.60],
        weights: [1.0, 0.8, 0.6, 0.8, 0.4, 0.3, 0.4, 0.2, 0.8, 1.2, 1.1, 1.0, 0.7, 0.9, 0.4, 0.5, 0.4, 0.5, 0.4, 0.9],
    },
    StyleSeed {
        id: "indian",
        name: "Indian (North)",
        profile: [0.45, 0.45, 0.30, 0.25, 0.10, 0.50, 0.70, 0.10, 0.25, 0.45, 0.40, 0.35, 0.15, 0.50, 0.10, 0.30, 0.15, 0.20, 0.15, 0.55],
        weights: [0.7, 0.7, 0.5, 0.6, 0.4, 1.1, 1.5, 0.4, 0.5, 0.9, 0.8, 0.7, 0.4, 1.0, 0.3, 0.6, 0.4, 0.5, 0.3, 0.7],
    },
    StyleSeed {
        id: "bbq",
        name: "American BBQ",
        profile: [0.60, 0.55, 0.50, 0.30, 0.10, 0.35, 0.25, 0.70, 0.65, 0.55, 0.15, 0.10, 0.10, 0.35, 0.10, 0.15, 0.10, 0.00, 0.25, 0.70],
        weights: [0.9, 0.8, 0.9, 0.6, 0.3, 0.7, 0.5, 1.4, 1.2, 0.9, 0.3, 0.3, 0.3, 0.6, 0.3, 0.3, 0.3, 0.1, 0.5, 1.0],
    },
    StyleSeed {
        id: "mediterranean",
        name: "Mediterranean",
        profile: [0.40, 0.40, 0.20, 0.35, 0.20, 0.10, 0.20, 0.05, 0.20, 0.55, 0.15, 0.65, 0.45, 0.50, 0.15, 0.25, 0.20, 0.15, 0.30, 0.40],
        weights: UNIFORM_WEIGHTS,
    },
];
