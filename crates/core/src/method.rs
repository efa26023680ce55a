//! Cooking methods, dish types, and the per-method kernel transforms.
//!
//! Each method maps to a fixed kernel: unconditional per-dimension
//! multipliers, heat-scaled multipliers interpolated between no-op at heat 0
//! and full effect at heat 1, and a volatility-loss factor. The registry is a
//! data table so every heuristic constant sits in one auditable place.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::flavor::{FlavorDimension, FlavorVector, DIMENSIONS};
use crate::ingredient::SolubilityClass;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CookingMethod {
    HighHeatSear,
    Braise,
    RawFinish,
    Roast,
    Steam,
    DeepFry,
    Saute,
    Simmer,
    Grill,
    SmokeMethod,
    BloomInFat,
    Raw,
}

/// Dish category selecting normalization constants, required roles, and
/// coverage thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishType {
    CompletePlate,
    Snack,
    Sauce,
    Side,
    Soup,
    Salad,
    Dessert,
}

/// Fixed transform definition for one cooking method.
#[derive(Clone, Copy, Debug)]
pub struct MethodKernel {
    /// Multipliers applied regardless of heat.
    pub modifiers: &'static [(FlavorDimension, f64)],
    /// Multipliers interpolated by heat level.
    pub heat_scaled: &'static [(FlavorDimension, f64)],
    /// Aroma-loss factor combined with volatility and heat.
    pub volatility_loss: f64,
}

const METHOD_KERNELS: &[(CookingMethod, MethodKernel)] = &[
    (
        CookingMethod::HighHeatSear,
        MethodKernel {
            modifiers: &[],
            heat_scaled: &[
                (FlavorDimension::Roasted, 1.8),
                (FlavorDimension::Smoke, 1.4),
                (FlavorDimension::Herbal, 0.5),
                (FlavorDimension::Citrus, 0.4),
                (FlavorDimension::Floral, 0.5),
                (FlavorDimension::TextureCrisp, 1.6),
                (FlavorDimension::TextureTender, 0.7),
            ],
            volatility_loss: 0.6,
        },
    ),
    (
        CookingMethod::Braise,
        MethodKernel {
            modifiers: &[
                (FlavorDimension::TextureTender, 1.8),
                (FlavorDimension::TextureCrisp, 0.2),
            ],
            heat_scaled: &[
                (FlavorDimension::Umami, 1.5),
                (FlavorDimension::FatRich, 1.2),
                (FlavorDimension::Herbal, 0.6),
                (FlavorDimension::Citrus, 0.5),
            ],
            volatility_loss: 0.4,
        },
    ),
    (
        CookingMethod::RawFinish,
        MethodKernel {
            modifiers: &[
                (FlavorDimension::Herbal, 1.3),
                (FlavorDimension::Citrus, 1.3),
                (FlavorDimension::Floral, 1.2),
            ],
            heat_scaled: &[],
            volatility_loss: 0.0,
        },
    ),
    (
        CookingMethod::Roast,
        MethodKernel {
            modifiers: &[],
            heat_scaled: &[
                (FlavorDimension::Roasted, 1.6),
                (FlavorDimension::Sweet, 1.2),
                (FlavorDimension::Nutty, 1.3),
                (FlavorDimension::Herbal, 0.6),
                (FlavorDimension::TextureCrisp, 1.3),
            ],
            volatility_loss: 0.4,
        },
    ),
    (
        CookingMethod::Steam,
        MethodKernel {
            modifiers: &[(FlavorDimension::TextureTender, 1.3)],
            heat_scaled: &[
                (FlavorDimension::Herbal, 0.8),
                (FlavorDimension::Floral, 0.9),
            ],
            volatility_loss: 0.2,
        },
    ),
    (
        CookingMethod::DeepFry,
        MethodKernel {
            modifiers: &[
                (FlavorDimension::FatRich, 1.5),
                (FlavorDimension::TextureCrisp, 2.0),
                (FlavorDimension::TextureTender, 0.4),
            ],
            heat_scaled: &[
                (FlavorDimension::Roasted, 1.3),
                (FlavorDimension::Herbal, 0.3),
                (FlavorDimension::Citrus, 0.3),
                (FlavorDimension::Floral, 0.3),
            ],
            volatility_loss: 0.7,
        },
    ),
    (
        CookingMethod::Saute,
        MethodKernel {
            modifiers: &[],
            heat_scaled: &[
                (FlavorDimension::Roasted, 1.3),
                (FlavorDimension::Allium, 1.2),
                (FlavorDimension::Herbal, 0.7),
                (FlavorDimension::TextureCrisp, 1.2),
            ],
            volatility_loss: 0.3,
        },
    ),
    (
        CookingMethod::Simmer,
        MethodKernel {
            modifiers: &[(FlavorDimension::TextureTender, 1.4)],
            heat_scaled: &[
                (FlavorDimension::Umami, 1.3),
                (FlavorDimension::Herbal, 0.7),
                (FlavorDimension::Citrus, 0.6),
            ],
            volatility_loss: 0.3,
        },
    ),
    (
        CookingMethod::Grill,
        MethodKernel {
            modifiers: &[],
            heat_scaled: &[
                (FlavorDimension::Smoke, 1.8),
                (FlavorDimension::Roasted, 1.5),
                (FlavorDimension::Herbal, 0.5),
                (FlavorDimension::Citrus, 0.4),
                (FlavorDimension::TextureCrisp, 1.4),
            ],
            volatility_loss: 0.5,
        },
    ),
    (
        CookingMethod::SmokeMethod,
        MethodKernel {
            modifiers: &[(FlavorDimension::Smoke, 2.0)],
            heat_scaled: &[
                (FlavorDimension::Roasted, 1.3),
                (FlavorDimension::Herbal, 0.4),
                (FlavorDimension::Citrus, 0.3),
                (FlavorDimension::TextureTender, 1.3),
            ],
            volatility_loss: 0.5,
        },
    ),
    (
        CookingMethod::BloomInFat,
        MethodKernel {
            modifiers: &[(FlavorDimension::FatRich, 1.2)],
            heat_scaled: &[
                (FlavorDimension::WarmSpice, 1.5),
                (FlavorDimension::HeatPepper, 1.3),
                (FlavorDimension::Earthy, 1.2),
            ],
            volatility_loss: 0.1,
        },
    ),
    (
        CookingMethod::Raw,
        MethodKernel { modifiers: &[], heat_scaled: &[], volatility_loss: 0.0 },
    ),
];

/// Look up the kernel for a method. A registry miss is a configuration
/// error: no default transform is safe to assume.
pub fn kernel_for(method: CookingMethod) -> Result<&'static MethodKernel, DomainError> {
    METHOD_KERNELS
        .iter()
        .find(|(key, _)| *key == method)
        .map(|(_, kernel)| kernel)
        .ok_or(DomainError::UnknownMethod(method))
}

fn lookup(modifiers: &[(FlavorDimension, f64)], k: usize) -> Option<f64> {
    modifiers.iter().find(|(dim, _)| dim.index() == k).map(|(_, m)| *m)
}

/// Transform an ingredient's base vector into its post-cooking vector.
///
/// Per dimension: apply the unconditional multiplier, then the heat-scaled
/// multiplier interpolated as `1 + (m - 1) * heat`, then attenuate volatile
/// compounds by `1 - volatility * heat * loss * protection` (fat solubility
/// halves the loss). Every output dimension is clamped to [0, 5].
pub fn apply_method_kernel(
    vector: &FlavorVector,
    solubility: SolubilityClass,
    volatility: f64,
    heat_level: f64,
    method: CookingMethod,
) -> Result<FlavorVector, DomainError> {
    let kernel = kernel_for(method)?;

    let mut out = [0.0; DIMENSIONS];
    for (k, slot) in out.iter_mut().enumerate() {
        let mut value = vector[k];

        if let Some(modifier) = lookup(kernel.modifiers, k) {
            value *= modifier;
        }

        if let Some(modifier) = lookup(kernel.heat_scaled, k) {
            value *= 1.0 + (modifier - 1.0) * heat_level;
        }

        if volatility > 0.0 && heat_level > 0.0 {
            let protection = if solubility == SolubilityClass::Fat { 0.5 } else { 1.0 };
            let loss = volatility * heat_level * kernel.volatility_loss * protection;
            value *= 1.0 - loss;
        }

        *slot = value.clamp(0.0, 5.0);
    }

    Ok(FlavorVector::from_array(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn herb_vector() -> FlavorVector {
        let mut values = [0.0; DIMENSIONS];
        values[FlavorDimension::Herbal.index()] = 4.0;
        values[FlavorDimension::Citrus.index()] = 3.0;
        FlavorVector::from_array(values)
    }

    #[test]
    fn raw_is_the_identity_transform() {
        let v = herb_vector();
        for (solubility, volatility, heat) in [
            (SolubilityClass::Water, 0.0, 0.0),
            (SolubilityClass::Fat, 0.9, 1.0),
            (SolubilityClass::Dry, 0.5, 0.5),
            (SolubilityClass::Alcohol, 1.0, 0.2),
        ] {
            let cooked =
                apply_method_kernel(&v, solubility, volatility, heat, CookingMethod::Raw).unwrap();
            assert_eq!(cooked, v);
        }
    }

    #[test]
    fn heat_zero_disables_heat_scaled_modifiers_and_loss() {
        let v = herb_vector();
        let cooked =
            apply_method_kernel(&v, SolubilityClass::Water, 0.9, 0.0, CookingMethod::HighHeatSear)
                .unwrap();
        assert_eq!(cooked, v);
    }

    #[test]
    fn searing_attenuates_volatile_herbs() {
        let v = herb_vector();
        let cooked =
            apply_method_kernel(&v, SolubilityClass::Water, 0.8, 0.9, CookingMethod::HighHeatSear)
                .unwrap();
        assert!(cooked[FlavorDimension::Herbal] < v[FlavorDimension::Herbal]);
        assert!(cooked[FlavorDimension::Citrus] < v[FlavorDimension::Citrus]);
    }

    #[test]
    fn heat_interpolation_is_linear() {
        let mut values = [0.0; DIMENSIONS];
        values[FlavorDimension::Roasted.index()] = 2.0;
        let v = FlavorVector::from_array(values);

        // ROAST scales ROASTED by 1.6 at full heat; at heat 0.5 the modifier
        // interpolates to 1.3.
        let cooked =
            apply_method_kernel(&v, SolubilityClass::Water, 0.0, 0.5, CookingMethod::Roast)
                .unwrap();
        assert!((cooked[FlavorDimension::Roasted] - 2.0 * 1.3).abs() < 1e-9);
    }

    #[test]
    fn fat_solubility_halves_volatility_loss() {
        let v = herb_vector();
        let water =
            apply_method_kernel(&v, SolubilityClass::Water, 0.8, 1.0, CookingMethod::Saute)
                .unwrap();
        let fat = apply_method_kernel(&v, SolubilityClass::Fat, 0.8, 1.0, CookingMethod::Saute)
            .unwrap();

        // SAUTE at full heat: herbal modifier 0.7, loss 0.3.
        let base = 4.0 * 0.7;
        assert!((water[FlavorDimension::Herbal] - base * (1.0 - 0.8 * 0.3)).abs() < 1e-9);
        assert!((fat[FlavorDimension::Herbal] - base * (1.0 - 0.8 * 0.3 * 0.5)).abs() < 1e-9);
        assert!(fat[FlavorDimension::Herbal] > water[FlavorDimension::Herbal]);
    }

    #[test]
    fn output_is_clamped_to_the_intensity_scale() {
        let mut values = [0.0; DIMENSIONS];
        values[FlavorDimension::Smoke.index()] = 4.0;
        let v = FlavorVector::from_array(values);

        // SMOKE_METHOD doubles SMOKE unconditionally; 8.0 clamps to 5.0.
        let cooked =
            apply_method_kernel(&v, SolubilityClass::Water, 0.0, 0.0, CookingMethod::SmokeMethod)
                .unwrap();
        assert_eq!(cooked[FlavorDimension::Smoke], 5.0);
    }

    #[test]
    fn every_method_has_a_kernel() {
        for method in [
            CookingMethod::HighHeatSear,
            CookingMethod::Braise,
            CookingMethod::RawFinish,
            CookingMethod::Roast,
            CookingMethod::Steam,
            CookingMethod::DeepFry,
            CookingMethod::Saute,
            CookingMethod::Simmer,
            CookingMethod::Grill,
            CookingMethod::SmokeMethod,
            CookingMethod::BloomInFat,
            CookingMethod::Raw,
        ] {
            assert!(kernel_for(method).is_ok());
        }
    }
}
