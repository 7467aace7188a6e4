//! # Slider Domain
//!
//! The input ranges the form exposes. These are UI bounds only: the model
//! itself accepts any `f64` and never rejects a value for being outside them.

/// A bounded, stepped numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    /// Form field name.
    pub name: &'static str,
    /// Human label.
    pub label: &'static str,
    /// Hint shown under the label.
    pub info: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial position.
    pub default: f64,
}

/// Stellar mass in solar masses.
pub const MASS_SLIDER: SliderSpec = SliderSpec {
    name: "stellar_mass",
    label: "Stellar Mass (Solar Masses)",
    info: "1.0 is equal to our Sun. >1.5 are hot, massive stars.",
    min: 0.1,
    max: 2.5,
    step: 0.05,
    default: 1.0,
};

/// Metallicity as [Fe/H].
pub const METALLICITY_SLIDER: SliderSpec = SliderSpec {
    name: "metallicity",
    label: "Metallicity [Fe/H]",
    info: "0.0 is Solar metallicity. Negative means metal-poor.",
    min: -1.0,
    max: 0.5,
    step: 0.05,
    default: 0.0,
};

impl SliderSpec {
    /// True if `value` lies within `[min, max]`. NaN is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Pull `value` into `[min, max]`. NaN maps to the default.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Number of intervals between `min` and `max`.
    #[must_use]
    pub fn step_count(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize
    }

    /// Every slider position from `min` to `max` inclusive.
    ///
    /// Positions are computed as `min + i * step` so rounding does not
    /// accumulate; the last position is pinned to `max`.
    pub fn grid(&self) -> impl Iterator<Item = f64> + '_ {
        let count = self.step_count();
        (0..=count).map(move |i| {
            if i == count {
                self.max
            } else {
                self.min + i as f64 * self.step
            }
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_counts() {
        assert_eq!(MASS_SLIDER.step_count(), 48);
        assert_eq!(METALLICITY_SLIDER.step_count(), 30);
    }

    #[test]
    fn grid_is_inclusive_and_bounded() {
        let grid: Vec<f64> = MASS_SLIDER.grid().collect();
        assert_eq!(grid.len(), 49);
        assert_eq!(grid.first().copied(), Some(0.1));
        assert_eq!(grid.last().copied(), Some(2.5));
        assert!(grid.iter().all(|v| MASS_SLIDER.contains(*v)));
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn metallicity_grid_hits_solar() {
        assert!(
            METALLICITY_SLIDER
                .grid()
                .any(|v| (v - 0.0).abs() < 1e-12)
        );
    }

    #[test]
    fn defaults_are_inside() {
        assert!(MASS_SLIDER.contains(MASS_SLIDER.default));
        assert!(METALLICITY_SLIDER.contains(METALLICITY_SLIDER.default));
    }

    #[test]
    fn contains_and_clamp() {
        assert!(!MASS_SLIDER.contains(0.05));
        assert!(!MASS_SLIDER.contains(f64::NAN));
        assert_eq!(MASS_SLIDER.clamp(10.0), 2.5);
        assert_eq!(MASS_SLIDER.clamp(-1.0), 0.1);
        assert_eq!(MASS_SLIDER.clamp(1.3), 1.3);
        assert_eq!(METALLICITY_SLIDER.clamp(f64::NAN), 0.0);
    }
}
