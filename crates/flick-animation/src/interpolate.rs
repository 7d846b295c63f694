//! Piecewise-linear interpolation from a domain partition to a range
//! partition, the shape every derived visual value in Flick is built from
//! (offset -> rotation, progress -> opacity, and so on).

use flick_core::ConfigError;

/// Behavior for inputs outside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolate {
    /// Pin to the nearest boundary range value.
    Clamp,
    /// Continue the edge segment's slope.
    Extend,
}

/// Map `value` through the partition. `domain` must be sorted ascending
/// and the slices must be the same length with at least two points; use
/// [`Interpolation`] when the tables come from configuration rather than
/// literals.
pub fn interpolate(value: f32, domain: &[f32], range: &[f32], extrapolate: Extrapolate) -> f32 {
    debug_assert!(domain.len() >= 2, "domain needs at least two points");
    debug_assert_eq!(domain.len(), range.len());

    if extrapolate == Extrapolate::Clamp {
        if value <= domain[0] {
            return range[0];
        }
        if value >= domain[domain.len() - 1] {
            return range[range.len() - 1];
        }
    }

    let mut segment = domain.len() - 2;
    for index in 0..domain.len() - 1 {
        if value < domain[index + 1] {
            segment = index;
            break;
        }
    }

    let (d0, d1) = (domain[segment], domain[segment + 1]);
    let (r0, r1) = (range[segment], range[segment + 1]);
    let span = d1 - d0;
    if span.abs() < f32::EPSILON {
        return r1;
    }
    let fraction = (value - d0) / span;
    r0 + (r1 - r0) * fraction
}

/// Validated, reusable interpolation table.
pub struct Interpolation {
    domain: Vec<f32>,
    range: Vec<f32>,
    extrapolate: Extrapolate,
}

impl Interpolation {
    /// Extending interpolation (values outside the domain follow the edge
    /// segment's slope).
    pub fn new(domain: Vec<f32>, range: Vec<f32>) -> Result<Self, ConfigError> {
        Self::with_extrapolate(domain, range, Extrapolate::Extend)
    }

    /// Clamping interpolation (values outside the domain pin to the edges).
    pub fn clamped(domain: Vec<f32>, range: Vec<f32>) -> Result<Self, ConfigError> {
        Self::with_extrapolate(domain, range, Extrapolate::Clamp)
    }

    pub fn with_extrapolate(
        domain: Vec<f32>,
        range: Vec<f32>,
        extrapolate: Extrapolate,
    ) -> Result<Self, ConfigError> {
        if domain.len() < 2 {
            return Err(ConfigError::InterpolationDomainTooSmall);
        }
        if domain.len() != range.len() {
            return Err(ConfigError::InterpolationLengthMismatch {
                domain: domain.len(),
                range: range.len(),
            });
        }
        if domain.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InterpolationDomainUnsorted);
        }
        Ok(Self {
            domain,
            range,
            extrapolate,
        })
    }

    pub fn sample(&self, value: f32) -> f32 {
        interpolate(value, &self.domain, &self.range, self.extrapolate)
    }
}

#[cfg(test)]
#[path = "tests/interpolate_tests.rs"]
mod tests;
