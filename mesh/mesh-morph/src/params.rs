//! Deformation parameters.

/// Default emboss height as a fraction of the mesh's largest extent.
pub const DEFAULT_EMBOSS_RATIO: f64 = 0.01;

/// One entry of an expression: a morph name and its blend weight.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphWeight {
    /// Name of the morph to apply.
    pub name: String,
    /// Blend weight; `1.0` applies the full delta.
    pub weight: f64,
}

impl MorphWeight {
    /// Create an expression entry.
    #[must_use]
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// How the emboss pattern is sampled at a UV coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatternSampling {
    /// Value of the pixel containing the UV.
    Nearest,
    /// Blend of the four surrounding pixel centres.
    #[default]
    Bilinear,
}

/// Parameters for [`emboss`](crate::emboss).
///
/// # Example
///
/// ```
/// use mesh_morph::{EmbossParams, PatternSampling};
///
/// let params = EmbossParams::default()
///     .with_ratio(0.05)
///     .with_sampling(PatternSampling::Nearest);
/// assert!(params.validate().is_ok());
/// assert!(EmbossParams::default().with_ratio(-1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbossParams {
    /// Displacement at full intensity, as a fraction of the mesh's largest
    /// bounding-box extent.
    pub ratio: f64,
    /// Pattern sampling mode.
    pub sampling: PatternSampling,
}

impl Default for EmbossParams {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_EMBOSS_RATIO,
            sampling: PatternSampling::default(),
        }
    }
}

impl EmbossParams {
    /// Set the emboss ratio.
    #[must_use]
    pub const fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the sampling mode.
    #[must_use]
    pub const fn with_sampling(mut self, sampling: PatternSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Check the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidRatio`](crate::MorphError::InvalidRatio)
    /// if the ratio is negative or not finite.
    pub fn validate(&self) -> crate::MorphResult<()> {
        if self.ratio.is_finite() && self.ratio >= 0.0 {
            Ok(())
        } else {
            Err(crate::MorphError::InvalidRatio(self.ratio))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = EmbossParams::default();
        assert!((params.ratio - DEFAULT_EMBOSS_RATIO).abs() < f64::EPSILON);
        assert_eq!(params.sampling, PatternSampling::Bilinear);
    }

    #[test]
    fn ratio_validation() {
        assert!(EmbossParams::default().with_ratio(0.0).validate().is_ok());
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(EmbossParams::default().with_ratio(bad).validate().is_err());
        }
    }
}
