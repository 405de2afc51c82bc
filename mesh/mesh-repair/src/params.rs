//! Configuration for vertex and UV unification.

/// How close two coordinates must be to count as identical.
///
/// The default is exact equality (`-0.0` and `0.0` are equal, NaN never
/// matches), which is what grid seams and duplicated authoring produce.
///
/// # Example
///
/// ```
/// use mesh_repair::UnifyParams;
///
/// let exact = UnifyParams::default();
/// assert!(exact.is_exact());
///
/// // Merge scan points closer than a micron (mm units)
/// let params = UnifyParams::default().with_tolerance(1e-3);
/// assert!(!params.is_exact());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UnifyParams {
    /// Maximum distance between coordinates that are merged.
    ///
    /// `0.0` selects exact comparison.
    /// Default: `0.0`
    pub tolerance: f64,
}

impl UnifyParams {
    /// Exact comparison.
    #[must_use]
    pub const fn exact() -> Self {
        Self { tolerance: 0.0 }
    }

    /// Set the merge tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Whether coordinates are compared exactly.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.tolerance == 0.0
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.tolerance.is_finite() && self.tolerance >= 0.0
    }
}
