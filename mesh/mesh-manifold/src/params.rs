//! Tolerances and pass configuration.
//!
//! Every pass takes its tolerance explicitly. The structs here bundle them
//! for the composed pipelines and document the defaults in one place.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cross-product magnitude at or below which a triangle is degenerate
/// during component cleanup.
pub const DEFAULT_AREA_TOLERANCE: f64 = 1e-9;

/// Fan-triangulated polygon area below which a face is degenerate in the
/// standalone degenerate-face filter.
pub const DEFAULT_DEGENERATE_AREA_THRESHOLD: f64 = 1e-9;

/// Distance below which two vertices are welded.
pub const DEFAULT_WELD_THRESHOLD: f64 = 0.01;

/// Slack on `|n1 · n2|` when deciding that two faces are coplanar.
pub const DEFAULT_COPLANAR_EPSILON: f64 = 1e-5;

/// Configuration for the manifold repair pipeline.
///
/// All distances are in the same units as the mesh coordinates.
///
/// # Example
///
/// ```
/// use mesh_manifold::RepairParams;
///
/// // Use defaults: no weld pre-pass, 1e-9 cleanup tolerance
/// let params = RepairParams::default();
/// assert!(params.weld_threshold.is_none());
///
/// // Or customize
/// let params = RepairParams::default()
///     .with_weld_threshold(1e-6)
///     .with_compute_normals(true);
/// assert_eq!(params.weld_threshold, Some(1e-6));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RepairParams {
    /// Cross-product magnitude tolerance for component cleanup.
    ///
    /// Default: [`DEFAULT_AREA_TOLERANCE`]
    pub area_tolerance: f64,

    /// Weld threshold for the optional pre-pass.
    ///
    /// `None` skips welding.
    /// Default: `None`
    pub weld_threshold: Option<f64>,

    /// Whether to compute face normals on every output component.
    ///
    /// Default: `false`
    pub compute_normals: bool,

    /// Whether to clean components in parallel (via rayon).
    ///
    /// Default: `true`
    pub parallel: bool,
}

impl Default for RepairParams {
    fn default() -> Self {
        Self {
            area_tolerance: DEFAULT_AREA_TOLERANCE,
            weld_threshold: None,
            compute_normals: false,
            parallel: true,
        }
    }
}

impl RepairParams {
    /// Create params suited to noisy 3D scan data.
    ///
    /// Welds aggressively before repair and drops slivers more eagerly.
    #[must_use]
    pub fn for_scans() -> Self {
        Self {
            area_tolerance: 1e-6,
            weld_threshold: Some(DEFAULT_WELD_THRESHOLD),
            ..Default::default()
        }
    }

    /// Create params suited to CAD exports.
    ///
    /// Only welds exact coincidences and keeps tiny intentional faces.
    #[must_use]
    pub fn for_cad() -> Self {
        Self {
            area_tolerance: 1e-12,
            weld_threshold: Some(1e-9),
            ..Default::default()
        }
    }

    /// Set the cleanup area tolerance.
    #[must_use]
    pub fn with_area_tolerance(mut self, tolerance: f64) -> Self {
        self.area_tolerance = tolerance;
        self
    }

    /// Enable the weld pre-pass with the given threshold.
    #[must_use]
    pub fn with_weld_threshold(mut self, threshold: f64) -> Self {
        self.weld_threshold = Some(threshold);
        self
    }

    /// Disable the weld pre-pass.
    #[must_use]
    pub fn without_weld(mut self) -> Self {
        self.weld_threshold = None;
        self
    }

    /// Set whether to compute face normals on the output.
    #[must_use]
    pub fn with_compute_normals(mut self, compute: bool) -> Self {
        self.compute_normals = compute;
        self
    }

    /// Set whether component cleanup runs in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Configuration for the standalone cleanup chain.
///
/// The chain removes degenerate faces, welds close vertices and merges
/// coplanar neighbours, in that order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CleanupParams {
    /// Polygon area below which a face is removed.
    ///
    /// Default: [`DEFAULT_DEGENERATE_AREA_THRESHOLD`]
    pub degenerate_area_threshold: f64,

    /// Weld distance threshold.
    ///
    /// Default: [`DEFAULT_WELD_THRESHOLD`]
    pub weld_threshold: f64,

    /// Coplanarity slack for face merging.
    ///
    /// Default: [`DEFAULT_COPLANAR_EPSILON`]
    pub coplanar_epsilon: f64,
}

impl Default for CleanupParams {
    fn default() -> Self {
        Self {
            degenerate_area_threshold: DEFAULT_DEGENERATE_AREA_THRESHOLD,
            weld_threshold: DEFAULT_WELD_THRESHOLD,
            coplanar_epsilon: DEFAULT_COPLANAR_EPSILON,
        }
    }
}

impl CleanupParams {
    /// Set the degenerate face area threshold.
    #[must_use]
    pub fn with_degenerate_area_threshold(mut self, threshold: f64) -> Self {
        self.degenerate_area_threshold = threshold;
        self
    }

    /// Set the weld distance threshold.
    #[must_use]
    pub fn with_weld_threshold(mut self, threshold: f64) -> Self {
        self.weld_threshold = threshold;
        self
    }

    /// Set the coplanarity slack.
    #[must_use]
    pub fn with_coplanar_epsilon(mut self, epsilon: f64) -> Self {
        self.coplanar_epsilon = epsilon;
        self
    }
}
