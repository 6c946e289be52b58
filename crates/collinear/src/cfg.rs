//! Tolerance defaults and detector configuration.
//!
//! Policy
//! - Defaults are fixed constants. `DetectCfg` exists so callers and tests can
//!   state the tolerance explicitly, not to encourage tuning it per dataset.

use crate::error::CollinearError;

/// Two slopes closer than this are treated as equal.
pub const SLOPE_EPS: f64 = 1e-6;
/// Smallest run (pivot included) reported as a segment.
pub const MIN_SEGMENT_POINTS: usize = 4;

/// Detector configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectCfg {
    pub eps_slope: f64,
}

impl Default for DetectCfg {
    fn default() -> Self {
        Self {
            eps_slope: SLOPE_EPS,
        }
    }
}

impl DetectCfg {
    pub fn validate(&self) -> Result<(), CollinearError> {
        if !self.eps_slope.is_finite() {
            return Err(CollinearError::invalid_config("eps_slope must be finite"));
        }
        if self.eps_slope < 0.0 {
            return Err(CollinearError::invalid_config("eps_slope must be >= 0"));
        }
        Ok(())
    }
}
