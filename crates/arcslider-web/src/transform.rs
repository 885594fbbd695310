//! Client (screen) to local coordinate conversion.

use kurbo::{Affine, Point};
use thiserror::Error;

/// Determinants smaller than this are treated as singular.
const MIN_DETERMINANT: f64 = 1e-12;

#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("Screen CTM is not invertible (determinant {0})")]
    Singular(f64),
    #[error("Screen CTM has non-finite coefficients")]
    NonFinite,
}

/// Maps client coordinates into the slider's local coordinates.
///
/// Built from the rendering surface's screen CTM, the matrix that maps
/// local coordinates to client coordinates (`svg.getScreenCTM()`), given in
/// `DOMMatrix` order `a b c d e f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    screen_to_local: Affine,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self {
            screen_to_local: Affine::IDENTITY,
        }
    }
}

impl ScreenTransform {
    /// Identity transform, for hosts that already deliver local coordinates.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build from the local-to-screen matrix `[a, b, c, d, e, f]`.
    pub fn from_screen_ctm(coeffs: [f64; 6]) -> Result<Self, TransformError> {
        if coeffs.iter().any(|c| !c.is_finite()) {
            return Err(TransformError::NonFinite);
        }
        let local_to_screen = Affine::new(coeffs);
        let determinant = local_to_screen.determinant();
        if determinant.abs() < MIN_DETERMINANT {
            return Err(TransformError::Singular(determinant));
        }
        Ok(Self {
            screen_to_local: local_to_screen.inverse(),
        })
    }

    /// Convert a client point to local coordinates.
    pub fn to_local(self, client: Point) -> Point {
        self.screen_to_local * client
    }
}
