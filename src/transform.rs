//! Center-rotation normalization matrices.
//!
//! Rotating pixel coordinates directly would spin the frame about its
//! origin. [`Normalization`] supplies the change of basis that makes a plain
//! rotation matrix act about the frame center instead: `to_centered` maps
//! pixel coordinates into a centered coordinate system shrunk by the
//! diagonal ratio, so no corner ever leaves the frame while it turns, and
//! `to_pixels` maps back. Both matrices depend only on the frame
//! dimensions, so a value is built once per loaded frame and reused for
//! every rendered frame of the animation.

use log::debug;

use crate::error::{Error, Result};
use crate::mat3::Mat3;

#[derive(Copy, Clone, Debug)]
pub struct Normalization {
    to_centered: Mat3,
    to_pixels: Mat3,
    scale: f64,
}

impl Normalization {
    /// Builds the matrix pair for a `width` x `height` frame.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let w = f64::from(width);
        let h = f64::from(height);
        let scale = w.min(h) / (w * w + h * h).sqrt();
        let to_centered = Mat3::translation(-1.0 / scale, -1.0 / scale)
            * Mat3::scaling(2.0 / (scale * w), 2.0 / (scale * h));
        let to_pixels = Mat3::scaling(w / 2.0, h / 2.0) * Mat3::translation(1.0, 1.0);
        debug!("normalization for {width}x{height}: scale {scale:.6}");
        Ok(Self {
            to_centered,
            to_pixels,
            scale,
        })
    }

    /// The diagonal-based shrink factor, in `(0, 1/sqrt(2)]`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn to_centered(&self) -> &Mat3 {
        &self.to_centered
    }

    pub fn to_pixels(&self) -> &Mat3 {
        &self.to_pixels
    }

    /// Destination-to-source matrix for one animation frame.
    ///
    /// The result maps destination pixel coordinates through centering,
    /// rotation by `angle` radians, and back to pixel space. Sampling
    /// through it spins the visible image by the opposite angle.
    pub fn compose(&self, angle: f64) -> Mat3 {
        self.to_pixels * (Mat3::rotation(angle) * self.to_centered)
    }
}
