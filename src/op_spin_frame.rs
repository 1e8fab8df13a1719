//! Animated center rotation over RGBA frames.
//!
//! # Algorithm
//!
//! 1. **Per-frame transform**: the cached [`Normalization`] pair brackets a
//!    rotation by the current angle, yielding one destination-to-source
//!    matrix per rendered frame.
//! 2. **Inverse mapping**: every destination pixel is pushed through that
//!    matrix to find the source coordinate that lands on it. Mapping
//!    backwards guarantees every output pixel receives a value; scattering
//!    source pixels forward would leave holes.
//! 3. **Nearest-neighbor sampling**: the mapped coordinate is clamped to the
//!    frame bounds and rounded half-up, then the single closest source pixel
//!    is copied with alpha forced to opaque.
//!
//! The operator is the render session: it owns the angle and the cached
//! normalization matrices, and the frame driver advances it between calls.

use log::trace;

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::transform::Normalization;
use crate::vec::Vec3;

/// Center-rotation render session for frames of fixed dimensions.
///
/// A positive angle sweeps the visible image counter-clockwise in y-down
/// raster coordinates; the destination-to-source matrix itself rotates the
/// sampling lookup the opposite way.
#[derive(Copy, Clone, Debug)]
pub struct OpSpinFrame {
    angle: f64,
    width: u32,
    height: u32,
    norm: Normalization,
}

impl OpSpinFrame {
    /// Angle step per frame used by the reference animation driver, in
    /// radians.
    pub const DEFAULT_ANGLE_STEP: f64 = 0.2;

    /// Builds a session for frames of the given dimensions.
    ///
    /// The normalization matrices depend only on `width` and `height`, so
    /// they are computed here once and reused for every rendered frame.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let norm = Normalization::new(width, height)?;
        Ok(Self {
            angle: 0.0,
            width,
            height,
            norm,
        })
    }

    /// Builds a session sized to an existing source frame.
    pub fn for_frame(src: &Frame) -> Result<Self> {
        Self::new(src.width(), src.height())
    }

    /// Current rotation angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Sets the rotation angle in radians.
    ///
    /// No wrapping is applied; the trig functions are periodic, so the
    /// angle may grow without bound.
    pub fn set_angle(&mut self, radians: f64) -> &mut Self {
        self.angle = radians;
        self
    }

    /// Advances the angle by `step` radians. The frame driver calls this
    /// between rendered frames.
    pub fn advance(&mut self, step: f64) -> &mut Self {
        self.angle += step;
        self
    }

    /// Renders one animation frame into a freshly allocated destination.
    pub fn apply(&self, src: &Frame) -> Result<Frame> {
        let mut dst = Frame::new(self.width, self.height)?;
        self.apply_to_preallocated(src, &mut dst)?;
        Ok(dst)
    }

    /// Renders one animation frame into an existing destination buffer.
    ///
    /// Both frames must match the dimensions the session was built for.
    pub fn apply_to_preallocated(&self, src: &Frame, dst: &mut Frame) -> Result<()> {
        self.check_frame(src)?;
        self.check_frame(dst)?;

        let transform = self.norm.compose(self.angle);
        trace!(
            "rendering {}x{} at angle {:.3}",
            self.width,
            self.height,
            self.angle
        );

        let max_x = f64::from(self.width - 1);
        let max_y = f64::from(self.height - 1);
        for dest_y in 0..self.height {
            for dest_x in 0..self.width {
                let mapped =
                    transform * Vec3::new(f64::from(dest_x), f64::from(dest_y), 1.0);
                // The transform is affine (its bottom row is [0, 0, 1]), so
                // mapped.z is always 1 and never divided out.
                let src_x = round_half_up(mapped.x.clamp(0.0, max_x));
                let src_y = round_half_up(mapped.y.clamp(0.0, max_y));
                dst.put_opaque(dest_x, dest_y, src.sample(src_x, src_y));
            }
        }
        Ok(())
    }

    fn check_frame(&self, frame: &Frame) -> Result<()> {
        if frame.width() != self.width || frame.height() != self.height {
            return Err(Error::DimensionMismatch {
                width: self.width,
                height: self.height,
                got_width: frame.width(),
                got_height: frame.height(),
            });
        }
        Ok(())
    }
}

/// Rounds half-up (`floor(v + 0.5)`), the nearest-neighbor convention.
///
/// Callers clamp `v` to the valid index range first, so the result always
/// fits the frame.
fn round_half_up(v: f64) -> u32 {
    (v + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.49), 1);
        assert_eq!(round_half_up(2.5), 3);
    }

    #[test]
    fn test_angle_state() {
        let mut spin = OpSpinFrame::new(2, 2).unwrap();
        assert_eq!(spin.angle(), 0.0);
        spin.set_angle(1.0).advance(OpSpinFrame::DEFAULT_ANGLE_STEP);
        assert!((spin.angle() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            OpSpinFrame::new(0, 2),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_mismatched_frames() {
        let spin = OpSpinFrame::new(2, 2).unwrap();
        let src = Frame::new(3, 2).unwrap();
        assert_eq!(
            spin.apply(&src),
            Err(Error::DimensionMismatch {
                width: 2,
                height: 2,
                got_width: 3,
                got_height: 2,
            })
        );

        let good_src = Frame::new(2, 2).unwrap();
        let mut bad_dst = Frame::new(2, 3).unwrap();
        assert!(spin
            .apply_to_preallocated(&good_src, &mut bad_dst)
            .is_err());
    }

    #[test]
    fn test_quarter_turn_sweeps_below_center_to_the_right() {
        // A bright pixel one step below the center of a 4x4 frame must land
        // one destination step right of center after a +pi/2 turn: the
        // inverse mapping sends dest (3, 2) to source (2, 2 + sqrt(2)),
        // which rounds to the bright pixel at (2, 3).
        let mut src = Frame::new(4, 4).unwrap();
        src.put_opaque(2, 3, Vec3::new(255.0, 255.0, 255.0));

        let mut spin = OpSpinFrame::for_frame(&src).unwrap();
        spin.set_angle(FRAC_PI_2);
        let dst = spin.apply(&src).unwrap();

        assert_eq!(dst.pixel(3, 2), &[255, 255, 255, 255]);
        assert_eq!(&dst.pixel(1, 2)[..3], &[0, 0, 0]);
    }
}
