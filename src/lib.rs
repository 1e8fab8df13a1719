//! Animated center rotation for raw RGBA frames.
//!
//! # Pipeline
//!
//! 1. **Math kernel** ([`Vec2`], [`Vec3`], [`Mat3`]): small `f64` vector and
//!    matrix value types used in homogeneous form, so translation composes
//!    with rotation and scale through plain matrix products.
//! 2. **Normalization** ([`Normalization`]): a matrix pair that re-centers
//!    pixel coordinates and rescales them so the frame stays inside its own
//!    bounds at every rotation angle. Depends only on the frame dimensions,
//!    so it is built once per source frame and reused for the whole
//!    animation.
//! 3. **Spin operator** ([`OpSpinFrame`]): composes one destination-to-source
//!    matrix per rendered frame, then maps every destination pixel backwards
//!    through it and samples the source with nearest-neighbor lookup and edge
//!    clamping.
//!
//! The caller owns scheduling: it advances the angle between frames and hands
//! each produced [`Frame`] to whatever displays it.
//!
//! # Example
//!
//! ```
//! use rotoframe::{Frame, OpSpinFrame};
//!
//! let src = Frame::new(64, 48)?;
//! let mut spin = OpSpinFrame::for_frame(&src)?;
//!
//! // Render two steps of the animation.
//! let first = spin.apply(&src)?;
//! spin.advance(OpSpinFrame::DEFAULT_ANGLE_STEP);
//! let second = spin.apply(&src)?;
//!
//! assert_eq!(first.width(), second.width());
//! # Ok::<(), rotoframe::Error>(())
//! ```

#[doc(hidden)]
pub mod bench_utils;
mod error;
mod frame;
mod mat3;
mod op_spin_frame;
mod transform;
mod vec;

pub use crate::error::{Error, Result};
pub use crate::frame::{Frame, CHANNELS};
pub use crate::mat3::Mat3;
pub use crate::op_spin_frame::OpSpinFrame;
pub use crate::transform::Normalization;
pub use crate::vec::{Vec2, Vec3, UNIT_NORM_TOLERANCE};
