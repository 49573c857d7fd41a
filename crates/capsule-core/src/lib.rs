//! Core types for the Capsule toggle switch.
//!
//! This crate provides foundational types used throughout Capsule:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Padding`]
//! - Packed ARGB [`Color`] with channel-wise interpolation
//! - Host pointer input: [`PointerEvent`]
//! - Easing curves and [`EasedValue`]
//! - A simulated [`FrameClock`] for headless hosts
//! - The paint contract: [`Canvas`] and [`RecordingCanvas`]

pub mod animation;
mod canvas;
mod clock;
mod color;
mod constraints;
mod event;
mod geometry;

pub use animation::{EasedValue, Easing, Interpolate};
pub use canvas::{Canvas, DrawCommand, RecordingCanvas, Shadow};
pub use clock::{FrameClock, FrameSteps, DEFAULT_FRAME_MS};
pub use color::{Color, ColorParseError};
pub use constraints::{Constraints, LayoutDirection};
pub use event::PointerEvent;
pub use geometry::{Padding, Point, Rect, Size};
