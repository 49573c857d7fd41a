#![allow(clippy::missing_panics_doc)]
//! Test harness for Capsule switches.
//!
//! [`Harness`] owns a switch, steps a simulated frame clock and records
//! listener calls so scenario tests read as a sequence of gestures and
//! assertions.

mod harness;
mod recorder;

pub use capsule_core::DEFAULT_FRAME_MS;
pub use harness::Harness;
pub use recorder::{ListenerCall, RecordingListener};
