//! Capsule toggle switch.
//!
//! A binary toggle drawn as a stadium track with a circular slider. Taps
//! toggle, drags pick the nearer end, and every state change animates the
//! slider and the track color together.
//!
//! The switch never owns a clock or a window: the host feeds it pointer
//! events, frame deltas and layout bounds, then reads back [`RenderState`].

pub mod config;
pub mod geometry;
pub mod gesture;
pub mod layout;
mod listener;
mod switch;
pub mod transition;

pub use config::{ShadowConfig, SwitchConfig};
pub use geometry::{constrain, GeometryModel, GeometrySnapshot};
pub use gesture::{GestureOutcome, GestureStateMachine, TouchPhase};
pub use hit_test::stadium_contains;
pub use listener::{SwitchChanged, SwitchListener};
pub use switch::{CapsuleSwitch, RenderState};
pub use transition::{Tick, TransitionAnimator, TransitionFrame};
