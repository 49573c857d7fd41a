//! Capsule: an animated binary toggle switch.
//!
//! The switch is a stadium track with a circular slider. A tap toggles it,
//! a drag settles on whichever end the slider is nearer, and every change
//! animates the slider and the track color together.
//!
//! ```
//! use capsule::{CapsuleSwitch, Constraints, Rect, SwitchConfig};
//!
//! let mut switch = CapsuleSwitch::new(SwitchConfig::default());
//! switch.attach();
//! let size = switch.measure(Constraints::unbounded());
//! switch.layout(Rect::from_size(size));
//!
//! let slider = switch.slider_center();
//! assert!(switch.on_press_start(slider.x, slider.y, 0));
//! assert!(switch.on_release(30));
//! while switch.is_animating() {
//!     switch.advance(16.0);
//! }
//! assert!(switch.is_checked());
//! ```

pub use capsule_core::*;
pub use capsule_switch as switch;
pub use capsule_switch::{
    CapsuleSwitch, GeometrySnapshot, RenderState, ShadowConfig, SwitchChanged, SwitchConfig,
    SwitchListener, TouchPhase,
};
pub use capsule_yaml as yaml;
pub use capsule_yaml::{Manifest, ParseError};
