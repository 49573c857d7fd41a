//! YAML and JSON manifests for Capsule switches.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{Manifest, MoveStep, PressStep, ReleaseStep, ScriptStep, ShadowSpec, SwitchSpec};
