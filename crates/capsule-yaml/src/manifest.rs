//! Switch manifests.
//!
//! A manifest declares switches in density-independent units plus an
//! optional pointer script per switch. [`Manifest::switch_config`] converts
//! a declaration into a pixel-space [`SwitchConfig`].

use crate::error::ParseError;
use capsule_core::{Color, Easing, LayoutDirection, Padding, PointerEvent};
use capsule_switch::SwitchConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Root of a switch manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Pixels per dp
    #[serde(default = "default_density")]
    pub density: f32,
    /// Declared switches
    #[serde(default)]
    pub switches: Vec<SwitchSpec>,
}

const fn default_density() -> f32 {
    1.0
}

/// Shadow overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadowSpec {
    /// Whether the shadow is drawn
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Shadow color as a hex string
    #[serde(default)]
    pub color: Option<String>,
    /// Blur radius in dp
    #[serde(default)]
    pub radius: Option<f32>,
}

/// One switch declaration. Lengths are in dp; omitted fields keep the
/// switch defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchSpec {
    /// Unique id
    pub id: String,
    /// Track width
    #[serde(default)]
    pub width: Option<f32>,
    /// Track height
    #[serde(default)]
    pub height: Option<f32>,
    /// Slider radius
    #[serde(default)]
    pub slider_radius: Option<f32>,
    /// Slider color
    #[serde(default)]
    pub slider_color: Option<String>,
    /// Track color when checked
    #[serde(default)]
    pub track_on_color: Option<String>,
    /// Track color when unchecked
    #[serde(default)]
    pub track_off_color: Option<String>,
    /// Transition duration in milliseconds
    #[serde(default)]
    pub duration_ms: Option<u64>,
    /// Transition curve
    #[serde(default)]
    pub easing: Option<Easing>,
    /// Layout direction
    #[serde(default)]
    pub direction: Option<LayoutDirection>,
    /// Initial state
    #[serde(default)]
    pub checked: Option<bool>,
    /// Whether pointer input is handled
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Longest press counted as a tap, in milliseconds
    #[serde(default)]
    pub tap_timeout_ms: Option<u64>,
    /// Uniform padding
    #[serde(default)]
    pub padding: Option<f32>,
    /// Shadow overrides
    #[serde(default)]
    pub shadow: Option<ShadowSpec>,
    /// Pointer script replayed by the CLI and test harness
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

/// Press coordinates and time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PressStep {
    /// X in dp
    pub x: f32,
    /// Y in dp
    pub y: f32,
    /// Event time in milliseconds
    #[serde(default)]
    pub at: u64,
}

/// Move coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveStep {
    /// X in dp
    pub x: f32,
    /// Y in dp
    pub y: f32,
}

/// Release time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseStep {
    /// Event time in milliseconds
    #[serde(default)]
    pub at: u64,
}

/// One step of a pointer script.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    /// Pointer down
    Press(PressStep),
    /// Pointer move
    Move(MoveStep),
    /// Pointer up
    Release(ReleaseStep),
    /// Host cancels the gesture
    Cancel,
    /// Let the given number of milliseconds of frames elapse
    Advance(f64),
}

impl ScriptStep {
    /// Pointer event for this step with dp coordinates scaled by `density`.
    ///
    /// `Advance` has no event.
    #[must_use]
    pub fn to_event(&self, density: f32) -> Option<PointerEvent> {
        match *self {
            Self::Press(p) => Some(PointerEvent::press(p.x * density, p.y * density, p.at)),
            Self::Move(m) => Some(PointerEvent::moved(m.x * density, m.y * density)),
            Self::Release(r) => Some(PointerEvent::release(r.at)),
            Self::Cancel => Some(PointerEvent::Cancel),
            Self::Advance(_) => None,
        }
    }
}

fn parse_color(id: &str, field: &str, value: Option<&String>) -> Result<Option<Color>, ParseError> {
    value
        .map(|hex| {
            Color::from_hex(hex).map_err(|source| ParseError::Color {
                field: format!("{id}.{field}"),
                source,
            })
        })
        .transpose()
}

impl SwitchSpec {
    /// Create a declaration with only an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Pixel-space configuration at `density`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Color`] for a malformed color and
    /// [`ParseError::InvalidValue`] for a non-finite length.
    pub fn to_config(&self, density: f32) -> Result<SwitchConfig, ParseError> {
        let mut config = SwitchConfig::for_density(density);
        let px = |field: &str, dp: Option<f32>| -> Result<Option<f32>, ParseError> {
            match dp {
                Some(v) if !v.is_finite() => Err(ParseError::invalid(
                    format!("{}.{field}", self.id),
                    "must be a finite number",
                )),
                other => Ok(other.map(|v| v * density)),
            }
        };

        if let Some(width) = px("width", self.width)? {
            config.switch_width = width;
        }
        config.switch_height = px("height", self.height)?;
        config.slider_radius = px("slider_radius", self.slider_radius)?;
        if let Some(padding) = px("padding", self.padding)? {
            config.padding = Padding::uniform(padding);
        }

        if let Some(c) = parse_color(&self.id, "slider_color", self.slider_color.as_ref())? {
            config.slider_color = c;
        }
        if let Some(c) = parse_color(&self.id, "track_on_color", self.track_on_color.as_ref())? {
            config.track_on_color = c;
        }
        if let Some(c) = parse_color(&self.id, "track_off_color", self.track_off_color.as_ref())? {
            config.track_off_color = c;
        }

        if let Some(shadow) = &self.shadow {
            if let Some(enabled) = shadow.enabled {
                config.shadow.enabled = enabled;
            }
            if let Some(c) = parse_color(&self.id, "shadow.color", shadow.color.as_ref())? {
                config.shadow.color = c;
            }
            if let Some(radius) = px("shadow.radius", shadow.radius)? {
                config.shadow.radius = radius;
            }
        }

        config.duration_ms = self.duration_ms.unwrap_or(config.duration_ms);
        config.easing = self.easing.unwrap_or(config.easing);
        config.layout_direction = self.direction.unwrap_or(config.layout_direction);
        config.checked = self.checked.unwrap_or(config.checked);
        config.enabled = self.enabled.unwrap_or(config.enabled);
        config.tap_timeout_ms = self.tap_timeout_ms.unwrap_or(config.tap_timeout_ms);
        Ok(config)
    }
}

impl Manifest {
    /// Parse and validate a manifest from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the manifest is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse and validate a manifest from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the manifest is invalid.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read a manifest file. `.json` files are parsed as JSON, anything else
    /// as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("loaded manifest {} ({} bytes)", path.display(), text.len());
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text),
            _ => Self::from_yaml(&text),
        }
    }

    /// Serialize the manifest to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check density, ids and every switch's values.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ParseError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ParseError::invalid(
                "density",
                format!("must be a positive number, got {}", self.density),
            ));
        }

        let mut seen = HashSet::new();
        for spec in &self.switches {
            if spec.id.trim().is_empty() {
                return Err(ParseError::invalid("id", "must not be empty"));
            }
            if !seen.insert(spec.id.as_str()) {
                return Err(ParseError::DuplicateId(spec.id.clone()));
            }
            for step in &spec.script {
                if let ScriptStep::Advance(ms) = step {
                    if !ms.is_finite() || *ms < 0.0 {
                        return Err(ParseError::invalid(
                            format!("{}.script", spec.id),
                            format!("advance must be a non-negative number, got {ms}"),
                        ));
                    }
                }
            }
            spec.to_config(self.density)?;
        }
        Ok(())
    }

    /// Declaration with the given id.
    #[must_use]
    pub fn switch(&self, id: &str) -> Option<&SwitchSpec> {
        self.switches.iter().find(|s| s.id == id)
    }

    /// Pixel-space configuration of the switch with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownSwitch`] if no switch has that id.
    pub fn switch_config(&self, id: &str) -> Result<SwitchConfig, ParseError> {
        self.switch(id)
            .ok_or_else(|| ParseError::UnknownSwitch(id.to_string()))?
            .to_config(self.density)
    }

    /// Switch ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.switches.iter().map(|s| s.id.as_str())
    }
}
