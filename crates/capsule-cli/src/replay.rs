//! Headless replay of switch scripts against a simulated frame clock.

use capsule_core::{Color, Constraints, FrameClock, PointerEvent, Rect};
use capsule_switch::{CapsuleSwitch, SwitchChanged, SwitchConfig};
use capsule_yaml::{Manifest, ParseError, ScriptStep};
use serde::Serialize;

/// Frames stepped while settling a script before giving up.
const MAX_SETTLE_FRAMES: usize = 10_000;

/// One line of replay output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    /// A pointer event was delivered
    Event {
        at_ms: f64,
        event: PointerEvent,
        handled: bool,
    },
    /// The switch asked for a repaint
    Frame {
        at_ms: f64,
        slider_x: f32,
        track_color: Color,
    },
    /// A transition completed
    Changed { at_ms: f64, change: SwitchChanged },
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Event {
                at_ms,
                event,
                handled,
            } => {
                let state = if *handled { "handled" } else { "ignored" };
                write!(f, "{at_ms:>8.1}ms  event    {event:?} ({state})")
            }
            Self::Frame {
                at_ms,
                slider_x,
                track_color,
            } => write!(f, "{at_ms:>8.1}ms  frame    slider_x={slider_x:.2} track={track_color}"),
            Self::Changed { at_ms, change } => {
                write!(f, "{at_ms:>8.1}ms  changed  {} -> {}", change.from, change.to)
            }
        }
    }
}

/// A laid-out switch driven by a fixed-interval frame clock.
pub struct Session {
    switch: CapsuleSwitch,
    clock: FrameClock,
    records: Vec<Record>,
}

impl Session {
    /// Attach and lay out a switch at its measured size.
    pub fn new(config: SwitchConfig, frame_ms: f64) -> Self {
        let mut switch = CapsuleSwitch::new(config);
        switch.attach();
        let size = switch.measure(Constraints::unbounded());
        switch.layout(Rect::from_size(size));
        switch.take_redraw();
        Self::with_switch(switch, frame_ms)
    }

    /// Drive a switch the caller already set up.
    pub fn with_switch(switch: CapsuleSwitch, frame_ms: f64) -> Self {
        Self {
            switch,
            clock: FrameClock::new(frame_ms),
            records: Vec::new(),
        }
    }

    pub const fn switch(&self) -> &CapsuleSwitch {
        &self.switch
    }

    pub fn switch_mut(&mut self) -> &mut CapsuleSwitch {
        &mut self.switch
    }

    pub const fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Records produced so far.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Take the records produced so far.
    pub fn drain(&mut self) -> Vec<Record> {
        std::mem::take(&mut self.records)
    }

    /// Deliver a pointer event.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        let handled = self.switch.dispatch(&event);
        self.records.push(Record::Event {
            at_ms: self.clock.now_ms(),
            event,
            handled,
        });
        self.capture_frame();
        handled
    }

    /// Step one frame.
    pub fn step(&mut self) -> Option<SwitchChanged> {
        self.step_by(self.clock.frame_ms())
    }

    fn step_by(&mut self, dt_ms: f64) -> Option<SwitchChanged> {
        self.clock.tick_by(dt_ms);
        let change = self.switch.advance(dt_ms);
        self.capture_frame();
        if let Some(change) = change {
            self.records.push(Record::Changed {
                at_ms: self.clock.now_ms(),
                change,
            });
        }
        change
    }

    /// Let `ms` milliseconds of frames elapse. The last frame is shortened
    /// to land exactly on the deadline.
    pub fn run_for(&mut self, ms: f64) {
        for dt in self.clock.split(ms) {
            self.step_by(dt);
        }
    }

    /// Step frames until no transition is in flight.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.switch.is_animating() && frames < MAX_SETTLE_FRAMES {
            self.step();
            frames += 1;
        }
        if self.switch.is_animating() {
            log::warn!("transition still running after {MAX_SETTLE_FRAMES} frames");
        }
        frames
    }

    /// Replay a script whose coordinates are in dp at `density`.
    pub fn play(&mut self, script: &[ScriptStep], density: f32) {
        for step in script {
            match step {
                ScriptStep::Advance(ms) => self.run_for(*ms),
                other => {
                    if let Some(event) = other.to_event(density) {
                        self.dispatch(event);
                    }
                }
            }
        }
    }

    fn capture_frame(&mut self) {
        if self.switch.take_redraw() {
            self.records.push(Record::Frame {
                at_ms: self.clock.now_ms(),
                slider_x: self.switch.slider_x(),
                track_color: self.switch.track_color(),
            });
        }
    }
}

/// Replay one manifest switch's script, then let any transition it left in
/// flight finish.
pub fn replay(manifest: &Manifest, id: &str, frame_ms: f64) -> Result<Session, ParseError> {
    let spec = manifest
        .switch(id)
        .ok_or_else(|| ParseError::UnknownSwitch(id.to_string()))?;
    let mut session = Session::new(spec.to_config(manifest.density)?, frame_ms);
    session.play(&spec.script, manifest.density);
    session.settle();
    log::debug!(
        "replayed {id}: {} records, checked={}",
        session.records().len(),
        session.switch().is_checked()
    );
    Ok(session)
}
