//! Simulated-clock harness for driving a switch.

use crate::recorder::{ListenerCall, RecordingListener};
use capsule_core::{Constraints, FrameClock, PointerEvent, Rect};
use capsule_switch::{CapsuleSwitch, SwitchChanged, SwitchConfig};
use capsule_yaml::{Manifest, ParseError, ScriptStep};

/// Frames stepped by [`Harness::run_to_idle`] before giving up.
const MAX_IDLE_FRAMES: usize = 10_000;

/// Test harness owning one switch, a recording listener and a clock.
///
/// Pointer events are stamped with the harness clock. Holding the pointer
/// ([`Harness::hold`]) keeps frames running, as a real frame loop would.
pub struct Harness {
    switch: CapsuleSwitch,
    listener: RecordingListener,
    clock: FrameClock,
    changes: Vec<SwitchChanged>,
}

impl Harness {
    /// Create a harness with the switch attached and laid out at its
    /// measured size, at the origin.
    #[must_use]
    pub fn new(config: SwitchConfig) -> Self {
        let mut harness = Self::detached(config);
        harness.switch.attach();
        let size = harness.switch.measure(Constraints::unbounded());
        harness.switch.layout(Rect::from_size(size));
        harness
    }

    /// Create a harness whose switch is neither attached nor laid out.
    #[must_use]
    pub fn detached(config: SwitchConfig) -> Self {
        let listener = RecordingListener::new();
        let switch = CapsuleSwitch::new(config).with_listener(listener.clone());
        Self {
            switch,
            listener,
            clock: FrameClock::default(),
            changes: Vec::new(),
        }
    }

    /// Create a harness for a manifest switch.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest has no switch with that id.
    pub fn from_manifest(manifest: &Manifest, id: &str) -> Result<Self, ParseError> {
        Ok(Self::new(manifest.switch_config(id)?))
    }

    /// Set the frame interval. The clock restarts at zero.
    #[must_use]
    pub fn frame_ms(mut self, frame_ms: f64) -> Self {
        self.clock = FrameClock::new(frame_ms);
        self
    }

    // === Accessors ===

    /// The switch under test.
    #[must_use]
    pub const fn switch(&self) -> &CapsuleSwitch {
        &self.switch
    }

    /// Mutable access to the switch under test.
    pub fn switch_mut(&mut self) -> &mut CapsuleSwitch {
        &mut self.switch
    }

    /// The recording listener.
    #[must_use]
    pub const fn listener(&self) -> &RecordingListener {
        &self.listener
    }

    /// Simulated time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms() as u64
    }

    /// Frames stepped so far.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.clock.frames()
    }

    /// Completed changes in order.
    #[must_use]
    pub fn changes(&self) -> &[SwitchChanged] {
        &self.changes
    }

    // === Pointer Simulation ===

    /// Deliver a raw pointer event.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        self.switch.dispatch(&event)
    }

    /// Press at `(x, y)` at the current time.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        let now = self.now_ms();
        self.switch.on_press_start(x, y, now)
    }

    /// Press on the slider center.
    pub fn press_slider(&mut self) -> bool {
        let center = self.switch.slider_center();
        self.press(center.x, center.y)
    }

    /// Move to `x` at the slider's y.
    pub fn move_to(&mut self, x: f32) -> bool {
        let y = self.switch.geometry().slider_center_y;
        self.switch.on_move(x, y)
    }

    /// Release at the current time.
    pub fn release(&mut self) -> bool {
        let now = self.now_ms();
        self.switch.on_release(now)
    }

    /// Cancel the gesture.
    pub fn cancel(&mut self) -> bool {
        self.switch.on_cancel()
    }

    /// Press and release on the slider without letting time pass.
    pub fn tap(&mut self) -> &mut Self {
        self.press_slider();
        self.release();
        self
    }

    /// Press on the slider, drag to `x` and release past the tap timeout.
    pub fn drag_to(&mut self, x: f32) -> &mut Self {
        self.press_slider();
        let start = self.switch.slider_x();
        self.move_to(start);
        self.move_to(x);
        let timeout = self.switch.config().tap_timeout_ms as f64;
        self.hold(timeout + self.clock.frame_ms());
        self.release();
        self
    }

    /// Let `ms` milliseconds pass with the pointer state unchanged.
    pub fn hold(&mut self, ms: f64) -> &mut Self {
        self.run_for(ms)
    }

    // === Time ===

    /// Step one frame.
    pub fn step(&mut self) -> Option<SwitchChanged> {
        let dt = self.clock.frame_ms();
        self.tick(dt)
    }

    fn tick(&mut self, dt: f64) -> Option<SwitchChanged> {
        self.clock.tick_by(dt);
        let change = self.switch.advance(dt);
        if let Some(change) = change {
            self.changes.push(change);
        }
        change
    }

    /// Step frames until `ms` milliseconds have passed. The last frame is
    /// shortened to land exactly.
    pub fn run_for(&mut self, ms: f64) -> &mut Self {
        for dt in self.clock.split(ms) {
            self.tick(dt);
        }
        self
    }

    /// Step frames until no transition is in flight. Returns the number of
    /// frames stepped.
    ///
    /// # Panics
    ///
    /// Panics if the transition never finishes.
    pub fn run_to_idle(&mut self) -> usize {
        let start = self.clock.frames();
        while self.switch.is_animating() {
            assert!(
                self.clock.frames() - start < MAX_IDLE_FRAMES,
                "Transition still running after {MAX_IDLE_FRAMES} frames"
            );
            self.step();
        }
        self.clock.frames() - start
    }

    /// Replay a manifest script with coordinates scaled by `density`.
    pub fn play(&mut self, script: &[ScriptStep], density: f32) -> &mut Self {
        for step in script {
            match step {
                ScriptStep::Advance(ms) => {
                    self.run_for(*ms);
                }
                other => {
                    if let Some(event) = other.to_event(density) {
                        let handled = self.switch.dispatch(&event);
                        log::trace!("script {event:?} handled={handled}");
                    }
                }
            }
        }
        self
    }

    // === Assertions ===

    /// Assert the checked state.
    ///
    /// # Panics
    ///
    /// Panics if the state does not match.
    pub fn assert_checked(&self, expected: bool) -> &Self {
        assert_eq!(
            self.switch.is_checked(),
            expected,
            "Expected switch checked={expected}"
        );
        self
    }

    /// Assert the switch rests exactly on the endpoint of its state.
    ///
    /// # Panics
    ///
    /// Panics if a transition is running or the slider or track color is
    /// off the endpoint.
    pub fn assert_at_rest(&self) -> &Self {
        assert!(!self.switch.is_animating(), "Expected no transition in flight");
        let checked = self.switch.is_checked();
        let geometry = self.switch.geometry();
        let config = self.switch.config();
        let (x, color) = if checked {
            (geometry.slider_end_x, config.track_on_color)
        } else {
            (geometry.slider_start_x, config.track_off_color)
        };
        assert_eq!(
            self.switch.slider_x(),
            x,
            "Expected slider at rest position {x}"
        );
        assert_eq!(
            self.switch.track_color(),
            color,
            "Expected track color {color}"
        );
        self
    }

    /// Assert the exact listener calls so far.
    ///
    /// # Panics
    ///
    /// Panics if the calls differ.
    pub fn assert_notified(&self, expected: &[ListenerCall]) -> &Self {
        let actual = self.listener.calls();
        assert_eq!(actual, expected, "Unexpected listener calls");
        self
    }

    /// Assert that no listener call has happened.
    ///
    /// # Panics
    ///
    /// Panics if any call was recorded.
    pub fn assert_silent(&self) -> &Self {
        self.assert_notified(&[])
    }
}
