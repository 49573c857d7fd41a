//! The capsule toggle switch control.
//!
//! [`CapsuleSwitch`] owns the toggle state, the geometry and the gesture and
//! transition machinery. The host delivers pointer events, frame ticks and
//! layout; the switch answers with render state and change notifications.

use crate::config::SwitchConfig;
use crate::geometry::{GeometryModel, GeometrySnapshot};
use crate::gesture::{GestureOutcome, GestureStateMachine, TouchPhase};
use crate::layout;
use crate::listener::{self, SwitchChanged, SwitchListener};
use crate::transition::{Tick, TransitionAnimator, TransitionFrame};
use capsule_core::{
    Canvas, Color, Constraints, Easing, LayoutDirection, Padding, Point, PointerEvent, Rect,
    Shadow, Size,
};
use serde::{Deserialize, Serialize};

/// Everything the host needs to draw the switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    /// Track bounds
    pub track: Rect,
    /// Track corner radius
    pub corner_radius: f32,
    /// Track fill
    pub track_color: Color,
    /// Slider center
    pub slider_center: Point,
    /// Slider radius
    pub slider_radius: f32,
    /// Slider fill
    pub slider_color: Color,
    /// Slider shadow, if enabled
    pub shadow: Option<Shadow>,
    /// Checked state
    pub checked: bool,
}

/// Binary toggle with a capsule track and a circular slider.
pub struct CapsuleSwitch {
    config: SwitchConfig,
    model: GeometryModel,
    geometry: GeometrySnapshot,
    bounds: Option<Rect>,
    checked: bool,
    slider_x: f32,
    track_color: Color,
    gesture: GestureStateMachine,
    animator: TransitionAnimator,
    attached: bool,
    redraw: bool,
    listener: Option<Box<dyn SwitchListener>>,
}

impl Default for CapsuleSwitch {
    fn default() -> Self {
        Self::new(SwitchConfig::default())
    }
}

impl std::fmt::Debug for CapsuleSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapsuleSwitch")
            .field("checked", &self.checked)
            .field("slider_x", &self.slider_x)
            .field("track_color", &self.track_color)
            .field("phase", &self.gesture.phase())
            .field("animating", &self.animator.is_running())
            .field("attached", &self.attached)
            .field("laid_out", &self.bounds.is_some())
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl CapsuleSwitch {
    /// Create a new switch from `config`.
    #[must_use]
    pub fn new(config: SwitchConfig) -> Self {
        let model = GeometryModel::from_config(&config);
        let geometry = model.snapshot(Point::ORIGIN, config.layout_direction);
        let checked = config.checked;
        let mut switch = Self {
            gesture: GestureStateMachine::new(config.tap_timeout_ms),
            animator: TransitionAnimator::new(config.easing),
            model,
            geometry,
            bounds: None,
            checked,
            slider_x: 0.0,
            track_color: config.track_off_color,
            attached: false,
            redraw: false,
            listener: None,
            config,
        };
        switch.snap();
        switch
    }

    /// Set the change listener.
    #[must_use]
    pub fn with_listener(mut self, listener: impl SwitchListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    /// Set the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl SwitchListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the change listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Whether the switch is checked.
    ///
    /// During a transition this is still the state the transition started
    /// from.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether pointer input is handled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enable or disable pointer handling. Disabling drops any gesture in
    /// progress; a drag settles back to the current state.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if enabled {
            return;
        }
        let dragging = self.gesture.phase() == TouchPhase::Dragging;
        self.gesture.reset();
        if dragging {
            self.set_checked(self.checked);
        }
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Checked state the transition in flight is heading for.
    #[must_use]
    pub fn pending_target(&self) -> Option<bool> {
        self.animator.target()
    }

    /// Current gesture phase.
    #[must_use]
    pub const fn touch_phase(&self) -> TouchPhase {
        self.gesture.phase()
    }

    /// Drag anchor x while dragging.
    #[must_use]
    pub const fn drag_anchor_x(&self) -> Option<f32> {
        self.gesture.anchor_x()
    }

    /// Whether the host attached the switch to a window.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the switch has been laid out at least once.
    #[must_use]
    pub const fn is_laid_out(&self) -> bool {
        self.bounds.is_some()
    }

    /// Current configuration, including changes made through setters.
    #[must_use]
    pub const fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Set the checked state.
    ///
    /// Once attached and laid out, this starts a transition from the current
    /// visual state, replacing any transition in flight. Repeating the current
    /// state still animates. Before that, the state jumps immediately with no
    /// notification.
    pub fn set_checked(&mut self, checked: bool) {
        if self.attached && self.bounds.is_some() {
            self.animate_to(checked);
        } else {
            self.jump_to(checked);
        }
    }

    /// Flip the checked state through [`Self::set_checked`].
    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    fn animate_to(&mut self, target: bool) {
        let from = TransitionFrame::new(self.slider_x, self.track_color);
        let to = TransitionFrame::new(self.geometry.slider_x(target), self.endpoint_color(target));
        if self.animator.start(from, to, target, self.config.duration_ms) {
            log::debug!("switch transition restarted toward {target}");
        }
        self.redraw = true;
    }

    fn jump_to(&mut self, target: bool) {
        self.animator.cancel();
        self.checked = target;
        self.snap();
        log::debug!("switch set to {target} without animation");
    }

    const fn endpoint_color(&self, checked: bool) -> Color {
        if checked {
            self.config.track_on_color
        } else {
            self.config.track_off_color
        }
    }

    /// Neither animating nor dragging.
    fn is_settled(&self) -> bool {
        !self.animator.is_running() && self.gesture.phase() != TouchPhase::Dragging
    }

    fn snap(&mut self) {
        self.slider_x = self.geometry.slider_x(self.checked);
        self.track_color = self.endpoint_color(self.checked);
        self.redraw = true;
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Advance the transition in flight by `dt_ms` milliseconds.
    ///
    /// Returns the change when the transition completes on this tick; the
    /// listener has been notified by then.
    pub fn advance(&mut self, dt_ms: f64) -> Option<SwitchChanged> {
        match self.animator.advance(dt_ms) {
            Tick::Idle => None,
            Tick::Running(frame) => {
                self.apply_frame(frame);
                None
            }
            Tick::Completed { checked, .. } => {
                // Land on the current endpoint; colors or geometry may have
                // changed since the transition started.
                let change = SwitchChanged::new(self.checked, checked);
                self.checked = checked;
                self.snap();
                log::debug!("switch changed {} -> {}", change.from, change.to);
                if let Some(listener) = self.listener.as_deref_mut() {
                    listener::notify(listener, checked);
                }
                Some(change)
            }
        }
    }

    fn apply_frame(&mut self, frame: TransitionFrame) {
        self.slider_x = frame.slider_x;
        self.track_color = frame.track_color;
        self.redraw = true;
    }

    /// Whether the host should repaint. Clears the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Whether a repaint has been requested since the last [`Self::take_redraw`].
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.redraw
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Route a host pointer event. Returns whether it was handled.
    pub fn dispatch(&mut self, event: &PointerEvent) -> bool {
        match *event {
            PointerEvent::Press {
                position,
                timestamp_ms,
            } => self.on_press_start(position.x, position.y, timestamp_ms),
            PointerEvent::Move { position } => self.on_move(position.x, position.y),
            PointerEvent::Release { timestamp_ms } => self.on_release(timestamp_ms),
            PointerEvent::Cancel => self.on_cancel(),
        }
    }

    /// Pointer went down. Handled only when it lands on the track shape.
    pub fn on_press_start(&mut self, x: f32, y: f32, timestamp_ms: u64) -> bool {
        if !self.config.enabled {
            return false;
        }
        let outcome = self
            .gesture
            .press(Point::new(x, y), timestamp_ms, &self.geometry);
        self.apply_gesture(outcome)
    }

    /// Pointer moved.
    pub fn on_move(&mut self, x: f32, y: f32) -> bool {
        if !self.config.enabled {
            return false;
        }
        let outcome = self.gesture.move_to(Point::new(x, y), &self.geometry);
        self.apply_gesture(outcome)
    }

    /// Pointer went up.
    pub fn on_release(&mut self, timestamp_ms: u64) -> bool {
        if !self.config.enabled {
            return false;
        }
        let outcome = self
            .gesture
            .release(timestamp_ms, self.slider_x, &self.geometry);
        self.apply_gesture(outcome)
    }

    /// The host cancelled the gesture.
    pub fn on_cancel(&mut self) -> bool {
        if !self.config.enabled {
            return false;
        }
        let outcome = self.gesture.cancel();
        self.apply_gesture(outcome)
    }

    fn apply_gesture(&mut self, outcome: GestureOutcome) -> bool {
        match outcome {
            GestureOutcome::Unhandled => false,
            GestureOutcome::Handled => true,
            GestureOutcome::DragStarted => {
                self.animator.cancel();
                true
            }
            GestureOutcome::Drag {
                slider_x,
                color_ratio,
            } => {
                self.slider_x = slider_x;
                self.track_color = self
                    .config
                    .track_off_color
                    .lerp(&self.config.track_on_color, color_ratio);
                self.redraw = true;
                true
            }
            GestureOutcome::Toggle => {
                self.toggle();
                true
            }
            GestureOutcome::Settle(target) => {
                self.set_checked(target);
                true
            }
            GestureOutcome::Abandoned => {
                self.set_checked(self.checked);
                true
            }
        }
    }

    // =========================================================================
    // Host lifecycle and layout
    // =========================================================================

    /// The host attached the switch to a window.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// The host detached the switch from its window.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Preferred size under `constraints`.
    #[must_use]
    pub fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(layout::desired_size(
            &self.model,
            &self.config.shadow,
            self.config.padding,
        ))
    }

    /// Place the switch in `bounds`.
    ///
    /// Pointer events are expected in the coordinate space of `bounds`.
    pub fn layout(&mut self, bounds: Rect) -> Size {
        self.bounds = Some(bounds);
        self.refresh_geometry();
        bounds.size()
    }

    fn refresh_geometry(&mut self) {
        let origin = self.bounds.map_or(Point::ORIGIN, |bounds| {
            layout::track_origin(
                bounds,
                &self.model,
                &self.config.shadow,
                self.config.padding,
                self.config.layout_direction,
            )
        });
        self.geometry = self.model.snapshot(origin, self.config.layout_direction);
        if self.is_settled() {
            self.snap();
        }
        self.redraw = true;
    }

    // =========================================================================
    // Render state
    // =========================================================================

    /// Current geometry.
    #[must_use]
    pub const fn geometry(&self) -> &GeometrySnapshot {
        &self.geometry
    }

    /// Track bounds.
    #[must_use]
    pub const fn track_rect(&self) -> Rect {
        self.geometry.track
    }

    /// Track corner radius.
    #[must_use]
    pub const fn corner_radius(&self) -> f32 {
        self.geometry.corner_radius
    }

    /// Slider center x.
    #[must_use]
    pub const fn slider_x(&self) -> f32 {
        self.slider_x
    }

    /// Slider center.
    #[must_use]
    pub const fn slider_center(&self) -> Point {
        self.geometry.slider_center(self.slider_x)
    }

    /// Slider radius.
    #[must_use]
    pub const fn slider_radius(&self) -> f32 {
        self.geometry.slider_radius
    }

    /// Current track fill.
    #[must_use]
    pub const fn track_color(&self) -> Color {
        self.track_color
    }

    /// Slider fill.
    #[must_use]
    pub const fn slider_color(&self) -> Color {
        self.config.slider_color
    }

    /// Slider shadow, if enabled.
    #[must_use]
    pub const fn shadow(&self) -> Option<Shadow> {
        if self.config.shadow.enabled {
            Some(Shadow::centered(
                self.config.shadow.color,
                self.config.shadow.radius,
            ))
        } else {
            None
        }
    }

    /// Snapshot of every render-relevant value.
    #[must_use]
    pub const fn render_state(&self) -> RenderState {
        RenderState {
            track: self.track_rect(),
            corner_radius: self.corner_radius(),
            track_color: self.track_color,
            slider_center: self.slider_center(),
            slider_radius: self.slider_radius(),
            slider_color: self.config.slider_color,
            shadow: self.shadow(),
            checked: self.checked,
        }
    }

    /// Draw the track, then the slider.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rounded_rect(self.track_rect(), self.corner_radius(), self.track_color);
        canvas.fill_circle(
            self.slider_center(),
            self.slider_radius(),
            self.config.slider_color,
            self.shadow(),
        );
    }

    // =========================================================================
    // Configuration setters
    // =========================================================================

    /// Set the track fill used when checked.
    pub fn set_track_on_color(&mut self, color: Color) {
        self.config.track_on_color = color;
        self.refresh_colors();
    }

    /// Set the track fill used when unchecked.
    pub fn set_track_off_color(&mut self, color: Color) {
        self.config.track_off_color = color;
        self.refresh_colors();
    }

    fn refresh_colors(&mut self) {
        if self.is_settled() {
            self.track_color = self.endpoint_color(self.checked);
        }
        self.redraw = true;
    }

    /// Set the slider fill.
    pub fn set_slider_color(&mut self, color: Color) {
        self.config.slider_color = color;
        self.redraw = true;
    }

    /// Set the transition duration. Applies to the next transition.
    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.config.duration_ms = duration_ms;
    }

    /// Set the transition curve. Applies to the next transition.
    pub fn set_easing(&mut self, easing: Easing) {
        self.config.easing = easing;
        self.animator.set_easing(easing);
    }

    /// Enable or disable the slider shadow.
    pub fn set_shadow_enabled(&mut self, enabled: bool) {
        self.config.shadow.enabled = enabled;
        self.refresh_geometry();
    }

    /// Set the slider shadow color.
    pub fn set_shadow_color(&mut self, color: Color) {
        self.config.shadow.color = color;
        self.redraw = true;
    }

    /// Set the slider shadow radius.
    pub fn set_shadow_radius(&mut self, radius: f32) {
        self.config.shadow.radius = if radius.is_finite() {
            radius.max(0.0)
        } else {
            0.0
        };
        self.refresh_geometry();
    }

    /// Set the track width.
    pub fn set_switch_width(&mut self, width: f32) {
        self.model.set_width(width);
        self.config.switch_width = self.model.width();
        self.config.switch_height = Some(self.model.height());
        self.config.slider_radius = Some(self.model.slider_radius());
        self.refresh_geometry();
    }

    /// Set the track height, clamped to the width.
    pub fn set_switch_height(&mut self, height: f32) {
        self.model.set_height(height);
        self.config.switch_height = Some(self.model.height());
        self.config.slider_radius = Some(self.model.slider_radius());
        self.refresh_geometry();
    }

    /// Set the slider radius, clamped to the track corner radius.
    pub fn set_slider_radius(&mut self, radius: f32) {
        self.model.set_slider_radius(radius);
        self.config.slider_radius = Some(self.model.slider_radius());
        self.refresh_geometry();
    }

    /// Set the layout direction.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.config.layout_direction = direction;
        self.refresh_geometry();
    }

    /// Set the padding around the track.
    pub fn set_padding(&mut self, padding: Padding) {
        self.config.padding = padding;
        self.refresh_geometry();
    }

    /// Set the longest press counted as a tap.
    pub fn set_tap_timeout_ms(&mut self, tap_timeout_ms: u64) {
        self.config.tap_timeout_ms = tap_timeout_ms;
        self.gesture.set_tap_timeout_ms(tap_timeout_ms);
    }

    /// Replace the whole configuration.
    ///
    /// Geometry is re-derived and the state jumps to `config.checked` without
    /// animating or notifying. Attachment, layout and the listener are kept.
    pub fn apply_config(&mut self, config: SwitchConfig) {
        self.animator.cancel();
        self.animator.set_easing(config.easing);
        self.gesture.reset();
        self.gesture.set_tap_timeout_ms(config.tap_timeout_ms);
        self.model = GeometryModel::from_config(&config);
        self.checked = config.checked;
        self.config = config;
        self.refresh_geometry();
    }
}
