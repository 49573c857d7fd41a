//! The sample screens, run headlessly.

use crate::replay::{Record, Session};
use capsule_core::{Color, Constraints, LayoutDirection, PointerEvent, Rect};
use capsule_switch::{CapsuleSwitch, SwitchConfig, SwitchListener};
use clap::ValueEnum;
use std::cell::RefCell;
use std::rc::Rc;

/// Which sample screen to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// Switch with a logging listener, tapped then dragged
    Basic,
    /// Right-to-left switch
    Rtl,
    /// Switch built in code and checked before it is attached
    Programmatic,
}

/// Listener that writes each callback into a shared transcript.
#[derive(Clone, Default)]
struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    fn push(&self, line: impl Into<String>) {
        self.lines.borrow_mut().push(line.into());
    }

    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

impl SwitchListener for Transcript {
    fn on_changed(&mut self, checked: bool) {
        self.push(format!("  listener: on_changed({checked})"));
    }

    fn on_switch_on(&mut self) {
        self.push("  listener: on_switch_on()");
    }

    fn on_switch_off(&mut self) {
        self.push("  listener: on_switch_off()");
    }
}

/// Run a screen and return its transcript.
pub fn run(screen: Screen, frame_ms: f64) -> Vec<String> {
    match screen {
        Screen::Basic => basic(frame_ms),
        Screen::Rtl => rtl(frame_ms),
        Screen::Programmatic => programmatic(frame_ms),
    }
}

fn with_transcript(config: SwitchConfig, frame_ms: f64) -> (Session, Transcript) {
    let transcript = Transcript::default();
    let mut session = Session::new(config, frame_ms);
    session.switch_mut().set_listener(transcript.clone());
    (session, transcript)
}

fn describe(switch: &CapsuleSwitch) -> String {
    let center = switch.slider_center();
    format!(
        "  state: checked={} slider=({:.1}, {:.1}) track={}",
        switch.is_checked(),
        center.x,
        center.y,
        switch.track_color()
    )
}

/// Run frames to rest, folding listener output in after the change record
/// that caused it.
fn settle(session: &mut Session, transcript: &Transcript, out: &mut Vec<String>) {
    session.settle();
    for record in session.drain() {
        if matches!(record, Record::Frame { .. }) {
            continue;
        }
        out.push(format!("  {record}"));
        if matches!(record, Record::Changed { .. }) {
            out.extend(transcript.take());
        }
    }
    out.push(describe(session.switch()));
}

fn basic(frame_ms: f64) -> Vec<String> {
    let config = SwitchConfig {
        track_on_color: Color::rgb(0x34, 0xc7, 0x59),
        ..SwitchConfig::default()
    };
    let (mut session, transcript) = with_transcript(config, frame_ms);
    let mut out = vec!["basic: tap, then drag back".to_string(), describe(session.switch())];

    let slider = session.switch().slider_center();
    let t = session.now_ms() as u64;
    session.dispatch(PointerEvent::press(slider.x, slider.y, t));
    session.dispatch(PointerEvent::release(t + 30));
    settle(&mut session, &transcript, &mut out);

    let geometry = *session.switch().geometry();
    let t = session.now_ms() as u64;
    session.dispatch(PointerEvent::press(geometry.slider_end_x, geometry.slider_center_y, t));
    session.dispatch(PointerEvent::moved(geometry.slider_end_x - 1.0, geometry.slider_center_y));
    session.dispatch(PointerEvent::moved(geometry.slider_start_x, geometry.slider_center_y));
    session.run_for(200.0);
    let t = session.now_ms() as u64;
    session.dispatch(PointerEvent::release(t));
    settle(&mut session, &transcript, &mut out);
    out
}

fn rtl(frame_ms: f64) -> Vec<String> {
    let config = SwitchConfig {
        layout_direction: LayoutDirection::RightToLeft,
        ..SwitchConfig::default()
    };
    let (mut session, transcript) = with_transcript(config, frame_ms);
    let geometry = *session.switch().geometry();
    let mut out = vec![
        "rtl: slider starts on the right".to_string(),
        format!(
            "  travel: start_x={:.1} end_x={:.1}",
            geometry.slider_start_x, geometry.slider_end_x
        ),
        describe(session.switch()),
    ];

    let slider = session.switch().slider_center();
    session.dispatch(PointerEvent::press(slider.x, slider.y, 0));
    session.dispatch(PointerEvent::release(20));
    settle(&mut session, &transcript, &mut out);
    out
}

fn programmatic(frame_ms: f64) -> Vec<String> {
    let transcript = Transcript::default();
    let mut switch = CapsuleSwitch::new(SwitchConfig::default()).with_listener(transcript.clone());
    let mut out = vec!["programmatic: checked before attach".to_string()];

    switch.set_checked(true);
    out.push(describe(&switch));
    out.push(format!(
        "  animating={} notifications={}",
        switch.is_animating(),
        transcript.lines.borrow().len()
    ));

    switch.attach();
    let size = switch.measure(Constraints::unbounded());
    switch.layout(Rect::from_size(size));
    switch.take_redraw();
    out.push(describe(&switch));

    let mut session = Session::with_switch(switch, frame_ms);
    session.switch_mut().set_checked(false);
    settle(&mut session, &transcript, &mut out);
    out
}
