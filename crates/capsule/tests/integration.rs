//! Integration tests for Capsule.

use capsule::{
    Color, Constraints, DrawCommand, Manifest, Rect, RecordingCanvas, RenderState, SwitchConfig,
};
use capsule_test::{Harness, ListenerCall};

const MANIFEST: &str = r##"
density: 2.0
switches:
  - id: wifi
    track_on_color: "#34c759"
    track_off_color: "#dddddd"
    shadow: { enabled: false }
    script:
      - press: { x: 12, y: 12, at: 0 }
      - move: { x: 12, y: 12 }
      - move: { x: 40, y: 12 }
      - release: { at: 400 }
      - advance: 300
"##;

#[test]
fn test_manifest_script_drags_switch_on() {
    let manifest = Manifest::from_yaml(MANIFEST).unwrap();
    let mut h = Harness::from_manifest(&manifest, "wifi").unwrap();
    // 48dp x 24dp at density 2
    assert_eq!(h.switch().track_rect(), Rect::new(0.0, 0.0, 96.0, 48.0));

    let script = manifest.switch("wifi").unwrap().script.clone();
    h.play(&script, manifest.density);

    h.assert_checked(true)
        .assert_at_rest()
        .assert_notified(&[ListenerCall::Changed(true), ListenerCall::SwitchOn]);
    assert_eq!(h.switch().track_color(), Color::rgb(0x34, 0xc7, 0x59));
}

#[test]
fn test_paint_follows_transition() {
    let mut h = Harness::new(SwitchConfig::default().shadow_enabled(false));
    h.tap();

    let mut xs = Vec::new();
    while h.switch().is_animating() {
        h.step();
        let mut canvas = RecordingCanvas::new();
        h.switch().paint(&mut canvas);
        match canvas.commands() {
            [DrawCommand::RoundedRect { .. }, DrawCommand::Circle { center, .. }] => xs.push(center.x),
            other => panic!("unexpected commands {other:?}"),
        }
    }

    assert!(xs.len() > 2);
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(xs.last().copied(), Some(h.switch().geometry().slider_end_x));
}

#[test]
fn test_measure_reserves_shadow_space() {
    let h = Harness::new(SwitchConfig::default());
    let size = h.switch().measure(Constraints::unbounded());
    assert_eq!(size.width, 56.0);
    assert_eq!(size.height, 32.0);
    let track = h.switch().track_rect();
    assert_eq!(track.left(), 4.0);
    assert_eq!(track.top(), 4.0);
}

#[test]
fn test_render_state_serializes() {
    let h = Harness::new(SwitchConfig::default());
    let json = serde_json::to_value(h.switch().render_state()).unwrap();
    assert_eq!(json["track_color"], "#888888");
    assert_eq!(json["slider_color"], "#ffffff");
    assert_eq!(json["checked"], false);
    assert_eq!(json["shadow"]["blur"], 4.0);

    let back: RenderState = serde_json::from_value(json).unwrap();
    assert_eq!(back, h.switch().render_state());
}
