//! Scenario tests driven through the harness.

use capsule_core::{Color, Easing, LayoutDirection};
use capsule_switch::{SwitchChanged, SwitchConfig, TouchPhase};
use capsule_test::{Harness, ListenerCall};
use proptest::prelude::*;

const OFF: Color = Color::rgb(0xe5, 0xe5, 0xea);
const ON: Color = Color::rgb(0x34, 0xc7, 0x59);

fn config() -> SwitchConfig {
    SwitchConfig::default()
        .size(48.0, 24.0)
        .track_colors(ON, OFF)
        .shadow_enabled(false)
}

// =============================================================================
// Tap
// =============================================================================

#[test]
fn test_tap_turns_on_and_notifies_once() {
    let mut h = Harness::new(config());
    assert_eq!(h.switch().slider_x(), h.switch().geometry().slider_start_x);
    assert_eq!(h.switch().track_color(), OFF);

    h.tap();
    assert!(h.switch().is_animating());
    h.run_to_idle();

    h.assert_checked(true)
        .assert_at_rest()
        .assert_notified(&[ListenerCall::Changed(true), ListenerCall::SwitchOn]);
    assert_eq!(h.listener().changed_count(), 1);
}

#[test]
fn test_two_taps_round_trip() {
    let mut h = Harness::new(config());
    h.tap();
    h.run_to_idle();
    h.tap();
    h.run_to_idle();
    h.assert_checked(false).assert_at_rest().assert_notified(&[
        ListenerCall::Changed(true),
        ListenerCall::SwitchOn,
        ListenerCall::Changed(false),
        ListenerCall::SwitchOff,
    ]);
}

#[test]
fn test_tap_during_transition_restarts_toward_same_target() {
    let mut h = Harness::new(config());
    h.tap();
    h.run_for(64.0);
    // Still unchecked until completion, so the second tap targets true again
    h.tap();
    h.run_to_idle();
    h.assert_checked(true)
        .assert_notified(&[ListenerCall::Changed(true), ListenerCall::SwitchOn]);
}

// =============================================================================
// Drag
// =============================================================================

#[test]
fn test_drag_past_midpoint_turns_on() {
    let mut h = Harness::new(config());
    let end = h.switch().geometry().slider_end_x;
    h.drag_to(30.0);
    let from_x = h.switch().slider_x();
    assert_eq!(from_x, 30.0);
    assert_eq!(h.switch().pending_target(), Some(true));

    h.run_to_idle();
    h.assert_checked(true).assert_at_rest();
    assert_eq!(h.switch().slider_x(), end);
    assert_eq!(h.changes(), [SwitchChanged::new(false, true)]);
}

#[test]
fn test_drag_back_before_release_stays_off() {
    let mut h = Harness::new(config());
    h.press_slider();
    h.move_to(12.0);
    h.move_to(34.0);
    h.move_to(16.0);
    h.hold(150.0);
    h.release();
    assert_eq!(h.switch().pending_target(), Some(false));
    h.run_to_idle();
    h.assert_checked(false)
        .assert_at_rest()
        .assert_notified(&[ListenerCall::Changed(false), ListenerCall::SwitchOff]);
}

#[test]
fn test_quick_drag_counts_as_tap() {
    let mut h = Harness::new(config());
    h.press_slider();
    h.move_to(12.0);
    h.move_to(14.0);
    h.release();
    assert_eq!(h.switch().pending_target(), Some(true));
}

#[test]
fn test_drag_color_tracks_anchor() {
    let mut h = Harness::new(config());
    h.press_slider();
    h.move_to(12.0);
    h.move_to(26.0);
    assert_eq!(h.switch().touch_phase(), TouchPhase::Dragging);
    assert_eq!(h.switch().track_color(), OFF.lerp(&ON, 0.5));
}

#[test]
fn test_rtl_drag_toward_left_turns_on() {
    let mut h = Harness::new(config().direction(LayoutDirection::RightToLeft));
    assert_eq!(h.switch().slider_x(), 36.0);
    h.drag_to(14.0);
    h.run_to_idle();
    h.assert_checked(true).assert_at_rest();
    assert_eq!(h.switch().slider_x(), 12.0);
}

#[test]
fn test_cancel_returns_to_current_state() {
    let mut h = Harness::new(config().checked(true));
    h.press_slider();
    h.move_to(36.0);
    h.move_to(14.0);
    assert!(h.cancel());
    h.run_to_idle();
    h.assert_checked(true)
        .assert_at_rest()
        .assert_notified(&[ListenerCall::Changed(true), ListenerCall::SwitchOn]);
}

// =============================================================================
// Programmatic
// =============================================================================

#[test]
fn test_set_checked_before_attach_is_silent() {
    let mut h = Harness::detached(config());
    h.switch_mut().set_checked(true);
    assert_eq!(h.run_to_idle(), 0);
    h.assert_checked(true).assert_at_rest().assert_silent();
}

#[test]
fn test_second_set_checked_wins() {
    let mut h = Harness::new(config());
    h.switch_mut().set_checked(true);
    h.run_for(100.0);
    h.switch_mut().set_checked(false);
    h.run_to_idle();
    h.assert_checked(false)
        .assert_at_rest()
        .assert_notified(&[ListenerCall::Changed(false), ListenerCall::SwitchOff]);
}

#[test]
fn test_disabled_ignores_press() {
    let mut h = Harness::new(config().enabled(false));
    let before = h.switch().render_state();
    assert!(!h.press_slider());
    assert!(!h.release());
    assert_eq!(h.switch().render_state(), before);
    h.assert_silent();
}

#[test]
fn test_detach_then_set_checked_jumps() {
    let mut h = Harness::new(config());
    h.switch_mut().detach();
    h.switch_mut().set_checked(true);
    h.assert_checked(true).assert_at_rest().assert_silent();
}

// =============================================================================
// Properties
// =============================================================================

fn easing_strategy() -> impl Strategy<Value = Easing> {
    prop_oneof![
        Just(Easing::Linear),
        Just(Easing::EaseIn),
        Just(Easing::EaseOut),
        Just(Easing::EaseInOut),
        Just(Easing::CubicInOut),
        Just(Easing::AccelerateDecelerate),
    ]
}

proptest! {
    #[test]
    fn prop_completed_transition_lands_exactly(
        target in any::<bool>(),
        start in any::<bool>(),
        duration in 0u64..1_000,
        frame in 1.0f64..50.0,
        easing in easing_strategy(),
    ) {
        let mut h = Harness::new(config().checked(start).duration_ms(duration).easing(easing))
            .frame_ms(frame);
        h.switch_mut().set_checked(target);
        h.run_to_idle();
        let g = *h.switch().geometry();
        prop_assert_eq!(h.switch().is_checked(), target);
        prop_assert_eq!(h.switch().slider_x(), g.slider_x(target));
        prop_assert_eq!(h.switch().track_color(), if target { ON } else { OFF });
        prop_assert_eq!(h.listener().changed_count(), 1);
    }

    #[test]
    fn prop_slider_stays_within_travel(
        moves in proptest::collection::vec(-50.0f32..100.0, 1..20),
        rtl in any::<bool>(),
    ) {
        let direction = if rtl { LayoutDirection::RightToLeft } else { LayoutDirection::LeftToRight };
        let mut h = Harness::new(config().direction(direction));
        h.press_slider();
        for x in moves {
            h.move_to(x);
            let g = h.switch().geometry();
            let x = h.switch().slider_x();
            prop_assert!(x >= g.slider_start_x.min(g.slider_end_x));
            prop_assert!(x <= g.slider_start_x.max(g.slider_end_x));
        }
    }

    #[test]
    fn prop_disabled_never_handles(x in -10.0f32..60.0, y in -10.0f32..40.0) {
        let mut h = Harness::new(config().enabled(false));
        prop_assert!(!h.press(x, y));
        prop_assert!(!h.move_to(x));
        prop_assert!(!h.release());
    }
}
