#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Buttons / keys
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Some(Button::Primary));
    assert_eq!(Button::from_dom(1), Some(Button::Middle));
    assert_eq!(Button::from_dom(2), Some(Button::Secondary));
    assert_eq!(Button::from_dom(3), None);
    assert_eq!(Button::from_dom(-1), None);
}

#[test]
fn key_letter_match_is_case_insensitive() {
    assert!(Key("z".into()).is_letter('z'));
    assert!(Key("Z".into()).is_letter('z'));
    assert!(!Key("zz".into()).is_letter('z'));
    assert!(!Key(String::new()).is_letter('z'));
}

#[test]
fn modifiers_platform_accepts_ctrl_or_meta() {
    assert!(!Modifiers::default().platform());
    assert!(Modifiers { ctrl: true, meta: false }.platform());
    assert!(Modifiers { ctrl: false, meta: true }.platform());
}

#[test]
fn shortcut_requires_platform_modifier() {
    let none = Modifiers::default();
    let ctrl = Modifiers { ctrl: true, ..Default::default() };
    let meta = Modifiers { meta: true, ..Default::default() };

    assert_eq!(Shortcut::from_key(&Key("z".into()), none), None);
    assert_eq!(Shortcut::from_key(&Key("z".into()), ctrl), Some(Shortcut::Undo));
    assert_eq!(Shortcut::from_key(&Key("Z".into()), meta), Some(Shortcut::Undo));
    assert_eq!(Shortcut::from_key(&Key("y".into()), ctrl), Some(Shortcut::Redo));
    assert_eq!(Shortcut::from_key(&Key("x".into()), ctrl), None);
}

// =============================================================
// InteractionState
// =============================================================

#[test]
fn default_state_is_idle() {
    assert_eq!(InteractionState::default(), InteractionState::Idle);
    assert!(InteractionState::Idle.is_idle());
}

#[test]
fn primary_press_draws() {
    let s = InteractionState::Idle.press(Button::Primary);
    assert_eq!(s, InteractionState::Drawing);
    assert!(s.is_drawing());
    assert!(!s.is_panning());
}

#[test]
fn secondary_press_pans() {
    let s = InteractionState::Idle.press(Button::Secondary);
    assert_eq!(s, InteractionState::Panning);
    assert!(s.is_panning());
    assert!(!s.is_drawing());
}

#[test]
fn both_buttons_draw_and_pan() {
    let a = InteractionState::Idle.press(Button::Primary).press(Button::Secondary);
    let b = InteractionState::Idle.press(Button::Secondary).press(Button::Primary);
    assert_eq!(a, InteractionState::DrawingAndPanning);
    assert_eq!(b, InteractionState::DrawingAndPanning);
    assert!(a.is_drawing() && a.is_panning());
}

#[test]
fn middle_press_changes_nothing() {
    for s in [
        InteractionState::Idle,
        InteractionState::Drawing,
        InteractionState::Panning,
        InteractionState::DrawingAndPanning,
    ] {
        assert_eq!(s.press(Button::Middle), s);
    }
}

#[test]
fn release_always_returns_to_idle() {
    for s in [
        InteractionState::Idle,
        InteractionState::Drawing,
        InteractionState::Panning,
        InteractionState::DrawingAndPanning,
    ] {
        assert_eq!(s.release(), InteractionState::Idle);
    }
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_reset_sets_both_positions() {
    let mut c = Cursor::default();
    c.reset(Point::new(3.0, 4.0));
    assert_eq!(c.current, Point::new(3.0, 4.0));
    assert_eq!(c.previous, Point::new(3.0, 4.0));
    assert_eq!(c.delta(), (0.0, 0.0));
}

#[test]
fn cursor_delta_then_settle() {
    let mut c = Cursor::default();
    c.reset(Point::new(10.0, 10.0));
    c.move_to(Point::new(15.0, 7.0));
    assert_eq!(c.delta(), (5.0, -3.0));
    c.settle();
    assert_eq!(c.previous, Point::new(15.0, 7.0));
    assert_eq!(c.delta(), (0.0, 0.0));
}
