//! Keyboard to session wiring

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use blockfall::core::{KindSequence, RoundConfig, Session};
use blockfall::input::HeldKeys;
use blockfall::types::{BlockKind, Intent, SessionPhase};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn test_tapped_key_moves_once() {
    let mut session = Session::new(RoundConfig::default(), KindSequence::new(&[BlockKind::T]));
    let mut keys = HeldKeys::new();
    let t0 = Instant::now();
    session.update(t0, None);

    keys.press(KeyCode::Left, t0 + ms(100));
    for frame in 0..10u64 {
        let now = t0 + ms(100 + frame * 16);
        let intent = keys.current(now);
        session.update(now, intent);
    }

    assert_eq!(session.round().active().unwrap().x(), 2);
}

#[test]
fn test_enter_is_edge_triggered() {
    let mut keys = HeldKeys::new();
    let t0 = Instant::now();

    assert_eq!(keys.press(KeyCode::Enter, t0), Some(Intent::Confirm));
    assert_eq!(keys.current(t0), None);
}

#[test]
fn test_left_wins_over_rotate() {
    let mut keys = HeldKeys::new();
    let t0 = Instant::now();

    keys.press(KeyCode::Up, t0);
    keys.press(KeyCode::Char('a'), t0);
    assert_eq!(keys.current(t0 + ms(10)), Some(Intent::MoveLeft));

    keys.release(KeyCode::Left);
    assert_eq!(keys.current(t0 + ms(20)), Some(Intent::Rotate));
}

#[test]
fn test_holding_enter_on_result_stops_at_title() {
    let mut session = Session::new(RoundConfig::default(), KindSequence::new(&[BlockKind::O]));
    let mut keys = HeldKeys::new();
    let t0 = Instant::now();
    session.update(t0, None);

    let mut t = 0;
    while session.phase() == SessionPhase::Playing {
        t += 300;
        session.update(t0 + ms(t), None);
    }
    assert_eq!(session.phase(), SessionPhase::Result);

    // One press followed by terminal auto-repeats, one event per frame.
    for frame in 0..10u64 {
        let kind = if frame == 0 {
            KeyEventKind::Press
        } else {
            KeyEventKind::Repeat
        };
        let now = t0 + ms(t + 16 * (frame + 1));
        let event = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, kind);
        let intent = keys.on_key(event, now).or_else(|| keys.current(now));
        session.update(now, intent);
    }

    assert_eq!(session.phase(), SessionPhase::Title);
}
