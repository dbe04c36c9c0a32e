//! Session flow: uninitialized, playing, result, title

use std::time::{Duration, Instant};

use blockfall::core::{KindSequence, RoundConfig, Session};
use blockfall::types::{BlockKind, Intent, RoundPhase, SessionPhase};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn new_session() -> Session<KindSequence> {
    Session::new(RoundConfig::default(), KindSequence::new(&[BlockKind::O]))
}

/// Let gravity stack O pieces until the round ends; returns the clock.
fn play_until_result(session: &mut Session<KindSequence>, t0: Instant, mut t: u64) -> u64 {
    while session.phase() == SessionPhase::Playing {
        t += 300;
        session.update(t0 + ms(t), None);
        assert!(t < 120_000, "round never ended");
    }
    t
}

#[test]
fn test_first_update_starts_playing() {
    let mut session = new_session();
    assert_eq!(session.phase(), SessionPhase::Uninitialized);
    assert!(session.round().active().is_none());

    let t0 = Instant::now();
    let events = session.update(t0, None);

    assert!(events.is_empty());
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.round().phase(), RoundPhase::Playing);
    assert_eq!(session.round().active().unwrap().position(), (3, 0));
}

#[test]
fn test_confirm_ignored_while_playing() {
    let mut session = new_session();
    let t0 = Instant::now();
    session.update(t0, None);

    let events = session.update(t0 + ms(100), Some(Intent::Confirm));
    assert!(events.is_empty());
    assert_eq!(session.phase(), SessionPhase::Playing);
}

#[test]
fn test_controls_reach_round_while_playing() {
    let mut session = new_session();
    let t0 = Instant::now();
    session.update(t0, None);

    session.update(t0 + ms(100), Some(Intent::MoveRight));
    assert_eq!(session.round().active().unwrap().position(), (4, 0));
}

#[test]
fn test_game_over_moves_to_result() {
    let mut session = new_session();
    let t0 = Instant::now();
    session.update(t0, None);

    play_until_result(&mut session, t0, 0);

    assert_eq!(session.phase(), SessionPhase::Result);
    assert!(session.round().is_game_over());
}

#[test]
fn test_full_cycle_back_to_playing() {
    let mut session = new_session();
    let t0 = Instant::now();
    session.update(t0, None);
    let mut t = play_until_result(&mut session, t0, 0);

    // Only confirm leaves the result screen.
    t += 16;
    session.update(t0 + ms(t), Some(Intent::MoveLeft));
    assert_eq!(session.phase(), SessionPhase::Result);
    t += 16;
    session.update(t0 + ms(t), None);
    assert_eq!(session.phase(), SessionPhase::Result);

    t += 16;
    session.update(t0 + ms(t), Some(Intent::Confirm));
    assert_eq!(session.phase(), SessionPhase::Title);

    t += 16;
    session.update(t0 + ms(t), Some(Intent::Rotate));
    assert_eq!(session.phase(), SessionPhase::Title);

    t += 16;
    session.update(t0 + ms(t), Some(Intent::Confirm));
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert!(session.round().is_playing());
    assert!(session.round().field().cells().iter().all(|k| k.is_empty()));
}

#[test]
fn test_snapshot_tracks_phases() {
    let mut session = new_session();
    let snap = session.snapshot();
    assert_eq!(snap.session, SessionPhase::Uninitialized);
    assert!(snap.active.is_none());
    assert!(snap.next.is_none());

    let t0 = Instant::now();
    session.update(t0, None);
    let snap = session.snapshot();
    assert!(snap.playable());
    assert_eq!(snap.active.unwrap().cells, [(4, 0), (5, 0), (4, 1), (5, 1)]);
    assert_eq!(snap.next.unwrap().cells, [(1, 1), (2, 1), (1, 2), (2, 2)]);

    play_until_result(&mut session, t0, 0);
    let snap = session.snapshot();
    assert_eq!(snap.session, SessionPhase::Result);
    assert_eq!(snap.round, RoundPhase::GameOver);
    assert!(!snap.playable());
}
