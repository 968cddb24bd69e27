//! Full round flow through the event layer and the round state machine.
//!
//! These tests drive [`pricelock::tui::update`] with the same messages the
//! feed, countdown, and terminal tasks would send, and assert on the
//! actions handed back to the host loop. No timers or network involved.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use pricelock::models::Quote;
use pricelock::round::{Action, Direction, Phase};
use pricelock::tui::{App, Event, Message, update};

fn key(app: &mut App, code: KeyCode) -> Vec<Action> {
    update(
        app,
        Message::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
    )
}

#[test]
fn full_round_with_correct_prediction() {
    let mut app = App::new(30);

    // Feed produces the idle quote.
    let actions = update(&mut app, Message::Quote(Quote::live(dec!(60000))));
    assert!(actions.is_empty());

    // Up arrow locks in with an Up prediction.
    let actions = key(&mut app, KeyCode::Up);
    assert_eq!(
        actions,
        vec![
            Action::PauseFeed,
            Action::StartCountdown { duration_secs: 30 }
        ]
    );
    match app.round.phase() {
        Phase::Locked { locked, .. } => assert_eq!(locked.usd, dec!(60000)),
        other => panic!("expected Locked, got {other:?}"),
    }
    assert_eq!(app.countdown_remaining, Some(30));

    // Countdown runs out.
    let actions = update(&mut app, Message::CountdownFinished);
    assert_eq!(actions, vec![Action::RequestSettlementQuote]);

    // Settlement quote arrives.
    let actions = update(&mut app, Message::Quote(Quote::live(dec!(61000))));
    assert!(actions.is_empty());
    match app.round.phase() {
        Phase::Result {
            settled, outcome, ..
        } => {
            assert_eq!(settled.usd, dec!(61000));
            assert_eq!(outcome.direction, Direction::Up);
            assert_eq!(outcome.prediction_correct, Some(true));
        }
        other => panic!("expected Result, got {other:?}"),
    }

    // Play again.
    let actions = key(&mut app, KeyCode::Char('r'));
    assert_eq!(actions, vec![Action::CancelCountdown, Action::ResumeFeed]);
    assert!(matches!(app.round.phase(), Phase::Idle));
    assert_eq!(app.countdown_remaining, None);

    // A second reset is a no-op.
    assert!(key(&mut app, KeyCode::Char('r')).is_empty());
}

#[test]
fn lock_without_prediction_reports_direction_only() {
    let mut app = App::new(30);
    update(&mut app, Message::Quote(Quote::live(dec!(100))));

    key(&mut app, KeyCode::Enter);
    update(&mut app, Message::CountdownFinished);
    update(&mut app, Message::Quote(Quote::live(dec!(90))));

    match app.round.phase() {
        Phase::Result { outcome, .. } => {
            assert_eq!(outcome.direction, Direction::Down);
            assert_eq!(outcome.delta, dec!(-10));
            assert_eq!(outcome.percent, dec!(-10));
            assert!(outcome.prediction_correct.is_none());
        }
        other => panic!("expected Result, got {other:?}"),
    }
}

#[test]
fn lock_before_any_quote_is_refused_with_notice() {
    let mut app = App::new(30);

    let actions = key(&mut app, KeyCode::Enter);

    assert!(actions.is_empty());
    assert!(matches!(app.round.phase(), Phase::Idle));
    assert!(app.notice.is_some());
}

#[test]
fn duration_keys_adjust_only_while_idle() {
    let mut app = App::new(30);

    key(&mut app, KeyCode::Right);
    assert_eq!(app.round.duration_secs(), 35);
    key(&mut app, KeyCode::Left);
    assert_eq!(app.round.duration_secs(), 30);

    // Clamped at both ends.
    for _ in 0..20 {
        key(&mut app, KeyCode::Left);
    }
    assert_eq!(app.round.duration_secs(), 15);
    for _ in 0..20 {
        key(&mut app, KeyCode::Right);
    }
    assert_eq!(app.round.duration_secs(), 60);

    // Ignored mid-round.
    update(&mut app, Message::Quote(Quote::live(dec!(60000))));
    key(&mut app, KeyCode::Enter);
    key(&mut app, KeyCode::Left);
    assert_eq!(app.round.duration_secs(), 60);
}

#[test]
fn countdown_ticks_update_display_only_while_locked() {
    let mut app = App::new(30);

    // A tick with no round in flight is dropped.
    update(
        &mut app,
        Message::CountdownTick {
            remaining_secs: 7,
            progress_percent: 23.0,
        },
    );
    assert_eq!(app.countdown_remaining, None);

    update(&mut app, Message::Quote(Quote::live(dec!(60000))));
    key(&mut app, KeyCode::Enter);
    update(
        &mut app,
        Message::CountdownTick {
            remaining_secs: 29,
            progress_percent: 29.0 / 30.0 * 100.0,
        },
    );
    assert_eq!(app.countdown_remaining, Some(29));
}

#[test]
fn stale_poll_quote_mid_round_changes_nothing() {
    let mut app = App::new(30);
    update(&mut app, Message::Quote(Quote::live(dec!(60000))));
    key(&mut app, KeyCode::Down);

    // A poll result that was in flight at lock-in arrives late.
    let actions = update(&mut app, Message::Quote(Quote::live(dec!(99999))));

    assert!(actions.is_empty());
    match app.round.phase() {
        Phase::Locked { locked, .. } => assert_eq!(locked.usd, dec!(60000)),
        other => panic!("expected Locked, got {other:?}"),
    }
}

#[test]
fn feed_notice_sets_notice_and_clears_live_marker() {
    let mut app = App::new(30);
    update(&mut app, Message::Quote(Quote::live(dec!(60000))));
    assert!(app.feed_live);

    update(
        &mut app,
        Message::FeedNotice("price fetch failed".to_string()),
    );

    assert!(!app.feed_live);
    assert_eq!(
        app.notice.as_ref().map(|n| n.message.as_str()),
        Some("price fetch failed")
    );
}

#[test]
fn quit_keys_set_flag() {
    for code in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = App::new(30);
        key(&mut app, code);
        assert!(app.should_quit);
    }

    let mut app = App::new(30);
    update(
        &mut app,
        Message::Input(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ))),
    );
    assert!(app.should_quit);
}
