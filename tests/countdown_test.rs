//! Countdown driver tests, run against tokio's paused clock.

use tokio::sync::mpsc;

use pricelock::round::spawn_countdown;
use pricelock::tui::Message;

#[tokio::test(start_paused = true)]
async fn counts_down_and_completes_exactly_once() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _handle = spawn_countdown(tx, 3);

    let mut ticks = Vec::new();
    let mut completions = 0;
    while let Some(message) = rx.recv().await {
        match message {
            Message::CountdownTick { remaining_secs, .. } => ticks.push(remaining_secs),
            Message::CountdownFinished => completions += 1,
            other => panic!("unexpected message: {other:?}"),
        }
    }

    // Never negative, ends at zero, completes once, then the task stops.
    assert_eq!(ticks, vec![2, 1, 0]);
    assert_eq!(completions, 1);
}

#[tokio::test(start_paused = true)]
async fn progress_follows_remaining_time() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _handle = spawn_countdown(tx, 4);

    let mut progress = Vec::new();
    while let Some(message) = rx.recv().await {
        if let Message::CountdownTick {
            progress_percent, ..
        } = message
        {
            progress.push(progress_percent);
        }
    }

    assert_eq!(progress, vec![75.0, 50.0, 25.0, 0.0]);
}

#[tokio::test(start_paused = true)]
async fn cancel_stops_without_completion_and_is_idempotent() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = spawn_countdown(tx, 30);

    handle.cancel();
    handle.cancel();

    // The aborted task drops its sender without ever signalling.
    assert!(rx.recv().await.is_none());
}
