//! Integration tests for seeking and playback synchronization.

use crossbeam_channel::unbounded;
use waveslide_audio::{PlaybackState, PlaybackTracker};
use waveslide_core::Vec2;
use waveslide_view::{ChannelListener, NotifyMode, WaveformSlideBar, WaveformStyle};

const DURATION_MS: i64 = 120_000;

fn seekable_bar(mode: NotifyMode) -> WaveformSlideBar {
    let mut bar = WaveformSlideBar::new(WaveformStyle {
        show_progress: true,
        notify_mode: mode,
        ..Default::default()
    });
    bar.resize(1100.0, 300.0);
    bar.set_data(vec![0; 44_100]);
    bar
}

#[test]
fn drag_sends_seek_over_channel() {
    let (tx, rx) = unbounded();
    let mut bar = seekable_bar(NotifyMode::OnRelease);
    bar.set_listener(ChannelListener::new(tx));

    // grab the line far above the handle
    assert!(bar.pointer_down(Vec2::new(60.0, 5.0)));
    bar.pointer_move(800.0);
    bar.pointer_up();

    let progress = rx.try_recv().unwrap();
    assert_eq!(progress, 75.0);
    assert_eq!(bar.seek_position_ms(DURATION_MS), 90_000);
    assert!(rx.try_recv().is_err());
}

#[test]
fn playback_ticks_move_indicator() {
    let mut bar = seekable_bar(NotifyMode::OnRelease);
    let mut tracker = PlaybackTracker::new();
    let shared = bar.shared_progress();

    let poller = std::thread::spawn(move || {
        for position_ms in (0..=60_000).step_by(1_000) {
            let state = PlaybackState {
                position_ms,
                duration_ms: DURATION_MS,
                is_playing: position_ms < 60_000,
            };
            if let Some(progress) = tracker.poll(state) {
                shared.set(progress);
            }
        }
    });
    poller.join().unwrap();

    assert_eq!(bar.progress(), 50.0);
    let frame = bar.frame().unwrap();
    assert_eq!(frame.indicator.unwrap().line.start.x, 550.0);

    // the drag starts from wherever playback left the indicator
    assert!(bar.pointer_down(Vec2::new(550.0, 280.0)));
    bar.pointer_move(1050.0);
    bar.pointer_up();
    assert_eq!(bar.progress(), 100.0);
}

#[test]
fn continuous_mode_streams_every_move() {
    let (tx, rx) = unbounded();
    let mut bar = seekable_bar(NotifyMode::Continuous);
    bar.set_listener(ChannelListener::new(tx));

    assert!(bar.pointer_down(Vec2::new(50.0, 280.0)));
    for x in [150.0, 250.0, 350.0] {
        bar.pointer_move(x);
    }
    bar.pointer_up();

    let updates: Vec<f64> = rx.try_iter().collect();
    assert_eq!(updates, vec![10.0, 20.0, 30.0, 30.0]);
}
