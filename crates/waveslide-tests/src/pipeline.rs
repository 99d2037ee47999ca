//! Integration tests for the load → decode → batch → layout pipeline.

use waveslide_audio::{
    batch_samples, FormatValidator, MediaDescription, PcmBuffer, TrackFormat,
};
use waveslide_core::{plan_time_frames, WaveformError};
use waveslide_view::{WaveformSlideBar, WaveformStyle, DEFAULT_TICK_COUNT};

/// One second of a 441 Hz square wave at 44.1 kHz, as PCM16 bytes.
fn square_wave_bytes() -> Vec<u8> {
    (0..44_100)
        .flat_map(|i| {
            let sample: i16 = if (i / 50) % 2 == 0 { 12_000 } else { -12_000 };
            sample.to_le_bytes()
        })
        .collect()
}

#[test]
fn extractor_buffer_feeds_slide_bar() {
    let media = MediaDescription::single(TrackFormat::pcm16_mono(44_100));
    FormatValidator::default().validate(&media).unwrap();

    let bytes = square_wave_bytes();
    let mut buffer = PcmBuffer::for_source(Some(bytes.len() as u64 + 1024));
    for chunk in bytes.chunks(4096) {
        buffer.append(chunk);
    }
    assert_eq!(buffer.valid_len(), bytes.len());

    let samples = buffer.decode();
    assert_eq!(samples.len(), 44_100);

    let mut bar = WaveformSlideBar::new(WaveformStyle::default());
    bar.resize(1100.0, 400.0);
    bar.set_data(samples);
    bar.set_duration(1_000, DEFAULT_TICK_COUNT).unwrap();

    let frame = bar.frame().unwrap();
    // ceil(44100 / 1000) = 45 samples per column
    assert_eq!(frame.segments.len(), 44_100usize.div_ceil(45));
    assert_eq!(
        frame.ticks.iter().map(|t| t.label.as_str()).collect::<Vec<_>>(),
        vec!["00:00", "00:01"]
    );
    assert!(frame.indicator.is_none());
}

#[test]
fn stereo_source_is_rejected_before_decoding() {
    let mut track = TrackFormat::pcm16_mono(44_100);
    track.channel_count = Some(2);
    let err = FormatValidator::default()
        .validate(&MediaDescription::single(track))
        .unwrap_err();
    assert!(matches!(err, WaveformError::UnsupportedFormat(_)));
}

#[test]
fn square_wave_columns_span_full_swing() {
    let samples = waveslide_audio::decode(&square_wave_bytes());
    // 100 samples per column covers a full period
    let batches = batch_samples(&samples, 441.0);
    assert_eq!(batches.len(), 441);
    for batch in &batches {
        assert_eq!(batch.min_amplitude, -12_000);
        assert_eq!(batch.max_amplitude, 12_000);
        // each column rises then falls: max run comes first
        assert!(!batch.first_is_min());
        assert!(batch.last_is_min());
    }
}

#[test]
fn connectors_chain_columns_without_gaps() {
    let samples = waveslide_audio::decode(&square_wave_bytes());
    let mut bar = WaveformSlideBar::default();
    bar.resize(600.0, 300.0);
    bar.set_data(samples);

    let frame = bar.frame().unwrap();
    for pair in frame.segments.windows(2) {
        let connector = pair[1].connector.unwrap();
        assert_eq!(connector.start.x, pair[0].column.start.x);
        assert_eq!(connector.end.x, pair[1].column.start.x);
    }
}

#[test]
fn time_axis_for_long_track() {
    let frames = plan_time_frames(1_000_000, 5).unwrap();
    assert_eq!(frames.as_slice(), &[0, 250_000, 500_000, 750_000, 1_000_000]);

    let mut bar = WaveformSlideBar::default();
    bar.resize(1100.0, 300.0);
    bar.set_data(vec![0; 100]);
    bar.set_time_frames(frames);

    let labels: Vec<String> = bar.frame().unwrap().ticks.into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["00:00", "04:10", "08:20", "12:30", "16:40"]);
}
