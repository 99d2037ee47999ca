//! Min/max envelope decimation for waveform display.
//!
//! A slide bar rarely has one pixel column per sample, so samples are
//! grouped into batches of `ceil(samples / columns)` and each batch is drawn
//! as a vertical min-max segment. Besides the extrema we keep the first and
//! last index at which each extreme occurs: the renderer uses them to decide
//! which end of a segment the envelope line enters and leaves through.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Extrema of one pixel column's worth of samples.
///
/// Indices are absolute positions in the full sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub min_amplitude: i16,
    pub max_amplitude: i16,
    pub min_first_index: usize,
    pub min_last_index: usize,
    pub max_first_index: usize,
    pub max_last_index: usize,
}

impl Batch {
    /// Summarize a non-empty run of samples starting at `offset`.
    fn summarize(run: &[i16], offset: usize) -> Self {
        let first = run[0];
        let mut batch = Self {
            min_amplitude: first,
            max_amplitude: first,
            min_first_index: offset,
            min_last_index: offset,
            max_first_index: offset,
            max_last_index: offset,
        };

        for (i, &sample) in run.iter().enumerate().skip(1) {
            let index = offset + i;

            if sample < batch.min_amplitude {
                batch.min_amplitude = sample;
                batch.min_first_index = index;
                batch.min_last_index = index;
            } else if sample == batch.min_amplitude {
                batch.min_last_index = index;
            }

            if sample > batch.max_amplitude {
                batch.max_amplitude = sample;
                batch.max_first_index = index;
                batch.max_last_index = index;
            } else if sample == batch.max_amplitude {
                batch.max_last_index = index;
            }
        }

        batch
    }

    /// Whether the envelope enters this column at its minimum.
    #[inline]
    pub fn first_is_min(&self) -> bool {
        self.min_first_index < self.max_first_index
    }

    /// Whether the envelope leaves this column at its minimum.
    #[inline]
    pub fn last_is_min(&self) -> bool {
        self.min_last_index > self.max_last_index
    }
}

/// Samples per batch for `len` samples spread over `columns` pixel columns.
///
/// Returns `None` while the layout is unmeasured (`columns <= 0` or NaN).
pub fn batch_size(len: usize, columns: f32) -> Option<usize> {
    if !columns.is_finite() || columns <= 0.0 {
        return None;
    }
    let per_column = len as f64 / f64::from(columns);
    Some((per_column.ceil() as usize).max(1))
}

/// Split `samples` into per-column batches.
///
/// Degenerate widths produce no batches.
pub fn batch_samples(samples: &[i16], columns: f32) -> Vec<Batch> {
    let Some(size) = batch_size(samples.len(), columns) else {
        return Vec::new();
    };

    samples
        .chunks(size)
        .enumerate()
        .map(|(i, run)| Batch::summarize(run, i * size))
        .collect()
}

/// Samples of one source plus the batches computed for the current width.
///
/// Batching is a single O(n) pass, cheap enough to redo on a layout change
/// but not on every frame; [`Envelope::ensure`] only rebuilds when the column
/// count actually changed.
#[derive(Debug, Clone, Default)]
pub struct Envelope {
    samples: Vec<i16>,
    columns: Option<f32>,
    batches: Vec<Batch>,
}

impl Envelope {
    /// Wrap decoded samples. No batches exist until [`Envelope::ensure`].
    pub fn new(samples: Vec<i16>) -> Self {
        Self {
            samples,
            columns: None,
            batches: Vec::new(),
        }
    }

    /// Make sure the cached batches match `columns`.
    ///
    /// Returns `true` if the batches were rebuilt. An unmeasured width leaves
    /// the cache as it is.
    pub fn ensure(&mut self, columns: f32) -> bool {
        if batch_size(self.samples.len(), columns).is_none() {
            return false;
        }
        if self.columns == Some(columns) {
            return false;
        }

        self.batches = batch_samples(&self.samples, columns);
        self.columns = Some(columns);
        debug!(
            samples = self.samples.len(),
            columns,
            batches = self.batches.len(),
            "Rebuilt waveform envelope"
        );
        true
    }

    /// The decoded samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Batches for the last measured width.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Column count the batches were built for.
    pub fn columns(&self) -> Option<f32> {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_batch_basic() {
        // 8 samples over 4 columns: batches of 2
        let samples = [1, -1, 4, 2, -3, -3, 7, 0];
        let batches = batch_samples(&samples, 4.0);
        assert_eq!(batches.len(), 4);

        assert_eq!(batches[0].min_amplitude, -1);
        assert_eq!(batches[0].max_amplitude, 1);
        assert_eq!(batches[1].min_first_index, 3);
        assert_eq!(batches[2].min_first_index, 4);
        assert_eq!(batches[2].min_last_index, 5);
        assert_eq!(batches[3].max_first_index, 6);
    }

    #[test]
    fn test_batch_tracks_recurring_extrema() {
        let samples = [3, -2, 5, -2, 5];
        let batches = batch_samples(&samples, 1.0);
        assert_eq!(batches.len(), 1);

        let b = batches[0];
        assert_eq!((b.min_amplitude, b.min_first_index, b.min_last_index), (-2, 1, 3));
        assert_eq!((b.max_amplitude, b.max_first_index, b.max_last_index), (5, 2, 4));
        assert!(b.first_is_min());
        assert!(!b.last_is_min());
    }

    #[test]
    fn test_batch_flat_run() {
        let batches = batch_samples(&[0, 0, 0], 1.0);
        let b = batches[0];
        assert_eq!(b.min_first_index, 0);
        assert_eq!(b.min_last_index, 2);
        assert_eq!(b.max_first_index, 0);
        assert_eq!(b.max_last_index, 2);
    }

    #[test]
    fn test_batch_extreme_first_sample() {
        let batches = batch_samples(&[i16::MAX, 0, i16::MIN], 1.0);
        let b = batches[0];
        assert_eq!(b.max_amplitude, i16::MAX);
        assert_eq!(b.max_first_index, 0);
        assert_eq!(b.min_amplitude, i16::MIN);
        assert_eq!(b.min_first_index, 2);
    }

    #[test]
    fn test_batch_fewer_samples_than_columns() {
        let batches = batch_samples(&[5, 6, 7], 100.0);
        assert_eq!(batches.len(), 3);
        assert!(batches
            .iter()
            .enumerate()
            .all(|(i, b)| b.min_first_index == i && b.max_last_index == i));
    }

    #[test]
    fn test_batch_short_last_run() {
        // ceil(10 / 3) = 4 → runs of 4, 4, 2
        let samples: Vec<i16> = (0..10).collect();
        let batches = batch_samples(&samples, 3.0);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2].min_first_index, 8);
        assert_eq!(batches[2].max_last_index, 9);
    }

    #[test]
    fn test_batch_degenerate_columns() {
        let samples = [1, 2, 3];
        assert!(batch_samples(&samples, 0.0).is_empty());
        assert!(batch_samples(&samples, -20.0).is_empty());
        assert!(batch_samples(&samples, f32::NAN).is_empty());
        assert!(batch_samples(&[], 10.0).is_empty());
    }

    #[test]
    fn test_envelope_rebuilds_only_on_width_change() {
        let mut envelope = Envelope::new((0..1000).map(|i| (i % 64) as i16).collect());
        assert!(envelope.batches().is_empty());

        assert!(!envelope.ensure(0.0));
        assert_eq!(envelope.columns(), None);

        assert!(envelope.ensure(100.0));
        assert_eq!(envelope.batches().len(), 100);
        assert!(!envelope.ensure(100.0));

        assert!(envelope.ensure(50.0));
        assert_eq!(envelope.batches().len(), 50);

        // Collapsing the layout keeps the last good batches.
        assert!(!envelope.ensure(-1.0));
        assert_eq!(envelope.columns(), Some(50.0));
    }

    proptest! {
        #[test]
        fn prop_batch_invariants(
            samples in proptest::collection::vec(any::<i16>(), 0..2000),
            columns in 1u32..400,
        ) {
            let columns = columns as f32;
            let batches = batch_samples(&samples, columns);
            let size = batch_size(samples.len(), columns).unwrap();
            prop_assert_eq!(batches.len(), samples.len().div_ceil(size));

            for (i, b) in batches.iter().enumerate() {
                let start = i * size;
                let end = (start + size).min(samples.len());
                let run = &samples[start..end];

                prop_assert!(b.min_amplitude <= b.max_amplitude);
                prop_assert!(b.min_first_index <= b.min_last_index);
                prop_assert!(b.max_first_index <= b.max_last_index);
                prop_assert!(b.min_first_index >= start && b.min_last_index < end);
                prop_assert!(b.max_first_index >= start && b.max_last_index < end);

                prop_assert_eq!(Some(&b.min_amplitude), run.iter().min());
                prop_assert_eq!(Some(&b.max_amplitude), run.iter().max());
                prop_assert_eq!(run.iter().position(|&s| s == b.min_amplitude), Some(b.min_first_index - start));
                prop_assert_eq!(run.iter().rposition(|&s| s == b.max_amplitude), Some(b.max_last_index - start));
            }
        }
    }
}
