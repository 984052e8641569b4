//! Sliding-Window Segmentation

use std::ops::Range;

use motor_sim::SignalSet;
use serde::{Deserialize, Serialize};

/// Slack on the end-bound comparison so float round-off in the window
/// start times cannot drop the final window
const TIME_EPS: f64 = 1e-9;

/// Windowing configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window length (s)
    pub win_sec: f64,
    /// Hop between consecutive window starts (s)
    pub step_sec: f64,
    /// Minimum sample count for a window to be emitted
    pub min_window_samples: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            win_sec: 0.2,
            step_sec: 0.1,
            min_window_samples: 5,
        }
    }
}

/// One emitted window: the half-open interval `[t0, t0 + win_sec)` over
/// a trimmed run
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Window start time (s)
    pub t0: f64,
    /// Contiguous sample range inside the trimmed arrays
    pub range: Range<usize>,
}

impl Window {
    /// Number of samples inside the window
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Check if the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Lazy, restartable iterator over the windows of one trimmed run.
///
/// Windows tile the usable interval at a fixed hop and overlap whenever
/// `step_sec < win_sec`. Sparse candidates (fewer than
/// `min_window_samples` samples) are skipped without being emitted.
pub struct WindowIter<'a> {
    signals: &'a SignalSet,
    cfg: WindowConfig,
    t_ignore: f64,
    t_end_use: f64,
    k: usize,
}

/// Enumerate the windows of `signals` over `[t_ignore, t_end_use]`
pub fn windows<'a>(
    signals: &'a SignalSet,
    cfg: &WindowConfig,
    t_ignore: f64,
    t_end_use: f64,
) -> WindowIter<'a> {
    WindowIter {
        signals,
        cfg: *cfg,
        t_ignore,
        t_end_use,
        k: 0,
    }
}

impl Iterator for WindowIter<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        // Degenerate lengths or hops would never terminate
        if self.cfg.win_sec <= 0.0 || self.cfg.step_sec <= 0.0 {
            return None;
        }
        loop {
            // Index-computed starts avoid accumulating float error over hops
            let t0 = self.t_ignore + self.k as f64 * self.cfg.step_sec;
            if t0 + self.cfg.win_sec > self.t_end_use + TIME_EPS {
                return None;
            }
            self.k += 1;

            let t = &self.signals.t;
            let start = t.partition_point(|&x| x < t0);
            let end = t.partition_point(|&x| x < t0 + self.cfg.win_sec);

            if end - start < self.cfg.min_window_samples {
                continue; // sparse window, skipped silently
            }
            return Some(Window { t0, range: start..end });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{trim, TrimConfig};
    use proptest::prelude::*;

    fn uniform_signals(rate_hz: f64, stop: f64) -> SignalSet {
        let n = (stop * rate_hz) as usize + 1;
        let mut signals = SignalSet::with_capacity(n);
        for k in 0..n {
            let t = k as f64 / rate_hz;
            signals.push(t, t.sin(), t.cos(), -t.sin(), 0.98, 1.0, 0.02);
        }
        signals
    }

    #[test]
    fn test_default_config_yields_79_windows() {
        let trim_cfg = TrimConfig::default();
        let trimmed = trim(&uniform_signals(100.0, 10.0), &trim_cfg).unwrap();

        let emitted: Vec<Window> =
            windows(&trimmed, &WindowConfig::default(), trim_cfg.t_ignore, trim_cfg.t_end_use)
                .collect();

        assert_eq!(emitted.len(), 79);
        assert!((emitted[0].t0 - 1.0).abs() < 1e-9);
        assert!((emitted[78].t0 - 8.8).abs() < 1e-9);
    }

    #[test]
    fn test_windows_overlap_at_half_hop() {
        let trim_cfg = TrimConfig::default();
        let trimmed = trim(&uniform_signals(100.0, 10.0), &trim_cfg).unwrap();
        let cfg = WindowConfig::default();

        let emitted: Vec<Window> =
            windows(&trimmed, &cfg, trim_cfg.t_ignore, trim_cfg.t_end_use).collect();

        // Starts advance by one hop and consecutive windows share samples
        for pair in emitted.windows(2) {
            assert!((pair[1].t0 - pair[0].t0 - cfg.step_sec).abs() < 1e-9);
            assert!(pair[1].range.start < pair[0].range.end);
        }
    }

    #[test]
    fn test_iteration_is_restartable() {
        let trim_cfg = TrimConfig::default();
        let trimmed = trim(&uniform_signals(250.0, 10.0), &trim_cfg).unwrap();
        let cfg = WindowConfig::default();

        let first: Vec<Window> =
            windows(&trimmed, &cfg, trim_cfg.t_ignore, trim_cfg.t_end_use).collect();
        let second: Vec<Window> =
            windows(&trimmed, &cfg, trim_cfg.t_ignore, trim_cfg.t_end_use).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_sparse_windows_are_skipped() {
        // A gap in the time base leaves some candidate windows underpopulated
        let mut signals = SignalSet::default();
        for k in 0..=100 {
            let t = k as f64 / 10.0;
            if (3.0..5.0).contains(&t) {
                continue;
            }
            signals.push(t, 0.1, 0.1, 0.1, 0.98, 1.0, 0.02);
        }

        let cfg = WindowConfig {
            win_sec: 1.0,
            step_sec: 1.0,
            min_window_samples: 5,
        };
        let emitted: Vec<Window> = windows(&signals, &cfg, 1.0, 9.0).collect();

        // Starts 1..=8 minus the emptied 3s and 4s windows
        let starts: Vec<f64> = emitted.iter().map(|w| w.t0).collect();
        assert_eq!(starts, vec![1.0, 2.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_membership_is_half_open() {
        let signals = uniform_signals(10.0, 10.0);
        let cfg = WindowConfig {
            win_sec: 1.0,
            step_sec: 1.0,
            min_window_samples: 5,
        };

        let first = windows(&signals, &cfg, 1.0, 9.0).next().unwrap();
        let in_window = &signals.t[first.range.clone()];

        assert_eq!(in_window.first(), Some(&1.0));
        // t = 2.0 belongs to the next window, not this one
        assert!((in_window.last().unwrap() - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_no_windows_when_interval_too_short() {
        let signals = uniform_signals(100.0, 2.0);
        let cfg = WindowConfig {
            win_sec: 3.0,
            step_sec: 1.0,
            min_window_samples: 5,
        };

        assert_eq!(windows(&signals, &cfg, 0.0, 2.0).count(), 0);
    }

    proptest! {
        #[test]
        fn emitted_windows_respect_interval_and_population(
            win in 0.05_f64..1.0,
            step in 0.05_f64..1.0,
        ) {
            let signals = uniform_signals(100.0, 10.0);
            let cfg = WindowConfig {
                win_sec: win,
                step_sec: step,
                min_window_samples: 5,
            };

            for w in windows(&signals, &cfg, 1.0, 9.0) {
                prop_assert!(w.t0 >= 1.0);
                prop_assert!(w.t0 + win <= 9.0 + 1e-6);
                prop_assert!(w.len() >= cfg.min_window_samples);
                let in_window = &signals.t[w.range.clone()];
                prop_assert!(in_window.iter().all(|&t| t >= w.t0 - 1e-12 && t < w.t0 + win));
            }
        }
    }
}
