//! Channel Statistics Computation

/// Single-pass statistics for one window of one channel
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelStats {
    /// Mean value
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Root mean square
    pub rms: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
}

impl ChannelStats {
    /// Compute statistics from a slice of values
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;

        let mean = values.iter().sum::<f64>() / n;
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        let mut m2 = 0.0;
        let mut sum_sq = 0.0;
        for &v in values {
            let d = v - mean;
            m2 += d * d;
            sum_sq += v * v;
        }

        Self {
            mean,
            std_dev: (m2 / n).sqrt(),
            rms: (sum_sq / n).sqrt(),
            min,
            max,
        }
    }
}
