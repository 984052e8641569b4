//! Labelled Dataset and Provenance

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use feature_engine::{FeatureVector, FEATURE_DIMENSION};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One labelled example: a feature vector and its fault-class id
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelledExample {
    /// Feature slots in their frozen column order
    pub features: [f64; FEATURE_DIMENSION],
    /// Fault-class id
    pub label: u8,
}

/// Provenance recorded with the finished dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    /// Unique id of this build
    pub build_id: Uuid,
    /// When the build finished assembling
    pub generated_at: DateTime<Utc>,
    /// RNG seed the build ran under
    pub seed: u64,
    /// Simulated run duration (s)
    pub stop_time: f64,
    /// Start of the usable interval (s)
    pub t_ignore: f64,
    /// End of the usable interval (s)
    pub t_end_use: f64,
    /// Window length (s)
    pub win_sec: f64,
    /// Hop between window starts (s)
    pub step_sec: f64,
    /// Nominal line-to-neutral voltage (V)
    pub base_voltage: f64,
    /// Nominal mechanical torque (pu)
    pub base_torque: f64,
    /// Configured runs per fault-class id
    pub runs_per_class: BTreeMap<u8, usize>,
    /// Number of feature columns
    pub feature_dimension: usize,
}

/// End-of-build accounting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildSummary {
    /// Total labelled examples
    pub examples: usize,
    /// Number of feature columns
    pub feature_dimension: usize,
    /// Examples contributed per fault-class id
    pub per_class: BTreeMap<u8, usize>,
    /// Runs skipped for simulator failure or insufficient samples
    pub skipped_runs: usize,
}

/// Finished labelled dataset.
///
/// Example order follows the build traversal (class, run, window start)
/// but carries no meaning; consumers should treat the rows as an
/// unordered set and shuffle before splitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    examples: Vec<LabelledExample>,
    skipped_runs: usize,
    /// Build provenance
    pub metadata: DatasetMetadata,
}

impl Dataset {
    pub(crate) fn new(metadata: DatasetMetadata) -> Self {
        Self {
            examples: Vec::new(),
            skipped_runs: 0,
            metadata,
        }
    }

    pub(crate) fn push(&mut self, features: FeatureVector, label: u8) {
        self.examples.push(LabelledExample {
            features: features.as_array(),
            label,
        });
    }

    pub(crate) fn record_skipped_run(&mut self) {
        self.skipped_runs += 1;
    }

    /// Number of labelled examples
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Check if the dataset holds no examples
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// All labelled examples in traversal order
    pub fn examples(&self) -> &[LabelledExample] {
        &self.examples
    }

    /// Label column parallel to the feature matrix rows
    pub fn labels(&self) -> Vec<u8> {
        self.examples.iter().map(|e| e.label).collect()
    }

    /// Feature matrix view: rows = examples, columns = the ten fixed slots
    pub fn feature_matrix(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.examples.len(), FEATURE_DIMENSION), |(i, j)| {
            self.examples[i].features[j]
        })
    }

    /// End-of-build accounting
    pub fn summary(&self) -> BuildSummary {
        let mut per_class = BTreeMap::new();
        for example in &self.examples {
            *per_class.entry(example.label).or_insert(0) += 1;
        }
        BuildSummary {
            examples: self.examples.len(),
            feature_dimension: FEATURE_DIMENSION,
            per_class,
            skipped_runs: self.skipped_runs,
        }
    }
}
