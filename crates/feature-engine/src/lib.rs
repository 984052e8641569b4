//! Feature Engineering Engine
//!
//! Reduces the six per-window signal channels to the fixed-size numeric
//! feature vector consumed by fault classifiers.

mod features;
mod statistics;

pub use features::{FeatureConfig, FeatureExtractor, FeatureVector, FEATURE_DIMENSION};
pub use statistics::ChannelStats;
