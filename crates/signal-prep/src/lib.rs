//! Signal Preparation
//!
//! Post-run trimming, validity checks, and sliding-window segmentation
//! over six-channel motor signal traces.

mod error;
mod trim;
mod window;

pub use error::PrepError;
pub use trim::{trim, TrimConfig};
pub use window::{windows, Window, WindowConfig, WindowIter};
