//! Dataset Build Loop

use std::collections::BTreeMap;

use chrono::Utc;
use fault_synth::{FaultClass, ParameterSynthesizer};
use feature_engine::{FeatureConfig, FeatureExtractor, FEATURE_DIMENSION};
use motor_sim::{nominal, SimParameters, Simulator, SimulatorError};
use serde::{Deserialize, Serialize};
use signal_prep::{trim, windows, TrimConfig, WindowConfig};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{BuildError, Dataset, DatasetMetadata};

/// Full configuration surface for one dataset build
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Simulated run duration (s)
    pub stop_time: f64,
    /// Trimming bounds and the run validity threshold
    pub trim: TrimConfig,
    /// Window length, hop, and the window validity threshold
    pub window: WindowConfig,
    /// Unbalance-index guard
    pub features: FeatureConfig,
    /// Runs to simulate per fault-class id
    #[serde(deserialize_with = "class_counts")]
    pub runs_per_class: BTreeMap<u8, usize>,
    /// RNG seed for the whole build
    pub seed: u64,
    /// Nominal line-to-neutral voltage (V)
    pub base_voltage: f64,
    /// Nominal mechanical torque (pu)
    pub base_torque: f64,
    /// Abort on the first simulator failure instead of skipping the run
    pub fail_fast: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        let runs_per_class = FaultClass::ALL.iter().map(|c| (c.id(), 20)).collect();
        Self {
            stop_time: 10.0,
            trim: TrimConfig::default(),
            window: WindowConfig::default(),
            features: FeatureConfig::default(),
            runs_per_class,
            seed: 42,
            base_voltage: nominal::LINE_TO_NEUTRAL_V,
            base_torque: nominal::MECH_TORQUE_PU,
            fail_fast: false,
        }
    }
}

impl BuildConfig {
    /// Check ranges and orderings before a build starts
    pub fn validate(&self) -> Result<(), BuildError> {
        if !self.stop_time.is_finite() || self.stop_time <= 0.0 {
            return Err(BuildError::InvalidConfig(format!(
                "stop_time must be positive, got {}",
                self.stop_time
            )));
        }
        if self.trim.t_ignore < 0.0 {
            return Err(BuildError::InvalidConfig(format!(
                "t_ignore must be non-negative, got {}",
                self.trim.t_ignore
            )));
        }
        if self.trim.t_end_use <= self.trim.t_ignore {
            return Err(BuildError::InvalidConfig(format!(
                "usable interval is empty: t_ignore {} >= t_end_use {}",
                self.trim.t_ignore, self.trim.t_end_use
            )));
        }
        if self.trim.t_end_use > self.stop_time {
            return Err(BuildError::InvalidConfig(format!(
                "t_end_use {} extends past stop_time {}",
                self.trim.t_end_use, self.stop_time
            )));
        }
        if self.window.win_sec <= 0.0 || self.window.step_sec <= 0.0 {
            return Err(BuildError::InvalidConfig(
                "window length and hop must be positive".to_string(),
            ));
        }
        for &id in self.runs_per_class.keys() {
            FaultClass::from_id(id)?;
        }
        Ok(())
    }
}

/// Drives synthesize → simulate → trim → window → extract and owns the
/// accumulating dataset until the full multi-class loop completes
#[derive(Debug)]
pub struct DatasetBuilder {
    config: BuildConfig,
    synth: ParameterSynthesizer,
    extractor: FeatureExtractor,
}

impl DatasetBuilder {
    /// Create a builder; fails if the configuration is inconsistent
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        config.validate()?;
        let synth = ParameterSynthesizer::new(config.seed);
        let extractor = FeatureExtractor::new(config.features);
        Ok(Self {
            config,
            synth,
            extractor,
        })
    }

    /// Run every configured class/run pair and return the finished dataset.
    ///
    /// Single-run failures (simulator errors, too few post-trim samples)
    /// are warned about and skipped; the build always completes unless
    /// `fail_fast` is set.
    pub fn build<S: Simulator>(&mut self, simulator: &mut S) -> Result<Dataset, BuildError> {
        let mut dataset = Dataset::new(self.metadata());

        for (&class_id, &run_count) in &self.config.runs_per_class {
            let class = FaultClass::from_id(class_id)?;
            info!(class = class.as_str(), runs = run_count, "simulating class");

            for run_idx in 0..run_count {
                let params = self.synth.synthesize(class)?;
                let sim_params = SimParameters {
                    torque_factor: params.torque_factor,
                    delta_a: params.delta_a,
                    delta_b: params.delta_b,
                    delta_c: params.delta_c,
                    base_voltage: self.config.base_voltage,
                    base_torque: self.config.base_torque,
                };

                let raw = match self.simulate(simulator, &sim_params) {
                    Ok(raw) => raw,
                    Err(err) if self.config.fail_fast => return Err(err.into()),
                    Err(err) => {
                        warn!(
                            class = class.as_str(),
                            run = run_idx,
                            %err,
                            "simulator run failed, skipping"
                        );
                        dataset.record_skipped_run();
                        continue;
                    }
                };

                let trimmed = match trim(&raw, &self.config.trim) {
                    Ok(trimmed) => trimmed,
                    Err(err) => {
                        warn!(
                            class = class.as_str(),
                            run = run_idx,
                            %err,
                            "run rejected after trimming, skipping"
                        );
                        dataset.record_skipped_run();
                        continue;
                    }
                };

                let mut emitted = 0;
                for window in windows(
                    &trimmed,
                    &self.config.window,
                    self.config.trim.t_ignore,
                    self.config.trim.t_end_use,
                ) {
                    let r = &window.range;
                    let features = self.extractor.extract(
                        &trimmed.ia[r.clone()],
                        &trimmed.ib[r.clone()],
                        &trimmed.ic[r.clone()],
                        &trimmed.speed[r.clone()],
                        &trimmed.torque[r.clone()],
                        &trimmed.slip[r.clone()],
                    );
                    dataset.push(features, class.id());
                    emitted += 1;
                }
                debug!(
                    class = class.as_str(),
                    run = run_idx,
                    windows = emitted,
                    "run windowed"
                );
            }
        }

        let summary = dataset.summary();
        info!(
            examples = summary.examples,
            features = summary.feature_dimension,
            skipped_runs = summary.skipped_runs,
            "dataset build complete"
        );
        Ok(dataset)
    }

    /// One simulator call plus the trace-contract check
    fn simulate<S: Simulator>(
        &self,
        simulator: &mut S,
        params: &SimParameters,
    ) -> Result<motor_sim::SignalSet, SimulatorError> {
        let raw = simulator.run(params, self.config.stop_time)?;
        raw.validate()?;
        Ok(raw)
    }

    fn metadata(&self) -> DatasetMetadata {
        DatasetMetadata {
            build_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            seed: self.config.seed,
            stop_time: self.config.stop_time,
            t_ignore: self.config.trim.t_ignore,
            t_end_use: self.config.trim.t_end_use,
            win_sec: self.config.window.win_sec,
            step_sec: self.config.window.step_sec,
            base_voltage: self.config.base_voltage,
            base_torque: self.config.base_torque,
            runs_per_class: self.config.runs_per_class.clone(),
            feature_dimension: FEATURE_DIMENSION,
        }
    }
}

/// Config sources key tables by string; accept integer and string class ids
fn class_counts<'de, D>(deserializer: D) -> Result<BTreeMap<u8, usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct MapVisitor;

    impl<'de> serde::de::Visitor<'de> for MapVisitor {
        type Value = BTreeMap<u8, usize>;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a map of class id to run count")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let mut out = BTreeMap::new();
            while let Some((key, value)) = access.next_entry::<ClassKey, usize>()? {
                out.insert(key.0, value);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(MapVisitor)
}

struct ClassKey(u8);

impl<'de> Deserialize<'de> for ClassKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KeyVisitor;

        impl serde::de::Visitor<'_> for KeyVisitor {
            type Value = ClassKey;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a class id")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<ClassKey, E> {
                u8::try_from(v).map(ClassKey).map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<ClassKey, E> {
                u8::try_from(v).map(ClassKey).map_err(E::custom)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<ClassKey, E> {
                v.parse::<u8>().map(ClassKey).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
