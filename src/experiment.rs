//! Experiment run logging for an external training loop.
//!
//! The call-shape matches the usual metrics trackers: initialize a named
//! run with a configuration record, submit one metrics record per epoch,
//! and finalize the run explicitly. [`TracingRunLogger`] emits every step
//! as a structured `tracing` event; swap in another [`RunLogger`] to send
//! the same records elsewhere.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;
use tracing::warn;

/// Configuration record attached to a run at initialization.
#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub architecture: String,
    pub dataset: String,
    pub epochs: usize,
    /// Remaining hyperparameters, keyed by name.
    #[serde(flatten)]
    pub hyperparameters: BTreeMap<String, serde_json::Value>,
}

impl RunConfig {
    pub fn new(architecture: &str, dataset: &str, epochs: usize) -> Self {
        Self {
            architecture: architecture.to_owned(),
            dataset: dataset.to_owned(),
            epochs,
            hyperparameters: BTreeMap::new(),
        }
    }

    pub fn with_hyperparameter<V>(mut self, key: &str, value: V) -> Self
    where
        V: Into<serde_json::Value>,
    {
        self.hyperparameters.insert(key.to_owned(), value.into());
        self
    }
}

/// One metrics record, submitted once per epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpochMetrics {
    pub train_loss: f64,
    pub train_acc: f64,
    pub val_loss: f64,
    pub val_acc: f64,
    pub epoch: usize,
}

/// Sink for run metrics. Construction is the run-init step.
pub trait RunLogger {
    fn log_epoch(&mut self, metrics: &EpochMetrics);
    fn finish(&mut self);
}

/// A [`RunLogger`] backed by the `tracing` facade.
#[derive(Debug)]
pub struct TracingRunLogger {
    project: String,
    finished: bool,
}

impl TracingRunLogger {
    /// Start a named run and record its configuration.
    pub fn init(project: &str, config: &RunConfig) -> Self {
        let config = serde_json::to_string(config).unwrap_or_default();
        info!(target: "experiment", project = %project, config = %config, "run initialized");

        Self {
            project: project.to_owned(),
            finished: false,
        }
    }
}

impl RunLogger for TracingRunLogger {
    fn log_epoch(&mut self, metrics: &EpochMetrics) {
        if self.finished {
            warn!(
                target: "experiment",
                project = %self.project,
                epoch = metrics.epoch,
                "metrics submitted after run finished"
            );
            return;
        }

        info!(
            target: "experiment",
            project = %self.project,
            epoch = metrics.epoch,
            train_loss = metrics.train_loss,
            train_acc = metrics.train_acc,
            val_loss = metrics.val_loss,
            val_acc = metrics.val_acc,
        );
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }

        self.finished = true;
        info!(target: "experiment", project = %self.project, "run finished");
    }
}

impl Drop for TracingRunLogger {
    // Finalize runs that were never explicitly finished.
    fn drop(&mut self) {
        self.finish();
    }
}
