//! Interface for utilization models

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Utilization model is a method, which defines the fraction of some resource (CPU, RAM,
/// bandwidth) a workload occupies at the moment `time` which is current simulation time.
/// The receiver is mutable so that stateful models (e.g. trace-driven ones advancing an
/// internal cursor) fit behind the same trait object.
/// Models cap the reported fraction at their configured maximum, but no floor is applied,
/// so implementations with a decreasing law may report negative values.
pub trait UtilizationModel {
    fn current_utilization(&mut self, time: f64) -> f64;
}

/// Config describes model name and configuration in arbitrary format which certain
/// implementation of `UtilizationModel` trait must be able to parse in form of yaml string.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct UtilizationModelConfig {
    pub model_name: String,
    pub config: String,
}

/// Raised at construction or mutation time when a model parameter is outside its valid
/// range. The rejected value is carried in the variant.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidModelParameter {
    #[error("utilization must be in [0.0, 1.0], got {0}")]
    Utilization(f64),
    #[error("utilization increment per unit time must be in [-1.0, 1.0], got {0}")]
    IncrementPerUnitTime(f64),
    #[error("initial utilization must be in [0.0, 1.0], got {0}")]
    InitialUtilization(f64),
    #[error("max utilization must be in (0.0, 1.0], got {0}")]
    MaxUtilization(f64),
}
