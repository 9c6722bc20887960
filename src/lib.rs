//! Utilization models for discrete-event resource simulations.
//!
//! A utilization model answers, for an arbitrary moment of simulation time, which fraction
//! of some resource (CPU, RAM, bandwidth) a workload occupies. All models implement the
//! [`interface::UtilizationModel`] trait, so the hosting simulation can substitute one
//! strategy for another, and can be built from a [`interface::UtilizationModelConfig`]
//! through [`helpers::utilization_model_from_config`].

pub mod arithmetic_progression;
pub mod constant;
pub mod helpers;
pub mod interface;
