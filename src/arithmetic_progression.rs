//! Utilization model which grows as an arithmetic progression of simulation time.

use serde::Deserialize;

use crate::interface::{InvalidModelParameter, UtilizationModel};

/// Default utilization increment per unit of simulation time.
pub const ONE_PERCENT: f64 = 0.01;
/// Full utilization of a resource, the default cap.
pub const HUNDRED_PERCENT: f64 = 1.0;

/// Utilization starts at `initial_utilization` and changes by `increment_per_unit_time` for
/// every unit of simulation time, capped at `max_utilization`. Only the cap may be replaced
/// after construction; the increment and the initial utilization are fixed.
/// There is no floor, so a negative increment drives utilization below zero eventually.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ArithmeticProgressionUtilizationModel {
    #[serde(default = "increment_per_unit_time_default")]
    increment_per_unit_time: f64,
    #[serde(default)]
    initial_utilization: f64,
    #[serde(default = "max_utilization_default")]
    max_utilization: f64,
}

fn increment_per_unit_time_default() -> f64 {
    ONE_PERCENT
}

fn max_utilization_default() -> f64 {
    HUNDRED_PERCENT
}

impl ArithmeticProgressionUtilizationModel {
    /// Model with no cap below full utilization. The increment must be in [-1.0, 1.0] and
    /// the initial utilization in [0.0, 1.0].
    pub fn new(
        increment_per_unit_time: f64,
        initial_utilization: f64,
    ) -> Result<Self, InvalidModelParameter> {
        Self::with_max_utilization(increment_per_unit_time, initial_utilization, HUNDRED_PERCENT)
    }

    /// Model capped at `max_utilization`, which must be in (0.0, 1.0].
    pub fn with_max_utilization(
        increment_per_unit_time: f64,
        initial_utilization: f64,
        max_utilization: f64,
    ) -> Result<Self, InvalidModelParameter> {
        Self {
            increment_per_unit_time,
            initial_utilization,
            max_utilization,
        }
        .validated()
    }

    /// Make model from configuration string. Omitted fields fall back to defaults.
    /// Should be in the following form:
    /// ```
    /// use utilization_models::interface::UtilizationModel;
    /// use utilization_models::arithmetic_progression::ArithmeticProgressionUtilizationModel;
    ///
    /// let config = "
    /// increment_per_unit_time: 0.2
    /// initial_utilization: 0.5
    /// max_utilization: 0.7
    /// ";
    /// let mut model = ArithmeticProgressionUtilizationModel::from_str(config);
    ///
    /// assert_eq!(0.5, model.current_utilization(0.0));
    /// assert_eq!(0.7, model.current_utilization(10.0));
    /// ```
    ///
    pub fn from_str(config: &str) -> Self {
        serde_yaml::from_str::<ArithmeticProgressionUtilizationModel>(&config)
            .unwrap()
            .validated()
            .unwrap()
    }

    fn validated(self) -> Result<Self, InvalidModelParameter> {
        if !(-1.0..=1.0).contains(&self.increment_per_unit_time) {
            return Err(InvalidModelParameter::IncrementPerUnitTime(
                self.increment_per_unit_time,
            ));
        }
        if !(0.0..=1.0).contains(&self.initial_utilization) {
            return Err(InvalidModelParameter::InitialUtilization(
                self.initial_utilization,
            ));
        }
        validate_max_utilization(self.max_utilization)?;
        Ok(self)
    }

    /// Utilization at the moment `time`. Values of the progression above the cap are reported
    /// as the cap itself. Does not touch the model state, so it is safe to call from multiple
    /// readers as long as nobody replaces the cap concurrently.
    pub fn utilization_at(&self, time: f64) -> f64 {
        f64::min(
            self.initial_utilization + time * self.increment_per_unit_time,
            self.max_utilization,
        )
    }

    pub fn increment_per_unit_time(&self) -> f64 {
        self.increment_per_unit_time
    }

    pub fn initial_utilization(&self) -> f64 {
        self.initial_utilization
    }

    pub fn max_utilization(&self) -> f64 {
        self.max_utilization
    }

    /// Replaces the cap used by subsequent `utilization_at` calls. The stored cap is left
    /// untouched on error.
    pub fn set_max_utilization(
        &mut self,
        max_utilization: f64,
    ) -> Result<(), InvalidModelParameter> {
        validate_max_utilization(max_utilization)?;
        self.max_utilization = max_utilization;
        Ok(())
    }
}

fn validate_max_utilization(value: f64) -> Result<(), InvalidModelParameter> {
    if value <= 0.0 || value > 1.0 {
        return Err(InvalidModelParameter::MaxUtilization(value));
    }
    Ok(())
}

impl Default for ArithmeticProgressionUtilizationModel {
    fn default() -> Self {
        Self {
            increment_per_unit_time: ONE_PERCENT,
            initial_utilization: 0.0,
            max_utilization: HUNDRED_PERCENT,
        }
    }
}

impl UtilizationModel for ArithmeticProgressionUtilizationModel {
    fn current_utilization(&mut self, time: f64) -> f64 {
        self.utilization_at(time)
    }
}
