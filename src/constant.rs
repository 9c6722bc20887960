//! Constant utilization model implementation

use serde::Deserialize;

use crate::interface::{InvalidModelParameter, UtilizationModel};

/// Reports the same utilization fraction for every moment of simulation time.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ConstantUtilizationModel {
    utilization: f64,
}

impl ConstantUtilizationModel {
    pub fn new(utilization: f64) -> Result<Self, InvalidModelParameter> {
        Self { utilization }.validated()
    }

    /// Make model from configuration string.
    /// Should be in the following form:
    /// ```
    /// use utilization_models::interface::UtilizationModel;
    /// use utilization_models::constant::ConstantUtilizationModel;
    ///
    /// let config = "utilization: 0.32";
    /// let mut model = ConstantUtilizationModel::from_str(config);
    ///
    /// assert_eq!(0.32, model.current_utilization(32.5));
    /// ```
    ///
    pub fn from_str(config: &str) -> Self {
        serde_yaml::from_str::<ConstantUtilizationModel>(&config)
            .unwrap()
            .validated()
            .unwrap()
    }

    fn validated(self) -> Result<Self, InvalidModelParameter> {
        if !(0.0..=1.0).contains(&self.utilization) {
            return Err(InvalidModelParameter::Utilization(self.utilization));
        }
        Ok(self)
    }
}

impl UtilizationModel for ConstantUtilizationModel {
    fn current_utilization(&mut self, _time: f64) -> f64 {
        self.utilization
    }
}
