//! Helpers for default model and builder from configuration

use log::debug;

use crate::arithmetic_progression::ArithmeticProgressionUtilizationModel;
use crate::constant::ConstantUtilizationModel;
use crate::interface::{UtilizationModel, UtilizationModelConfig};

/// Default model is constant utilization
pub fn default_utilization_model_config(utilization: f64) -> UtilizationModelConfig {
    UtilizationModelConfig {
        model_name: "constant".to_string(),
        config: format!("utilization: {}", utilization),
    }
}

pub fn utilization_model_from_config(config: UtilizationModelConfig) -> Box<dyn UtilizationModel> {
    debug!("Creating {} utilization model", config.model_name);
    match &config.model_name as &str {
        "constant" => Box::new(ConstantUtilizationModel::from_str(&config.config)),
        "arithmetic_progression" => Box::new(ArithmeticProgressionUtilizationModel::from_str(
            &config.config,
        )),
        _ => panic!("Unsupported utilization model: {:?}", config.model_name),
    }
}
