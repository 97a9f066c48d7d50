use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

pub const MAX_PERIOD: usize = 10;

fn default_period() -> usize {
    3
}

fn default_smoothing_factor() -> f64 {
    0.4
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MovingAverageParameters {
    #[serde(default = "default_period")]
    #[schemars(
        title = "Period",
        description = "Number of most recent values averaged at each point (0-10)",
        range(min = 0, max = 10),
        default = "default_period"
    )]
    pub period: usize,
}

impl Default for MovingAverageParameters {
    fn default() -> Self {
        Self {
            period: default_period(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ExponentialSmoothingParameters {
    #[serde(default = "default_period")]
    #[schemars(
        title = "Period",
        description = "Number of leading values averaged into the first baseline value (0-10)",
        range(min = 0, max = 10),
        default = "default_period"
    )]
    pub period: usize,

    #[serde(default = "default_smoothing_factor")]
    #[schemars(
        title = "Smoothing Factor",
        description = "Weight of the newest value (0.0-1.0); higher tracks recent data more closely",
        range(min = 0.0, max = 1.0),
        default = "default_smoothing_factor"
    )]
    pub smoothing_factor: f64,
}

impl Default for ExponentialSmoothingParameters {
    fn default() -> Self {
        Self {
            period: default_period(),
            smoothing_factor: default_smoothing_factor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(MethodKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum MethodChoice {
    #[strum_discriminants(strum(
        message = "Moving Average",
        detailed_message = "Average of a trailing window of values."
    ))]
    MovingAverage(MovingAverageParameters),

    #[strum_discriminants(strum(
        message = "Single Exponential Smoothing",
        detailed_message = "Blend each value with the previous baseline, seeded by an initial average."
    ))]
    SingleExponentialSmoothing(ExponentialSmoothingParameters),
}

impl UIChoice for MethodChoice {
    type Kind = MethodKind;

    fn schema() -> Schema {
        schema_for!(MethodChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a baseline estimation method:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            MethodKind::MovingAverage => {
                serde_json::to_value(MovingAverageParameters::default()).unwrap_or_default()
            }
            MethodKind::SingleExponentialSmoothing => {
                serde_json::to_value(ExponentialSmoothingParameters::default()).unwrap_or_default()
            }
        }
    }
}
