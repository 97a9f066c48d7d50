use crate::series::SeriesFormat;
use crate::ui::types::choices::{NoParams, UIChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct ExportParameters {
    #[schemars(
        with = "String",
        title = "Output File",
        description = "Path of the file to create",
        extend("format" = "path", "x-file" = true, "x-must-exist" = false)
    )]
    pub path: PathBuf,

    #[serde(default)]
    #[schemars(title = "Format", description = "Separator or encoding of the exported line")]
    pub format: SeriesFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(OutputKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum OutputChoice {
    #[strum_discriminants(strum(
        message = "Export to file",
        detailed_message = "Write the baseline to a new text file."
    ))]
    ExportToFile(ExportParameters),

    #[strum_discriminants(strum(
        message = "Display in console",
        detailed_message = "Print the baseline as comma-separated values."
    ))]
    DisplayInConsole(NoParams),
}

impl UIChoice for OutputChoice {
    type Kind = OutputKind;

    fn schema() -> Schema {
        schema_for!(OutputChoice)
    }

    fn prompt_label() -> &'static str {
        "How would you like to display results?"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            OutputKind::ExportToFile => {
                serde_json::to_value(ExportParameters::default()).unwrap_or_default()
            }
            OutputKind::DisplayInConsole => {
                serde_json::to_value(NoParams::default()).unwrap_or_default()
            }
        }
    }
}
