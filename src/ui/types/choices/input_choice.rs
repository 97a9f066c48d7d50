use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct FileInputParameters {
    #[schemars(
        with = "String",
        title = "Input File",
        description = "Text file holding one line of comma-separated numbers",
        extend(
            "format" = "path",
            "x-file" = true,
            "x-must-exist" = true,
            "x-extensions" = ["txt", "csv"]
        )
    )]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct ConsoleInputParameters {
    #[schemars(
        title = "Values",
        description = "Comma-separated numbers, e.g. 50,60,40,30,90"
    )]
    pub values: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(InputKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum InputChoice {
    #[strum_discriminants(strum(
        message = "Import from file",
        detailed_message = "Read the series from a text file."
    ))]
    ImportFromFile(FileInputParameters),

    #[strum_discriminants(strum(
        message = "Enter in console",
        detailed_message = "Type or paste the series."
    ))]
    EnterInConsole(ConsoleInputParameters),
}

impl UIChoice for InputChoice {
    type Kind = InputKind;

    fn schema() -> Schema {
        schema_for!(InputChoice)
    }

    fn prompt_label() -> &'static str {
        "How would you like to input values?"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            InputKind::ImportFromFile => {
                serde_json::to_value(FileInputParameters::default()).unwrap_or_default()
            }
            InputKind::EnterInConsole => {
                serde_json::to_value(ConsoleInputParameters::default()).unwrap_or_default()
            }
        }
    }
}
