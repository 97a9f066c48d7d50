mod input_choice;
mod method_choice;
mod output_choice;
mod schema;
mod session;
mod ui_choice;

pub use input_choice::*;
pub use method_choice::*;
pub use output_choice::*;
pub use schema::*;
pub use session::Session;
pub use ui_choice::UIChoice;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Empty parameter object so the wizard can still look under "params"
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}
