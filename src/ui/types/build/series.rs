use crate::series::{parse_series, read_series_file};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::InputChoice;

pub fn load_series(choice: &InputChoice) -> Result<Vec<f64>, BuildError> {
    let values = match choice {
        InputChoice::ImportFromFile(p) => read_series_file(&p.path)?,
        InputChoice::EnterInConsole(p) => parse_series(&p.values)?,
    };
    Ok(values)
}
