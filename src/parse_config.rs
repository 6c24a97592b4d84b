use std::fs::File;

use serde_json::Value;

use crate::data_structures::{Config, LiteralSelection, SolveError};

/*
A function to read the solver configuration from a JSON file of the form

    { "SolverOptions": { "LiteralSelection": "TwoSided" } }

Returns the parsed Config, or an error naming the offending file and key.
*/
pub fn read_config_json(path: &str) -> Result<Config, SolveError> {
    let file = File::open(path).map_err(|err| SolveError::FileAccess(path.to_string(), err))?;
    let json: Value = serde_json::from_reader(file)
        .map_err(|_| invalid_config(path, "file should be valid JSON"))?;

    let solver_options = json
        .get("SolverOptions")
        .ok_or_else(|| invalid_config(path, "file should have a SolverOptions key"))?;

    let literal_selection_json = solver_options
        .get("LiteralSelection")
        .ok_or_else(|| invalid_config(path, "file should have a LiteralSelection key"))?;
    let literal_selection = read_literal_selection_json(literal_selection_json)
        .ok_or_else(|| invalid_config(path, "LiteralSelection should be TwoSided or Ordered"))?;

    Ok(Config { literal_selection })
}

/*
A function to read LiteralSelection objects from json. Returns the scheme
or None if invalid.
*/
pub fn read_literal_selection_json(value: &Value) -> Option<LiteralSelection> {
    if value.is_string() {
        if value.as_str().unwrap().to_lowercase().eq("twosided") {
            return Some(LiteralSelection::TwoSided);
        } else if value.as_str().unwrap().to_lowercase().eq("ordered") {
            return Some(LiteralSelection::Ordered);
        }
    }
    None
}

fn invalid_config(path: &str, message: &str) -> SolveError {
    SolveError::InvalidFormat(format!("{}: {}", path, message))
}
