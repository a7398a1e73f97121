use std::path::Path;

use serde::Serialize;

use crate::error::EdaError;

/// Write any serializable report to a JSON file. Non-finite floats become `null`.
pub fn write_json<T: Serialize>(
    value: &T,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), EdaError> {
    let content = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}
