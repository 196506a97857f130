use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide at least one name.")]
    NoNames,
}

/// Trims every candidate and drops blank entries silently. The batch is
/// rejected only when nothing survives.
pub fn normalize_names(names: &[String]) -> Result<Vec<String>, ValidationError> {
    let surviving: Vec<String> = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if surviving.is_empty() {
        return Err(ValidationError::NoNames);
    }
    Ok(surviving)
}
