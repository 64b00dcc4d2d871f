//! Client-side request validation
//!
//! Runs before any network call; a request that fails here is never sent.

use crate::error::{Error, Result};
use crate::pagination::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};

/// Check a request before it is submitted
pub trait Validate {
    /// Return the first invalid field, if any
    fn validate(&self) -> Result<()>;
}

/// Page size hints must fall inside the range the control plane accepts
pub fn page_size(field: &str, value: Option<u32>) -> Result<()> {
    match value {
        Some(size) if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) => Err(Error::validation(
            field,
            format!("must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}, got {size}"),
        )),
        _ => Ok(()),
    }
}

/// Optional strings, when present, must not be blank
pub fn non_empty(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(s) if s.trim().is_empty() => Err(Error::validation(field, "must not be empty")),
        _ => Ok(()),
    }
}
