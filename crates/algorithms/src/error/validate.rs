//! Validation helpers for the hashing engines

use super::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that a state has been initialized
#[inline(always)]
pub fn initialized(is_initialized: bool, context: &'static str) -> Result<()> {
    if !is_initialized {
        return Err(Error::InvalidState { context });
    }
    Ok(())
}
