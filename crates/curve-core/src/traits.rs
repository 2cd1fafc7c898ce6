use crate::error::Result;

/// Validate that a value is usable before it reaches the curve engine.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
