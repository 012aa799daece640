use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::command::Command;

/// How an argument failed the fixed width of the field it is encoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    /// Numeric value does not fit the field's integer width.
    #[error("value {value} exceeds maximum {max}")]
    OutOfRange { value: u64, max: u64 },
    /// Negative, fractional or non-finite where an unsigned integer is required.
    #[error("not a non-negative integer")]
    NotAnInteger,
    /// Decimal value wider than the field.
    #[error("does not fit in {bits} bits")]
    Overflow { bits: u32 },
    /// More items than the fixed-capacity sequence can hold.
    #[error("{len} items exceed capacity {capacity}")]
    OverCapacity { len: usize, capacity: usize },
    /// More UTF-16 code units than the fixed string width.
    #[error("{len} characters exceed fixed width {max}")]
    StringTooLong { len: usize, max: usize },
    /// Key material is not exactly 32 bytes.
    #[error("expected 32 bytes, got {len}")]
    KeyLength { len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SfsError {
    #[error("Invalid {field}: {violation}")]
    ShapeViolation {
        field: &'static str,
        violation: ShapeViolation,
    },
    #[error("No encoder defined for command {0:?}")]
    UnsupportedCommand(Command),
    #[error("{0}")]
    InvalidArgument(String),
}

impl SfsError {
    pub fn shape(field: &'static str, violation: ShapeViolation) -> SfsError {
        SfsError::ShapeViolation { field, violation }
    }

    pub fn invalid(msg: &str) -> SfsError {
        SfsError::InvalidArgument(msg.to_string())
    }
}

impl From<&str> for SfsError {
    fn from(s: &str) -> Self {
        SfsError::invalid(s)
    }
}

impl From<String> for SfsError {
    fn from(s: String) -> Self {
        SfsError::InvalidArgument(s)
    }
}

// Required for wasm_bindgen to convert errors to JavaScript exceptions
impl From<SfsError> for JsValue {
    fn from(err: SfsError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_violation_message() {
        let err = SfsError::shape("name", ShapeViolation::StringTooLong { len: 33, max: 32 });
        assert_eq!(err.to_string(), "Invalid name: 33 characters exceed fixed width 32");
    }

    #[test]
    fn test_unsupported_command_message() {
        let err = SfsError::UnsupportedCommand(Command::StartSeason);
        assert!(err.to_string().contains("StartSeason"));
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            ShapeViolation::OutOfRange { value: 70000, max: 65535 }.to_string(),
            "value 70000 exceeds maximum 65535"
        );
        assert_eq!(
            SfsError::shape("bid", ShapeViolation::Overflow { bits: 64 }).to_string(),
            "Invalid bid: does not fit in 64 bits"
        );
        assert_eq!(
            SfsError::shape("root", ShapeViolation::KeyLength { len: 31 }).to_string(),
            "Invalid root: expected 32 bytes, got 31"
        );
    }
}
