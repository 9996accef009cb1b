use thiserror::Error;

/// Construction-time errors. Rule failures are never errors; they are
/// failing `SpecificationResult`s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecificationError {
    /// A composite was given an empty child list.
    #[error("invalid argument: {operator} '{name}' requires at least one specification")]
    EmptySpecifications {
        operator: &'static str,
        name: String,
    },
}
