//! Stable result types shared across the specguard workspace.
//!
//! This crate is intentionally boring:
//! - the outcome of evaluating one specification
//! - the aggregate produced by a policy evaluation
//! - the serializable report emitted by the app layer

#![forbid(unsafe_code)]

pub mod reason;
pub mod report;
pub mod result;

pub use reason::FailureReason;
pub use report::{
    CaseReport, EvaluationReport, ResultReport, Verdict, SCHEMA_EVALUATION_REPORT_V1,
};
pub use result::{PolicyResult, SpecificationResult};
