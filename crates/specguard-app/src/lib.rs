//! Use case orchestration for specguard.
//!
//! This crate coordinates settings, the demo policies and the renderers.
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod describe;
mod evaluate;
mod render;

pub use describe::{Description, DescribeTarget, SpecificationSummary, format_description, run_describe};
pub use evaluate::{
    ScenarioInput, ScenarioOutput, load_settings, run_insurance, run_registration,
    verdict_exit_code,
};
pub use render::{OutputFormat, render_report, serialize_report};
