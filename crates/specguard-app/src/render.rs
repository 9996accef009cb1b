//! Output formats for evaluation reports.

use anyhow::Context;
use specguard_render::RenderableReport;
use specguard_types::EvaluationReport;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown format: {other} (expected text|markdown|json)"),
        }
    }
}

/// Serialize a report as pretty JSON with a trailing newline.
pub fn serialize_report(report: &EvaluationReport) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

pub fn render_report(report: &EvaluationReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => serialize_report(report),
        OutputFormat::Text => Ok(specguard_render::render_text(&RenderableReport::from(report))),
        OutputFormat::Markdown => Ok(specguard_render::render_markdown(
            &RenderableReport::from(report),
        )),
    }
}
