use crate::{RenderableReport, RenderableVerdict};

/// Plain terminal rendering, one block per case.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "specguard {} (profile: {}, mode: {})\n",
        report.scenario, report.profile, report.mode
    ));

    for case in &report.cases {
        let status = if case.all_passed { "PASS" } else { "DENY" };
        out.push_str(&format!("\n[{}] {}\n", status, case.label));
        for r in &case.results {
            if r.passed {
                out.push_str(&format!("  ok    {}\n", r.name));
            } else {
                out.push_str(&format!(
                    "  fail  {}: {}\n",
                    r.name,
                    r.failure_reasons.join(", ")
                ));
            }
        }
    }

    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "\nverdict: {} ({} cases, {} denied)\n",
        verdict,
        report.cases.len(),
        report.denied()
    ));

    out
}
