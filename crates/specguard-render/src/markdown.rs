use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Specguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Scenario: `{}`\n- Profile: `{}`\n- Mode: `{}`\n- Verdict: **{}**\n- Cases: {} ({} denied)\n\n",
        report.scenario,
        report.profile,
        report.mode,
        verdict,
        report.cases.len(),
        report.denied()
    ));

    if report.cases.is_empty() {
        out.push_str("No cases evaluated.\n");
        return out;
    }

    out.push_str("## Cases\n");

    for case in &report.cases {
        let status = if case.all_passed { "PASS" } else { "DENY" };
        out.push_str(&format!("\n### {}: {}\n\n", status, escape(&case.label)));

        let reasons: Vec<&str> = case.failure_reasons().collect();
        if !reasons.is_empty() {
            out.push_str(&format!("Denied for: `{}`\n\n", reasons.join("`, `")));
        }

        out.push_str("| Specification | Result | Failure reasons |\n");
        out.push_str("|---|---|---|\n");
        for r in &case.results {
            let result = if r.passed { "pass" } else { "fail" };
            let reasons = r
                .failure_reasons
                .iter()
                .map(|reason| format!("`{reason}`"))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("| {} | {} | {} |\n", escape(&r.name), result, reasons));
        }
    }

    out
}

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}
