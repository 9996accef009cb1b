use specguard_types::{CaseReport, EvaluationReport, ResultReport, Verdict};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableResult {
    pub name: String,
    pub passed: bool,
    pub failure_reasons: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCase {
    pub label: String,
    pub all_passed: bool,
    pub results: Vec<RenderableResult>,
}

impl RenderableCase {
    pub fn failure_reasons(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .flat_map(|r| r.failure_reasons.iter().map(String::as_str))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub scenario: String,
    pub profile: String,
    pub mode: String,
    pub verdict: RenderableVerdict,
    pub cases: Vec<RenderableCase>,
}

impl RenderableReport {
    pub fn denied(&self) -> usize {
        self.cases.iter().filter(|c| !c.all_passed).count()
    }
}

impl From<&ResultReport> for RenderableResult {
    fn from(r: &ResultReport) -> Self {
        Self {
            name: r.name.clone(),
            passed: r.passed,
            failure_reasons: r.failure_reasons.clone(),
        }
    }
}

impl From<&CaseReport> for RenderableCase {
    fn from(c: &CaseReport) -> Self {
        Self {
            label: c.label.clone(),
            all_passed: c.all_passed,
            results: c.results.iter().map(RenderableResult::from).collect(),
        }
    }
}

impl From<&EvaluationReport> for RenderableReport {
    fn from(report: &EvaluationReport) -> Self {
        Self {
            scenario: report.scenario.clone(),
            profile: report.profile.clone(),
            mode: report.mode.clone(),
            verdict: match report.verdict {
                Verdict::Pass => RenderableVerdict::Pass,
                Verdict::Fail => RenderableVerdict::Fail,
            },
            cases: report.cases.iter().map(RenderableCase::from).collect(),
        }
    }
}
