//! The `describe` use case: list a policy's specifications and structure.

use anyhow::Context;
use specguard::{FailureReason, Policy, Specification};
use specguard_demos::insurance::{self, ClaimType};
use specguard_demos::registration;
use specguard_settings::Overrides;
use std::fmt;
use std::str::FromStr;

use crate::evaluate::load_settings;

/// A policy that can be described.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescribeTarget {
    Registration,
    Claim(ClaimType),
}

impl DescribeTarget {
    pub const ALL: [&'static str; 5] = ["registration", "medical", "auto", "property", "life"];
}

impl FromStr for DescribeTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "registration" => Ok(Self::Registration),
            "medical" => Ok(Self::Claim(ClaimType::Medical)),
            "auto" => Ok(Self::Claim(ClaimType::Auto)),
            "property" => Ok(Self::Claim(ClaimType::Property)),
            "life" => Ok(Self::Claim(ClaimType::Life)),
            other => anyhow::bail!(
                "unknown policy: {other} (expected one of {})",
                Self::ALL.join("|")
            ),
        }
    }
}

impl fmt::Display for DescribeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registration => f.write_str("registration"),
            Self::Claim(t) => write!(f, "{} claim", t.as_str().to_ascii_lowercase()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecificationSummary {
    pub name: String,
    pub expression: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    pub title: String,
    pub profile: String,
    pub specifications: Vec<SpecificationSummary>,
    pub expression: String,
}

/// Build the policy for `target` under the resolved settings and describe it.
pub fn run_describe(
    target: DescribeTarget,
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<Description> {
    let resolved = load_settings(config_text, overrides)?;
    let effective = &resolved.effective;

    let (specifications, expression) = match target {
        DescribeTarget::Registration => {
            let policy = registration::registration_policy(&effective.registration)
                .context("build registration policy")?;
            summarize(&policy)
        }
        DescribeTarget::Claim(claim_type) => {
            let policy = insurance::policy_for(claim_type, &effective.insurance)
                .with_context(|| format!("build {} claim policy", claim_type.as_str()))?;
            summarize(&policy)
        }
    };

    Ok(Description {
        title: format!("{target} policy"),
        profile: effective.profile.clone(),
        specifications,
        expression,
    })
}

fn summarize<T, R: FailureReason>(policy: &Policy<T, R>) -> (Vec<SpecificationSummary>, String) {
    let specifications = policy
        .specifications()
        .iter()
        .map(|s| SpecificationSummary {
            name: s.name().to_string(),
            expression: s.expression(),
        })
        .collect();
    (specifications, policy.expression())
}

/// Format a description for terminal display.
pub fn format_description(description: &Description) -> String {
    let mut out = String::new();

    let heading = format!("{} (profile: {})", description.title, description.profile);
    out.push_str(&heading);
    out.push('\n');
    out.push_str(&"=".repeat(heading.len()));
    out.push_str("\n\n");

    for (i, spec) in description.specifications.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, spec.name));
        if spec.expression != spec.name {
            out.push_str(&format!("   {}\n", spec.expression));
        }
    }

    out.push_str("\nExpression\n");
    out.push_str("----------\n");
    out.push_str(&description.expression);
    out.push('\n');

    out
}
