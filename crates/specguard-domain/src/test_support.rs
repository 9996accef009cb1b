use crate::specification::{Specification, of};
use specguard_types::SpecificationResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reason {
    TooYoung,
    InsufficientFunds,
    Blocked,
    Always,
}

#[derive(Clone, Debug, Default)]
pub struct Account {
    pub age: u32,
    pub balance: u32,
}

pub fn account(age: u32, balance: u32) -> Account {
    Account { age, balance }
}

pub fn is_adult() -> impl Specification<Context = Account, Reason = Reason> + Send + Sync + 'static
{
    of("IsAdult", |a: &Account| a.age >= 18, Reason::TooYoung)
}

pub fn has_funds() -> impl Specification<Context = Account, Reason = Reason> + Send + Sync + 'static
{
    of("HasFunds", |a: &Account| a.balance >= 100, Reason::InsufficientFunds)
}

pub fn always_pass(
    name: &'static str,
) -> impl Specification<Context = Account, Reason = Reason> + Send + Sync + 'static {
    of(name, |_: &Account| true, Reason::Always)
}

pub fn always_fail(
    name: &'static str,
    reason: Reason,
) -> impl Specification<Context = Account, Reason = Reason> + Send + Sync + 'static {
    of(name, |_: &Account| false, reason)
}

/// Fixed-outcome specification that counts how often it is evaluated.
///
/// Clones share the counter, so a test can keep one handle while the
/// composite under test owns another.
#[derive(Clone, Debug)]
pub struct Tracking {
    name: String,
    reasons: Vec<Reason>,
    calls: Arc<AtomicUsize>,
}

impl Tracking {
    pub fn passing(name: &str) -> Self {
        Self::failing(name, Vec::new())
    }

    pub fn failing(name: &str, reasons: Vec<Reason>) -> Self {
        Self {
            name: name.to_string(),
            reasons,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Specification for Tracking {
    type Context = Account;
    type Reason = Reason;

    fn evaluate(&self, _: &Account) -> SpecificationResult<Reason> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        SpecificationResult::fail_with(self.name.as_str(), self.reasons.iter().copied())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
