//! Reference domains built on specguard.
//!
//! - [`registration`]: predicate specifications, `all_of` groups, one policy.
//! - [`insurance`]: a custom multi-reason specification, `any_of`/`not`,
//!   parameterized specifications and one policy per claim type.

#![forbid(unsafe_code)]

pub mod insurance;
pub mod registration;

use serde::{Deserialize, Serialize};

/// A labelled context, as read from `--input` files or built for the showcase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Case<T> {
    pub label: String,
    pub context: T,
}

impl<T> Case<T> {
    pub fn new(label: impl Into<String>, context: T) -> Self {
        Self {
            label: label.into(),
            context,
        }
    }
}
