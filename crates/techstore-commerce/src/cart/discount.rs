//! Discount codes.
//!
//! Codes are checked against a fixed allow-list; at most one code is applied
//! at a time and it takes a flat percentage off the cart total.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Code accepted by the default policy.
pub const DEFAULT_DISCOUNT_CODE: &str = "DELFI";

/// Percentage taken off by the default policy.
pub const DEFAULT_DISCOUNT_PERCENT: u32 = 5;

/// Allow-list of codes and the percentage they grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountPolicy {
    /// Accepted codes, stored uppercase.
    codes: Vec<String>,
    /// Percentage off, 1 to 100.
    percent: u32,
}

impl DiscountPolicy {
    /// Create a policy. Codes are normalized to trimmed uppercase.
    pub fn new<I, S>(codes: I, percent: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            codes: codes.into_iter().map(|c| normalize(c.as_ref())).collect(),
            percent,
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Match user input against the allow-list (trimmed, case-insensitive).
    pub fn validate(&self, input: &str) -> Result<DiscountCode, CommerceError> {
        let code = normalize(input);
        if !code.is_empty() && self.codes.iter().any(|c| *c == code) {
            Ok(DiscountCode {
                code,
                percent: self.percent,
            })
        } else {
            Err(CommerceError::InvalidDiscountCode(code))
        }
    }
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self::new([DEFAULT_DISCOUNT_CODE], DEFAULT_DISCOUNT_PERCENT)
    }
}

/// A validated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscountCode {
    /// The code, uppercase.
    pub code: String,
    /// Percentage off.
    pub percent: u32,
}

impl DiscountCode {
    /// Discount granted on a total.
    pub fn amount(&self, total: Money) -> Money {
        total.percentage(self.percent)
    }
}

/// The code currently applied to the cart, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscountState {
    applied: Option<DiscountCode>,
}

impl DiscountState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a code, replacing any previous one.
    ///
    /// An invalid code leaves the applied code unchanged.
    pub fn apply(
        &mut self,
        policy: &DiscountPolicy,
        input: &str,
    ) -> Result<&DiscountCode, CommerceError> {
        match policy.validate(input) {
            Ok(code) => {
                tracing::debug!(code = %code.code, percent = code.percent, "discount code applied");
                Ok(self.applied.insert(code))
            }
            Err(e) => {
                tracing::warn!(input, "rejected discount code");
                Err(e)
            }
        }
    }

    /// Clear the applied code.
    pub fn remove(&mut self) {
        self.applied = None;
    }

    pub fn applied(&self) -> Option<&DiscountCode> {
        self.applied.as_ref()
    }

    pub fn is_applied(&self) -> bool {
        self.applied.is_some()
    }
}

/// Discount on `total`: the applied percentage, or zero when no code is set.
pub fn compute_discount(total: Money, applied: Option<&DiscountCode>) -> Money {
    applied.map_or(Money::zero(), |code| code.amount(total))
}

fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}
