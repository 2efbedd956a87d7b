//! Store configuration.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working storefront. Loading from disk is left to the binaries.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cart::{DiscountPolicy, DEFAULT_DISCOUNT_CODE, DEFAULT_DISCOUNT_PERCENT};
use crate::error::CommerceError;
use crate::share::{MessageComposer, DEFAULT_ENDPOINT};
use crate::showcase::{HeroTiming, DEFAULT_PROGRESS_TICK, DEFAULT_ROTATION, DEFAULT_TRANSITION};

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Store identity and public URL.
    #[serde(default)]
    pub store: StoreSection,

    /// Messaging contact for orders.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Discount allow-list.
    #[serde(default)]
    pub discount: DiscountConfig,

    /// Hero banner timings.
    #[serde(default)]
    pub hero: HeroConfig,
}

impl StoreConfig {
    /// Check that the configuration can drive a storefront.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.contact.phone.trim().is_empty() {
            return Err(CommerceError::InvalidConfig(
                "contact.phone must not be empty".to_string(),
            ));
        }
        if !self.contact.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::InvalidConfig(
                "contact.phone must contain digits only".to_string(),
            ));
        }
        if !(1..=100).contains(&self.discount.percent) {
            return Err(CommerceError::InvalidConfig(format!(
                "discount.percent must be between 1 and 100, got {}",
                self.discount.percent
            )));
        }
        if self.discount.codes.iter().any(|c| c.trim().is_empty()) {
            return Err(CommerceError::InvalidConfig(
                "discount.codes must not contain blank codes".to_string(),
            ));
        }
        if self.hero.rotation_ms == 0 || self.hero.progress_tick_ms == 0 {
            return Err(CommerceError::InvalidConfig(
                "hero intervals must be greater than zero".to_string(),
            ));
        }
        if self.hero.transition_ms >= self.hero.rotation_ms {
            return Err(CommerceError::InvalidConfig(
                "hero.transition_ms must be shorter than hero.rotation_ms".to_string(),
            ));
        }
        Ok(())
    }

    /// Discount policy built from the allow-list.
    pub fn discount_policy(&self) -> DiscountPolicy {
        DiscountPolicy::new(&self.discount.codes, self.discount.percent)
    }

    /// Composer for the order message link.
    pub fn message_composer(&self) -> MessageComposer {
        MessageComposer::new(&self.contact.endpoint, &self.contact.phone)
    }

    /// Hero rotation timings.
    pub fn hero_timing(&self) -> HeroTiming {
        HeroTiming::new(
            Duration::from_millis(self.hero.rotation_ms),
            Duration::from_millis(self.hero.transition_ms),
        )
    }

    /// Progress indicator refresh interval.
    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.hero.progress_tick_ms)
    }
}

/// Store identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSection {
    /// Display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Base URL for shareable product links.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            base_url: default_base_url(),
        }
    }
}

fn default_store_name() -> String {
    "TechStore".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// Messaging contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Phone number, international format, digits only.
    #[serde(default = "default_phone")]
    pub phone: String,

    /// Click-to-chat endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_phone() -> String {
    "5493816378884".to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Discount allow-list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountConfig {
    /// Accepted codes (matched case-insensitively).
    #[serde(default = "default_codes")]
    pub codes: Vec<String>,

    /// Percentage off.
    #[serde(default = "default_percent")]
    pub percent: u32,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            codes: default_codes(),
            percent: default_percent(),
        }
    }
}

fn default_codes() -> Vec<String> {
    vec![DEFAULT_DISCOUNT_CODE.to_string()]
}

fn default_percent() -> u32 {
    DEFAULT_DISCOUNT_PERCENT
}

/// Hero banner timings, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    #[serde(default = "default_rotation_ms")]
    pub rotation_ms: u64,

    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    #[serde(default = "default_progress_tick_ms")]
    pub progress_tick_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            rotation_ms: default_rotation_ms(),
            transition_ms: default_transition_ms(),
            progress_tick_ms: default_progress_tick_ms(),
        }
    }
}

fn default_rotation_ms() -> u64 {
    DEFAULT_ROTATION.as_millis() as u64
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION.as_millis() as u64
}

fn default_progress_tick_ms() -> u64 {
    DEFAULT_PROGRESS_TICK.as_millis() as u64
}
