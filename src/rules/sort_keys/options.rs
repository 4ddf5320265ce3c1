use anyhow::Result;

use crate::{
    config::Config,
    core::sort::{DirectiveMatcher, NumericOrder},
};

/// Settings shared by every structure the rule checks.
#[derive(Debug, Clone, Default)]
pub struct RuleOptions {
    pub directive: DirectiveMatcher,
    pub numeric_order: NumericOrder,
}

impl RuleOptions {
    pub fn new(directive: &str, numeric_order: NumericOrder) -> Result<Self> {
        Ok(Self {
            directive: DirectiveMatcher::new(directive)?,
            numeric_order,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.directive, config.numeric_order)
    }
}
