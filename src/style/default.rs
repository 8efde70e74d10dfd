//! The default strategy: leaves every visual alone.

use super::{AlignmentMetrics, StyleStrategy};
use crate::config::StyleConfig;

/// No-op hooks; captions aligned per section at the base font.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultStyle {
    metrics: AlignmentMetrics,
}

impl DefaultStyle {
    /// Default style with configured fonts and floor.
    pub fn new(config: &StyleConfig) -> Self {
        Self {
            metrics: AlignmentMetrics::from(config),
        }
    }
}

impl StyleStrategy for DefaultStyle {
    fn alignment_metrics(&self) -> AlignmentMetrics {
        self.metrics.clone()
    }
}
