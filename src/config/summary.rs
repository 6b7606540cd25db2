//! Summary rendering configuration

use serde::Deserialize;

use crate::domain::analysis::SummaryFormat;

/// Consultant summary output
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SummaryConfig {
    /// `joined` (single line) or `lines`
    #[serde(default)]
    pub format: SummaryFormat,
}
