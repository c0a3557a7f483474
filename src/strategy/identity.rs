use crate::config::StrategyOptions;
use crate::error::Result;
use crate::matcher::EmailMatch;

use super::MaskStrategy;

/// Does nothing: every match is returned unchanged, so the processed line
/// is always byte-identical to the input and the line result stays
/// `Unchanged`. Useful for dry-run pipelines that still exercise the
/// matching machinery.
#[derive(Debug)]
pub struct IdentityStrategy;

impl IdentityStrategy {
    pub const NAME: &'static str = "noop";

    /// Accepts and ignores any options.
    pub fn from_options(_options: &StrategyOptions) -> Result<Self> {
        Ok(Self)
    }
}

impl MaskStrategy for IdentityStrategy {
    fn mask(&self, m: &EmailMatch) -> String {
        m.text.to_string()
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
