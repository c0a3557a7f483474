use crate::config::StrategyOptions;
use crate::error::Result;
use crate::matcher::EmailMatch;

use super::shape::{classify_domain, DomainShape};
use super::MaskStrategy;

/// Aggressive masking. Same shape dispatch as [`super::smart::SmartStrategy`]
/// but every length signal is collapsed: the local part becomes a single
/// mask symbol and domains keep only their shape. A dotted domain still
/// exposes its TLD, so per-TLD traffic statistics survive:
///
/// * `demo@example.org` -> `*@*.org`
/// * `s@[192.168.8.10]` -> `*@[*]`
/// * `"multi....dot"@[IPv6:...]` -> `*@[IPv6:*]`
#[derive(Debug)]
pub struct ParanoidStrategy {
    mask_symbol: char,
}

impl ParanoidStrategy {
    pub const NAME: &'static str = "paranoid";

    /// Same configuration surface as Smart: optional `mask_symbol`.
    pub fn from_options(options: &StrategyOptions) -> Result<Self> {
        Ok(Self {
            mask_symbol: options.single_char("mask_symbol")?.unwrap_or('*'),
        })
    }

    fn mask_domain(&self, domain: &str) -> String {
        let sym = self.mask_symbol;
        match classify_domain(domain) {
            DomainShape::BracketedIpv4 => format!("[{sym}]"),
            DomainShape::BracketedTagged { head } => format!("{head}{sym}]"),
            DomainShape::Dotted { tld, .. } => format!("{sym}.{tld}"),
            DomainShape::Bare => sym.to_string(),
        }
    }
}

impl MaskStrategy for ParanoidStrategy {
    fn mask(&self, m: &EmailMatch) -> String {
        format!("{}@{}", self.mask_symbol, self.mask_domain(m.domain))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
