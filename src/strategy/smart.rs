use crate::config::StrategyOptions;
use crate::error::Result;
use crate::matcher::EmailMatch;

use super::shape::{classify_domain, classify_local, mask_ends, mask_run, DomainShape, LocalShape};
use super::MaskStrategy;

/// Heuristic partial masking. Keeps just enough of the address to stay
/// readable in a log while hiding the identity:
///
/// * `demo@example.org` -> `d*o@*******.org`
/// * `sa@localhost` -> `s*a@*********`
/// * `s@[192.168.8.10]` -> `s*s@[*.*.*.*]`
/// * `"multi....dot"@[IPv6:2001:db8:85a3:8d3:1319:8a2e:370:7348]` -> `m*t@[IPv6:*]`
#[derive(Debug)]
pub struct SmartStrategy {
    mask_symbol: char,
}

impl SmartStrategy {
    pub const NAME: &'static str = "smart";

    /// Optional `mask_symbol` (single character, default `*`).
    pub fn from_options(options: &StrategyOptions) -> Result<Self> {
        Ok(Self {
            mask_symbol: options.single_char("mask_symbol")?.unwrap_or('*'),
        })
    }

    fn mask_local(&self, local: &str) -> String {
        match classify_local(local) {
            // Quotes are dropped; the inner text keeps its first and last
            // char. A one-char local duplicates that char.
            LocalShape::Quoted { inner } => mask_ends(inner, self.mask_symbol),
            LocalShape::Plain => mask_ends(local, self.mask_symbol),
        }
    }

    fn mask_domain(&self, domain: &str) -> String {
        let sym = self.mask_symbol;
        match classify_domain(domain) {
            DomainShape::BracketedIpv4 => format!("[{sym}.{sym}.{sym}.{sym}]"),
            DomainShape::BracketedTagged { head } => format!("{head}{sym}]"),
            // The TLD stays readable; the rest of the domain keeps only
            // its length.
            DomainShape::Dotted { stem, tld } => {
                format!("{}.{tld}", mask_run(sym, stem.chars().count()))
            }
            DomainShape::Bare => mask_run(sym, domain.chars().count()),
        }
    }
}

impl MaskStrategy for SmartStrategy {
    fn mask(&self, m: &EmailMatch) -> String {
        format!("{}@{}", self.mask_local(m.local), self.mask_domain(m.domain))
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
