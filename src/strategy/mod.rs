pub mod hash;
pub mod identity;
pub mod paranoid;
pub mod shape;
pub mod smart;

pub use hash::HashStrategy;
pub use identity::IdentityStrategy;
pub use paranoid::ParanoidStrategy;
pub use smart::SmartStrategy;

use crate::config::StrategyOptions;
use crate::error::{AnonymizerError, Result};
use crate::matcher::EmailMatch;

/// One masking strategy. Configured once at startup, immutable and
/// stateless across lines afterwards.
pub trait MaskStrategy: Send + Sync + std::fmt::Debug {
    /// Rewrite one matched span. Never fails: the span shape is guaranteed
    /// by the matcher, and the payloads are total over those shapes.
    fn mask(&self, m: &EmailMatch) -> String;

    /// Name of this strategy (for logging/debugging).
    fn name(&self) -> &str;
}

/// Build a strategy from its public name and option mapping. This is a
/// closed registry: the aliases below are the only names accepted, and
/// lookup is case-insensitive. `default` maps to Smart.
pub fn build_strategy(name: &str, options: &StrategyOptions) -> Result<Box<dyn MaskStrategy>> {
    let strategy: Box<dyn MaskStrategy> = match name.to_lowercase().as_str() {
        "default" | "smart" => Box::new(SmartStrategy::from_options(options)?),
        "paranoid" => Box::new(ParanoidStrategy::from_options(options)?),
        "noop" => Box::new(IdentityStrategy::from_options(options)?),
        "hash" => Box::new(HashStrategy::from_options(options)?),
        _ => {
            return Err(AnonymizerError::UnknownStrategy {
                name: name.to_string(),
            })
        }
    };
    tracing::debug!(strategy = strategy.name(), "constructed masking strategy");
    Ok(strategy)
}
