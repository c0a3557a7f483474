use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::StrategyOptions;
use crate::error::{AnonymizerError, Result};
use crate::matcher::EmailMatch;

use super::MaskStrategy;

type HmacSha256 = Hmac<Sha256>;

/// Salted one-way hashing. A caller holding the same salt can recompute the
/// hash of a known address to search for it in the output, but nobody can
/// run a dictionary attack without the salt. That is why `salt` is a
/// required option.
#[derive(Debug)]
pub struct HashStrategy {
    salt: String,
    prefix: String,
    suffix: String,
    case_sensitive: bool,
    short_sha: bool,
    split: bool,
}

impl HashStrategy {
    pub const NAME: &'static str = "hash";

    /// Options: `salt` (required), `prefix`/`suffix` (literal wrappers),
    /// `case_sensitive` (default true), `short_sha` (default false,
    /// truncates the digest to 8 hex chars), `split` (default false,
    /// hashes local and domain independently and rejoins with `@`).
    pub fn from_options(options: &StrategyOptions) -> Result<Self> {
        let salt = options
            .last("salt")
            .ok_or(AnonymizerError::MissingOption {
                strategy: Self::NAME,
                option: "salt",
            })?
            .to_string();

        Ok(Self {
            salt,
            prefix: options.last("prefix").unwrap_or("").to_string(),
            suffix: options.last("suffix").unwrap_or("").to_string(),
            case_sensitive: options.bool_or("case_sensitive", true)?,
            short_sha: options.bool_or("short_sha", false)?,
            split: options.bool_or("split", false)?,
        })
    }

    fn digest(&self, text: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.salt.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(text.as_bytes());
        let mut hex = hex::encode(mac.finalize().into_bytes());
        if self.short_sha {
            hex.truncate(8);
        }
        hex
    }

    fn fold(&self, text: &str) -> String {
        if self.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        }
    }
}

impl MaskStrategy for HashStrategy {
    fn mask(&self, m: &EmailMatch) -> String {
        let hashed = if self.split {
            // Same domain, different user stays recognizable: the domain
            // half hashes identically across addresses.
            format!(
                "{}@{}",
                self.digest(&self.fold(m.local)),
                self.digest(&self.fold(m.domain))
            )
        } else {
            self.digest(&self.fold(m.text))
        };
        format!("{}{}{}", self.prefix, hashed, self.suffix)
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
