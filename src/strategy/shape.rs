//! Shape classification shared by the Smart and Paranoid strategies.
//!
//! Shapes are derived on demand from the matched text. They are cheap to
//! compute and must not be cached anywhere.

/// How a domain part should be masked. Follows from the catch-all pattern:
/// a bracketed domain is either a dotted IPv4 literal or `tag:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainShape<'a> {
    /// `[d.d.d.d]`
    BracketedIpv4,
    /// `[tag:value]`, e.g. an IPv6 literal. `head` runs from the opening
    /// bracket through the first `:`.
    BracketedTagged { head: &'a str },
    /// At least one dot; `tld` is the label after the last dot.
    Dotted { stem: &'a str, tld: &'a str },
    /// No dot at all, e.g. `localhost`.
    Bare,
}

pub fn classify_domain(domain: &str) -> DomainShape<'_> {
    if domain.starts_with('[') && domain.ends_with(']') && domain.len() >= 2 {
        let inner = &domain[1..domain.len() - 1];
        return match inner.find(':') {
            // '[' and ':' are both one byte, so head ends at inner idx + 2.
            Some(idx) => DomainShape::BracketedTagged {
                head: &domain[..idx + 2],
            },
            None => DomainShape::BracketedIpv4,
        };
    }
    match domain.rsplit_once('.') {
        Some((stem, tld)) => DomainShape::Dotted { stem, tld },
        None => DomainShape::Bare,
    }
}

/// Whether a local part is a quoted string. Quotes come through from the
/// matcher; the masking payload works on the inner text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalShape<'a> {
    Quoted { inner: &'a str },
    Plain,
}

pub fn classify_local(local: &str) -> LocalShape<'_> {
    if local.len() >= 2 && local.starts_with('"') && local.ends_with('"') {
        LocalShape::Quoted {
            inner: &local[1..local.len() - 1],
        }
    } else {
        LocalShape::Plain
    }
}

/// First char + one mask symbol + last char. A single-character input
/// duplicates its only char, so the output never leaks the length.
pub fn mask_ends(s: &str, mask_symbol: char) -> String {
    let mut chars = s.chars();
    match (chars.next(), s.chars().last()) {
        (Some(first), Some(last)) => format!("{first}{mask_symbol}{last}"),
        _ => mask_symbol.to_string(),
    }
}

/// A run of `count` mask symbols (length-preserving replacement).
pub fn mask_run(mask_symbol: char, count: usize) -> String {
    mask_symbol.to_string().repeat(count)
}
