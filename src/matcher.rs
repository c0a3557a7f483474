use regex::Regex;

/// Catch-all email pattern. Deliberately over-broad: it matches anything
/// shaped like `local@domain`, including plenty of strings no RFC would
/// accept, because over-masking is the safe failure mode for a log filter.
/// The local part is either a quoted string or a run of characters that
/// cannot terminate it; the domain is a bracketed literal or dotted labels.
const EMAIL_CATCH_ALL_PATTERN: &str =
    r#"(?:[^ "\[\]<>]+|".+")@(?:\[(?:[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+|[A-Za-z0-9]+:[^\]]+)\]|[^ {}():;<>]+(?:\.[^ {}():;<>]+)*)"#;

/// Postfix formats message IDs like `20211207101128.0805BA272@31bfa77a2cab`.
/// They match the email shape but must not be masked.
const MESSAGE_ID_PATTERN: &str = r"^[0-9]+\.[0-9A-F]+@[0-9a-f]+$";

/// One email-shaped span found in a line, split on the last `@`.
/// The local part may legally contain `@`; the domain cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMatch<'a> {
    /// Byte offset of the span start within the line.
    pub start: usize,
    /// Byte offset one past the span end.
    pub end: usize,
    /// The full matched text.
    pub text: &'a str,
    /// Everything before the last `@`. Quotes, if any, are still present.
    pub local: &'a str,
    /// Everything after the last `@`.
    pub domain: &'a str,
}

/// Scans free text for email-shaped spans.
pub struct EmailMatcher {
    email: Regex,
    message_id: Regex,
}

impl EmailMatcher {
    pub fn new() -> Self {
        Self {
            email: Regex::new(EMAIL_CATCH_ALL_PATTERN)
                .expect("email catch-all pattern should compile"),
            message_id: Regex::new(MESSAGE_ID_PATTERN)
                .expect("message id pattern should compile"),
        }
    }

    /// Find all email-shaped spans in `line`, left to right, non-overlapping.
    /// Spans that are really message identifiers are excluded here, before
    /// any strategy sees them.
    pub fn find_email_spans<'a>(&self, line: &'a str) -> Vec<EmailMatch<'a>> {
        self.email
            .find_iter(line)
            .filter(|m| !self.is_message_id(m.as_str()))
            .map(|m| {
                let text = m.as_str();
                let (local, domain) = text.rsplit_once('@').unwrap_or((text, ""));
                EmailMatch {
                    start: m.start(),
                    end: m.end(),
                    text,
                    local,
                    domain,
                }
            })
            .collect()
    }

    /// True when the whole span is a mail-queue message identifier.
    pub fn is_message_id(&self, span: &str) -> bool {
        self.message_id.is_match(span)
    }
}

impl Default for EmailMatcher {
    fn default() -> Self {
        Self::new()
    }
}
