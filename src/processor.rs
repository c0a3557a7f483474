use std::io::{BufRead, Write};

use serde::Serialize;

use crate::error::Result;
use crate::matcher::EmailMatcher;
use crate::strategy::MaskStrategy;

/// Outcome of processing one line. A rewrite that is byte-identical to the
/// input counts as `Unchanged`; the distinction drives the output encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    Unchanged,
    Rewritten(String),
}

#[derive(Serialize)]
struct Rewritten<'a> {
    msg: &'a str,
}

/// Applies one configured strategy to lines of text.
pub struct LineProcessor {
    matcher: EmailMatcher,
    strategy: Box<dyn MaskStrategy>,
}

impl LineProcessor {
    pub fn new(strategy: Box<dyn MaskStrategy>) -> Self {
        Self {
            matcher: EmailMatcher::new(),
            strategy,
        }
    }

    /// Mask every email-shaped span in `line`. Text outside the spans is
    /// preserved byte-for-byte.
    pub fn process(&self, line: &str) -> LineResult {
        let spans = self.matcher.find_email_spans(line);
        if spans.is_empty() {
            return LineResult::Unchanged;
        }

        let mut out = String::with_capacity(line.len());
        let mut last_end = 0;
        for span in &spans {
            out.push_str(&line[last_end..span.start]);
            out.push_str(&self.strategy.mask(span));
            last_end = span.end;
        }
        out.push_str(&line[last_end..]);

        if out == line {
            LineResult::Unchanged
        } else {
            LineResult::Rewritten(out)
        }
    }

    /// One output record per line: `{}` when nothing changed, otherwise
    /// `{"msg":"<rewritten>"}` with non-ASCII emitted literally.
    pub fn encode(&self, line: &str) -> Result<String> {
        match self.process(line) {
            LineResult::Unchanged => Ok("{}".to_string()),
            LineResult::Rewritten(msg) => Ok(serde_json::to_string(&Rewritten { msg: &msg })?),
        }
    }

    /// The filter loop: read a line, write its record, flush, repeat.
    /// End-of-input is the sole termination condition.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            writeln!(writer, "{}", self.encode(&line)?)?;
            writer.flush()?;
        }
        Ok(())
    }
}
