use clap::Parser;

use email_anonymizer::config::StrategySpec;
use email_anonymizer::processor::LineProcessor;
use email_anonymizer::strategy::build_strategy;

/// Anonymize email addresses in log lines read from stdin.
#[derive(Parser)]
#[command(name = "email-anonymizer", version, about)]
struct Cli {
    /// Masking strategy, optionally with options:
    /// `smart`, `paranoid`, `noop`, `default`, or e.g.
    /// `hash?salt=secret&short_sha=true`. Defaults to `smart`.
    strategy: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // stdout is the data channel; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let spec = StrategySpec::parse(cli.strategy.as_deref().unwrap_or(""))?;
    let strategy = build_strategy(&spec.name, &spec.options)?;
    let processor = LineProcessor::new(strategy);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    processor.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
