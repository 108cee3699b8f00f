use std::io;

use clap::{ArgAction, Parser};
use roster::shell::{Shell, StudentRegistry};
use roster::Record;

/// Interactive student roster backed by a linked list and an average BST.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv); logs go to stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Start with a handful of sample students
    #[arg(long)]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut registry = StudentRegistry::new();
    if cli.demo {
        for record in demo_students() {
            registry.add_last(record)?;
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::with_registry(stdin.lock(), stdout.lock(), registry);
    shell.run()?;
    Ok(())
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn demo_students() -> Vec<Record> {
    vec![
        Record::new(1, "Amina", "North", 92.0, 88.5),
        Record::new(2, "Bruno", "South", 61.0, 58.0),
        Record::new(3, "Chen", "East", 74.5, 79.0),
        Record::new(4, "Dalia", "West", 45.0, 52.0),
        Record::new(5, "Emeka", "North", 88.5, 92.0),
    ]
}
