use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod corpus;
mod output;

#[derive(Parser)]
#[command(
    name = "salud",
    version,
    about = "Lint, inspect, and export the bilingual patient-education corpus"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Corpus JSON files or directories (defaults to the built-in corpus)
    #[arg(long, global = true)]
    corpus: Vec<std::path::PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        commands::Commands::Lint(args) => commands::lint::run(args, &cli.corpus, cli.format),
        commands::Commands::Stats => commands::stats::run(&cli.corpus, cli.format),
        commands::Commands::Show(args) => commands::show::run(args, &cli.corpus, cli.format),
        commands::Commands::Query(args) => commands::query::run(args, &cli.corpus, cli.format),
        commands::Commands::Graph(args) => commands::graph::run(args, &cli.corpus),
        commands::Commands::Export => commands::export::run(&cli.corpus),
    }
}
