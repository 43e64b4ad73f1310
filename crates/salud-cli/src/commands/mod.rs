pub mod export;
pub mod graph;
pub mod lint;
pub mod query;
pub mod show;
pub mod stats;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the corpus and report every issue in one pass
    Lint(lint::LintArgs),
    /// Show aggregate statistics across the corpus
    Stats,
    /// Show one record by ID
    Show(show::ShowArgs),
    /// Filter records by tags, type, status, or keyword
    Query(query::QueryArgs),
    /// Render the cross-reference graph as Graphviz DOT
    Graph(graph::GraphArgs),
    /// Print the whole corpus as JSON
    Export,
}
