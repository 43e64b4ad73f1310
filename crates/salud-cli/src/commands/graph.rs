use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use salud_index::build_graph;

use crate::corpus;

#[derive(Args)]
pub struct GraphArgs {
    /// Center the graph on one record ID
    #[arg(long)]
    pub center: Option<String>,

    /// Neighborhood depth when centered (default 2)
    #[arg(long, default_value = "2")]
    pub depth: usize,
}

pub fn run(args: &GraphArgs, paths: &[PathBuf]) -> Result<()> {
    let index = corpus::load(paths)?;
    let graph = build_graph(&index);

    let graph = match &args.center {
        Some(center) => graph.subgraph(center, args.depth),
        None => graph,
    };

    print!("{}", graph.to_dot());
    Ok(())
}
