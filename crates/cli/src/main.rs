use anyhow::Result;
use clap::{Parser, Subcommand};
use ringtrace::ring::DEFAULT_MAX_SEARCH;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "ringtrace")]
#[command(about = "Collapse collinear runs in traced contours")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compress a traced contour and write its corners
    Simplify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Hop cap for every list traversal
        #[arg(long, default_value_t = DEFAULT_MAX_SEARCH)]
        max_search: usize,
    },
    /// Print traced/corner counts, area and bounds as JSON
    Stats {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MAX_SEARCH)]
        max_search: usize,
    },
    /// Write a synthetic traced contour
    Demo {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 8)]
        corners: usize,
        #[arg(long, default_value_t = 256)]
        extent: u32,
    },
    /// Print version and code revision
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Simplify {
            input,
            out,
            max_search,
        } => {
            tracing::info!(input = %input.display(), out = %out.display(), max_search, "simplify");
            commands::simplify(&input, &out, max_search)?;
        }
        Action::Stats { input, max_search } => {
            let summary = commands::stats(&input, max_search)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Action::Demo {
            out,
            seed,
            index,
            corners,
            extent,
        } => {
            commands::demo(&out, seed, index, corners, extent)?;
        }
        Action::Report => println!("{}", serde_json::to_string_pretty(&commands::report())?),
    }
    Ok(())
}
