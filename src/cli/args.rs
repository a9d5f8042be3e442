//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

use crate::application::Scenario;
use crate::domain::FrontierPolicy;

/// Burn a binary tree as an undirected graph, one breadth-first stage at a time
#[derive(Parser, Debug)]
#[command(name = "graphburn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Frontier policy: dedupe or faithful (overrides GRAPHBURN_FRONTIER)
    #[arg(long, global = true, value_enum)]
    pub frontier: Option<FrontierPolicy>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in scenarios separated by a divider (default)
    Demo,

    /// Burn a single scenario
    Run {
        #[arg(value_enum)]
        scenario: Scenario,
        /// Start from the first node (pre-order) with this value
        #[arg(short, long, allow_negative_numbers = true)]
        start: Option<i64>,
    },

    /// Show a scenario's tree
    Tree {
        #[arg(value_enum)]
        scenario: Scenario,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
