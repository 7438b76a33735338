//! Command-line options shared by the single-k and sweep binaries.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use crate::types::{NodeId, DEFAULT_CLIQUE_SIZE, DEFAULT_DEGREE};

#[derive(Parser, Debug)]
#[command(about = "PivotScale clique counting")]
pub struct CliqueArgs {
    /// Load graph from file
    #[arg(short = 'f', value_name = "file")]
    pub file: Option<PathBuf>,

    /// Generate 2^scale kronecker graph
    #[arg(short = 'g', value_name = "scale", conflicts_with = "file")]
    pub kron_scale: Option<i32>,

    /// Generate 2^scale uniform-random graph
    #[arg(short = 'u', value_name = "scale", conflicts_with_all = ["file", "kron_scale"])]
    pub uniform_scale: Option<i32>,

    /// Average degree for synthetic graph
    #[arg(short = 'k', value_name = "degree", default_value_t = DEFAULT_DEGREE)]
    pub degree: i32,

    /// Symmetrize input edge list
    #[arg(short = 's')]
    pub symmetrize: bool,

    /// Clique size
    #[arg(short = 'c', value_name = "k", default_value_t = DEFAULT_CLIQUE_SIZE)]
    pub clique_size: NodeId,

    /// Count all possible sizes of cliques
    #[arg(short = 'm')]
    pub max_k: bool,
}

impl CliqueArgs {
    /// Parses arguments, exiting with -1 on a usage error or a missing
    /// input source, and 0 after printing help.
    pub fn parse_or_exit() -> Self {
        let cli = match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                let _ = err.print();
                process::exit(0);
            }
            Err(err) => {
                let _ = err.print();
                process::exit(-1);
            }
        };
        if cli.file.is_none() && cli.scale().is_none() {
            println!("No graph input specified. (Use -h for help)");
            process::exit(-1);
        }
        cli
    }

    pub fn scale(&self) -> Option<i32> {
        self.kron_scale.or(self.uniform_scale)
    }

    pub fn uniform(&self) -> bool {
        self.uniform_scale.is_some()
    }

    /// Synthetic inputs are always symmetrized.
    pub fn symmetrize(&self) -> bool {
        self.symmetrize || self.scale().is_some()
    }
}
