// Licensed under the Apache-2.0 license

mod header_gen;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use macregs_generator::GeneratorConfig;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask", about = "Register header generation tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the C register header from description files.
    HeaderGen {
        /// Description files, processed in order.
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,
        /// Output header path.
        #[arg(short, long, default_value = "macregs.h")]
        output: PathBuf,
        /// Include-guard macro.
        #[arg(long, default_value = GeneratorConfig::DEFAULT_GUARD)]
        guard: String,
        /// Carry register context across input files, as the legacy tool did.
        #[arg(long)]
        keep_context: bool,
    },
}

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();
    match cli.command {
        Commands::HeaderGen {
            inputs,
            output,
            guard,
            keep_context,
        } => header_gen::generate(&inputs, &output, &guard, keep_context),
    }
}
