//! Command line interface.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tfbridge_codegen::GeneratorConfig;

/// tfbridge command line.
#[derive(Parser, Debug)]
#[command(
    name = "tfbridge",
    version,
    about = "Compile provider resource schemas into typed Rust resource bindings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate Rust bindings from a JSON provider schema
    Generate {
        /// Path to the provider schema
        #[arg(short, long)]
        schema: PathBuf,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,

        /// Namespace for registered names (default: provider name)
        #[arg(short, long)]
        namespace: Option<String>,

        /// Crate path generated code uses to reach the runtime
        #[arg(long, default_value = tfbridge_codegen::generator::DEFAULT_RUNTIME_PATH)]
        runtime_path: String,

        /// Skip parsing the generated source before writing it
        #[arg(long)]
        no_verify: bool,
    },
}

/// Runs a parsed command.
///
/// # Errors
/// Returns an error if generation or writing fails.
pub fn dispatch(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate {
            schema,
            out,
            namespace,
            runtime_path,
            no_verify,
        } => {
            let mut config = GeneratorConfig::new()
                .runtime_path(runtime_path)
                .verify_output(!no_verify);
            if let Some(ns) = namespace {
                config = config.namespace(ns);
            }

            tracing::info!("Generating {} from {}", out.display(), schema.display());
            tfbridge_codegen::generate_to_file(&schema, &out, &config).with_context(|| {
                format!("failed to generate bindings from {}", schema.display())
            })?;
            Ok(())
        }
    }
}
