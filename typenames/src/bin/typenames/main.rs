//! Command line access to legacy tensor type names.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use typenames::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "typenames")]
/// Inspect legacy tensor type names
///
/// Formats (backend, scalar type) pairs, resolves names such as
/// `torch.cuda.FloatTensor`, and lists every declared type.
struct Opt {
    #[arg(env = "TYPENAMES_CONFIG", long)]
    /// TOML file with the default tensor type
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the canonical name of a type
    Format {
        #[arg(long)]
        backend: Backend,

        #[arg(long)]
        dtype: ScalarType,
    },

    /// Resolve a canonical name to its backend and scalar type
    Parse { name: String },

    /// Print the names of all declared types
    List {
        #[arg(long)]
        /// Emit a JSON array instead of one name per line
        json: bool,
    },
}

#[derive(Serialize)]
struct Entry {
    backend: Backend,
    scalar_type: ScalarType,
    name: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::parse();
    let registry = typenames::registry::global();
    if let Some(path) = &opt.config {
        TypeConfig::from_file(path)?.apply(registry)?;
    }

    match opt.command {
        Command::Format { backend, dtype } => {
            println!("{}", TypeDescriptor::new(backend, dtype).to_textual());
        }
        Command::Parse { name } => {
            let desc = registry.parse(&name)?;
            println!("{} {}", desc.backend(), desc.scalar_type());
        }
        Command::List { json } => {
            let entries: Vec<Entry> = all_declared_types()
                .into_iter()
                .map(|(backend, scalar_type)| Entry {
                    backend,
                    scalar_type,
                    name: TypeDescriptor::new(backend, scalar_type).to_textual(),
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    println!("{}", entry.name);
                }
            }
        }
    }
    Ok(())
}
