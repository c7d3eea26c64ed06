//! `gscape` — command-line access to the Graphscape data layer.
//!
//! Four subcommands:
//!
//! - **`forces`** — print the default force-layout configuration.
//! - **`dataset`** — print the bundled seed graph.
//! - **`validate`** — integrity-check a dataset JSON file.
//! - **`ns`** — list the namespace table or expand a compact IRI.
//!
//! `validate` reads JSON from a file path or from stdin (`-`). The `ns`
//! subcommands need the deployment origin, from `--origin` or the
//! `GSCAPE_ORIGIN` environment variable.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use graphscape::{validate_graph, ForceConfig, GraphData, NamespaceTable};

/// gscape — Graphscape data layer CLI
///
/// Inspect the shipped defaults, validate datasets, and work with
/// vocabulary namespaces.
#[derive(Parser)]
#[command(name = "gscape", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the default force-layout configuration.
    ///
    /// Human-readable by default; pass --json for the exact wire form the
    /// layout engine consumes.
    Forces {
        /// Emit JSON instead of the text summary.
        #[arg(long)]
        json: bool,
    },

    /// Print the bundled seed graph (the systemd boot example).
    Dataset {
        /// Emit JSON instead of the text summary.
        #[arg(long)]
        json: bool,
    },

    /// Validate a dataset JSON file.
    ///
    /// Checks that every link endpoint indexes an existing node and that
    /// node names are non-empty and unique. Exits 0 if valid, 1 otherwise.
    ///
    /// Pass `-` as FILE to read from stdin.
    Validate {
        /// Path to a GraphData JSON file, or `-` for stdin.
        file: PathBuf,
    },

    /// Work with the vocabulary namespace table.
    #[command(subcommand)]
    Ns(NsCommand),
}

#[derive(Subcommand)]
enum NsCommand {
    /// List all prefixes and their base IRIs.
    List(NsArgs),

    /// Expand a compact IRI (prefix:localName) to a full IRI.
    ///
    /// Example:
    ///   gscape ns expand --origin http://localhost:8080 sh:NodeShape
    Expand {
        #[command(flatten)]
        args: NsArgs,

        /// The compact IRI to expand, e.g. `rdf:type`.
        curie: String,
    },
}

#[derive(Args)]
struct NsArgs {
    /// Origin this deployment is served from (scheme://host[:port]).
    /// The `api` namespace is rooted here.
    #[arg(long, env = "GSCAPE_ORIGIN", value_name = "URL")]
    origin: String,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Forces { json } => {
            let cfg = ForceConfig::default();
            if json {
                println!("{}", serde_json::to_string_pretty(&cfg).unwrap());
            } else {
                print!("{}", graphscape::render::render_forces(&cfg));
            }
        }

        Command::Dataset { json } => {
            let graph = GraphData::seed();
            if json {
                println!("{}", serde_json::to_string_pretty(&graph).unwrap());
            } else {
                print!("{}", graphscape::render::render_graph(&graph));
            }
        }

        Command::Validate { file } => {
            let json = read_input(&file);
            let graph: GraphData = serde_json::from_str(&json)
                .unwrap_or_else(|e| fatal(&format!("failed to parse input as a dataset: {}", e)));
            match validate_graph(&graph) {
                Ok(()) => println!(
                    "valid: {} nodes, {} links",
                    graph.node_count(),
                    graph.link_count()
                ),
                Err(e) => {
                    eprintln!("error: {}", e);
                    process::exit(1);
                }
            }
        }

        Command::Ns(ns_command) => match ns_command {
            NsCommand::List(args) => {
                let ns = table(&args.origin);
                for (prefix, iri) in ns.prefixes() {
                    println!("{:<8}{}", prefix, iri);
                }
            }
            NsCommand::Expand { args, curie } => {
                let ns = table(&args.origin);
                match ns.expand(&curie) {
                    Ok(iri) => println!("{}", iri),
                    Err(e) => fatal(&e.to_string()),
                }
            }
        },
    }
}

/// Build the namespace table, or exit with the origin error.
fn table(origin: &str) -> NamespaceTable {
    NamespaceTable::new(origin).unwrap_or_else(|e| fatal(&e.to_string()))
}

/// Read the full contents of a file, or stdin when the path is `"-"`.
fn read_input(path: &PathBuf) -> String {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {}", e)));
        buf
    } else {
        fs::read_to_string(path)
            .unwrap_or_else(|e| fatal(&format!("failed to read {}: {}", path.display(), e)))
    }
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("gscape: {}", msg);
    process::exit(2);
}
