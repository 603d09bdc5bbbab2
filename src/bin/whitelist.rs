#![forbid(unsafe_code)]

//! Offline commitment builder: loads a whitelist file, builds the Merkle
//! commitment, and prints the root or writes a per-address proof artifact.
//! The root goes to the gate; proofs are handed to claimants out-of-band.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use alloy_primitives::{Address, B256};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use claim_gate::domain::tree::WhitelistTree;

#[derive(Parser)]
#[command(name = "whitelist")]
#[command(about = "Build whitelist commitments and membership proofs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the commitment root for a whitelist file.
    Root {
        /// Whitelist file, one address per line ('#' comments allowed)
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Emit the membership proof for one whitelisted address as JSON.
    Proof {
        /// Whitelist file, one address per line ('#' comments allowed)
        #[arg(short, long)]
        input: PathBuf,

        /// The address to extract the proof for
        #[arg(short = 'a', long)]
        identity: String,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Proof artifact delivered to a claimant.
#[derive(Debug, Serialize)]
struct ProofArtifact {
    root: B256,
    identity: Address,
    siblings: Vec<B256>,
}

fn load_whitelist(path: &PathBuf) -> Result<Vec<Address>> {
    let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;
    let reader = BufReader::new(file);

    let mut identities = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("failed to read line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let identity: Address = trimmed
            .parse()
            .with_context(|| format!("invalid address at line {}: {trimmed}", line_num + 1))?;
        identities.push(identity);
    }

    Ok(identities)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Root { input } => {
            let identities = load_whitelist(&input)?;
            tracing::info!(count = identities.len(), "whitelist loaded");

            let tree = WhitelistTree::build(&identities).context("failed to build commitment")?;
            println!("{}", tree.root());
        }
        Commands::Proof {
            input,
            identity,
            output,
        } => {
            let identities = load_whitelist(&input)?;
            let identity: Address = identity.parse().context("invalid identity address")?;

            let tree = WhitelistTree::build(&identities).context("failed to build commitment")?;
            let proof = tree
                .proof_of(identity)
                .context("failed to extract proof")?;

            let artifact = ProofArtifact {
                root: tree.root(),
                identity,
                siblings: proof.siblings,
            };
            let json =
                serde_json::to_string_pretty(&artifact).context("failed to serialize proof")?;

            match output {
                Some(path) => {
                    let mut file = File::create(&path)
                        .with_context(|| format!("failed to create {path:?}"))?;
                    file.write_all(json.as_bytes()).context("failed to write proof")?;
                    file.write_all(b"\n").context("failed to write proof")?;
                    tracing::info!(?path, siblings = artifact.siblings.len(), "proof written");
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
