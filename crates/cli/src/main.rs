// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use alloy_primitives::Address;
use anyhow::bail;
use atstdd_cli::commands::{encode, inspect, pack, predict, verify, vhash};
use atstdd_cli::config::CliConfig;
use atstdd_cli::telemetry;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atstdd")]
#[command(about = "Encode, pack and verify EAS attestation batches offline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode decoded attestations against their registered schemas
    Encode {
        /// Decoded attestations (generator output)
        #[arg(long, short)]
        input: PathBuf,

        /// Schema id -> schema string map
        #[arg(long, short)]
        schemas: PathBuf,

        #[arg(long, short, default_value = "attestations.json")]
        output: PathBuf,
    },
    /// Group encoded attestations by schema
    Pack {
        #[arg(long, short)]
        attestations: PathBuf,

        /// Print the submission JSON instead of a summary table
        #[arg(long)]
        json: bool,
    },
    /// Print the verification hash of an attestations file
    Vhash {
        #[arg(long, short)]
        attestations: PathBuf,
    },
    /// Predict the attester address for a collection
    Predict {
        /// EAS contract (defaults to the chain's known deployment)
        #[arg(long)]
        eas: Option<Address>,

        /// Collection name
        #[arg(long, short)]
        name: String,

        /// Attester creation bytecode as a hex file
        #[arg(long)]
        bytecode: Option<PathBuf>,

        #[arg(long)]
        factory: Option<Address>,

        /// Factory creation bytecode as a hex file; the factory address is
        /// derived from the deployment proxy instead of --factory
        #[arg(long, conflicts_with = "factory")]
        factory_bytecode: Option<PathBuf>,
    },
    /// Check a locked attester against a local attestations file
    Verify {
        #[arg(long, short)]
        attestations: PathBuf,

        /// Ledger snapshot: attester -> { locked, vhash }
        #[arg(long, short)]
        ledger: PathBuf,

        #[arg(long, conflicts_with = "name")]
        attester: Option<Address>,

        /// Collection name, used to predict the attester address
        #[arg(long, short)]
        name: Option<String>,

        #[arg(long)]
        eas: Option<Address>,

        #[arg(long)]
        bytecode: Option<PathBuf>,
    },
    /// Decode an attestations file for review
    Inspect {
        #[arg(long, short)]
        attestations: PathBuf,

        #[arg(long, short)]
        schemas: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env()?;
    telemetry::init_tracing(&config.log_filter);

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, schemas, output } => encode::run(&input, &schemas, &output),
        Commands::Pack { attestations, json } => pack::run(&attestations, json),
        Commands::Vhash { attestations } => vhash::run(&attestations),
        Commands::Predict {
            eas,
            name,
            bytecode,
            factory,
            factory_bytecode,
        } => predict::run(&config, eas, &name, bytecode, factory, factory_bytecode),
        Commands::Verify {
            attestations,
            ledger,
            attester,
            name,
            eas,
            bytecode,
        } => {
            let target = match (attester, name) {
                (Some(addr), _) => verify::Target::Attester(addr),
                (None, Some(name)) => verify::Target::Collection { name, eas, bytecode },
                (None, None) => bail!("pass either --attester or --name"),
            };
            verify::run(&config, &attestations, &ledger, target)
        }
        Commands::Inspect { attestations, schemas } => inspect::run(&attestations, &schemas),
    }
}
