use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kira_crypto::address::{consensus_address, derive_account_addresses};
use kira_crypto::keys::{format_node_id, NodeKeypair};
use kira_crypto::seed::{generate_mnemonic, parse_mnemonic};
use kira_types::primitives::RoleLabel;
use zeroize::Zeroizing;

use crate::backend::{KeygenBackend, StandardBackend};
use crate::config::KeygenConfig;
use crate::error::CliError;
use crate::format::{
    print_divider, print_info, print_key_set, print_mnemonic_box, print_success, print_written,
};
use crate::master::{derive_priv_key_mnemonic, derive_role_mnemonic, generate_key_set};
use crate::prompt::mnemonic_or_prompt;
use crate::valkey::read_node_id;

#[derive(Parser)]
#[command(
    name = "kira-keygen",
    about = "Deterministic validator key generation from a master mnemonic",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Derive every validator mnemonic from a master mnemonic
    Master {
        /// Master mnemonic (prompted for if omitted)
        #[arg(short, long)]
        mnemonic: Option<String>,
        /// Directory to write key files and mnemonics.env into
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Bech32 address prefix
        #[arg(long)]
        prefix: Option<String>,
        /// HD derivation path for account keys
        #[arg(long)]
        path: Option<String>,
        /// Print the derived set as JSON
        #[arg(long)]
        json: bool,
    },
    /// Derive a single child mnemonic for an arbitrary role label
    Derive {
        /// Master mnemonic (prompted for if omitted)
        #[arg(short, long)]
        mnemonic: Option<String>,
        /// Role name, e.g. "validator"
        #[arg(long)]
        name: String,
        /// Role type, e.g. "node"
        #[arg(long = "type")]
        kind: String,
    },
    /// Derive the private-key mnemonic
    PrivKey {
        /// Master mnemonic (prompted for if omitted)
        #[arg(short, long)]
        mnemonic: Option<String>,
    },
    /// Generate a fresh random master mnemonic
    New,
    /// Show the addresses controlled by a mnemonic
    Addresses {
        /// Mnemonic (prompted for if omitted)
        #[arg(short, long)]
        mnemonic: Option<String>,
        /// Bech32 address prefix
        #[arg(long)]
        prefix: Option<String>,
        /// HD derivation path for account keys
        #[arg(long)]
        path: Option<String>,
    },
    /// Print the node ID of a node key or node id file
    ShowNodeId {
        /// Path to a node key JSON file or node id file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Write a default configuration file
    Init {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

pub fn run(command: Command, config: KeygenConfig) -> Result<(), CliError> {
    let backend = StandardBackend;

    match command {
        Command::Master {
            mnemonic,
            output,
            prefix,
            path,
            json,
        } => {
            let config = config.with_overrides(prefix, path);
            let master = mnemonic_or_prompt(mnemonic, "Master mnemonic")?;
            let out = generate_key_set(&backend, &master, &config, output.as_deref())?;

            if json {
                let rendered = Zeroizing::new(serde_json::to_string_pretty(&out.set)?);
                println!("{}", rendered.as_str());
            } else if out.written.is_empty() {
                print_key_set(&out.set);
            } else {
                print_info("Validator node ID", out.set.node_id());
                print_divider();
                print_written(&out.written);
            }
        }
        Command::Derive {
            mnemonic,
            name,
            kind,
        } => {
            let master = mnemonic_or_prompt(mnemonic, "Master mnemonic")?;
            backend.validate_mnemonic(&master)?;
            let label = RoleLabel::new(&name, &kind);
            let phrase = Zeroizing::new(derive_role_mnemonic(&backend, &master, label)?);
            println!("{}", phrase.as_str());
        }
        Command::PrivKey { mnemonic } => {
            let master = mnemonic_or_prompt(mnemonic, "Master mnemonic")?;
            let phrase = Zeroizing::new(derive_priv_key_mnemonic(&backend, &master)?);
            println!("{}", phrase.as_str());
        }
        Command::New => {
            let mnemonic = generate_mnemonic();
            let phrase = Zeroizing::new(mnemonic.to_string());
            print_mnemonic_box("master", &phrase);
            println!();
            print_success("Generated a new 24-word master mnemonic");
        }
        Command::Addresses {
            mnemonic,
            prefix,
            path,
        } => {
            let config = config.with_overrides(prefix, path);
            let derivation = &config.derivation;
            let phrase = mnemonic_or_prompt(mnemonic, "Mnemonic")?;
            let parsed = parse_mnemonic(&phrase)?;

            let addresses =
                derive_account_addresses(&parsed, &derivation.hd_path, &derivation.prefix)?;
            let keypair = NodeKeypair::from_mnemonic(&parsed);
            let valcons = consensus_address(&keypair.public_key(), &derivation.prefix)?;

            print_info("Account", &addresses.account);
            print_info("Operator", &addresses.valoper);
            print_info("Consensus", &valcons);
            print_info("Node ID", &format_node_id(&keypair.node_id()));
        }
        Command::ShowNodeId { file } => {
            println!("{}", format_node_id(&read_node_id(&file)?));
        }
        Command::Init { dir } => {
            let path = KeygenConfig::init(&dir)?;
            print_success(&format!("wrote {}", path.display()));
        }
    }

    Ok(())
}
