//! Lea CLI - a command-line client for the Lea network.
//!
//! Forwards user commands to the system program's transaction builders and
//! the external keygen tool, emitting results as a single line of JSON on
//! stdout. State-mutating commands chain against the signer's previous
//! transaction hash automatically; read-only queries go straight through.

mod commands;
mod common;
mod prefetch;
mod report;
mod serialize;

use clap::{CommandFactory, Parser};
use commands::{keygen, query, token};
use common::GlobalOpts;

/// Lea CLI - interact with the Lea network from the command line.
#[derive(Parser, Debug)]
#[command(name = "lea", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Publish the signer's keyset on chain
    PublishKeyset(token::KeyArgs),

    /// Mint tokens to an address
    Mint(token::TransferLikeArgs),

    /// Transfer tokens from the signer to an address
    Transfer(token::TransferLikeArgs),

    /// Burn tokens from the signer's balance
    Burn(token::BurnArgs),

    /// Query the balance of an address
    GetBalance(query::AddressArgs),

    /// Query the last transaction hash recorded for an address
    GetLastTxHash(query::AddressArgs),

    /// Query the mint allowance of an address
    GetAllowedMint(query::AddressArgs),

    /// Query the current total supply
    GetCurrentSupply,

    /// Whitelist an address for minting
    MintWhitelist(token::TransferLikeArgs),

    /// Run the external lea-keygen tool (all arguments pass through)
    Keygen(keygen::KeygenArgs),
}

#[tokio::main]
async fn main() {
    let argv: Vec<String> = std::env::args().collect();

    // `lea keygen …` is a pure proxy and bypasses all other parsing: the
    // tool's own globals and --help belong to the child, not to clap.
    let result = if let Some(rest) = keygen::passthrough_args(&argv) {
        keygen::run(rest).await
    } else {
        let cli = match Cli::try_parse_from(&argv) {
            Ok(cli) => cli,
            Err(e) => {
                // Help and version print to stdout and exit 0; usage errors
                // (including unknown commands) go to stderr and exit 1.
                let code = if e.use_stderr() { 1 } else { 0 };
                let _ = e.print();
                std::process::exit(code);
            }
        };
        run(cli).await
    };

    let exit = match result {
        Ok(code) => code,
        Err(e) => {
            // Errors surface as structured JSON on stdout, never raw traces.
            println!("{}", serde_json::json!({ "error": format!("{e:#}") }));
            1
        }
    };
    std::process::exit(exit);
}

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(0);
    };

    match command {
        Command::PublishKeyset(args) => token::publish_keyset(&args, &cli.global).await,
        Command::Mint(args) => token::mint(&args, &cli.global).await,
        Command::Transfer(args) => token::transfer(&args, &cli.global).await,
        Command::Burn(args) => token::burn(&args, &cli.global).await,
        Command::GetBalance(args) => query::get_balance(&args, &cli.global).await,
        Command::GetLastTxHash(args) => query::get_last_tx_hash(&args, &cli.global).await,
        Command::GetAllowedMint(args) => query::get_allowed_mint(&args, &cli.global).await,
        Command::GetCurrentSupply => query::get_current_supply(&cli.global).await,
        Command::MintWhitelist(args) => token::mint_whitelist(&args, &cli.global).await,
        Command::Keygen(args) => keygen::run(&args.args).await,
    }
}
