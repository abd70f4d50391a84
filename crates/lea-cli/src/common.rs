//! Shared types and helpers for the CLI.

use anyhow::{Context, Result, bail};
use lea_sdk::{Connection, Keyset, Signer};
use num_bigint::BigUint;
use std::path::PathBuf;

/// Global options available on every command.
#[derive(clap::Args, Debug)]
pub struct GlobalOpts {
    /// Cluster to send to: a known name or a node URL
    #[arg(long, global = true, default_value = lea_sdk::DEFAULT_CLUSTER)]
    pub cluster: String,

    /// Write the JSON result to this file as well as stdout
    #[arg(short, long, global = true)]
    pub outfile: Option<PathBuf>,

    /// Suppress the per-transaction status line on stderr
    #[arg(long, global = true, default_value_t = false)]
    pub quiet: bool,
}

impl GlobalOpts {
    /// Build a cluster connection from the global options.
    pub fn build_connection(&self) -> Result<Connection> {
        Connection::new(&self.cluster)
            .with_context(|| format!("failed to connect to cluster {:?}", self.cluster))
    }
}

/// Resolve a command-line token into an address.
///
/// A token ending in `.json` is read as a JSON file and must carry a string
/// `address` field; anything else is taken literally.
pub fn resolve_address(input: &str) -> Result<String> {
    if !input.ends_with(".json") {
        return Ok(input.to_string());
    }

    let contents = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read address file {input}"))?;
    let parsed: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse address file {input}"))?;

    match parsed.get("address").and_then(|v| v.as_str()) {
        Some(address) => Ok(address.to_string()),
        None => bail!("address file {input} is missing an \"address\" field"),
    }
}

/// Load a signer from a keyfile.
///
/// The keyfile must be a `.json` path carrying both `keyset` and `address`
/// fields. The keyset blob is opaque and passed through to the builders
/// verbatim.
pub fn read_signer(keyfile: &str) -> Result<Signer> {
    if !keyfile.ends_with(".json") {
        bail!("keyfile must be a .json path, got {keyfile:?}");
    }

    let contents = std::fs::read_to_string(keyfile)
        .with_context(|| format!("failed to read keyfile {keyfile}"))?;
    let parsed: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse keyfile {keyfile}"))?;

    let address = parsed
        .get("address")
        .and_then(|v| v.as_str())
        .with_context(|| format!("keyfile {keyfile} is missing an \"address\" field"))?
        .to_string();
    let keyset = parsed
        .get("keyset")
        .cloned()
        .with_context(|| format!("keyfile {keyfile} is missing a \"keyset\" field"))?;

    Ok(Signer {
        address,
        keyset: Keyset(keyset),
    })
}

/// Parse an amount string into an exact unbounded integer.
///
/// Accepts plain unsigned decimal digits, with a trailing `n` tolerated
/// (large-integer literal habit). Anything else is an input error.
pub fn parse_amount(s: &str) -> Result<BigUint> {
    let trimmed = s.trim();
    let digits = trimmed.strip_suffix('n').unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        bail!("invalid amount {s:?} — expected an unsigned integer like \"1000000\"");
    }

    digits
        .parse::<BigUint>()
        .with_context(|| format!("invalid amount {s:?}"))
}
