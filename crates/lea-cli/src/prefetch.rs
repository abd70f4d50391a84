//! Previous-transaction-hash prefetch.
//!
//! Every state-mutating command chains against the signer's last transaction
//! by querying the network first and injecting the hash into the build call.
//! The lookup is best-effort and fail-open: an account with no history, a
//! rejected query, or a transport failure all mean "no previous hash" and
//! never abort the command.

use anyhow::{Context, Result};
use lea_sdk::{BASE_POD, Connection, LeaResult, SystemProgram, Transaction, TxOpts, TxResult, Value};

/// Outcome of a previous-hash lookup. Never an error by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrevTxHash {
    Found([u8; 32]),
    NotFound,
}

/// Extracts the previous transaction hash from a `get_last_tx_hash` result.
///
/// A not-ok response or a nonzero execution/abort status models a new or
/// unused account. The hash is taken from the decoded map under the base-pod
/// key and accepted only when it is exactly 32 bytes.
pub fn interpret_last_tx_hash(result: &TxResult) -> PrevTxHash {
    if result.rejected() {
        return PrevTxHash::NotFound;
    }
    if result.execution_status.unwrap_or(0) != 0 || result.abort_code.unwrap_or(0) != 0 {
        return PrevTxHash::NotFound;
    }
    let Some(decoded) = &result.decoded else {
        return PrevTxHash::NotFound;
    };
    match decoded.get(BASE_POD) {
        Some(Value::Bytes(bytes)) if bytes.len() == 32 => {
            let mut hash = [0u8; 32];
            hash.copy_from_slice(&bytes);
            PrevTxHash::Found(hash)
        }
        _ => PrevTxHash::NotFound,
    }
}

/// Queries the network for the signer's last transaction hash.
pub async fn fetch_prev_tx_hash(conn: &Connection, address: &str) -> PrevTxHash {
    let query = SystemProgram::get_last_tx_hash(address);
    match conn.send(&query).await {
        Ok(result) => interpret_last_tx_hash(&result),
        // Transport failures are swallowed so first-time transactions are
        // never blocked by an absent history.
        Err(_) => PrevTxHash::NotFound,
    }
}

/// Runs the prefetch, then invokes `build` with `prev_tx_hash` populated
/// only when one was found.
pub async fn build_with_prev_hash<F>(
    conn: &Connection,
    signer_address: &str,
    build: F,
) -> Result<Transaction>
where
    F: FnOnce(TxOpts) -> LeaResult<Transaction>,
{
    let mut opts = TxOpts::default();
    if let PrevTxHash::Found(hash) = fetch_prev_tx_hash(conn, signer_address).await {
        opts.prev_tx_hash = Some(hash);
    }
    build(opts).context("failed to build transaction")
}
