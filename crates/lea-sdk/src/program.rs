//! System program transaction builders.
//!
//! Builders assemble opaque transaction payloads; the node owns construction
//! semantics and signing. Mutating builders take a [`Signer`] and [`TxOpts`]
//! so callers can chain against the signer's previous transaction.

use crate::error::{LeaError, LeaResult};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The fixed well-known address under which core account state (including
/// the last transaction hash) is stored in decoded results.
pub const BASE_POD: &str = "lea1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc7t0mz";

/// An opaque keyset blob, produced by the keygen tool and consumed verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyset(pub serde_json::Value);

/// An address plus its keyset, authorized to build state-mutating
/// transactions. Lives for a single command invocation.
#[derive(Debug, Clone)]
pub struct Signer {
    pub address: String,
    pub keyset: Keyset,
}

/// Per-transaction build options.
#[derive(Debug, Clone, Default)]
pub struct TxOpts {
    /// The signer's previous transaction hash, when one exists on chain.
    pub prev_tx_hash: Option<[u8; 32]>,
}

/// A built transaction, ready to send over a [`crate::Connection`].
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    program: &'static str,
    op: &'static str,
    args: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    signer: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prev_tx_hash: Option<String>,
}

impl Transaction {
    /// The operation this transaction performs.
    pub fn op(&self) -> &str {
        self.op
    }

    /// True for state-mutating transactions (those carrying a signer).
    pub fn is_mutating(&self) -> bool {
        self.signer.is_some()
    }

    /// The previous transaction hash attached at build time, hex-encoded.
    pub fn prev_tx_hash(&self) -> Option<&str> {
        self.prev_tx_hash.as_deref()
    }
}

/// Builders for the system program's operations.
pub struct SystemProgram;

impl SystemProgram {
    /// Publishes the signer's keyset on chain.
    pub fn publish_keyset(signer: &Signer, opts: &TxOpts) -> LeaResult<Transaction> {
        Self::mutating("publish_keyset", serde_json::json!({}), signer, opts)
    }

    /// Mints `amount` to `to`.
    pub fn mint(
        signer: &Signer,
        to: &str,
        amount: &BigUint,
        opts: &TxOpts,
    ) -> LeaResult<Transaction> {
        Self::mutating(
            "mint",
            serde_json::json!({ "to": to, "amount": amount.to_string() }),
            signer,
            opts,
        )
    }

    /// Transfers `amount` from the signer to `to`.
    pub fn transfer(
        signer: &Signer,
        to: &str,
        amount: &BigUint,
        opts: &TxOpts,
    ) -> LeaResult<Transaction> {
        Self::mutating(
            "transfer",
            serde_json::json!({ "to": to, "amount": amount.to_string() }),
            signer,
            opts,
        )
    }

    /// Burns `amount` from the signer's balance.
    pub fn burn(signer: &Signer, amount: &BigUint, opts: &TxOpts) -> LeaResult<Transaction> {
        Self::mutating(
            "burn",
            serde_json::json!({ "amount": amount.to_string() }),
            signer,
            opts,
        )
    }

    /// Adds `to` to the mint whitelist with allowance `amount`.
    pub fn mint_whitelist(
        signer: &Signer,
        to: &str,
        amount: &BigUint,
        opts: &TxOpts,
    ) -> LeaResult<Transaction> {
        Self::mutating(
            "mint_whitelist",
            serde_json::json!({ "to": to, "amount": amount.to_string() }),
            signer,
            opts,
        )
    }

    /// Queries the balance of `address`.
    pub fn get_balance(address: &str) -> Transaction {
        Self::query("get_balance", serde_json::json!({ "address": address }))
    }

    /// Queries the last transaction hash recorded for `address`.
    pub fn get_last_tx_hash(address: &str) -> Transaction {
        Self::query("get_last_tx_hash", serde_json::json!({ "address": address }))
    }

    /// Queries the mint allowance of `address`.
    pub fn get_allowed_mint(address: &str) -> Transaction {
        Self::query("get_allowed_mint", serde_json::json!({ "address": address }))
    }

    /// Queries the current total supply.
    pub fn get_current_supply() -> Transaction {
        Self::query("get_current_supply", serde_json::json!({}))
    }

    fn mutating(
        op: &'static str,
        args: serde_json::Value,
        signer: &Signer,
        opts: &TxOpts,
    ) -> LeaResult<Transaction> {
        if signer.address.is_empty() {
            return Err(LeaError::transaction("signer address is empty"));
        }
        Ok(Transaction {
            program: "system",
            op,
            args,
            signer: Some(serde_json::json!({
                "address": signer.address,
                "keyset": signer.keyset.0,
            })),
            prev_tx_hash: opts.prev_tx_hash.map(|h| format!("0x{}", hex::encode(h))),
        })
    }

    fn query(op: &'static str, args: serde_json::Value) -> Transaction {
        Transaction {
            program: "system",
            op,
            args,
            signer: None,
            prev_tx_hash: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> Signer {
        Signer {
            address: "lea1sender".to_string(),
            keyset: Keyset(serde_json::json!({ "scheme": "test" })),
        }
    }

    #[test]
    fn queries_are_read_only() {
        assert!(!SystemProgram::get_balance("lea1abc").is_mutating());
        assert!(!SystemProgram::get_last_tx_hash("lea1abc").is_mutating());
        assert!(!SystemProgram::get_allowed_mint("lea1abc").is_mutating());
        assert!(!SystemProgram::get_current_supply().is_mutating());
    }

    #[test]
    fn queries_carry_no_prev_hash() {
        assert!(SystemProgram::get_balance("lea1abc").prev_tx_hash().is_none());
    }

    #[test]
    fn transfer_is_mutating() {
        let tx = SystemProgram::transfer(
            &signer(),
            "lea1dest",
            &BigUint::from(1_000_000u64),
            &TxOpts::default(),
        )
        .unwrap();
        assert!(tx.is_mutating());
        assert_eq!(tx.op(), "transfer");
        assert!(tx.prev_tx_hash().is_none());
    }

    #[test]
    fn prev_hash_rides_as_hex() {
        let opts = TxOpts {
            prev_tx_hash: Some([0xab; 32]),
        };
        let tx = SystemProgram::publish_keyset(&signer(), &opts).unwrap();
        let hex = tx.prev_tx_hash().unwrap();
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 2 + 64);
    }

    #[test]
    fn empty_signer_address_fails() {
        let bad = Signer {
            address: String::new(),
            keyset: Keyset(serde_json::json!(null)),
        };
        assert!(SystemProgram::publish_keyset(&bad, &TxOpts::default()).is_err());
    }

    #[test]
    fn amount_serializes_as_decimal_string() {
        let big: BigUint = "340282366920938463463374607431768211456".parse().unwrap();
        let tx = SystemProgram::mint(&signer(), "lea1dest", &big, &TxOpts::default()).unwrap();
        let raw = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            raw["args"]["amount"],
            serde_json::json!("340282366920938463463374607431768211456")
        );
    }
}
