//! Node response types.

use crate::error::LeaResult;
use crate::value::Value;
use serde::Deserialize;

/// The outcome of sending a transaction (or read-only query) to a node.
///
/// The tool only reads and serializes this; it never mutates it. `ok: false`
/// is remote rejection, which is data rather than an error: the full decoded
/// body is preserved for reporting.
#[derive(Debug, Clone)]
pub struct TxResult {
    /// Whether the node accepted and executed the transaction.
    pub ok: bool,
    /// Node status code for this result.
    pub status: u16,
    /// Identifier of the committed transaction, when one was produced.
    pub tx_id: Option<String>,
    /// Execution status reported by the node; nonzero means failure.
    pub execution_status: Option<i64>,
    /// Abort code reported by the node; nonzero means an explicit abort.
    pub abort_code: Option<i64>,
    /// The decoded portion of the response.
    pub decoded: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTxResult {
    ok: bool,
    status: u16,
    #[serde(default)]
    tx_id: Option<String>,
    #[serde(default)]
    execution_status: Option<i64>,
    #[serde(default)]
    abort_code: Option<i64>,
    #[serde(default)]
    decoded: Option<serde_json::Value>,
}

impl TxResult {
    /// Parses a result from raw response JSON.
    pub fn from_wire(raw: serde_json::Value) -> LeaResult<TxResult> {
        let wire: WireTxResult = serde_json::from_value(raw)?;
        Ok(TxResult {
            ok: wire.ok,
            status: wire.status,
            tx_id: wire.tx_id,
            execution_status: wire.execution_status,
            abort_code: wire.abort_code,
            decoded: wire.decoded.as_ref().map(Value::from_wire),
        })
    }

    /// True when the node rejected the transaction.
    pub fn rejected(&self) -> bool {
        !self.ok
    }
}
