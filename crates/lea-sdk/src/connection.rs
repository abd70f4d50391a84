//! Cluster connection.

use crate::error::{LeaError, LeaResult};
use crate::program::Transaction;
use crate::response::TxResult;
use reqwest::Client;
use url::Url;

/// The cluster used when none is named on the command line.
pub const DEFAULT_CLUSTER: &str = "mainnet-beta";

/// Resolves a cluster name or URL to the node endpoint.
///
/// Known names map to the public RPC endpoints; anything else must parse as
/// a URL.
pub fn cluster_url(cluster: &str) -> LeaResult<Url> {
    let raw = match cluster {
        "mainnet-beta" => "https://rpc.mainnet-beta.lea.network",
        "testnet" => "https://rpc.testnet.lea.network",
        "devnet" => "https://rpc.devnet.lea.network",
        other => other,
    };
    Ok(Url::parse(raw)?)
}

/// A connection to a Lea cluster.
///
/// Each call is attempted exactly once: no retries, no client-side timeout
/// beyond reqwest's defaults. TLS certificate validation is reqwest's
/// default behavior.
#[derive(Debug, Clone)]
pub struct Connection {
    base: Url,
    client: Client,
}

impl Connection {
    /// Creates a connection to the named cluster (or URL).
    pub fn new(cluster: &str) -> LeaResult<Self> {
        Ok(Self {
            base: cluster_url(cluster)?,
            client: Client::new(),
        })
    }

    /// The node endpoint this connection targets.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Sends a built transaction (or read-only query) to the node.
    ///
    /// Remote rejection is not an error here: an HTTP-success response with
    /// `ok: false` comes back as a [`TxResult`] carrying the full decoded
    /// body. Transport failures and non-success HTTP statuses are errors.
    pub async fn send(&self, tx: &Transaction) -> LeaResult<TxResult> {
        let url = self.base.join("tx")?;
        let resp = self.client.post(url).json(tx).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(LeaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw: serde_json::Value = resp.json().await?;
        TxResult::from_wire(raw)
    }
}
