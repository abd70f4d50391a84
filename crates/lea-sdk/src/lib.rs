//! Client facade for the Lea network.
//!
//! This crate exposes the surface the `lea` CLI consumes: a [`Connection`]
//! that submits transactions to a cluster, the [`SystemProgram`] builders,
//! and the decoded-result [`Value`] union. Transaction construction details,
//! signing, and consensus live on the node side and are not implemented here.

pub mod connection;
pub mod error;
pub mod program;
pub mod response;
pub mod value;

pub use connection::{Connection, DEFAULT_CLUSTER, cluster_url};
pub use error::{LeaError, LeaResult};
pub use program::{BASE_POD, Keyset, Signer, SystemProgram, Transaction, TxOpts};
pub use response::TxResult;
pub use value::Value;
