//! State-mutating token commands.
//!
//! Every handler here follows the same convention: resolve the signer (and
//! recipient where one exists), prefetch the signer's previous transaction
//! hash, build through the system program, then send and report.

use crate::common::{self, GlobalOpts};
use crate::{prefetch, report};
use anyhow::Result;
use clap::Args;
use lea_sdk::{LeaResult, Signer, SystemProgram, Transaction, TxOpts};
use num_bigint::BigUint;

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Signer keyfile: a .json file with address and keyset fields
    #[arg(long)]
    pub key: String,
}

#[derive(Args, Debug)]
pub struct TransferLikeArgs {
    /// Signer keyfile: a .json file with address and keyset fields
    #[arg(long)]
    pub key: String,

    /// Recipient: a literal address or a .json file with an address field
    #[arg(long)]
    pub to: String,

    /// Amount as an exact unsigned integer
    #[arg(long)]
    pub amount: String,
}

#[derive(Args, Debug)]
pub struct BurnArgs {
    /// Signer keyfile: a .json file with address and keyset fields
    #[arg(long)]
    pub key: String,

    /// Amount as an exact unsigned integer
    #[arg(long)]
    pub amount: String,
}

pub async fn publish_keyset(args: &KeyArgs, global: &GlobalOpts) -> Result<i32> {
    let conn = global.build_connection()?;
    let signer = common::read_signer(&args.key)?;
    let tx = prefetch::build_with_prev_hash(&conn, &signer.address, |opts| {
        SystemProgram::publish_keyset(&signer, &opts)
    })
    .await?;
    report::send_and_report(&conn, &tx, global).await
}

pub async fn mint(args: &TransferLikeArgs, global: &GlobalOpts) -> Result<i32> {
    transfer_like(args, global, SystemProgram::mint).await
}

pub async fn transfer(args: &TransferLikeArgs, global: &GlobalOpts) -> Result<i32> {
    transfer_like(args, global, SystemProgram::transfer).await
}

pub async fn mint_whitelist(args: &TransferLikeArgs, global: &GlobalOpts) -> Result<i32> {
    transfer_like(args, global, SystemProgram::mint_whitelist).await
}

pub async fn burn(args: &BurnArgs, global: &GlobalOpts) -> Result<i32> {
    let conn = global.build_connection()?;
    let signer = common::read_signer(&args.key)?;
    let amount = common::parse_amount(&args.amount)?;
    let tx = prefetch::build_with_prev_hash(&conn, &signer.address, |opts| {
        SystemProgram::burn(&signer, &amount, &opts)
    })
    .await?;
    report::send_and_report(&conn, &tx, global).await
}

/// Shared flow for the signer/recipient/amount commands.
async fn transfer_like<F>(args: &TransferLikeArgs, global: &GlobalOpts, build: F) -> Result<i32>
where
    F: FnOnce(&Signer, &str, &BigUint, &TxOpts) -> LeaResult<Transaction>,
{
    let conn = global.build_connection()?;
    let signer = common::read_signer(&args.key)?;
    let to = common::resolve_address(&args.to)?;
    let amount = common::parse_amount(&args.amount)?;
    let tx = prefetch::build_with_prev_hash(&conn, &signer.address, |opts| {
        build(&signer, &to, &amount, &opts)
    })
    .await?;
    report::send_and_report(&conn, &tx, global).await
}
