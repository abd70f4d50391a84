//! Read-only query commands.
//!
//! Queries call their builder directly: no signer, no previous-hash
//! prefetch. Results flow through the same reporter as transactions, so a
//! not-ok response still prints its decoded body and exits 1.

use crate::common::{self, GlobalOpts};
use crate::report;
use anyhow::Result;
use clap::Args;
use lea_sdk::SystemProgram;

#[derive(Args, Debug)]
pub struct AddressArgs {
    /// Address to query: a literal address or a .json file with an address field
    #[arg(long)]
    pub address: String,
}

pub async fn get_balance(args: &AddressArgs, global: &GlobalOpts) -> Result<i32> {
    let address = common::resolve_address(&args.address)?;
    let conn = global.build_connection()?;
    report::send_and_report(&conn, &SystemProgram::get_balance(&address), global).await
}

pub async fn get_last_tx_hash(args: &AddressArgs, global: &GlobalOpts) -> Result<i32> {
    let address = common::resolve_address(&args.address)?;
    let conn = global.build_connection()?;
    report::send_and_report(&conn, &SystemProgram::get_last_tx_hash(&address), global).await
}

pub async fn get_allowed_mint(args: &AddressArgs, global: &GlobalOpts) -> Result<i32> {
    let address = common::resolve_address(&args.address)?;
    let conn = global.build_connection()?;
    report::send_and_report(&conn, &SystemProgram::get_allowed_mint(&address), global).await
}

pub async fn get_current_supply(global: &GlobalOpts) -> Result<i32> {
    let conn = global.build_connection()?;
    report::send_and_report(&conn, &SystemProgram::get_current_supply(), global).await
}
