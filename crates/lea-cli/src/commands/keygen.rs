//! Proxy to the external lea-keygen tool.
//!
//! Resolution strategies, tried in order, each only when the previous one
//! failed to launch: a `lea-keygen` binary next to the current executable,
//! then one on `PATH`, then an ephemeral `cargo install` into a temporary
//! root. All tiers inherit the parent's stdio so prompts pass through. The
//! child's exit code is mirrored; a nonzero exit is not a launch failure and
//! never advances the chain.

use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tokio::process::Command;

const KEYGEN_BIN: &str = "lea-keygen";

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct KeygenArgs {
    /// Arguments passed through to lea-keygen verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Splits `lea keygen …` out of raw argv before clap runs.
///
/// The proxy bypasses all other parsing: the tool's own globals (`--quiet`,
/// `--cluster`) and `--help` belong to the child here, and clap would
/// otherwise claim them.
pub fn passthrough_args(argv: &[String]) -> Option<&[String]> {
    match argv.get(1) {
        Some(cmd) if cmd == "keygen" => Some(&argv[2..]),
        _ => None,
    }
}

pub async fn run(args: &[String]) -> Result<i32> {
    let status = launch(args).await?;
    match status.code() {
        Some(code) => Ok(code),
        None => bail!("{KEYGEN_BIN} terminated by signal"),
    }
}

async fn launch(args: &[String]) -> Result<ExitStatus> {
    if let Some(status) = try_sibling(args).await {
        return Ok(status);
    }
    if let Some(status) = try_path(args).await {
        return Ok(status);
    }
    try_ephemeral(args).await
}

/// Tier 1: a keygen binary installed next to this executable.
async fn try_sibling(args: &[String]) -> Option<ExitStatus> {
    let exe = std::env::current_exe().ok()?;
    let candidate = sibling_in(exe.parent()?)?;
    Command::new(&candidate).args(args).status().await.ok()
}

fn sibling_in(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(format!("{KEYGEN_BIN}{}", std::env::consts::EXE_SUFFIX));
    candidate.is_file().then_some(candidate)
}

/// Tier 2: a same-named binary on the command search path.
///
/// NotFound is the expected miss; any other spawn failure also counts as a
/// failed launch and falls through to the next tier.
async fn try_path(args: &[String]) -> Option<ExitStatus> {
    Command::new(KEYGEN_BIN).args(args).status().await.ok()
}

/// Tier 3: fetch and run via an ephemeral `cargo install`.
///
/// The install root lives only for this invocation and is removed once the
/// child exits.
async fn try_ephemeral(args: &[String]) -> Result<ExitStatus> {
    let root = std::env::temp_dir().join(format!("{KEYGEN_BIN}-{}", std::process::id()));

    let install = Command::new("cargo")
        .args(["install", KEYGEN_BIN, "--quiet", "--root"])
        .arg(&root)
        .status()
        .await
        .with_context(|| format!("failed to run cargo install for {KEYGEN_BIN}"))?;
    if !install.success() {
        remove_install_root(&root);
        bail!("could not resolve the {KEYGEN_BIN} executable: all strategies failed");
    }

    let bin = root
        .join("bin")
        .join(format!("{KEYGEN_BIN}{}", std::env::consts::EXE_SUFFIX));
    let status = Command::new(&bin)
        .args(args)
        .status()
        .await
        .with_context(|| format!("failed to launch {}", bin.display()));
    remove_install_root(&root);
    status
}

fn remove_install_root(root: &Path) {
    // The root is under temp_dir; a failed removal is not worth failing the
    // command over.
    let _ = std::fs::remove_dir_all(root);
}
