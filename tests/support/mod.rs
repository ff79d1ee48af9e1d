use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::path::PathBuf;
use std::process::{Command, Output};
use workshop_catalog::config::{LOG_ENV, SEED_ENV, STRICT_CATEGORIES_ENV};

pub fn browser_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_workshop-browser"))
}

/// Command for the browser with catalog env vars cleared, so the host
/// environment cannot change seeding or strictness under a test.
pub fn browser_command() -> Command {
    let mut cmd = Command::new(browser_binary());
    cmd.env_remove(SEED_ENV)
        .env_remove(STRICT_CATEGORIES_ENV)
        .env(LOG_ENV, "off");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run the browser and parse its stdout as one JSON document.
pub fn run_browser(cmd: Command) -> Result<Value> {
    let output = run_command(cmd)?;
    serde_json::from_slice(&output.stdout).context("browser stdout is not JSON")
}

/// Run the browser expecting a non-zero exit; returns stderr.
pub fn run_browser_failure(mut cmd: Command) -> Result<String> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        bail!(
            "command {:?} unexpectedly succeeded\nstdout: {}",
            cmd,
            String::from_utf8_lossy(&output.stdout)
        );
    }
    Ok(String::from_utf8_lossy(&output.stderr).into_owned())
}

pub fn ids(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("id").and_then(Value::as_u64))
                .collect()
        })
        .unwrap_or_default()
}
