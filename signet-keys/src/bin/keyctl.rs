//! Maintenance CLI for the Signet signing-key store
//!
//! Usage:
//!   keyctl rotate   # generate a new signing key and promote it to current
//!   keyctl list     # show every stored key version
//!
//! Operator-driven and single-writer: do not run two rotations against the
//! same keys directory at once.

use signet_keys::service_integration::init_key_manager;
use std::env;

fn print_usage() {
    println!("Usage: keyctl <command>");
    println!();
    println!("Commands:");
    println!("  rotate    Generate a new signing key pair and promote it to current");
    println!("  list      List all stored key versions");
    println!();
    println!("The keys directory defaults to ./keys; set SIGNET_KEYS_DIR to override.");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    signet_logging::init_from_env("keyctl");

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("rotate") => rotate().await,
        Some("list") => list().await,
        _ => {
            print_usage();
            Ok(())
        }
    }
}

async fn rotate() -> anyhow::Result<()> {
    println!("🔐 Signet Key Rotation");
    println!("{}", "=".repeat(50));

    let manager = init_key_manager(None);
    let store = manager.rotate().await?;

    println!();
    println!(
        "Done: version {} is now current ({} key pair(s) stored)",
        store.current_version,
        store.keys.len()
    );
    Ok(())
}

async fn list() -> anyhow::Result<()> {
    let manager = init_key_manager(None);
    let listings = manager.list_keys().await;

    if listings.is_empty() {
        println!("No keys stored yet. Run 'keyctl rotate' to create the first one.");
        return Ok(());
    }

    println!("Stored signing keys ({} total):", listings.len());
    for listing in listings {
        println!("  {}", listing);
    }
    Ok(())
}
