//! Build script for the Spotify Listening Trends CLI.
//!
//! Copies the configuration template to the user's local data directory so
//! that a ready-to-edit example sits where the application expects its
//! `.env` file after installation.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the platform-specific
/// local data directory (`trendcli/.env.example`).
///
/// # Build Process
///
/// 1. **Dependency Tracking**: re-runs when the template changes
/// 2. **Path Resolution**: determines source and destination paths
/// 3. **Directory Creation**: ensures the target directory exists
/// 4. **File Copying**: copies the template into place
///
/// A missing template produces a cargo warning instead of failing the
/// build; directory-creation and copy failures are fatal.
///
/// # Environment Variables Used
///
/// - `CARGO_MANIFEST_DIR` - Path to the crate root directory (provided by cargo)
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("trendcli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
