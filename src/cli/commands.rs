use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::app::{AppContext, Result};
use crate::cli::SourceArg;
use crate::config::Config;

/// Collect activity and emit it as JSON.
///
/// Source failures only show up in the logs; the command itself fails only
/// when the output cannot be written.
pub async fn fetch(
    ctx: &AppContext,
    source: SourceArg,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let json = match source {
        SourceArg::All => {
            let report = ctx.collect_activity().await;
            report.log_summary();
            to_json(&report.into_activity(), compact)?
        }
        SourceArg::Letterboxd => to_json(&ctx.collect_letterboxd().await.into_items(), compact)?,
        SourceArg::Goodreads => to_json(&ctx.collect_goodreads().await.into_items(), compact)?,
        SourceArg::Github => to_json(&ctx.collect_github().await.into_items(), compact)?,
    };

    write_output(&json, output)
}

/// Write the default config and return where it went.
pub fn init(config_path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => Config::default_config_path()?,
    };
    Config::write_default(&path, force)?;
    println!("Wrote config to {}", path.display());
    Ok(path)
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}

fn write_output(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{}\n", json))?;
            tracing::info!(path = %path.display(), "Wrote activity");
        }
        None => println!("{}", json),
    }
    Ok(())
}
