//! Files command implementation.

use crate::cli::FilesArgs;
use anyhow::{Context, Result};
use quotes_config::AppConfig;
use quotes_data::list_data_files;

pub async fn run(args: FilesArgs, config: &AppConfig) -> Result<()> {
    let dir = args.dir.unwrap_or_else(|| config.data.dir.clone());
    let files = list_data_files(&dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    println!("{:<40} {:>12} {:<5} {}", "Name", "Size", "Dir", "Modified");
    println!("{}", "-".repeat(80));
    for file in &files {
        let modified = file
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<40} {:>12} {:<5} {}",
            file.name, file.size, file.is_dir, modified
        );
    }
    println!("\n{} entries", files.len());

    Ok(())
}
