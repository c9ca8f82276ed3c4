//! Seed command implementation.
//!
//! Loads element pools from a JSON file and replaces the store contents.

use std::path::Path;

use anyhow::{Context, Result};
use mashup_ops::{Config, OpsContext, SeedRequest};

/// Replace every element pool with the contents of `file`.
pub async fn execute(config: Config, file: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let request: SeedRequest = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid elements file {}", file.display()))?;

    let ctx = OpsContext::open(config).await?;
    let response = ctx.seed(request).await?;

    println!("🌱 Seeded {} elements", response.total);
    for (element_type, count) in &response.counts {
        let marker = if *count == 0 && element_type.is_core() {
            "⚠️ "
        } else {
            "  "
        };
        println!(" {} {:<15} {}", marker, element_type, count);
    }

    Ok(())
}
