//! Status command implementation.

use anyhow::Result;
use mashup_ops::{Config, OpsContext};

/// Print element pool and saved idea counts.
pub async fn execute(config: Config) -> Result<()> {
    let ctx = OpsContext::open(config).await?;
    let status = ctx.status().await?;

    println!("📊 Idea Mashup Status");
    println!("{:─<50}", "");
    println!();
    println!("📂 Data:        {}", status.data_dir.display());
    println!("💾 Saved ideas: {}", status.ideas);
    println!();
    println!("🧩 Elements:");
    for (element_type, count) in &status.elements {
        println!("   • {:<15} {}", element_type, count);
    }

    let empty = status.empty_pools();
    if !empty.is_empty() {
        println!();
        let names: Vec<String> = empty.iter().map(ToString::to_string).collect();
        println!("⚠️  Empty pools: {}", names.join(", "));
        println!("   Run `mashup seed <file>` to fill them.");
    }

    println!();
    println!(
        "⚙️  Config:      {}",
        Config::config_file_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    );

    Ok(())
}
