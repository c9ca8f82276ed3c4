//! Config command implementation.
//!
//! Manages the shared configuration file.

use anyhow::Result;
use mashup_ops::Config;

/// Keys accepted by `config get`.
const KEYS: &[&str] = &[
    "data_dir",
    "max_batch_size",
    "default_page_size",
    "generation_timeout_secs",
    "include_formats",
    "include_channels",
    "include_action_verbs",
    "include_trends",
    "api_tokens",
];

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("Idea Mashup Configuration");
    println!("{:-<40}", "");

    for key in KEYS {
        let value = config.get(key).unwrap_or_default();
        let value = if value.is_empty() {
            "(not set)".to_string()
        } else {
            value
        };
        println!("{:<25} {}", key, value);
    }

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    config.save()?;

    if key == "api_token" {
        println!("✅ Added api token");
        println!("⚠️  Tokens are stored in the config file. MASHUP_API_TOKENS keeps them out of it.");
    } else {
        println!("Set {} to: {}", key, value);
    }
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    match config.get(key) {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => anyhow::bail!(
            "Unknown config key: {}. Valid keys: {}",
            key,
            KEYS.join(", ")
        ),
    }
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
