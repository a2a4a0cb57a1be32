use colored::Colorize;

use crate::cli::{Cli, ConfigCommands};
use crate::config::Config;
use crate::error::{Result, StepkitError};

pub async fn run(cli: &Cli, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(cli).await,
        ConfigCommands::Set { key, value } => set(cli, key, value).await,
        ConfigCommands::Get { key } => get(cli, key).await,
        ConfigCommands::Path => path(cli).await,
    }
}

async fn show(cli: &Cli) -> Result<()> {
    let config = Config::load()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| StepkitError::ConfigError(e.to_string()))?;
        println!("{}", toml_str);
    }

    Ok(())
}

async fn set(_cli: &Cli, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "downloads.dir" => config.downloads.dir = Some(value.to_string()),
        "downloads.timeout_ms" => {
            config.downloads.timeout_ms = value.parse().map_err(|_| {
                StepkitError::ConfigError("timeout_ms must be a number".to_string())
            })?
        }
        "downloads.poll_interval_ms" => {
            config.downloads.poll_interval_ms = value.parse().map_err(|_| {
                StepkitError::ConfigError("poll_interval_ms must be a number".to_string())
            })?
        }
        "store.path" => config.store.path = Some(value.to_string()),
        "store.default_store" => config.store.default_store = value.to_string(),
        "table.row_index_base" => {
            config.table.row_index_base = value.parse().map_err(|_| {
                StepkitError::ConfigError("row_index_base must be 0 or 1".to_string())
            })?
        }
        "table.column_index_base" => {
            config.table.column_index_base = value.parse().map_err(|_| {
                StepkitError::ConfigError("column_index_base must be 0 or 1".to_string())
            })?
        }
        "table.case_insensitive" => {
            config.table.case_insensitive = value.parse().map_err(|_| {
                StepkitError::ConfigError("case_insensitive must be true or false".to_string())
            })?
        }
        _ => {
            return Err(StepkitError::ConfigError(format!(
                "Unknown config key: {}",
                key
            )))
        }
    }

    config.save()?;
    println!("{} Set {} = {}", "✓".green(), key, value);

    Ok(())
}

async fn get(cli: &Cli, key: &str) -> Result<()> {
    let config = Config::load()?;

    let value = match key {
        "downloads.dir" => config.downloads.dir.clone(),
        "downloads.timeout_ms" => Some(config.downloads.timeout_ms.to_string()),
        "downloads.poll_interval_ms" => Some(config.downloads.poll_interval_ms.to_string()),
        "store.path" => config.store.path.clone(),
        "store.default_store" => Some(config.store.default_store.clone()),
        "table.row_index_base" => Some(config.table.row_index_base.to_string()),
        "table.column_index_base" => Some(config.table.column_index_base.to_string()),
        "table.case_insensitive" => Some(config.table.case_insensitive.to_string()),
        _ => {
            return Err(StepkitError::ConfigError(format!(
                "Unknown config key: {}",
                key
            )))
        }
    };

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "key": key,
                "value": value
            })
        );
    } else {
        match value {
            Some(v) => println!("{}", v),
            None => println!("{}", "(not set)".dimmed()),
        }
    }

    Ok(())
}

async fn path(cli: &Cli) -> Result<()> {
    let path = Config::config_path();

    if cli.json {
        println!(
            "{}",
            serde_json::json!({
                "path": path.display().to_string()
            })
        );
    } else {
        println!("{}", path.display());
    }

    Ok(())
}
