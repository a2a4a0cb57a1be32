use colored::Colorize;
use serde_json::Value;

use crate::cli::{Cli, KvCommands};
use crate::config::Config;
use crate::error::Result;
use crate::store::KvStore;

pub async fn run(cli: &Cli, command: &KvCommands) -> Result<()> {
    let config = Config::load()?;

    match command {
        KvCommands::Set { key, value, store } => {
            let kv = open(&config, store.as_deref());
            kv.put(key, parse_value(value))?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "status": "set", "store": kv.store_name(), "key": key })
                );
            } else {
                println!("{} Set {} = {}", "✓".green(), key, value);
            }
            Ok(())
        }

        KvCommands::Get { key, store } => {
            let kv = open(&config, store.as_deref());
            let value = kv.get(key)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "store": kv.store_name(), "key": key, "value": value })
                );
            } else {
                match value {
                    Value::String(s) => println!("{}", s),
                    other => println!("{}", other),
                }
            }
            Ok(())
        }

        KvCommands::Delete { key, store } => {
            let kv = open(&config, store.as_deref());
            kv.delete(key)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "status": "deleted", "store": kv.store_name(), "key": key })
                );
            } else {
                println!("{} Deleted {}", "✓".green(), key);
            }
            Ok(())
        }

        KvCommands::List { store } => {
            let kv = open(&config, store.as_deref());
            let entries = kv.list()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("{}", "(empty)".dimmed());
            } else {
                for (key, value) in entries {
                    println!("{} {}", format!("{}:", key).dimmed(), value);
                }
            }
            Ok(())
        }
    }
}

fn open(config: &Config, store: Option<&str>) -> KvStore {
    KvStore::open(
        config.store_path(),
        store.unwrap_or(&config.store.default_store),
    )
}

/// Values round-trip as JSON when they parse as JSON; everything else is
/// stored as a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
