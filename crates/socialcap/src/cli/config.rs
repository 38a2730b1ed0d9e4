//! The `socialcap config` command for configuration management.

use super::theme;
use clap::{Args, Subcommand};
use dialoguer::Password;
use socialcap_core::Config;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Store a Gemini API key in the config file
    SetKey {
        /// The key; prompted for (hidden) when omitted
        key: Option<String>,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            let toml = config.to_toml()?;
            println!("{}", toml);
        }

        ConfigCommand::Path => {
            let path = Config::default_path();
            println!("{}", path.display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let config = Config::default();
            let toml = config.to_toml()?;
            std::fs::write(&path, toml)?;

            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }

        ConfigCommand::SetKey { key } => {
            let key = match key {
                Some(key) => key,
                None => {
                    let prompt = Password::with_theme(&theme::socialcap_theme())
                        .with_prompt("Gemini API key")
                        .interact();
                    match super::handle_interrupt(prompt)? {
                        Some(key) => key,
                        None => return Ok(()),
                    }
                }
            };

            let key = key.trim();
            if key.is_empty() {
                anyhow::bail!("API key cannot be empty");
            }

            let path = Config::default_path();
            let content = if path.exists() {
                std::fs::read_to_string(&path)?
            } else {
                String::new()
            };

            let updated = set_api_key(&content, key)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, updated)?;

            tracing::debug!("API key written to config");
            theme::print_hint(&format!("Key saved to {}", path.display()));
        }
    }

    Ok(())
}

/// Set `[gemini] api_key` in a TOML document, preserving everything else.
pub fn set_api_key(content: &str, key: &str) -> anyhow::Result<String> {
    let mut doc: toml_edit::DocumentMut = content.parse()?;

    if !doc.get("gemini").is_some_and(|item| item.is_table()) {
        doc["gemini"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["gemini"]["api_key"] = toml_edit::value(key);

    Ok(doc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_api_key_on_empty_file() {
        let out = set_api_key("", "AIza-test").unwrap();
        assert!(out.contains("[gemini]"));
        assert!(out.contains("api_key = \"AIza-test\""));
    }

    #[test]
    fn test_set_api_key_preserves_comments_and_sections() {
        let original = "\
# my settings
[gemini]
# keep this
api_version = \"v1\"
api_key = \"${GEMINI_API_KEY}\"

[output]
pretty = false
";
        let out = set_api_key(original, "AIza-new").unwrap();
        assert!(out.contains("# my settings"));
        assert!(out.contains("# keep this"));
        assert!(out.contains("api_key = \"AIza-new\""));
        assert!(out.contains("pretty = false"));
        assert!(!out.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_set_api_key_rejects_invalid_toml() {
        assert!(set_api_key("[gemini", "AIza").is_err());
    }

    #[test]
    fn test_set_key_written_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, set_api_key("[limits]\nlist_timeout_ms = 500\n", "AIza-x").unwrap())
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.gemini.api_key, "AIza-x");
        assert_eq!(config.limits.list_timeout_ms, 500);
        assert_eq!(config.credential().expose(), "AIza-x");
    }
}
