//! The `socialcap models` command: show which models a key can use.

use super::theme;
use clap::Args;
use console::Style;
use socialcap_core::{CaptionError, Config, ModelResolver, ResolveError, Socialcap};

/// Arguments for the `models` command.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Gemini API key (overrides the config file)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Only list models matching the vision pattern
    #[arg(long)]
    pub vision_only: bool,
}

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRow {
    pub name: String,
    pub vision: bool,
    pub selected: bool,
}

/// Classify listed models against the resolver's pattern and preferences.
pub fn classify(resolver: &ModelResolver, available: &[String]) -> Vec<ModelRow> {
    let selected = resolver.select(available);
    available
        .iter()
        .map(|name| {
            let short = name.rsplit('/').next().unwrap_or(name);
            ModelRow {
                name: name.clone(),
                vision: resolver.is_candidate(name),
                selected: selected.as_ref().is_some_and(|m| m.as_str() == short),
            }
        })
        .collect()
}

/// Execute the models command.
pub async fn execute(args: ModelsArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(key) = args.api_key.as_deref() {
        config.gemini.api_key = key.to_string();
    }

    let socialcap = Socialcap::new(config)?;

    let spinner = theme::spinner("Listing models...");
    let listed = socialcap.list_models().await;
    spinner.finish_and_clear();

    let available = listed.map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let rows = classify(socialcap.pipeline().resolver(), &available);

    let green = Style::new().green().bold();
    let dim = Style::new().dim();
    for row in rows.iter().filter(|r| r.vision || !args.vision_only) {
        let marker = if row.selected { "*" } else { " " };
        if row.vision {
            println!("{} {}", green.apply_to(marker), row.name);
        } else {
            println!("{} {}", marker, dim.apply_to(&row.name));
        }
    }

    if !rows.iter().any(|r| r.selected) {
        let err = CaptionError::from(ResolveError::NoVisionModel { available });
        anyhow::bail!(err.user_message());
    }

    theme::print_hint("* = model used by `socialcap generate`");
    Ok(())
}
