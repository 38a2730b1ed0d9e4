//! The `socialcap generate` command.

use super::render::{self, OutputFormat, PlatformArg};
use super::theme;
use clap::Args;
use dialoguer::Confirm;
use socialcap_core::{CaptionError, Config, Platform, Socialcap};
use std::path::PathBuf;

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Image file to caption (JPEG, PNG, GIF, WebP or BMP)
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Gemini API key (overrides the config file)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format (defaults to `[output] format` from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print only one platform's caption
    #[arg(long, value_enum)]
    pub only: Option<PlatformArg>,

    /// Try this model first if your key can use it
    #[arg(long)]
    pub model: Option<String>,

    /// Fail immediately instead of offering to retry
    #[arg(long)]
    pub no_retry: bool,
}

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(key) = args.api_key.as_deref() {
        config.gemini.api_key = key.to_string();
    }

    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));
    let pretty = config.output.pretty;
    let only = args.only.map(Platform::from);

    let mut socialcap = Socialcap::new(config)?;
    if let Some(model) = args.model.as_deref() {
        socialcap.pipeline_mut().resolver_mut().prefer(model);
    }

    let path = super::expand_path(&args.image);
    let image = socialcap.load_image(&path).await?;
    tracing::info!(
        "Loaded {} ({}, {} bytes encoded)",
        path.display(),
        image.mime_type,
        image.encoded_len()
    );

    let interactive = !args.no_retry && console::Term::stderr().is_term();

    // One request at a time: a retry is only offered after the previous
    // attempt has finished.
    loop {
        let spinner = theme::spinner("Generating captions...");
        let outcome = socialcap.generate(&image).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(result) => {
                println!("{}", render::render(&result, format, pretty, only)?);
                return Ok(());
            }
            Err(e) => {
                tracing::debug!("Generation failed ({:?}): {e}", e.kind());
                if !interactive {
                    anyhow::bail!(e.user_message());
                }
                theme::print_error(&e.user_message());
                if let Some(hint) = hint_for(&e) {
                    theme::print_hint(hint);
                }
                if !confirm_retry()? {
                    anyhow::bail!("Caption generation cancelled");
                }
            }
        }
    }
}

fn confirm_retry() -> anyhow::Result<bool> {
    let answer = super::handle_interrupt(
        Confirm::with_theme(&theme::socialcap_theme())
            .with_prompt("Retry?")
            .default(true)
            .interact(),
    )?;
    Ok(answer.unwrap_or(false))
}

/// Follow-up suggestion for errors the user can fix locally.
fn hint_for(error: &CaptionError) -> Option<&'static str> {
    use socialcap_core::ErrorKind;
    match error.kind() {
        ErrorKind::MissingCredential => Some("Run `socialcap config set-key` to store a key."),
        ErrorKind::NoVisionModel => Some("Run `socialcap models` to see what your key can use."),
        _ => None,
    }
}
