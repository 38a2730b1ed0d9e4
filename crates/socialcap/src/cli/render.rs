//! Result rendering for stdout.

use clap::ValueEnum;
use console::Style;
use socialcap_core::{CaptionData, GenerationResult, Platform};

/// Output format for `socialcap generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable caption cards
    Text,
    /// The parsed JSON result
    Json,
}

impl OutputFormat {
    /// Parse the `[output] format` config value. Validation guarantees text or json.
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Platform selector for `--only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Instagram,
    Linkedin,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Instagram => Platform::Instagram,
            PlatformArg::Linkedin => Platform::LinkedIn,
        }
    }
}

/// Hashtags as a single line, each prefixed with `#` exactly once.
pub fn hashtag_line(hashtags: &[String]) -> String {
    hashtags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(|tag| {
            if tag.starts_with('#') {
                tag.to_string()
            } else {
                format!("#{tag}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Caption text followed by its hashtags, ready to paste.
pub fn plain_caption(data: &CaptionData) -> String {
    let tags = hashtag_line(&data.hashtags);
    if tags.is_empty() {
        data.caption.clone()
    } else {
        format!("{}\n\n{}", data.caption, tags)
    }
}

/// One styled card per platform.
pub fn card(data: &CaptionData) -> String {
    let title = Style::new().bold().cyan();
    let tags = Style::new().dim();
    let mut out = format!("{}\n{}\n", title.apply_to(data.platform.label()), data.caption);
    let line = hashtag_line(&data.hashtags);
    if !line.is_empty() {
        out.push_str(&format!("\n{}\n", tags.apply_to(line)));
    }
    out
}

/// Render a full result (or a single platform of it) in the chosen format.
pub fn render(
    result: &GenerationResult,
    format: OutputFormat,
    pretty: bool,
    only: Option<Platform>,
) -> anyhow::Result<String> {
    match (format, only) {
        (OutputFormat::Text, Some(platform)) => Ok(plain_caption(result.get(platform))),
        (OutputFormat::Text, None) => Ok(format!(
            "{}\n{}",
            card(&result.instagram),
            card(&result.linkedin)
        )),
        (OutputFormat::Json, Some(platform)) => to_json(result.get(platform), pretty),
        (OutputFormat::Json, None) => to_json(result, pretty),
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenerationResult {
        GenerationResult {
            instagram: CaptionData {
                platform: Platform::Instagram,
                caption: "Golden hour on the pier".to_string(),
                hashtags: vec![
                    "sunset".to_string(),
                    "#pier".to_string(),
                    " ".to_string(),
                ],
            },
            linkedin: CaptionData {
                platform: Platform::LinkedIn,
                caption: "Stepping back to see the bigger picture.".to_string(),
                hashtags: vec![],
            },
        }
    }

    #[test]
    fn test_hashtag_line_adds_missing_hash_once() {
        let tags = vec!["sunset".to_string(), "#pier".to_string(), "".to_string()];
        assert_eq!(hashtag_line(&tags), "#sunset #pier");
    }

    #[test]
    fn test_plain_caption_without_hashtags() {
        let result = sample();
        assert_eq!(
            plain_caption(&result.linkedin),
            "Stepping back to see the bigger picture."
        );
    }

    #[test]
    fn test_render_only_instagram_text() {
        let out = render(&sample(), OutputFormat::Text, true, Some(Platform::Instagram)).unwrap();
        assert_eq!(out, "Golden hour on the pier\n\n#sunset #pier");
    }

    #[test]
    fn test_render_text_includes_both_platforms() {
        let out = render(&sample(), OutputFormat::Text, true, None).unwrap();
        assert!(out.contains("Instagram"));
        assert!(out.contains("LinkedIn"));
        assert!(out.contains("Golden hour on the pier"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let out = render(&sample(), OutputFormat::Json, false, None).unwrap();
        assert!(!out.contains('\n'));
        let parsed: GenerationResult = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_render_json_single_platform() {
        let out = render(&sample(), OutputFormat::Json, true, Some(Platform::LinkedIn)).unwrap();
        let parsed: CaptionData = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.platform, Platform::LinkedIn);
    }

    #[test]
    fn test_output_format_from_config() {
        assert_eq!(OutputFormat::from_config("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config("text"), OutputFormat::Text);
    }

    #[test]
    fn test_platform_arg_maps() {
        assert_eq!(Platform::from(PlatformArg::Linkedin), Platform::LinkedIn);
    }
}
