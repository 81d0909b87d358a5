//! Command-line arguments and credential resolution.

use chatnova_ai::DEFAULT_MODEL;
use clap::Parser;

/// Environment variable consulted when `--api-key` is absent.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default log filter when neither RUST_LOG nor `--log-level` is set.
/// Targets use the crates' module paths (underscores, not hyphens).
pub const DEFAULT_LOG_DIRECTIVE: &str = "chatnova_ai=warn,chatnova_cli=warn";

/// chatnova — a terminal chat client for the Gemini API.
#[derive(Parser, Debug)]
#[command(name = "chatnova", version, about)]
pub struct Args {
    /// Gemini API key. Falls back to the GEMINI_API_KEY environment variable.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Gemini model to use.
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Resolve the API key: the flag wins, then the environment.
pub fn resolve_api_key(flag: Option<String>, env: Option<String>) -> Option<String> {
    flag.filter(|key| !key.is_empty())
        .or(env.filter(|key| !key.is_empty()))
}

/// First and last few characters of the key, for debug logging only.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 10 {
        let head: String = chars[..5].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    } else {
        let head: String = chars.iter().take(5).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        let key = resolve_api_key(Some("A".into()), Some("B".into()));
        assert_eq!(key.as_deref(), Some("A"));
    }

    #[test]
    fn environment_used_when_flag_absent() {
        let key = resolve_api_key(None, Some("B".into()));
        assert_eq!(key.as_deref(), Some("B"));
    }

    #[test]
    fn empty_values_do_not_count() {
        assert_eq!(
            resolve_api_key(Some(String::new()), Some("B".into())).as_deref(),
            Some("B")
        );
        assert_eq!(resolve_api_key(Some(String::new()), None), None);
        assert_eq!(resolve_api_key(None, None), None);
    }

    #[test]
    fn model_defaults_to_flash() {
        let args = Args::parse_from(["chatnova", "--api-key", "k"]);
        assert_eq!(args.model, DEFAULT_MODEL);
        assert_eq!(args.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn model_flag_overrides_default() {
        let args = Args::parse_from(["chatnova", "--model", "gemini-1.5-pro"]);
        assert_eq!(args.model, "gemini-1.5-pro");
        assert_eq!(args.api_key, None);
    }

    #[test]
    fn default_log_directive_names_real_targets() {
        // Tracing targets follow module paths, so the crate names appear
        // with underscores; a hyphenated directive would match nothing.
        for target in ["chatnova_ai", "chatnova_cli"] {
            assert!(
                DEFAULT_LOG_DIRECTIVE
                    .split(',')
                    .any(|directive| directive.starts_with(&format!("{target}="))),
                "no directive for {target}"
            );
        }
        assert!(!DEFAULT_LOG_DIRECTIVE.contains('-'));
    }

    #[test]
    fn mask_key_hides_the_middle() {
        assert_eq!(mask_key("abcdefghijklmnop"), "abcde...lmnop");
        assert_eq!(mask_key("short"), "short...");
        assert_eq!(mask_key(""), "...");
    }
}
