//! chatnova: a terminal chat client for the Gemini API.
//!
//! Reads a line of user text, sends it plus the accumulated history to
//! `generateContent`, prints the reply, and loops. `exit`/`quit`/`bye`
//! end the session, `clear` wipes the history.

mod cli;
mod repl;
mod theme;

use chatnova_ai::{GeminiClient, GeminiConfig, Session};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::theme::Theme;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or(cli::DEFAULT_LOG_DIRECTIVE);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| log_directive.into()),
        )
        .init();

    let Some(api_key) =
        cli::resolve_api_key(args.api_key, std::env::var(cli::API_KEY_ENV).ok())
    else {
        eprintln!(
            "Error: no Gemini API key. Pass --api-key or set the {} environment variable.",
            cli::API_KEY_ENV
        );
        std::process::exit(2);
    };

    debug!(key = %cli::mask_key(&api_key), model = %args.model, "credentials resolved");

    let config = GeminiConfig::new(api_key).with_model(args.model);
    let client = GeminiClient::new(config);
    let mut session = Session::new();
    let theme = Theme::default();

    theme::render_welcome(&theme);

    // One request in flight at most: the loop is strictly sequential.
    // Ctrl-C at any point ends the session cleanly.
    tokio::select! {
        result = repl::run_loop(&mut session, &client, &theme) => {
            if let Err(err) = result {
                eprintln!("{}", theme.error.apply_to(format!("An error occurred: {err}")));
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n{}", theme.goodbye.apply_to("Chat interrupted. Goodbye!"));
        }
    }
}
