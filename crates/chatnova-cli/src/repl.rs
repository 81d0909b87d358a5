//! Interactive read loop: classify each line, dispatch, render.

use std::io::Write;
use std::time::Duration;

use chatnova_ai::{ChatClient, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::theme::Theme;

pub const GOODBYE: &str = "Thank you for chatting. Goodbye!";

/// What one line of input asks the loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Clear,
    Ignore,
    Submit(String),
}

impl Command {
    /// Classify one line. Rules are checked in order: quit words,
    /// clear, blank input, then a real message (trimmed).
    pub fn classify(line: &str) -> Self {
        if ["exit", "quit", "bye"]
            .iter()
            .any(|word| line.eq_ignore_ascii_case(word))
        {
            return Self::Quit;
        }
        if line.eq_ignore_ascii_case("clear") {
            return Self::Clear;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Ignore;
        }
        Self::Submit(trimmed.to_string())
    }
}

/// Whether the loop keeps going after a step.
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Quit,
}

/// Handle one line of input against the session. Per-turn errors are
/// rendered, never propagated; only a quit word ends the loop.
pub async fn step(
    session: &mut Session,
    client: &dyn ChatClient,
    theme: &Theme,
    line: &str,
) -> LoopAction {
    match Command::classify(line) {
        Command::Quit => {
            println!("\n{}", theme.goodbye.apply_to(GOODBYE));
            LoopAction::Quit
        }
        Command::Clear => {
            session.clear();
            println!("{}", theme.hint.apply_to("Conversation history cleared."));
            LoopAction::Continue
        }
        Command::Ignore => LoopAction::Continue,
        Command::Submit(text) => {
            think(theme).await;
            match session.submit(client, text).await {
                Ok(reply) => {
                    println!("{} {}\n", theme.reply_label.apply_to("Gemini:"), reply);
                }
                Err(err) => {
                    println!("{}\n", theme.error.apply_to(err.to_string()));
                }
            }
            LoopAction::Continue
        }
    }
}

/// Prompt, read, step, repeat. Returns when the user quits or stdin
/// closes; read errors bubble up to be reported by the caller.
pub async fn run_loop(
    session: &mut Session,
    client: &dyn ChatClient,
    theme: &Theme,
) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", theme.prompt.apply_to("You:"));
        std::io::stdout().flush()?;

        match lines.next_line().await? {
            None => {
                // stdin closed; same farewell as an explicit exit
                println!("\n{}", theme.goodbye.apply_to(GOODBYE));
                return Ok(());
            }
            Some(line) => {
                if step(session, client, theme, &line).await == LoopAction::Quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Cosmetic three-dot progress indicator while the request is prepared.
async fn think(theme: &Theme) {
    print!("{}", theme.thinking.apply_to("Gemini is thinking"));
    let _ = std::io::stdout().flush();
    for _ in 0..3 {
        tokio::time::sleep(Duration::from_millis(300)).await;
        print!("{}", theme.thinking.apply_to("."));
        let _ = std::io::stdout().flush();
    }
    println!();
}
