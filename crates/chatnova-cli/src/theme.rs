//! Console styling for the chat frontend.
//!
//! A `Theme` is an immutable bundle of styles handed to each rendering
//! function, instead of process-wide formatting state. Styles degrade
//! to plain text on terminals without color support.

use console::Style;

pub struct Theme {
    pub banner: Style,
    pub hint: Style,
    pub prompt: Style,
    pub reply_label: Style,
    pub thinking: Style,
    pub error: Style,
    pub goodbye: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            banner: Style::new().cyan().bold(),
            hint: Style::new().yellow(),
            prompt: Style::new().green(),
            reply_label: Style::new().bold(),
            thinking: Style::new().blue(),
            error: Style::new().red(),
            goodbye: Style::new().yellow(),
        }
    }
}

const BANNER_RULE: &str = "=====================================";

/// Fixed welcome banner and command hints.
pub fn render_welcome(theme: &Theme) {
    println!();
    println!("{}", theme.banner.apply_to(BANNER_RULE));
    println!("{}", theme.banner.apply_to("   Welcome to the Gemini Chatbot    "));
    println!("{}", theme.banner.apply_to(BANNER_RULE));
    println!("{}", theme.hint.apply_to("Type a message to start chatting!"));
    println!(
        "{}",
        theme
            .hint
            .apply_to("Type 'exit', 'quit', or 'bye' to end the conversation.")
    );
    println!(
        "{}",
        theme.hint.apply_to("Type 'clear' to clear conversation history.")
    );
    println!("{}", theme.banner.apply_to(BANNER_RULE));
    println!();
}
