//! Terminal input commands.
//!
//! Every line typed by the user maps to one `UserInput`:
//! - `:usd` / `:eur` — switch the display currency;
//! - `:search` — search again with the current term;
//! - `:quit` / `:q` — leave;
//! - anything else — new search term, searched immediately.
use price_common::Currency;

/// One user intent read from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// Type `text` into the search box and press the search button.
    Search(String),
    /// Press the search button again.
    SearchAgain,
    /// Pick a display currency.
    Currency(Currency),
    /// Exit the application.
    Quit,
}

impl UserInput {
    /// Parse a raw input line (trailing newline allowed).
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            ":q" | ":quit" => UserInput::Quit,
            ":search" => UserInput::SearchAgain,
            command if command.starts_with(':') => match command[1..].parse::<Currency>() {
                Ok(currency) => UserInput::Currency(currency),
                Err(_) => UserInput::Search(line.to_string()),
            },
            _ => UserInput::Search(line.to_string()),
        }
    }
}
