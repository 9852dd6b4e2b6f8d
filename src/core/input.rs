//! Command grammar for the terminal front-end
//!
//! - `1`..`5`            answer button (1 = Discordo Totalmente)
//! - `-2`..`+2`, `0`     scale value
//! - `n`, `p`, `s`       next / previous / skip (Portuguese words accepted)
//! - `?`, `reset`, `q`   help / restart / quit

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::AnswerValue;

lazy_static! {
    /// Signed scale value, or a bare 0
    static ref RE_SCALE: Regex = Regex::new(r"^(?:[+-][0-9]|0)$").unwrap();

    /// Unsigned button number
    static ref RE_BUTTON: Regex = Regex::new(r"^[1-9]$").unwrap();

    static ref RE_NEXT: Regex = Regex::new(r"(?i)^(?:n|next|pr[oó]xima)$").unwrap();
    static ref RE_PREV: Regex = Regex::new(r"(?i)^(?:p|prev|anterior|voltar)$").unwrap();
    static ref RE_SKIP: Regex = Regex::new(r"(?i)^(?:s|skip|pular)$").unwrap();
    static ref RE_HELP: Regex = Regex::new(r"(?i)^(?:\?|h|help|ajuda)$").unwrap();
    static ref RE_RESET: Regex = Regex::new(r"(?i)^(?:reset|reiniciar)$").unwrap();
    static ref RE_QUIT: Regex = Regex::new(r"(?i)^(?:q|quit|exit|sair)$").unwrap();

    /// One item of a scripted answer list: empty (skip) or a scale value
    static ref RE_LIST_ITEM: Regex = Regex::new(r"^(?:[+-]?[0-9])?$").unwrap();
}

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Answer(AnswerValue),
    Next,
    Prev,
    Skip,
    Help,
    Reset,
    Quit,
    /// Not understood, or a number outside the scale
    Invalid,
}

/// Parse a line of interactive input
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if RE_SCALE.is_match(line) {
        return line
            .parse::<i8>()
            .ok()
            .and_then(AnswerValue::from_value)
            .map(Command::Answer)
            .unwrap_or(Command::Invalid);
    }
    if RE_BUTTON.is_match(line) {
        return line
            .parse::<usize>()
            .ok()
            .and_then(AnswerValue::from_button)
            .map(Command::Answer)
            .unwrap_or(Command::Invalid);
    }

    if RE_NEXT.is_match(line) {
        Command::Next
    } else if RE_PREV.is_match(line) {
        Command::Prev
    } else if RE_SKIP.is_match(line) {
        Command::Skip
    } else if RE_HELP.is_match(line) {
        Command::Help
    } else if RE_RESET.is_match(line) {
        Command::Reset
    } else if RE_QUIT.is_match(line) {
        Command::Quit
    } else {
        Command::Invalid
    }
}

/// Parse a comma-separated answer list such as `2,-1,,0`. Empty items are skips.
pub fn parse_answer_list(list: &str) -> Result<Vec<Option<AnswerValue>>, String> {
    list.split(',')
        .enumerate()
        .map(|(i, item)| {
            let item = item.trim();
            if !RE_LIST_ITEM.is_match(item) {
                return Err(format!("item {}: '{}' is not a number", i + 1, item));
            }
            if item.is_empty() {
                return Ok(None);
            }
            item.parse::<i8>()
                .ok()
                .and_then(AnswerValue::from_value)
                .map(Some)
                .ok_or_else(|| format!("item {}: {} is outside -2..2", i + 1, item))
        })
        .collect()
}
