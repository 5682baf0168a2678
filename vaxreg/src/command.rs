//! Parsing of input lines into commands.
//!
//! Each line starts with a one-character code followed by whitespace
//! separated arguments. User names may be wrapped in double quotes to
//! include spaces.

use crate::core::date::{Date, ParseDateError};
use crate::core::types::NewBatch;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `c <batch> <dd-mm-yyyy> <doses> <vaccine>`
    AddBatch(NewBatch),
    /// `l [<vaccine> ...]`
    ListBatches { vaccines: Vec<String> },
    /// `a <user> <vaccine>`
    Vaccinate { user: String, vaccine: String },
    /// `r <batch>`
    RemoveBatch { batch_id: String },
    /// `u [<user>]`
    ListInoculations { user: Option<String> },
    /// `t` without argument.
    ShowDate,
    /// `t <dd-mm-yyyy>`
    SetDate(Result<Date, ParseDateError>),
    /// `d <user> [<dd-mm-yyyy> [<batch>]]`
    DeleteInoculations {
        user: String,
        date: Option<Result<Date, ParseDateError>>,
        batch_id: Option<String>,
    },
    /// `q`
    Quit,
}

/// Parse one line. Returns `None` for empty lines and unknown codes.
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut chars = line.chars();
    let code = chars.next()?;
    let mut args = Args::new(chars.as_str());

    let command = match code {
        'c' => Command::AddBatch(NewBatch {
            batch_id: args.token().unwrap_or_default().to_string(),
            expiry: args.token().and_then(|raw| raw.parse().ok()),
            doses: args.token().and_then(|raw| raw.parse().ok()),
            vaccine: args.rest().to_string(),
        }),
        'l' => Command::ListBatches {
            vaccines: args.tokens().map(str::to_string).collect(),
        },
        'a' => Command::Vaccinate {
            user: args.user().unwrap_or_default().to_string(),
            vaccine: args.token().unwrap_or_default().to_string(),
        },
        'r' => Command::RemoveBatch {
            batch_id: args.token().unwrap_or_default().to_string(),
        },
        'u' => Command::ListInoculations {
            user: args.user().map(str::to_string),
        },
        't' => match args.token() {
            None => Command::ShowDate,
            Some(raw) => Command::SetDate(raw.parse()),
        },
        'd' => Command::DeleteInoculations {
            user: args.user().unwrap_or_default().to_string(),
            date: args.token().map(|raw| raw.parse()),
            batch_id: args.token().map(str::to_string),
        },
        'q' => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Cursor over the argument part of a line.
struct Args<'a> {
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn new(rest: &'a str) -> Self {
        Self { rest }
    }

    /// Next whitespace-delimited token.
    fn token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn tokens(mut self) -> impl Iterator<Item = &'a str> {
        std::iter::from_fn(move || self.token())
    }

    /// Next user name: a quoted string (quotes stripped) or a plain token.
    ///
    /// An unterminated quote runs to the end of the line.
    fn user(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        let Some(quoted) = trimmed.strip_prefix('"') else {
            return self.token();
        };
        match quoted.find('"') {
            Some(end) => {
                self.rest = &quoted[end + 1..];
                Some(&quoted[..end])
            }
            None => {
                self.rest = "";
                Some(quoted)
            }
        }
    }

    /// Everything left on the line, surrounding whitespace removed.
    fn rest(&mut self) -> &'a str {
        let rest = self.rest.trim();
        self.rest = "";
        rest
    }
}
