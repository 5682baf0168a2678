//! Command execution and output rendering.
//!
//! Connects parsed [`Command`]s to [`System`] operations and turns results
//! into output lines in the selected [`Locale`].

use tracing::{debug, warn};

use crate::command::{Command, parse_line};
use crate::core::batches::Batch;
use crate::core::error::{RegistryError, RegistryResult};
use crate::core::ledger::Inoculation;
use crate::messages::{Locale, render_error};
use crate::system::System;

/// What the session should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// `q` was read.
    Quit,
    /// Storage could not grow; the session must stop.
    OutOfMemory,
}

/// Output of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub flow: Flow,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            flow: Flow::Continue,
        }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }

    fn silent(flow: Flow) -> Self {
        Self {
            lines: Vec::new(),
            flow,
        }
    }
}

/// Parse and execute one input line.
pub fn dispatch_line(system: &mut System, locale: Locale, line: &str) -> Reply {
    match parse_line(line) {
        Some(command) => dispatch(system, locale, command),
        None => {
            debug!(line = line.trim_end(), "ignoring unrecognized line");
            Reply::silent(Flow::Continue)
        }
    }
}

/// Execute a parsed command.
pub fn dispatch(system: &mut System, locale: Locale, command: Command) -> Reply {
    let result = match command {
        Command::AddBatch(request) => system.add_batch(&request).map(Reply::line),
        Command::ListBatches { vaccines } => {
            let lines = system
                .list_batches(&vaccines)
                .into_iter()
                .map(|item| match item {
                    Ok(batch) => format_batch(batch),
                    Err(err) => render_error(locale, &err),
                })
                .collect();
            Ok(Reply::lines(lines))
        }
        Command::Vaccinate { user, vaccine } => system.vaccinate(&user, &vaccine).map(Reply::line),
        Command::RemoveBatch { batch_id } => system
            .remove_batch(&batch_id)
            .map(|count| Reply::line(count.to_string())),
        Command::ListInoculations { user } => system
            .list_inoculations(user.as_deref())
            .map(|entries| Reply::lines(entries.into_iter().map(format_inoculation).collect())),
        Command::ShowDate => Ok(Reply::line(system.today().to_string())),
        Command::SetDate(date) => date
            .map_err(|_| RegistryError::InvalidDate)
            .and_then(|date| system.set_today(date))
            .map(|date| Reply::line(date.to_string())),
        Command::DeleteInoculations {
            user,
            date,
            batch_id,
        } => system
            .delete_inoculations(&user, date.as_ref(), batch_id.as_deref())
            .map(|count| Reply::line(count.to_string())),
        Command::Quit => Ok(Reply::silent(Flow::Quit)),
    };
    reply_or_error(locale, result)
}

/// Turn a command result into a reply. Fatal errors stop the session.
pub(crate) fn reply_or_error(locale: Locale, result: RegistryResult<Reply>) -> Reply {
    match result {
        Ok(reply) => reply,
        Err(err) if err.is_fatal() => {
            warn!(%err, "stopping session");
            Reply {
                lines: vec![render_error(locale, &err)],
                flow: Flow::OutOfMemory,
            }
        }
        Err(err) => {
            debug!(%err, "command rejected");
            Reply::line(render_error(locale, &err))
        }
    }
}

/// `<vaccine> <batch> <dd-mm-yyyy> <doses> <applications>`
pub fn format_batch(batch: &Batch) -> String {
    format!(
        "{} {} {} {} {}",
        batch.vaccine, batch.id, batch.expiry, batch.doses, batch.applications
    )
}

/// `<user> <batch> <dd-mm-yyyy>`
pub fn format_inoculation(entry: &Inoculation) -> String {
    format!("{} {} {}", entry.user, entry.batch_id, entry.date)
}
