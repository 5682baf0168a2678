//! Line-oriented command session over a reader and a writer.
//!
//! Input is read as raw bytes. A line that is not valid UTF-8 is decoded
//! lossily and handled like any other line.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::dispatch::{Flow, Reply, dispatch_line};
use crate::exit_codes;
use crate::messages::Locale;
use crate::system::System;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A `q` command was read.
    Quit,
    /// Input ran out without a `q`.
    EndOfInput,
    /// Storage could not grow.
    OutOfMemory,
}

impl SessionEnd {
    /// Process exit code for a session that ended this way.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Quit | Self::EndOfInput => exit_codes::OK,
            Self::OutOfMemory => exit_codes::NO_MEMORY,
        }
    }
}

/// Read commands line by line, writing each reply before reading the next.
pub fn run_session<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    system: &mut System,
    locale: Locale,
) -> Result<SessionEnd> {
    info!(?locale, today = %system.today(), "session started");
    drive(reader, writer, |line| dispatch_line(system, locale, line))
}

fn drive<R, W, F>(mut reader: R, mut writer: W, mut handle: F) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Reply,
{
    let mut processed = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("read input line")?;
        if read == 0 {
            break;
        }
        let line = decode_line(&buf);
        let reply = handle(&line);
        for out in &reply.lines {
            writeln!(writer, "{out}").context("write output line")?;
        }
        processed += 1;
        let end = match reply.flow {
            Flow::Continue => continue,
            Flow::Quit => SessionEnd::Quit,
            Flow::OutOfMemory => SessionEnd::OutOfMemory,
        };
        writer.flush().context("flush output")?;
        info!(?end, processed, "session finished");
        return Ok(end);
    }
    writer.flush().context("flush output")?;
    debug!(processed, "input exhausted");
    Ok(SessionEnd::EndOfInput)
}

/// Strip the `\n` or `\r\n` terminator and decode, replacing invalid bytes.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if matches!(line, Cow::Owned(_)) {
        debug!(len = raw.len(), "input line is not valid UTF-8");
    }
    line.into_owned()
}
