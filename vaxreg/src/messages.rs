//! Operator-facing message sets.
//!
//! Which error occurred is decided by the core; this module only maps an
//! error kind and a locale to the text printed for it.

use serde::{Deserialize, Serialize};

use crate::core::error::RegistryError;

/// Output language, chosen once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    /// Interpret the optional command-line language switch.
    ///
    /// Only `pt` selects Portuguese; any other value selects English.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "pt" { Locale::Pt } else { Locale::En }
    }
}

/// Lookup key for one message in each set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    TooManyBatches,
    DuplicateBatch,
    InvalidBatch,
    InvalidName,
    InvalidDate,
    InvalidQuantity,
    NoSuchVaccine,
    NoStock,
    AlreadyVaccinated,
    NoSuchBatch,
    NoSuchUser,
    NoMemory,
}

impl From<&RegistryError> for MessageKey {
    fn from(err: &RegistryError) -> Self {
        match err {
            RegistryError::TooManyBatches => MessageKey::TooManyBatches,
            RegistryError::InvalidDate => MessageKey::InvalidDate,
            RegistryError::DuplicateBatch => MessageKey::DuplicateBatch,
            RegistryError::InvalidName => MessageKey::InvalidName,
            RegistryError::InvalidBatch => MessageKey::InvalidBatch,
            RegistryError::InvalidQuantity => MessageKey::InvalidQuantity,
            RegistryError::NoSuchVaccine(_) => MessageKey::NoSuchVaccine,
            RegistryError::NoSuchBatch(_) => MessageKey::NoSuchBatch,
            RegistryError::NoSuchUser(_) => MessageKey::NoSuchUser,
            RegistryError::NoStock => MessageKey::NoStock,
            RegistryError::AlreadyVaccinated => MessageKey::AlreadyVaccinated,
            RegistryError::OutOfMemory => MessageKey::NoMemory,
        }
    }
}

pub fn message(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::En => english(key),
        Locale::Pt => portuguese(key),
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::TooManyBatches => "too many vaccines",
        MessageKey::DuplicateBatch => "duplicate batch number",
        MessageKey::InvalidBatch => "invalid batch",
        MessageKey::InvalidName => "invalid name",
        MessageKey::InvalidDate => "invalid date",
        MessageKey::InvalidQuantity => "invalid quantity",
        MessageKey::NoSuchVaccine => "no such vaccine",
        MessageKey::NoStock => "no stock",
        MessageKey::AlreadyVaccinated => "already vaccinated",
        MessageKey::NoSuchBatch => "no such batch",
        MessageKey::NoSuchUser => "no such user",
        MessageKey::NoMemory => "No memory",
    }
}

fn portuguese(key: MessageKey) -> &'static str {
    match key {
        MessageKey::TooManyBatches => "demasiadas vacinas",
        MessageKey::DuplicateBatch => "número de lote duplicado",
        MessageKey::InvalidBatch => "lote inválido",
        MessageKey::InvalidName => "nome inválido",
        MessageKey::InvalidDate => "data inválida",
        MessageKey::InvalidQuantity => "quantidade inválida",
        MessageKey::NoSuchVaccine => "vacina inexistente",
        MessageKey::NoStock => "esgotado",
        MessageKey::AlreadyVaccinated => "já vacinado",
        MessageKey::NoSuchBatch => "lote inexistente",
        MessageKey::NoSuchUser => "utente inexistente",
        MessageKey::NoMemory => "sem memória",
    }
}

/// Render an error as one output line (`<name>: <message>` for lookups).
pub fn render_error(locale: Locale, err: &RegistryError) -> String {
    let text = message(locale, MessageKey::from(err));
    match err.subject() {
        Some(subject) => format!("{subject}: {text}"),
        None => text.to_string(),
    }
}
