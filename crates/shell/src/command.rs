//! Line-oriented command parsing.

use core::str::FromStr;

use thiserror::Error;

use stocklist_core::{DomainError, RecordId};
use stocklist_inventory::Field;

pub const HELP: &str = "\
commands:
  list                    show the table
  add                     open an empty form
  edit <row|id>           open the form for a record
  set <field> <value>     stage a value (name, category, quantity, price, description)
  save                    submit the open form
  cancel                  discard the open form
  delete <row|id>         remove a record
  filter [<category>]     show one category, or all when omitted
  sort                    flip the quantity sort direction
  categories              list known categories
  export                  print the visible rows as JSON
  help                    show this text
  quit                    leave (nothing is saved)";

/// A record reference as typed by the user: a 1-based row number in the
/// current table, or a full record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRef {
    Row(usize),
    Id(RecordId),
}

impl FromStr for RowRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(row) = s.parse::<usize>() {
            return Ok(RowRef::Row(row));
        }
        s.parse::<RecordId>()
            .map(RowRef::Id)
            .map_err(|_| ParseError::BadRow(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Edit(RowRef),
    Set { field: Field, value: String },
    Save,
    Cancel,
    Delete(RowRef),
    Filter(Option<String>),
    Sort,
    Categories,
    Export,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}' (type `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is neither a row number nor a record id")]
    BadRow(String),

    #[error(transparent)]
    Field(#[from] DomainError),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((line, ""));

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "add" | "new" => Command::Add,
        "edit" => Command::Edit(required(rest, "edit <row|id>")?.parse()?),
        "set" => {
            let args = required(rest, "set <field> <value>")?;
            let (field, value) = args
                .split_once(char::is_whitespace)
                .map(|(f, v)| (f, v.trim()))
                .unwrap_or((args, ""));
            Command::Set {
                field: field.parse()?,
                value: value.to_string(),
            }
        }
        "save" | "submit" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(required(rest, "delete <row|id>")?.parse()?),
        "filter" => Command::Filter((!rest.is_empty()).then(|| rest.to_string())),
        "sort" => Command::Sort,
        "categories" => Command::Categories,
        "export" => Command::Export,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(ParseError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

fn required<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::Usage(usage))
    } else {
        Ok(rest)
    }
}
