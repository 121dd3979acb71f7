//! Read-eval-print loop over an [`EditorSession`].

use std::io::{BufRead, Write};

use anyhow::Context;
use thiserror::Error;

use stocklist_core::{DomainError, RecordId};
use stocklist_inventory::{EditorSession, RecordStore};

use crate::cli::ShellConfig;
use crate::command::{Command, HELP, ParseError, RowRef, parse_line};
use crate::render;

const PROMPT: &str = "> ";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A command that could not be carried out. The loop reports it and keeps going.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("no row {0} in the current table")]
    NoSuchRow(usize),

    #[error("failed to encode rows: {0}")]
    Export(#[from] serde_json::Error),
}

pub struct Shell {
    session: EditorSession,
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        let store = if config.seed_demo {
            RecordStore::seeded()
        } else {
            RecordStore::new()
        };

        let mut session = EditorSession::with_store(store);
        session.set_sort(config.sort);
        session.set_filter(config.category.clone());

        Self { session, config }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Run one command, returning what to print.
    pub fn execute(&mut self, command: Command) -> Result<(Flow, String), ShellError> {
        let output = match command {
            Command::List => self.screen(),
            Command::Add => {
                self.session.open_create()?;
                self.screen()
            }
            Command::Edit(row) => {
                let id = self.resolve(row)?;
                self.session.open_edit(id)?;
                self.screen()
            }
            Command::Set { field, value } => {
                self.session.set_field(field, value)?;
                render::form_table(self.session.form())
                    .map(|table| format!("{table}\n"))
                    .unwrap_or_default()
            }
            Command::Save => match self.session.submit()? {
                Some(id) => format!("saved {id}\n{}", self.screen()),
                None => format!("record no longer exists; nothing saved\n{}", self.screen()),
            },
            Command::Cancel => {
                self.session.cancel();
                self.screen()
            }
            Command::Delete(row) => {
                let id = self.resolve(row)?;
                if self.session.delete(id) {
                    self.screen()
                } else {
                    "nothing to delete\n".to_string()
                }
            }
            Command::Filter(category) => {
                self.session.set_filter(category);
                self.screen()
            }
            Command::Sort => {
                self.session.toggle_sort();
                self.screen()
            }
            Command::Categories => render::category_list(
                &self.session.categories(),
                self.session.view().filter.category(),
            ),
            Command::Export => {
                let mut json = serde_json::to_string_pretty(&self.session.rows())?;
                json.push('\n');
                json
            }
            Command::Help => format!("{HELP}\n"),
            Command::Quit => return Ok((Flow::Quit, String::new())),
        };

        Ok((Flow::Continue, output))
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        write!(out, "{}{PROMPT}", self.screen()).context("write to output")?;
        out.flush().context("flush output")?;

        for line in input.lines() {
            let line = line.context("read command")?;

            let result = parse_line(&line)
                .map_err(ShellError::from)
                .and_then(|command| match command {
                    Some(command) => self.execute(command),
                    None => Ok((Flow::Continue, String::new())),
                });

            match result {
                Ok((Flow::Quit, _)) => break,
                Ok((Flow::Continue, text)) => write!(out, "{text}").context("write to output")?,
                Err(e) => {
                    tracing::debug!(error = %e, "command failed");
                    writeln!(out, "error: {e}").context("write to output")?;
                }
            }

            write!(out, "{PROMPT}").context("write to output")?;
            out.flush().context("flush output")?;
        }

        Ok(())
    }

    fn screen(&self) -> String {
        render::screen(&self.session, self.config.low_stock_threshold)
    }

    fn resolve(&self, row: RowRef) -> Result<RecordId, ShellError> {
        match row {
            RowRef::Id(id) => Ok(id),
            RowRef::Row(n) => n
                .checked_sub(1)
                .and_then(|index| self.session.rows().get(index).map(|r| r.record_id()))
                .ok_or(ShellError::NoSuchRow(n)),
        }
    }
}
