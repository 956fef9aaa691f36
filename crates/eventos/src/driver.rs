//! The read-dispatch-print loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use ui::{App, Navigator};

use crate::command::{self, Command, HELP};

/// Counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines that produced a command.
    pub commands: usize,
    /// Commands that failed to parse or dispatch.
    pub errors: usize,
}

/// `welcome > login`.
pub fn describe_stack(navigator: &Navigator) -> String {
    navigator
        .back_stack()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" > ")
}

fn print_state<W: Write>(app: &App, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:<16} [{}]",
        app.current_route().to_string(),
        describe_stack(app.navigator())
    )?;
    Ok(())
}

/// Run every line of `input` against `app`, reporting to `out`. Parse and
/// dispatch failures are printed and counted; only I/O errors abort.
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, out: &mut W) -> Result<Summary> {
    let mut summary = Summary::default();
    print_state(app, out)?;
    for line in input.lines() {
        let line = line?;
        let parsed = command::parse(&line, app.current_route().kind());
        let command = match parsed {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                summary.commands += 1;
                summary.errors += 1;
                tracing::warn!(%err, line = line.trim(), "bad command");
                writeln!(out, "! {err}")?;
                continue;
            }
        };
        summary.commands += 1;

        let outcome = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Back => Ok(app.back()),
            Command::Go(path) => app.open(&path),
            Command::Dispatch(action) => app.dispatch(action),
        };
        match outcome {
            Ok(transition) => {
                if !transition.navigated {
                    tracing::debug!(route = %transition.to, "stayed");
                }
            }
            Err(err) => {
                summary.errors += 1;
                writeln!(out, "! {err}")?;
            }
        }
        print_state(app, out)?;
    }
    Ok(summary)
}
