//! Line-oriented editing session on stdin.
//!
//! Each line is one session command (`add sofa`, `select 1`, `rotate 90`,
//! `save`, ...). Selection and the grid toggle live for the whole session,
//! unlike the one-shot furniture commands.

use std::io::{self, BufRead, Write};

use crate::app::{Command, NoticeLevel, Session};
use crate::cli::common::{CliContext, CliError, CliResult};
use crate::services::store::LayoutStore;
use clap::Args;

/// Edit the layout interactively, reading commands from stdin
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Stop at the first failing command
    #[arg(long)]
    pub strict: bool,
}

impl SessionArgs {
    /// Execute the session command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config = ctx.config()?;
        let store = ctx.store(&config)?;
        let layout = ctx.load_layout(&config, &store)?;

        let session = Session::new(layout, store, ctx.slot()).with_grid(config.ui.show_grid);
        tracing::info!(slot = %ctx.slot(), "session started");

        let stdin = io::stdin();
        let stdout = io::stdout();
        run(session, stdin.lock(), &mut stdout.lock(), self.strict)
    }
}

/// Feeds `input` to the session line by line, writing notices to `out` and
/// errors to stderr.
///
/// Blank lines and lines starting with `#` are skipped. `help` prints the
/// command list; `quit` or `exit` ends the session early.
fn run<S, R, W>(mut session: Session<S>, input: R, out: &mut W, strict: bool) -> CliResult<()>
where
    S: LayoutStore,
    R: BufRead,
    W: Write,
{
    let write_err = |e: io::Error| CliError::io(format!("Failed to write output: {e}"));
    let mut failures = 0_usize;

    for (number, line) in input.lines().enumerate() {
        let line = line.map_err(|e| CliError::io(format!("Failed to read input: {e}")))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                for usage in Command::USAGE {
                    writeln!(out, "  {usage}").map_err(write_err)?;
                }
                continue;
            }
            _ => {}
        }

        match session.execute_line(line) {
            Ok(notice) => {
                let prefix = match notice.level {
                    NoticeLevel::Info => "",
                    NoticeLevel::Warning => "warning: ",
                };
                writeln!(out, "{prefix}{notice}").map_err(write_err)?;
            }
            Err(e) => {
                failures += 1;
                eprintln!("line {}: {e:#}", number + 1);
                if strict {
                    return Err(CliError::validation(format!(
                        "Session stopped at line {}: {e:#}",
                        number + 1
                    )));
                }
            }
        }
    }

    tracing::info!(slot = %session.slot(), failures, "session ended");
    if failures > 0 {
        return Err(CliError::validation(format!(
            "{failures} command(s) failed"
        )));
    }
    Ok(())
}
