use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{debug, info};
use crate::core::error::{ErrorKind, Result};
use crate::query::command::{Command, HELP};
use crate::query::parser::CommandParser;
use crate::search::engine::QueryEngine;
use crate::session::render::{PlayerLayout, TableRenderer};

const PROMPT: &str = "query> ";

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Counters for one interactive run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub failed: usize,
}

/// Line-oriented query loop: read, parse, evaluate, render.
pub struct Session<'a> {
    engine: QueryEngine<'a>,
    parser: CommandParser,
    prompt: bool,
}

impl<'a> Session<'a> {
    pub fn new(engine: QueryEngine<'a>) -> Self {
        Session {
            engine,
            parser: CommandParser::new(),
            prompt: true,
        }
    }

    /// Disable the prompt, e.g. when input is piped
    pub fn without_prompt(mut self) -> Self {
        self.prompt = false;
        self
    }

    /// Run until `sair` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut lines = input.lines();

        loop {
            if self.prompt {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else { break };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            summary.commands += 1;
            match self.execute(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    summary.failed += 1;
                    Self::report(out, e.kind, &e.context)?;
                }
            }
            writeln!(out)?;
        }

        info!(commands = summary.commands, failed = summary.failed, "session closed");
        Ok(summary)
    }

    fn report<W: Write>(out: &mut W, kind: ErrorKind, context: &str) -> Result<()> {
        match kind {
            ErrorKind::UnknownCommand => writeln!(out, "{} (type 'help')", context)?,
            ErrorKind::NotFound | ErrorKind::InvalidInput => writeln!(out, "{}", context)?,
            _ => writeln!(out, "error: {}", context)?,
        }
        Ok(())
    }

    /// Parse and evaluate one line, writing its table to `out`.
    pub fn execute<W: Write>(&self, line: &str, out: &mut W) -> Result<Flow> {
        let command = self.parser.parse(line)?;
        let started = Instant::now();

        let rows = match &command {
            Command::Player { prefix } => {
                let hits = self.engine.by_name_prefix(prefix);
                TableRenderer::players(out, &hits, PlayerLayout::Compact)?;
                hits.len()
            }
            Command::User { user_id } => {
                let hits = self.engine.by_user(*user_id)?;
                TableRenderer::user_ratings(out, &hits)?;
                hits.len()
            }
            Command::Top { n, position } => {
                let hits = self.engine.top_by_position(*n, position);
                TableRenderer::players(out, &hits, PlayerLayout::Full)?;
                hits.len()
            }
            Command::Tags { tags } => {
                let hits = self.engine.by_tags(tags.as_slice());
                TableRenderer::players(out, &hits, PlayerLayout::Full)?;
                hits.len()
            }
            Command::Stats => {
                let stats = self.engine.index_stats();
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
                0
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                0
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        debug!(?command, rows, elapsed_us = started.elapsed().as_micros() as u64, "command done");
        Ok(Flow::Continue)
    }
}
