// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::encode::encode_message;
use crate::helpers::prompt::{LineReader, LineSource, TerminalPrompt};
use crate::inspect::render_report;
use anyhow::Result;
use cyclic_code::{validate_range, CodeError, CodeParams, CyclicCode};
use std::io::{self, IsTerminal, Write};
use tracing::info;

/// Session state. Each step returns `None` once the user ends the input.
struct Session<S, W> {
    source: S,
    out: W,
}

impl<S: LineSource, W: Write> Session<S, W> {
    fn new(source: S, out: W) -> Self {
        Self { source, out }
    }

    fn run(&mut self) -> Result<()> {
        if self.run_until_exit()?.is_none() {
            writeln!(self.out, "\nExiting the program.")?;
        }
        Ok(())
    }

    fn run_until_exit(&mut self) -> Result<Option<()>> {
        let Some(code) = self.read_code()? else {
            return Ok(None);
        };
        write!(self.out, "\n{}", render_report(&code)?)?;
        writeln!(self.out)?;

        loop {
            let Some(line) = self.source.read_line("message")? else {
                return Ok(None);
            };
            match encode_message(&code, &line) {
                Ok(encoded) => writeln!(self.out, "codeword = {}", encoded.codeword)?,
                Err(err) => match err.downcast_ref::<CodeError>() {
                    Some(e) => writeln!(self.out, "{e}")?,
                    None => return Err(err),
                },
            }
        }
    }

    fn read_code(&mut self) -> Result<Option<CyclicCode>> {
        let n = loop {
            let Some(n) = self.read_number("n", 1, None)? else {
                return Ok(None);
            };
            // n = 1 leaves no room for 0 < k < n
            match validate_range(n, 1) {
                Ok(()) => break n,
                Err(e) => writeln!(self.out, "{e}")?,
            }
        };
        let Some(k) = self.read_number("k", 1, Some(n - 1))? else {
            return Ok(None);
        };

        loop {
            let Some(line) = self.source.read_line("g(x)")? else {
                return Ok(None);
            };
            match CodeParams::parse(n, k, &line) {
                Ok(params) => {
                    info!(n, k, "generator accepted");
                    return Ok(Some(CyclicCode::new(params)));
                }
                Err(e) if e.kind().is_some() => writeln!(self.out, "{e}")?,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Reads an integer in `lower..=upper`, asking again until one is given.
    fn read_number(
        &mut self,
        name: &str,
        lower: i64,
        upper: Option<usize>,
    ) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.source.read_line(name)? else {
                return Ok(None);
            };
            let Ok(value) = line.trim().parse::<i64>() else {
                writeln!(self.out, "Please enter a number")?;
                continue;
            };

            if value < lower {
                writeln!(self.out, "'{name}' must be greater than {}", lower - 1)?;
                continue;
            }
            // value >= lower >= 1 here
            let value = value as usize;
            match upper {
                Some(upper) if value > upper => {
                    writeln!(self.out, "'{name}' must be less than {}", upper + 1)?
                }
                _ => return Ok(Some(value)),
            }
        }
    }
}

pub fn execute() -> Result<()> {
    let stdout = io::stdout();
    if io::stdin().is_terminal() {
        Session::new(TerminalPrompt::default(), stdout.lock()).run()
    } else {
        Session::new(LineReader::new(io::stdin().lock()), stdout.lock()).run()
    }
}
