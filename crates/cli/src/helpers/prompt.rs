// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, ErrorKind, Write};

/// A source of answers for the interactive session.
pub trait LineSource {
    /// Shows `prompt` and reads one answer. `None` means the user ended the input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompts on a terminal. Ctrl-C and Ctrl-D end the input.
#[derive(Default)]
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl LineSource for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(e)) if is_end_of_input(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reads answers line by line, eg. from a pipe.
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt} = ");
        io::stdout().flush()?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
            Err(e) if is_end_of_input(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn is_end_of_input(e: &io::Error) -> bool {
    matches!(e.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof)
}
