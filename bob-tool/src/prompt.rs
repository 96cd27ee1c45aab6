// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Interactive yes/no prompt on stdin.

use std::io::{self, BufRead, Write};

use bob_common::{Confirm, Error, Result};

/// Asks on stdout and reads the answer from a line-oriented input.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

pub type StdinConfirm = PromptConfirm<io::StdinLock<'static>, io::Stdout>;

impl StdinConfirm {
    pub fn stdin() -> Self {
        PromptConfirm::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{} [y/N] ", prompt)
            .and_then(|()| self.output.flush())
            .map_err(Error::Prompt)?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .map_err(Error::Prompt)?;

        Ok(is_yes(&answer))
    }
}

/// `y` or `yes`, any case. Anything else, including EOF, is a no.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
