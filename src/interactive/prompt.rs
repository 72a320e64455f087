//! Line-oriented prompting over arbitrary input and output streams

use std::io::{BufRead, Write};

use crate::error::TobuddyResult;

/// Writes prompts and reads trimmed answers one line at a time
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt for a line of input
    ///
    /// Returns `None` once the input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> TobuddyResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the answer is empty or an integer
    ///
    /// Returns `None` for an empty answer or exhausted input.
    pub fn prompt_integer(&mut self, prompt: &str) -> TobuddyResult<Option<i64>> {
        loop {
            let Some(answer) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(None);
            }
            match answer.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => log::debug!("rejected answer {:?}: {}", answer, e),
            }
        }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}
