//! Line-oriented console used by every workflow.
//!
//! Generic over the reader and writer so the binary runs on stdin/stdout and
//! tests run on in-memory buffers.

use super::{WorkflowError, WorkflowResult};
use std::fmt::Display;
use std::io::{BufRead, StdinLock, Stdout, Write};

pub struct Console<I, O> {
    input: I,
    output: O,
}

/// Console bound to the process's standard streams.
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> WorkflowResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes `message` without a newline and reads one line of input.
    ///
    /// The returned line has its line terminator stripped.
    ///
    /// # Errors
    /// - `WorkflowError::InputClosed` when input is at end-of-file.
    pub fn prompt(&mut self, message: &str) -> WorkflowResult<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WorkflowError::InputClosed);
        }

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Prompts for a yes/no answer. Only `y`/`Y` count as yes.
    pub fn confirm(&mut self, message: &str) -> WorkflowResult<bool> {
        let answer = self.prompt(message)?;
        Ok(is_yes(&answer))
    }

    /// Prompts until the answer is `y`/`Y` or `n`/`N`.
    pub fn ask_yes_no(&mut self, message: &str) -> WorkflowResult<bool> {
        loop {
            let answer = self.prompt(message)?;
            match answer.trim() {
                "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                _ => self.say(YES_NO_HINT)?,
            }
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

const YES_NO_HINT: &str = "Please answer y or n.";

/// Returns whether a confirmation answer is affirmative.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}
