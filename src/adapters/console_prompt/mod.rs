// Console prompt adapter - Operator confirmation on stdin/stderr
//
// The question goes to stderr so stdout carries only the preview.

use std::io::{self, BufRead, Write};

use crate::domain::errors::*;
use crate::ports::ConfirmPort;

/// Interpret one answer line: empty or yes proceeds, anything else stops.
pub fn answer_means_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes")
}

/// Asks on the terminal and waits for Enter
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }

    fn ask(&self, prompt: &str, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<bool> {
        write!(output, "\n{} ", prompt)?;
        output.flush()?;

        let mut answer = String::new();
        // End of input counts as a refusal.
        if input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }
        Ok(answer_means_yes(&answer))
    }
}

impl ConfirmPort for ConsolePrompt {
    fn confirm(&self, prompt: &str) -> DomainResult<bool> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stderr();
        self.ask(prompt, &mut input, &mut output)
            .map_err(DomainError::ConsoleFailed)
    }
}
