use crate::errors::AppError;
use log::trace;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const INVALID_INPUT: &str = "Invalid input. Try again.";

/// Interactive reader over whitespace-delimited tokens.
///
/// Several values may be typed on one line; they are consumed in order by
/// the following reads. A token that fails to parse throws away the rest of
/// its line, prints the invalid-input notice, and asks again.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, pending: VecDeque::new() }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of user-facing text.
    pub fn say(&mut self, msg: impl AsRef<str>) -> Result<(), AppError> {
        writeln!(self.output, "{}", msg.as_ref())?;
        self.output.flush()?;
        Ok(())
    }

    fn show_prompt(&mut self, prompt: &str) -> Result<(), AppError> {
        if !prompt.is_empty() {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn next_token(&mut self) -> Result<String, AppError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AppError::InputClosed);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next single-token word, e.g. a name or a filename.
    pub fn read_word(&mut self, prompt: &str) -> Result<String, AppError> {
        self.show_prompt(prompt)?;
        self.next_token()
    }

    /// Blocks until a token parses as `T`.
    pub fn read_value<T: FromStr>(&mut self, prompt: &str) -> Result<T, AppError> {
        loop {
            self.show_prompt(prompt)?;
            let tok = self.next_token()?;
            match tok.parse::<T>() {
                Ok(v) => return Ok(v),
                Err(_) => {
                    trace!("rejected input {:?}", tok);
                    self.pending.clear();
                    self.say(INVALID_INPUT)?;
                }
            }
        }
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i32, AppError> {
        self.read_value(prompt)
    }

    pub fn read_float(&mut self, prompt: &str) -> Result<f32, AppError> {
        self.read_value(prompt)
    }

    pub fn read_double(&mut self, prompt: &str) -> Result<f64, AppError> {
        self.read_value(prompt)
    }
}
