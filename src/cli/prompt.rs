//! Line-oriented prompts that re-ask until the answer is usable.

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

use crate::domain::parse_date;

/// Why a prompt gave up.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input closed before a valid answer was read.
    #[error("end of input")]
    Eof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Reads answers from `R` and writes prompts and messages to `W`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, message: &str) -> PromptResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Letters and spaces only, at least one letter. Used for names, units
    /// and yes/no answers.
    pub fn read_text(&mut self, prompt: &str) -> PromptResult<String> {
        loop {
            let answer = self.ask(prompt)?;
            if is_plain_text(&answer) {
                return Ok(answer);
            }
            self.complain("Invalid input, please try again.")?;
        }
    }

    /// Any non-blank line. Used for recipe descriptions and instructions,
    /// which need punctuation.
    pub fn read_sentence(&mut self, prompt: &str) -> PromptResult<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.complain("Invalid input, please try again.")?;
        }
    }

    pub fn read_int(&mut self, prompt: &str) -> PromptResult<i64> {
        self.read_number(prompt, |_: &i64| None)
    }

    /// A finite number strictly greater than zero.
    pub fn read_positive(&mut self, prompt: &str) -> PromptResult<f64> {
        self.read_number(prompt, |value: &f64| {
            if !value.is_finite() {
                Some("Invalid input, please enter a number.")
            } else if *value <= 0.0 {
                Some("Invalid input, the value must be greater than zero. Please try again.")
            } else {
                None
            }
        })
    }

    /// A finite number, zero allowed.
    pub fn read_non_negative(&mut self, prompt: &str) -> PromptResult<f64> {
        self.read_number(prompt, |value: &f64| {
            if !value.is_finite() {
                Some("Invalid input, please enter a number.")
            } else if *value < 0.0 {
                Some("Invalid input, the value cannot be negative. Please try again.")
            } else {
                None
            }
        })
    }

    /// A `dd-MM-yyyy` date.
    pub fn read_date(&mut self, prompt: &str) -> PromptResult<NaiveDate> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_date(&answer) {
                Ok(date) => return Ok(date),
                Err(_) => self.complain("Invalid date format, please use dd-MM-yyyy.")?,
            }
        }
    }

    fn read_number<T: FromStr>(
        &mut self,
        prompt: &str,
        reject: impl Fn(&T) -> Option<&'static str>,
    ) -> PromptResult<T> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<T>() {
                Ok(value) => match reject(&value) {
                    None => return Ok(value),
                    Some(message) => self.complain(message)?,
                },
                Err(_) => self.complain("Invalid input, please enter a number.")?,
            }
        }
    }
}

fn is_plain_text(input: &str) -> bool {
    input.chars().any(char::is_alphabetic)
        && input.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}
