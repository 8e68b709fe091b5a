use anyhow::{Context, Result, anyhow, bail};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// Reads whitespace-separated tokens from `input`, writing prompts to `output`.
///
/// Tokens are buffered across lines, so several answers may be given on a
/// single line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Writes `text` without a trailing newline and flushes.
    pub fn say(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .context("Failed to write to output")
    }

    pub fn say_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write to output")
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read from input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn next_value(&mut self, prompt: &str, what: &str) -> Result<String> {
        self.say(prompt)?;
        let token = self
            .next_token()?
            .ok_or_else(|| anyhow!("Unexpected end of input while reading {what}"))?;
        debug!(?token, what, "Read value");
        Ok(token)
    }

    /// Prompts and parses a number, failing on malformed input or end of input.
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str, what: &str) -> Result<T> {
        let token = self.next_value(prompt, what)?;
        token
            .parse::<T>()
            .map_err(|_| anyhow!("Invalid number: '{token}'"))
            .with_context(|| format!("Failed to read {what}"))
    }

    /// Like `ask_number` for amounts, rates and periods. Rejects `nan` and `inf`.
    pub fn ask_amount(&mut self, prompt: &str, what: &str) -> Result<f64> {
        let token = self.next_value(prompt, what)?;
        parse_amount(&token).with_context(|| format!("Failed to read {what}"))
    }

    /// Prompts for a menu answer. Unparsable answers and end of input are `None`.
    pub fn ask_choice(&mut self, prompt: &str) -> Result<Option<u32>> {
        self.say(prompt)?;
        let choice = self.next_token()?.and_then(|t| t.parse().ok());
        debug!(?choice, "Read menu choice");
        Ok(choice)
    }

    /// Prompts for a single character, taken from the start of the next token.
    pub fn ask_char(&mut self, prompt: &str, what: &str) -> Result<char> {
        self.say(prompt)?;
        match self.next_token()?.and_then(|t| t.chars().next()) {
            Some(c) => Ok(c),
            None => bail!("Unexpected end of input while reading {what}"),
        }
    }

}

/// Parses a finite decimal number. Also used for command line values.
pub fn parse_amount(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| anyhow!("Invalid number: '{token}'"))
}
