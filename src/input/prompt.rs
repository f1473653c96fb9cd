use anyhow::{Context, Result};
use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

/// Line-oriented prompting over any reader/writer pair.
///
/// Every read returns `None` once input is exhausted, so callers can end an
/// interactive loop cleanly on EOF.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        Self::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print a line of output
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text).context("Failed to write output")?;
        Ok(())
    }

    /// Show `message` followed by ": " and return the trimmed answer.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.writer, "{}: ", message).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Prompt and return the raw answer in lowercase
    pub fn ask(&mut self, message: &str) -> Result<Option<String>> {
        Ok(self.prompt(message)?.map(|answer| answer.to_lowercase()))
    }

    /// Show `message` with `data` on the following line; true only for "y".
    pub fn confirm(&mut self, message: &str, data: &str) -> Result<bool> {
        let answer = self.ask(&format!("{}\n{}", message, data))?;
        Ok(answer.as_deref() == Some("y"))
    }

    /// Give back the reader and writer (used to inspect output in tests)
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
