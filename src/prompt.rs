use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::algorithm::Algorithm;

/// Line-based questions on any reader/writer pair, normally stdin and stdout.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the next line with surrounding whitespace removed.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading from input")?;
        if read == 0 {
            bail!("input ended before an answer to {:?}", question.trim());
        }

        Ok(line.trim().to_string())
    }

    /// Keeps asking until the answer is 1, 2 or 3.
    pub fn ask_algorithm(&mut self) -> Result<Algorithm> {
        loop {
            let answer = self.ask("Choose algorithm (1 - Dijkstra, 2 - BFS, 3 - DFS): ")?;
            match answer.parse().ok().and_then(Algorithm::from_choice) {
                Some(algorithm) => return Ok(algorithm),
                None => writeln!(
                    self.output,
                    "Invalid choice! Please enter a number between 1 and 3."
                )?,
            }
        }
    }
}
