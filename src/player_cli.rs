#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::player::Player;
use crate::ui::{self, BoardView};

/// Interactive player reading from `input` and printing to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process' stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input stream closed");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn wait_for_start(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", ui::START_PROMPT)?;
        self.output.flush()?;
        // line-buffered terminals deliver the key together with Enter
        self.read_line()?;
        Ok(())
    }

    fn next_guess(&mut self, view: &BoardView<'_>) -> anyhow::Result<String> {
        write!(self.output, "{}", ui::guess_prompt(view.size()))?;
        self.output.flush()?;
        Ok(self.read_line()?.to_uppercase())
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        loop {
            write!(self.output, "{} [y/n]: ", ui::WIN_PROMPT)?;
            self.output.flush()?;
            match self.read_line()?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => continue,
            }
        }
    }

    fn show_board(&mut self, view: &BoardView<'_>) -> anyhow::Result<()> {
        writeln!(self.output, "{}", view)?;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
