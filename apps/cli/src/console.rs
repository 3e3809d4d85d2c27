//! Line-based terminal interaction.

use drill_core::Interaction;
use std::io::{self, BufRead, Write};

/// Blocking console over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Interaction for Console<R, W> {
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    fn display(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}
