use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};
use std::str::FromStr;

use crate::domain::prompt::{Button, Prompt};

/// Dialogs on a line-oriented terminal. Anything other than a yes or no
/// answer, end of input included, counts as [`Button::Cancel`].
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = std::io::stdin();
        TerminalPrompt::new(stdin.lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPrompt { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, title: &str, message: &str) -> std::io::Result<String> {
        writeln!(self.output, "{title}")?;
        write!(self.output, "{message} [y/n] ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer)
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn confirm(&mut self, title: &str, message: &str) -> Button {
        match self.ask(title, message) {
            Ok(answer) => Button::from_str(answer.trim()).unwrap_or(Button::Cancel),
            Err(e) => {
                log::warn!("Failed to read confirmation: {}", e);
                Button::Cancel
            }
        }
    }

    fn alert(&mut self, title: Option<&str>, message: &str) {
        let written = match title {
            Some(title) => writeln!(self.output, "{title}\n{message}"),
            None => writeln!(self.output, "{message}"),
        };
        if let Err(e) = written {
            log::warn!("Failed to show alert: {}", e);
        }
    }
}
