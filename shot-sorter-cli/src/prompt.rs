//! Interactive naming of game IDs the catalog and store couldn't resolve.

use std::io::{BufRead, Write};

use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shot_sorter_lib::steam::Prediction;
use shot_sorter_lib::{Decision, GameId, Prompter};

/// Asks the operator on a terminal (or any reader/writer pair).
pub(crate) struct TerminalPrompter<R, W> {
    input: R,
    output: W,
    /// Spinner to hide while the operator is typing.
    spinner: Option<ProgressBar>,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub(crate) fn new(input: R, output: W, spinner: Option<ProgressBar>) -> Self {
        Self {
            input,
            output,
            spinner,
        }
    }

    /// Print `question` and read one trimmed line. `None` on EOF or read error.
    fn ask(&mut self, question: &str) -> Option<String> {
        write!(self.output, "{question}").ok()?;
        self.output.flush().ok()?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn converse(&mut self, id: GameId, prediction: Option<&Prediction>) -> Decision {
        let _ = writeln!(
            self.output,
            "Game ID not present in the catalog: {}",
            id.if_supports_color(Stdout, |t| t.bold())
        );

        match prediction {
            Some(p) => {
                let _ = writeln!(
                    self.output,
                    "\nPredicted game name:\n{}",
                    p.if_supports_color(Stdout, |t| t.cyan())
                );
                match self.ask("Is this name correct? (y/n): ") {
                    Some(answer) if answer.eq_ignore_ascii_case("y") => return Decision::Accept,
                    Some(_) => {}
                    None => return Decision::Decline,
                }
            }
            None => {
                let _ = writeln!(self.output, "\nThe store has no name for this ID.");
            }
        }

        let Some(name) = self.ask("What is the correct name? ") else {
            return Decision::Decline;
        };
        if name.is_empty() {
            return Decision::Decline;
        }
        let Some(year) = self.ask("What is the correct year? ") else {
            return Decision::Decline;
        };
        if year.is_empty() {
            return Decision::Correct { name, year: 0 };
        }
        match year.parse::<u32>() {
            Ok(year) => Decision::Correct { name, year },
            Err(_) => {
                let _ = writeln!(self.output, "'{year}' is not a year; catalog not updated.");
                Decision::Decline
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn confirm(&mut self, id: GameId, prediction: Option<&Prediction>) -> Decision {
        match self.spinner.clone() {
            Some(pb) => pb.suspend(|| self.converse(id, prediction)),
            None => self.converse(id, prediction),
        }
    }
}
