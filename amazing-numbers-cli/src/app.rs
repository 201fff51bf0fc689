use crate::formatter::ReportFormatter;
use crate::parser::{Command, parse_command};
use amazing_numbers_core::utils::Terminal;
use amazing_numbers_core::{Outcome, QueryError, execute};
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to Amazing Numbers!";

pub const PROMPT: &str = "Enter a request: ";

pub const GOODBYE: &str = "Goodbye!";

pub const MENU: &str = "\
Supported requests:
- enter a natural number to know its properties;
- enter two natural numbers to obtain the properties of the list:
  * the first parameter represents a starting number;
  * the second parameter shows how many consecutive numbers are to be processed;
- two natural numbers and properties to search for;
- a property preceded by minus must not be present in numbers;
- separate the parameters with one space;
- enter 0 to exit.
";

/// What the session should do after a line has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Rejected,
    Exit,
}

/// The console driver: reads request lines, hands them to the query engine
/// and prints what comes back.
pub struct App {
    formatter: Box<dyn ReportFormatter>,
}

impl App {
    pub fn new(formatter: Box<dyn ReportFormatter>) -> Self {
        Self { formatter }
    }

    /// Interactive session, until `0` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) -> io::Result<()> {
        terminal.say(WELCOME)?;
        terminal.say("")?;
        terminal.say(MENU)?;

        while let Some(line) = terminal.ask(PROMPT)? {
            self.separate(terminal)?;
            if self.answer(&line, terminal)? == Step::Exit {
                break;
            }
        }

        terminal.say(GOODBYE)
    }

    /// Answers one request line.
    ///
    /// Rejected requests are printed as well; only I/O failures are errors.
    pub fn answer<R: BufRead, W: Write>(
        &self,
        line: &str,
        terminal: &mut Terminal<R, W>,
    ) -> io::Result<Step> {
        let request = match parse_command(line) {
            Ok(Command::Help) => {
                terminal.say(MENU)?;
                return Ok(Step::Continue);
            }
            Ok(Command::Exit) => return Ok(Step::Exit),
            Ok(Command::Run(request)) => request,
            Err(error) => return self.reject(error, terminal),
        };

        match execute(&request) {
            Ok(Outcome::Report(report)) => terminal.say(&self.formatter.report(&report))?,
            Ok(Outcome::Matches(matches)) => {
                for entry in matches {
                    terminal.say(&self.formatter.entry(&entry))?;
                }
            }
            Err(error) => return self.reject(error, terminal),
        }

        self.separate(terminal)?;
        Ok(Step::Continue)
    }

    fn reject<R: BufRead, W: Write>(
        &self,
        error: QueryError,
        terminal: &mut Terminal<R, W>,
    ) -> io::Result<Step> {
        let reason = std::error::Error::source(&error).map(ToString::to_string);
        tracing::info!(%error, ?reason, "request rejected");
        terminal.say(&self.formatter.error(&error))?;
        self.separate(terminal)?;
        Ok(Step::Rejected)
    }

    fn separate<R: BufRead, W: Write>(&self, terminal: &mut Terminal<R, W>) -> io::Result<()> {
        if self.formatter.separated() {
            terminal.say("")?;
        }
        Ok(())
    }
}
