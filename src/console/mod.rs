//! Interactive console: prompts with validation and retry, and the session loop.
//!
//! The prompter is generic over its input and output so sessions can be scripted in tests. End of
//! input at any prompt ends the session quietly.

pub mod render;

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{AnalysisError, SelectorKind};
use crate::pager::{PageRequest, Pages};
use crate::pipeline;
use crate::selectors::{City, Month, Selection, UserDay};
use crate::trips::LoadOptions;

/// Which time filters the user wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    Month,
    Day,
    Both,
    None,
}

impl FilterChoice {
    fn wants_month(self) -> bool {
        matches!(self, FilterChoice::Month | FilterChoice::Both)
    }

    fn wants_day(self) -> bool {
        matches!(self, FilterChoice::Day | FilterChoice::Both)
    }
}

impl FromStr for FilterChoice {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" => Ok(FilterChoice::Month),
            "day" => Ok(FilterChoice::Day),
            "both" => Ok(FilterChoice::Both),
            "none" => Ok(FilterChoice::None),
            _ => Err(AnalysisError::unsupported(SelectorKind::Filter, s.trim())),
        }
    }
}

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

    /// Print `question` and read one line; `None` at end of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until `parse` accepts the answer, printing its complaint after each rejection.
    fn ask_until<T>(
        &mut self,
        question: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(v) => return Ok(Some(v)),
                Err(complaint) => {
                    debug!(%answer, %complaint, "rejected prompt answer");
                    writeln!(self.output, "{complaint}\n")?;
                }
            }
        }
    }

    pub fn ask_city(&mut self) -> io::Result<Option<City>> {
        self.ask_until(
            "Would you like to see data for Chicago, New York City, or Washington?",
            parse_with_retry::<City>,
        )
    }

    pub fn ask_filter(&mut self) -> io::Result<Option<FilterChoice>> {
        self.ask_until(
            "Would you like to filter the data by month, day, both, or not at all? \
             Type \"none\" for no time filter.",
            parse_with_retry::<FilterChoice>,
        )
    }

    pub fn ask_month(&mut self) -> io::Result<Option<Month>> {
        self.ask_until(
            "Which month? January, February, March, April, May, or June?",
            parse_with_retry::<Month>,
        )
    }

    pub fn ask_day(&mut self) -> io::Result<Option<UserDay>> {
        self.ask_until(
            "Which day? Please type your response as an integer (e.g. 1=Sunday).",
            |answer| {
                let n: i64 = answer
                    .parse()
                    .map_err(|_| "Please input an integer value!".to_string())?;
                u8::try_from(n)
                    .map_err(|_| AnalysisError::unsupported(SelectorKind::Day, answer))
                    .and_then(UserDay::new)
                    .map_err(|e| retry_message(&e))
            },
        )
    }

    /// Ask for city, filter choice, then month and/or day as chosen.
    pub fn ask_selection(&mut self) -> io::Result<Option<Selection>> {
        let Some(city) = self.ask_city()? else {
            return Ok(None);
        };
        let Some(choice) = self.ask_filter()? else {
            return Ok(None);
        };

        let mut selection = Selection::city(city);
        if choice.wants_month() {
            let Some(month) = self.ask_month()? else {
                return Ok(None);
            };
            selection = selection.with_month(month);
        }
        if choice.wants_day() {
            let Some(day) = self.ask_day()? else {
                return Ok(None);
            };
            selection = selection.with_day(day);
        }
        render::rule(&mut self.output)?;
        Ok(Some(selection))
    }

    pub fn ask_more(&mut self) -> io::Result<Option<PageRequest>> {
        self.ask_until(
            "\nWould you like to view more individual trip data? Type 'yes' or 'no'.",
            parse_with_retry::<PageRequest>,
        )
    }

    /// Only an explicit `yes` restarts.
    pub fn ask_restart(&mut self) -> io::Result<bool> {
        let answer = self.ask("\nWould you like to restart? Enter yes or no.")?;
        Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("yes")))
    }

    /// Show the first page, then one more page per `yes` until `no` or the pages run out.
    ///
    /// Returns the number of pages shown.
    pub fn browse(&mut self, pages: Pages) -> io::Result<usize> {
        let mut pages = pages.peekable();
        let mut shown = 0;
        while let Some(page) = pages.next() {
            render::write_page(&mut self.output, &page)?;
            shown += 1;
            if pages.peek().is_none() {
                break;
            }
            match self.ask_more()? {
                Some(PageRequest::More) => {}
                Some(PageRequest::Stop) | None => break,
            }
        }
        Ok(shown)
    }
}

fn retry_message(err: &AnalysisError) -> String {
    format!("{err}. Please try again!")
}

fn parse_with_retry<T: FromStr<Err = AnalysisError>>(answer: &str) -> Result<T, String> {
    answer.parse::<T>().map_err(|e| retry_message(&e))
}

/// Prompt, analyse, show, and offer a restart until the user declines or input ends.
///
/// Load failures and empty selections are reported and end only the current run.
pub fn interactive<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: &LoadOptions,
) -> io::Result<()> {
    writeln!(prompter.output(), "\nHello! Let's explore some US bikeshare data!\n")?;
    loop {
        let Some(selection) = prompter.ask_selection()? else {
            return Ok(());
        };

        match pipeline::run(&selection, options) {
            Ok(run) => {
                render::write_reports(prompter.output(), &run.reports)?;
                prompter.browse(run.pages)?;
            }
            Err(err) => {
                warn!(%err, "analysis run failed");
                render::write_error(prompter.output(), &err)?;
            }
        }

        if !prompter.ask_restart()? {
            return Ok(());
        }
    }
}
