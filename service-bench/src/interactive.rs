//! Single-search interactive session.
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use tracing::debug;

use super::baseline::{linear_search, BinaryTree};
use super::bench::build_index;
use super::config::RunMode;
use super::display;
use super::error::HarnessError;
use super::generator::ServiceGenerator;
use super::service::Service;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Linear,
    BinaryTree,
    RedBlackTree,
}

impl SearchAlgorithm {
    /// Map a menu choice (1 to 3) to an algorithm.
    pub fn from_choice(choice: u32) -> Option<SearchAlgorithm> {
        match choice {
            1 => Some(SearchAlgorithm::Linear),
            2 => Some(SearchAlgorithm::BinaryTree),
            3 => Some(SearchAlgorithm::RedBlackTree),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::BinaryTree => "Binary Search Tree (Binary)",
            SearchAlgorithm::RedBlackTree => "Red-Black Tree (RBTree)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub found: Option<Service>,
    pub elapsed: Duration,
}

/// Search `services` for `key` with the chosen algorithm.
///
/// Tree construction is not part of the measured time.
pub fn timed_search(algorithm: SearchAlgorithm, services: &[Service], key: &[u8]) -> SearchOutcome {
    let (found, elapsed) = match algorithm {
        SearchAlgorithm::Linear => {
            let start = Instant::now();
            let found = linear_search(services, key);
            (found, start.elapsed())
        }
        SearchAlgorithm::BinaryTree => {
            let mut tree = BinaryTree::new();
            for service in services {
                tree.insert(service);
            }

            let start = Instant::now();
            let found = tree.search(key);
            (found, start.elapsed())
        }
        SearchAlgorithm::RedBlackTree => {
            let index = build_index(services);
            let start = Instant::now();
            let found = index.search(key).copied();
            (found, start.elapsed())
        }
    };

    SearchOutcome {
        found: found.copied(),
        elapsed,
    }
}

/// Whitespace-separated tokens from a line-oriented reader.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Read the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }

        Ok(self.pending.pop_front())
    }
}

fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

/// Ask which harness flow to run.
///
/// An unrecognized choice is reported on `out` and yields `None`; only a
/// missing answer is an error.
pub fn choose_mode<R, W>(input: &mut Tokens<R>, out: &mut W) -> Result<Option<RunMode>, HarnessError>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Choose the way of going:")?;
    writeln!(out, "1. Interactive search")?;
    writeln!(out, "2. Benchmark")?;
    prompt(out, "Your choice: ")?;

    let choice = input
        .next_token()?
        .ok_or_else(|| HarnessError::InvalidInput("Error input.".to_string()))?;

    let mode = RunMode::parse(&choice);
    if mode.is_none() {
        writeln!(out, "Invalid input of choice.")?;
    }

    Ok(mode)
}

/// Generate a table of services, then run one timed search chosen by the user.
pub fn run_interactive<R, W>(
    input: &mut Tokens<R>,
    out: &mut W,
    generator: &mut ServiceGenerator,
) -> Result<SearchOutcome, HarnessError>
where
    R: BufRead,
    W: Write,
{
    prompt(out, "Enter the number of services to generate: ")?;
    let size = input
        .next_token()?
        .and_then(|t| t.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            HarnessError::InvalidInput("Invalid input for number of services.".to_string())
        })?;

    let services = generator.generate_services(size);
    writeln!(out, "\nGenerated services table:")?;
    display::write_table(out, &services)?;

    writeln!(out, "\nChoose search algorithm:")?;
    for choice in 1..=3 {
        if let Some(algorithm) = SearchAlgorithm::from_choice(choice) {
            writeln!(out, "{}. {}", choice, algorithm.name())?;
        }
    }
    prompt(out, "Your choice: ")?;
    let algorithm = input
        .next_token()?
        .and_then(|t| t.parse::<u32>().ok())
        .and_then(SearchAlgorithm::from_choice)
        .ok_or_else(|| HarnessError::InvalidInput("Invalid algorithm choice.".to_string()))?;

    prompt(out, "\nEnter service_name to search for: ")?;
    let key = input
        .next_token()?
        .ok_or_else(|| HarnessError::InvalidInput("Error reading search key.".to_string()))?;

    let outcome = timed_search(algorithm, &services, key.as_bytes());
    debug!(?algorithm, size, key = %key, found = outcome.found.is_some(), "interactive search");

    match &outcome.found {
        Some(service) => {
            writeln!(out, "\nFirst matching service found:")?;
            display::write_table(out, [service])?;
        }
        None => writeln!(out, "\nService name \"{}\" was not found.", key)?,
    }
    writeln!(out, "Search time: {:.8} sec.", outcome.elapsed.as_secs_f64())?;

    Ok(outcome)
}
