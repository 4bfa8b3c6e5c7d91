//! ORLIB crew scheduling instance files.
//!
//! Format: a header line `nr_tasks time_limit`, followed by `nr_tasks`
//! lines of `start finish`, followed by any number of `task_i task_j cost`
//! lines using 1-based task indices. Indices are converted to 0-based
//! here; nothing past this boundary ever sees a 1-based index.

use super::problem::ProblemModel;
use super::task::{Task, Time};
use super::validation::{validate_model, ValidationError};
use std::fmt;
use std::path::Path;

/// Failure to turn instance text into a valid [`ProblemModel`].
#[derive(Debug)]
pub enum InstanceError {
    /// The file could not be read.
    Io(std::io::Error),
    /// A line did not match the expected format.
    Syntax {
        /// 1-based line number within the input.
        line: usize,
        /// What went wrong on that line.
        message: String,
    },
    /// The instance parsed but is structurally invalid.
    Invalid(Vec<ValidationError>),
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::Io(err) => write!(f, "failed to read instance: {err}"),
            InstanceError::Syntax { line, message } => {
                write!(f, "instance syntax error on line {line}: {message}")
            }
            InstanceError::Invalid(errors) => {
                write!(f, "invalid instance ({} errors): ", errors.len())?;
                let mut first = true;
                for err in errors {
                    if !first {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", err.message)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for InstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstanceError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InstanceError {
    fn from(err: std::io::Error) -> Self {
        InstanceError::Io(err)
    }
}

fn syntax(line: usize, message: impl Into<String>) -> InstanceError {
    InstanceError::Syntax {
        line,
        message: message.into(),
    }
}

fn parse_fields<const N: usize>(line_no: usize, line: &str) -> Result<[i64; N], InstanceError> {
    let mut fields = [0i64; N];
    let mut parts = line.split_whitespace();
    for field in fields.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| syntax(line_no, format!("expected {N} integer fields")))?;
        *field = part
            .parse()
            .map_err(|_| syntax(line_no, format!("'{part}' is not an integer")))?;
    }
    if parts.next().is_some() {
        return Err(syntax(line_no, format!("expected exactly {N} fields")));
    }
    Ok(fields)
}

/// Parses ORLIB-format instance text into a validated [`ProblemModel`].
pub fn parse_instance(input: &str) -> Result<ProblemModel, InstanceError> {
    // Line numbers in errors refer to the original input, blanks included.
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let (header_no, header) = lines.next().ok_or_else(|| syntax(1, "empty instance"))?;
    let [nr_tasks, time_limit] = parse_fields::<2>(header_no, header)?;
    if nr_tasks < 0 {
        return Err(syntax(header_no, "negative task count"));
    }
    let nr_tasks = nr_tasks as usize;

    let mut tasks = Vec::with_capacity(nr_tasks);
    for _ in 0..nr_tasks {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| syntax(header_no, format!("expected {nr_tasks} task lines")))?;
        let [start, finish] = parse_fields::<2>(line_no, line)?;
        tasks.push(Task::new(start, finish));
    }

    let mut transitions = Vec::new();
    for (line_no, line) in lines {
        let [from, to, cost] = parse_fields::<3>(line_no, line)?;
        if from < 1 || to < 1 {
            return Err(syntax(line_no, "task indices are 1-based"));
        }
        // Reindex from the file's 1-based task ids.
        transitions.push((from as usize - 1, to as usize - 1, cost as f64));
    }

    validate_model(&tasks, &transitions, time_limit as Time).map_err(InstanceError::Invalid)?;
    Ok(ProblemModel::new(tasks, &transitions, time_limit as Time))
}

/// Reads and parses an instance file.
pub fn load_instance(path: impl AsRef<Path>) -> Result<ProblemModel, InstanceError> {
    let contents = std::fs::read_to_string(path)?;
    parse_instance(&contents)
}
