//! Student grading use-case service.
//!
//! # Responsibility
//! - Parse `id, full name, score` lines into `Student` records.
//! - Write one graded line per student to a report file.
//!
//! # Invariants
//! - Parsing stops at the first malformed line; errors carry its 1-based
//!   line number.
//! - Blank lines are skipped but still counted.
//! - Student ids are unique within one input.

use crate::model::grading::Student;
use crate::repo::keyed_repo::{KeyedRepository, RepoError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const FIELDS_PER_LINE: usize = 3;

#[derive(Debug)]
pub enum GradingError {
    /// Line does not have exactly three comma-separated fields.
    MissingField { line: usize },
    /// First field is not an integer id.
    InvalidId { line: usize },
    /// Third field is not an integer score.
    InvalidScore { line: usize },
    /// Input file does not exist.
    InputNotFound(PathBuf),
    Io { path: PathBuf, source: std::io::Error },
    /// Student id repeated within the input.
    Repo { line: usize, source: RepoError },
}

impl Display for GradingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { line } => write!(f, "line {line}: missing data"),
            Self::InvalidId { line } => write!(f, "line {line}: invalid id"),
            Self::InvalidScore { line } => write!(f, "line {line}: invalid score"),
            Self::InputNotFound(path) => write!(f, "input file not found: {}", path.display()),
            Self::Io { path, source } => write!(f, "io error at {}: {source}", path.display()),
            Self::Repo { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl Error for GradingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Repo { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Parses one non-blank input line.
pub fn parse_student_line(line: &str, line_number: usize) -> Result<Student, GradingError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS_PER_LINE {
        return Err(GradingError::MissingField { line: line_number });
    }

    let id = parts[0]
        .parse()
        .map_err(|_| GradingError::InvalidId { line: line_number })?;
    let score = parts[2]
        .parse()
        .map_err(|_| GradingError::InvalidScore { line: line_number })?;

    Ok(Student::new(id, parts[1], score))
}

/// Parses a whole input text into a student repository.
pub fn parse_students(input: &str) -> Result<KeyedRepository<Student>, GradingError> {
    let mut students = KeyedRepository::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        let student = parse_student_line(line, line_number)?;
        students.add(student).map_err(|source| GradingError::Repo {
            line: line_number,
            source,
        })?;
    }
    Ok(students)
}

/// Reads and parses the student input file at `path`.
pub fn read_students(path: &Path) -> Result<KeyedRepository<Student>, GradingError> {
    let input = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            GradingError::InputNotFound(path.to_path_buf())
        } else {
            GradingError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let input = input.strip_prefix('\u{feff}').unwrap_or(&input);
    let result = parse_students(input);
    match &result {
        Ok(students) => info!(
            "event=students_read module=grading status=ok count={}",
            students.len()
        ),
        Err(err) => error!(
            "event=students_read module=grading status=error error={}",
            err
        ),
    }
    result
}

/// Writes one graded line per student, in input order. Returns the count.
pub fn write_report(
    students: &KeyedRepository<Student>,
    path: &Path,
) -> Result<usize, GradingError> {
    let io_error = |source: std::io::Error| GradingError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(io_error)?;
    let mut writer = std::io::BufWriter::new(file);
    for student in students.iter() {
        writeln!(writer, "{student}").map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    info!(
        "event=report_write module=grading status=ok count={}",
        students.len()
    );
    Ok(students.len())
}
