//! Turns comma separated rows into validated [`Course`]s.
//!
//! A row looks like `number,name[,prerequisite]*`. Empty fields are thrown away before positions
//! are assigned, so `CS101,,Intro` is the course `CS101` named `Intro`, not a course with an empty
//! name. Fields are otherwise taken verbatim; no whitespace is trimmed.
//!
//! Loading is all or nothing: the first malformed row or unknown prerequisite fails the whole
//! batch and no courses are returned.
//!
//! # Examples
//!
//! ```
//! use course_planner::error::LoadError;
//! use course_planner::loader;
//!
//! let courses = loader::load_lines(["CS101,Intro to CS", "CS201,Data Structures,CS101"]).unwrap();
//! assert_eq!(courses.len(), 2);
//!
//! let err = loader::load_lines(["CS201,Data Structures,CS999"]).unwrap_err();
//! assert!(matches!(err, LoadError::UnresolvedPrerequisite { .. }));
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::course::Course;
use crate::error::{LoadError, LoadResult};
use crate::tree::BinarySearchTree;

const DELIMITER: char = ',';

/// Parses one row. Returns `None` when the row has fewer than two non-empty fields.
pub fn parse_row(row: &str) -> Option<Course> {
    let mut fields = row.split(DELIMITER).filter(|field| !field.is_empty());
    let number = fields.next()?;
    let name = fields.next()?;
    let prerequisites = fields.map(str::to_string).collect();

    Some(Course::new(number, name, prerequisites))
}

/// Parses every row, failing on the first one that is missing a number or a name.
pub fn parse_rows<I, S>(lines: I) -> LoadResult<Vec<Course>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let row = line.as_ref();
            parse_row(row).ok_or_else(|| LoadError::MalformedRow {
                line: index + 1,
                row: row.to_string(),
                fields: row.split(DELIMITER).filter(|f| !f.is_empty()).count(),
            })
        })
        .collect()
}

/// Checks that every prerequisite names a course in the same batch.
///
/// Courses are checked in order, and each course's prerequisites in the order they were listed;
/// the first miss is reported. Only existence is checked: cycles are allowed.
pub fn validate(courses: &[Course]) -> LoadResult<()> {
    let known: HashSet<&str> = courses.iter().map(Course::number).collect();

    for course in courses {
        if let Some(missing) = course
            .prerequisites()
            .iter()
            .find(|prerequisite| !known.contains(prerequisite.as_str()))
        {
            return Err(LoadError::UnresolvedPrerequisite {
                course: course.number().to_string(),
                prerequisite: missing.clone(),
            });
        }
    }

    Ok(())
}

/// Parses and validates a batch of rows.
pub fn load_lines<I, S>(lines: I) -> LoadResult<Vec<Course>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let courses = parse_rows(lines)?;
    debug!(count = courses.len(), "rows parsed");
    validate(&courses)?;
    Ok(courses)
}

/// Reads every line from `reader` and loads them as one batch. Line terminators (`\n` or `\r\n`)
/// are not part of the fields.
pub fn load_reader<R: BufRead>(reader: R) -> LoadResult<Vec<Course>> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    load_lines(lines)
}

/// Opens the file at `path` and loads it.
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_file<P: AsRef<Path>>(path: P) -> LoadResult<Vec<Course>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    match load_reader(BufReader::new(file)) {
        Ok(courses) => {
            info!(count = courses.len(), "catalog loaded");
            Ok(courses)
        }
        Err(e) => {
            warn!(error = %e, "catalog rejected");
            Err(e)
        }
    }
}

/// Inserts the courses into a fresh tree in the order given.
pub fn build_tree(courses: Vec<Course>) -> BinarySearchTree {
    courses.into_iter().collect()
}
