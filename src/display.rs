//! How courses are shown to a user.
//!
//! Nothing here touches the console directly; everything is either a [`fmt::Display`] adapter or
//! writes to a caller supplied [`Write`].

use std::fmt;
use std::io::{self, Write};

use crate::course::Course;

/// The one line summary used in course listings: `CSCI200, Data Structures`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.number(), self.name())
    }
}

/// Full description of a single course: the summary line followed, when there are any, by the
/// prerequisites joined with commas.
pub struct Details<'a>(pub &'a Course);

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if self.0.has_prerequisites() {
            write!(f, "\nPrerequisites: {}", self.0.prerequisites().join(", "))?;
        }
        Ok(())
    }
}

/// Reported when a lookup finds nothing.
pub struct NotFound<'a>(pub &'a str);

impl fmt::Display for NotFound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Course number {} not found.", self.0)
    }
}

/// Renders the outcome of searching for `number`.
pub fn lookup(number: &str, found: Option<&Course>) -> String {
    match found {
        Some(course) => Details(course).to_string(),
        None => NotFound(number).to_string(),
    }
}

/// Writes one summary line per course, in the order given.
pub fn write_listing<'a, W, I>(mut out: W, courses: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Course>,
{
    for course in courses {
        writeln!(out, "{}", course)?;
    }
    Ok(())
}
