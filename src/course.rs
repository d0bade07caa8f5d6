//! The record stored in the catalog.

/// A single course. The `number` is the key the catalog is ordered and searched by.
///
/// Courses are built once by the [`loader`](crate::loader) and never change afterwards. Once
/// inserted into a [`BinarySearchTree`](crate::tree::BinarySearchTree) the tree owns its own copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Course {
    number: String,
    name: String,
    prerequisites: Vec<String>,
}

impl Course {
    /// Builds a course from its parts. Prerequisites keep the order they are given in and are not
    /// deduplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::course::Course;
    ///
    /// let course = Course::new("CS201", "Data Structures", vec!["CS101".to_string()]);
    ///
    /// assert_eq!(course.number(), "CS201");
    /// assert_eq!(course.prerequisites(), ["CS101"]);
    /// ```
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            prerequisites,
        }
    }

    /// The course identifier, e.g. `CSCI200`.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The human readable title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Course numbers that must be taken first, in file order.
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Whether this course depends on any other course.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
