//! An unbalanced BST holding the course catalog, keyed by course number.
//!
//! Every node owns its children through a `Box`, so there is exactly one path from the root to
//! any node. Nothing is ever rotated: the shape of the tree is decided entirely by insertion order.
//! Feeding it courses in sorted order produces a tree that is really a linked list, which is why
//! every operation here walks the tree with a loop (and an explicit stack where one is needed)
//! rather than recursing.
//!
//! # Examples
//!
//! ```
//! use course_planner::course::Course;
//! use course_planner::tree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search("CS300"), None);
//!
//! tree.insert(Course::new("CS300", "Algorithms", vec![]));
//! tree.insert(Course::new("CS200", "Data Structures", vec![]));
//! tree.insert(Course::new("CS400", "Compilers", vec![]));
//!
//! assert_eq!(tree.search("CS200").map(Course::name), Some("Data Structures"));
//!
//! // Walking the tree visits the courses in ascending order.
//! let numbers: Vec<_> = tree.iter().map(Course::number).collect();
//! assert_eq!(numbers, ["CS200", "CS300", "CS400"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::course::Course;

type Link = Option<Box<Node>>;

struct Node {
    course: Course,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(course: Course) -> Box<Self> {
        Box::new(Self {
            course,
            left: None,
            right: None,
        })
    }

    fn key(&self) -> &str {
        self.course.number()
    }
}

/// The course catalog. Starts out empty; [`insert`](Self::insert) grows it one node at a time and
/// [`clear`](Self::clear) (or dropping the tree) releases every node.
pub struct BinarySearchTree {
    root: Link,
    len: usize,
}

impl Default for BinarySearchTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BinarySearchTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for BinarySearchTree {
    // Re-inserting in pre-order rebuilds the exact same shape.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            tree.insert(node.course.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        tree
    }
}

impl fmt::Debug for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl BinarySearchTree {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of courses stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no courses at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the course, keyed by its number. The tree takes ownership of the course.
    ///
    /// If a course with the same number is already present the new one is silently dropped and
    /// `false` is returned: the first course loaded for a number wins. Otherwise a new leaf is
    /// attached and `true` is returned. No rebalancing ever happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::course::Course;
    /// use course_planner::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// assert!(tree.insert(Course::new("CS101", "Intro", vec![])));
    /// assert!(!tree.insert(Course::new("CS101", "Something Else", vec![])));
    ///
    /// assert_eq!(tree.search("CS101").map(Course::name), Some("Intro"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, course: Course) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match course.number().cmp(node.key()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    tracing::debug!(number = course.number(), "duplicate course ignored");
                    return false;
                }
            };
        }

        *link = Some(Node::new_boxed(course));
        self.len += 1;
        true
    }

    /// Potentially finds the course with the given number. If no node has that number, `None` is
    /// returned; a miss is an ordinary outcome, not an error.
    ///
    /// Comparison is a plain, case-sensitive string comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::course::Course;
    /// use course_planner::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(Course::new("CS101", "Intro", vec![]));
    ///
    /// assert!(tree.search("CS101").is_some());
    /// assert_eq!(tree.search("cs101"), None);
    /// ```
    pub fn search(&self, number: &str) -> Option<&Course> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match number.cmp(node.key()) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Iterates over the courses in ascending order of course number.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Collects the in-order walk: every course exactly once, ascending by number.
    pub fn in_order(&self) -> Vec<&Course> {
        self.iter().collect()
    }

    /// Gets the height of this tree: the number of nodes on the longest path from the root down
    /// to a leaf. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Releases every node, leaving an empty tree behind.
    ///
    /// Children are detached before their parent is dropped so that releasing a long, degenerate
    /// chain never recurses.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl FromIterator<Course> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Course> for BinarySearchTree {
    fn extend<I: IntoIterator<Item = Course>>(&mut self, iter: I) {
        for course in iter {
            self.insert(course);
        }
    }
}

impl<'a> IntoIterator for &'a BinarySearchTree {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`BinarySearchTree`], created by [`BinarySearchTree::iter`].
///
/// The stack holds the nodes whose left subtree has been (or is being) visited but which have not
/// been yielded yet, so it never grows past the height of the tree.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.course)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
