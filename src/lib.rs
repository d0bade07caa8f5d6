//! This crate keeps a course catalog in a Binary Search Tree (BST) keyed by
//! course number, and loads that catalog from comma separated rows.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a
//! [`Course`][course::Course] and will sometimes have child `Node`s. The
//! most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    course number less than its own.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    course number greater than its own.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The tree in [`tree`] never
//! rebalances, so its height depends only on the order courses arrive in:
//! a shuffled catalog stays close to `O(lg N)` while a sorted one degrades to
//! `O(N)`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Loading
//!
//! [`loader`] turns rows of the form `number,name[,prerequisite]*` into
//! courses and checks that every prerequisite names a course in the same
//! batch. A batch is either accepted whole or rejected with a
//! [`LoadError`][error::LoadError].
//!
//! ```
//! use course_planner::{display, loader};
//!
//! let courses = loader::load_lines([
//!     "CSCI200,Data Structures,CSCI101",
//!     "CSCI101,Introduction to Programming in C++",
//! ])
//! .unwrap();
//! let tree = loader::build_tree(courses);
//!
//! assert_eq!(
//!     display::lookup("CSCI200", tree.search("CSCI200")),
//!     "CSCI200, Data Structures\nPrerequisites: CSCI101"
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod course;
pub mod display;
pub mod error;
pub mod loader;
pub mod tree;
