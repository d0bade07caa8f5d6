use course_planner::course::Course;
use course_planner::tree::BinarySearchTree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::{Number, Op};

fn course(number: &str, name: &str) -> Course {
    Course::new(number, name, vec![])
}

/// Applies a set of operations to a tree and a `BTreeMap`.
/// The map plays the part of a reference catalog where the first
/// course inserted for a number is the one that stays.
fn do_ops(ops: &[Op], tree: &mut BinarySearchTree, map: &mut BTreeMap<String, String>) -> bool {
    for op in ops {
        match op {
            Op::Insert(Number(number), name) => {
                let inserted = tree.insert(course(number, name));
                let fresh = !map.contains_key(number);
                map.entry(number.clone()).or_insert_with(|| name.clone());
                if inserted != fresh {
                    return false;
                }
            }
            Op::Search(Number(number)) => {
                if tree.search(number).map(Course::name) != map.get(number).map(String::as_str) {
                    return false;
                }
            }
            Op::Iter => {
                let walked: Vec<_> = tree.iter().map(|c| (c.number(), c.name())).collect();
                let expected: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
                if walked != expected {
                    return false;
                }
            }
        }
    }

    tree.len() == map.len()
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map)
}

#[quickcheck]
fn contains(xs: Vec<String>) -> bool {
    let tree: BinarySearchTree = xs.iter().map(|x| course(x, x)).collect();

    xs.iter().all(|x| tree.search(x).map(Course::number) == Some(x.as_str()))
}

#[quickcheck]
fn contains_not(xs: Vec<String>, nots: Vec<String>) -> bool {
    let tree: BinarySearchTree = xs.iter().map(|x| course(x, x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<String>) -> bool {
    let tree: BinarySearchTree = xs.iter().map(|x| course(x, x)).collect();
    let walked: Vec<_> = tree.iter().map(Course::number).collect();
    let unique: HashSet<_> = xs.iter().collect();

    walked.windows(2).all(|pair| pair[0] < pair[1]) && walked.len() == unique.len()
}

#[quickcheck]
fn repeated_search_is_stable(xs: Vec<Number>, key: Number) -> bool {
    let tree: BinarySearchTree = xs.iter().map(|Number(x)| course(x, x)).collect();

    tree.search(&key.0) == tree.search(&key.0)
}

#[quickcheck]
fn height_is_bounded_by_len(xs: Vec<String>) -> bool {
    let tree: BinarySearchTree = xs.iter().map(|x| course(x, x)).collect();

    tree.height() <= tree.len() && (tree.is_empty() == (tree.height() == 0))
}

#[quickcheck]
fn clone_is_equivalent(xs: Vec<Number>) -> bool {
    let tree: BinarySearchTree = xs.iter().map(|Number(x)| course(x, x)).collect();
    let cloned = tree.clone();

    cloned.in_order() == tree.in_order() && cloned.height() == tree.height()
}
