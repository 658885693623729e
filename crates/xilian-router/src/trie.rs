//! Segment trie used to match location paths against route patterns
//!
//! ## Path Syntax
//! - `:name` - Named parameter (captures one segment)
//! - `*` or `*name` - Wildcard (captures remaining path)
//!
//! ## Priority
//! 1. Exact static match (highest)
//! 2. Parameter match
//! 3. Wildcard match (lowest)

use std::collections::HashMap;

/// Trie match result
#[derive(Debug, Clone, PartialEq)]
pub struct TrieMatch {
    /// Index of the matched route in its table
    pub route: usize,
    /// Captured path parameters as (name, value) pairs
    pub params: Vec<(String, String)>,
}

/// A route ending at a node, with the capture names of its own pattern
#[derive(Debug, Clone)]
struct Terminal {
    route: usize,
    names: Vec<String>,
}

impl Terminal {
    fn to_match(&self, values: &[String]) -> TrieMatch {
        TrieMatch {
            route: self.route,
            params: self.names.iter().cloned().zip(values.iter().cloned()).collect(),
        }
    }
}

#[derive(Debug, Default)]
struct Node {
    /// Static children (key = path segment)
    children: HashMap<String, Node>,
    /// Parameter child (:id); names live on the terminals below it
    param_child: Option<Box<Node>>,
    /// Wildcard child (*path)
    wildcard_child: Option<Terminal>,
    /// Route if this is a terminal node
    terminal: Option<Terminal>,
}

/// Route pattern trie
#[derive(Debug, Default)]
pub struct PathTrie {
    root: Node,
}

/// Split a path into its non-empty segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Whether a wildcard, if any, is the last segment of the pattern.
pub fn wildcard_is_last(path: &str) -> bool {
    let segments = segments(path);
    segments
        .iter()
        .position(|s| s.starts_with('*'))
        .map_or(true, |i| i + 1 == segments.len())
}

/// Capture names of a pattern in order; a bare `*` is named `*`.
fn capture_names(segments: &[&str]) -> Vec<String> {
    let mut names = Vec::new();
    for segment in segments {
        if let Some(name) = segment.strip_prefix(':') {
            names.push(name.to_string());
        } else if let Some(name) = segment.strip_prefix('*') {
            names.push(if name.is_empty() { "*" } else { name }.to_string());
            break;
        }
    }
    names
}

/// Shape of a pattern with parameter names erased.
///
/// `/users/:id` and `/users/:uid` share the shape `/users/:`, so they
/// would shadow each other in the trie. The shape ends at a wildcard.
pub fn pattern_shape(path: &str) -> String {
    let mut shape = String::new();
    for segment in segments(path) {
        shape.push('/');
        if segment.starts_with(':') {
            shape.push(':');
        } else if segment.starts_with('*') {
            shape.push('*');
            break;
        } else {
            shape.push_str(segment);
        }
    }
    if shape.is_empty() {
        shape.push('/');
    }
    shape
}

impl PathTrie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pattern for the route at `route`.
    ///
    /// A later insert of the same shape overwrites the earlier one; callers
    /// that need uniqueness check [`pattern_shape`] first.
    pub fn insert(&mut self, path: &str, route: usize) {
        let segments = segments(path);
        let terminal = Terminal {
            route,
            names: capture_names(&segments),
        };
        Self::insert_node(&mut self.root, &segments, terminal);
    }

    fn insert_node(node: &mut Node, segments: &[&str], terminal: Terminal) {
        let Some((&segment, rest)) = segments.split_first() else {
            node.terminal = Some(terminal);
            return;
        };

        if segment.starts_with(':') {
            let param = node.param_child.get_or_insert_with(Box::default);
            Self::insert_node(param, rest, terminal);
        } else if segment.starts_with('*') {
            // Anything after a wildcard is unreachable, so it is ignored.
            node.wildcard_child = Some(terminal);
        } else {
            let child = node.children.entry(segment.to_string()).or_default();
            Self::insert_node(child, rest, terminal);
        }
    }

    /// Find the route matching `path`, or `None`.
    pub fn find(&self, path: &str) -> Option<TrieMatch> {
        let segments = segments(path);
        let mut values = Vec::new();
        Self::find_node(&self.root, &segments, &mut values)
    }

    fn find_node(node: &Node, segments: &[&str], values: &mut Vec<String>) -> Option<TrieMatch> {
        let Some((&segment, rest)) = segments.split_first() else {
            if let Some(ref terminal) = node.terminal {
                return Some(terminal.to_match(values));
            }
            // A wildcard with nothing left to capture matches empty.
            return node.wildcard_child.as_ref().map(|terminal| {
                values.push(String::new());
                let m = terminal.to_match(values);
                values.pop();
                m
            });
        };

        if let Some(child) = node.children.get(segment) {
            if let Some(m) = Self::find_node(child, rest, values) {
                return Some(m);
            }
        }

        if let Some(ref param) = node.param_child {
            values.push(segment.to_string());
            if let Some(m) = Self::find_node(param, rest, values) {
                return Some(m);
            }
            values.pop();
        }

        if let Some(ref terminal) = node.wildcard_child {
            values.push(segments.join("/"));
            let m = terminal.to_match(values);
            values.pop();
            return Some(m);
        }

        None
    }
}
