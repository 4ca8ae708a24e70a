//! Navigation tree builder
//!
//! Tracks open suites as a stack of scope frames. Each frame collects the
//! entries and nested suites emitted while it is open; closing a frame folds
//! it into its parent (or the root sequence).

use tracing::debug;

use crate::anchor;
use crate::error::{ReportError, ReportResult};
use crate::event::Outcome;

/// Navigation link for one completed test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub title: String,
    pub outcome: Outcome,
    pub anchor: String,
}

/// Node of the navigation forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    /// Nested list headed by a suite title
    Suite { title: String, children: Vec<NavNode> },
    Entry(NavEntry),
}

impl NavNode {
    /// Deepest suite nesting below and including this node
    pub fn depth(&self) -> usize {
        match self {
            NavNode::Entry(_) => 0,
            NavNode::Suite { children, .. } => {
                1 + children.iter().map(NavNode::depth).max().unwrap_or(0)
            }
        }
    }

    /// All entries in document order
    pub fn entries(&self) -> Vec<&NavEntry> {
        match self {
            NavNode::Entry(entry) => vec![entry],
            NavNode::Suite { children, .. } => children.iter().flat_map(NavNode::entries).collect(),
        }
    }
}

#[derive(Debug)]
struct ScopeFrame {
    title: String,
    children: Vec<NavNode>,
}

/// Builds the navigation forest from suite and test events
#[derive(Debug, Default)]
pub struct NavigationBuilder {
    root: Vec<NavNode>,
    stack: Vec<ScopeFrame>,
}

impl NavigationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open suites
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open a nested list for a named suite. The untitled root suite opens nothing.
    pub fn enter_suite(&mut self, title: &str) {
        if title.is_empty() {
            return;
        }
        debug!(depth = self.stack.len() + 1, "Entering suite '{}'", title);
        self.stack.push(ScopeFrame {
            title: title.to_string(),
            children: Vec::new(),
        });
    }

    /// Close the innermost open suite, which must carry `title`.
    pub fn exit_suite(&mut self, title: &str) -> ReportResult<()> {
        if title.is_empty() {
            return Ok(());
        }

        let frame = self
            .stack
            .pop()
            .ok_or_else(|| ReportError::UnbalancedSuite(title.to_string()))?;

        if frame.title != title {
            let expected = frame.title.clone();
            self.stack.push(frame);
            return Err(ReportError::SuiteMismatch {
                expected,
                found: title.to_string(),
            });
        }

        debug!(depth = self.stack.len(), "Leaving suite '{}'", title);
        let node = NavNode::Suite {
            title: frame.title,
            children: frame.children,
        };
        self.current_scope().push(node);
        Ok(())
    }

    /// Append an entry for a completed test to the innermost open scope.
    pub fn push_test(&mut self, full_title: &str, title: &str, outcome: Outcome) -> NavEntry {
        let entry = NavEntry {
            title: title.to_string(),
            outcome,
            anchor: anchor::encode(full_title),
        };
        self.current_scope().push(NavNode::Entry(entry.clone()));
        entry
    }

    /// Consume the builder, returning the forest. Every suite must be closed.
    pub fn finish(self) -> ReportResult<Vec<NavNode>> {
        if !self.stack.is_empty() {
            return Err(ReportError::UnclosedSuites(self.stack.len()));
        }
        Ok(self.root)
    }

    fn current_scope(&mut self) -> &mut Vec<NavNode> {
        match self.stack.last_mut() {
            Some(frame) => &mut frame.children,
            None => &mut self.root,
        }
    }
}
