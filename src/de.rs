//! Tree parsing.
//!
//! This module provides the [`Parser`] that reads the indented text form
//! into a [`ValTree`].
//!
//! ## Overview
//!
//! Parsing is a single pass over the lines of the input:
//!
//! - **Comments**: everything from the first `//` on a line is dropped
//! - **Blank lines**: lines that are empty after trimming are skipped
//! - **Depth**: the number of leading whitespace characters, of any kind
//! - **Entries**: the key runs up to the first whitespace, the value is the
//!   rest of the line with its leading whitespace removed
//!
//! A stack of `(node, depth)` pairs tracks the open ancestors. Before each
//! entry the stack is popped while its top is at least as deep as the entry,
//! and the entry is attached under whatever remains on top. Parsing never
//! fails: every line either becomes an entry or is skipped.
//!
//! ## Usage
//!
//! ```rust
//! use valtree::ValTree;
//!
//! let tree: ValTree = "\
//! orc // enemies
//!   grunt
//!     health 100
//!   wizard
//!     health 50
//! "
//! .parse()
//! .unwrap();
//!
//! assert_eq!(tree.query_for_integer("orc.wizard.health").unwrap(), Some(50));
//! ```

use crate::{NodeId, Result, ValTree};
use std::convert::Infallible;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, instrument, trace};

const COMMENT: &str = "//";

/// Builds a tree from lines of text.
///
/// A parser is tied to the tree it fills. Feeding it more lines keeps adding
/// to the same depth stack, so a document may be passed in pieces as long as
/// they are split on line boundaries.
pub struct Parser<'t> {
    tree: &'t mut ValTree,
    stack: Vec<(NodeId, usize)>,
    entries: usize,
}

impl<'t> Parser<'t> {
    /// Starts parsing into `tree` below its root. Existing content is kept.
    pub fn new(tree: &'t mut ValTree) -> Self {
        let root = tree.root();
        Parser {
            tree,
            stack: vec![(root, 0)],
            entries: 0,
        }
    }

    /// Parses every line of `input`.
    pub fn parse(&mut self, input: &str) {
        for line in input.lines() {
            self.parse_line(line);
        }
    }

    /// Parses a single line, without its terminator.
    pub fn parse_line(&mut self, line: &str) {
        let content = match line.find(COMMENT) {
            Some(start) => &line[..start],
            None => line,
        };
        let entry = content.trim();
        if entry.is_empty() {
            return;
        }

        let depth = content.chars().take_while(|c| c.is_whitespace()).count();
        let (key, value) = match entry.split_once(char::is_whitespace) {
            Some((key, rest)) => (key, Some(rest.trim_start())),
            None => (entry, None),
        };

        while self.stack.len() > 1 && self.stack.last().is_some_and(|(_, open)| *open >= depth) {
            self.stack.pop();
        }
        let parent = match self.stack.last() {
            Some((parent, _)) => *parent,
            None => self.tree.root(),
        };

        trace!(key, value, depth, "entry");
        let id = self
            .tree
            .attach(parent, key, value.map(str::to_string));
        self.stack.push((id, depth));
        self.entries += 1;
    }

    /// Number of entries attached so far.
    #[must_use]
    pub fn entries(&self) -> usize {
        self.entries
    }
}

impl ValTree {
    /// Replaces the contents of this tree with the document in `input`.
    ///
    /// The converter registry is kept; ids of previous nodes stop resolving.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::ValTree;
    ///
    /// let mut tree = ValTree::new();
    /// tree.parse_str("a 1");
    /// tree.parse_str("b 2");
    /// assert!(tree.query("a").is_none());
    /// assert_eq!(tree.query_for_integer("b").unwrap(), Some(2));
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn parse_str(&mut self, input: &str) {
        self.clear();
        let mut parser = Parser::new(self);
        parser.parse(input);
        debug!(entries = parser.entries(), "parsed tree");
    }

    /// Replaces the contents of this tree with bytes of text.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD` rather than
    /// rejected.
    pub fn parse_slice(&mut self, input: &[u8]) {
        self.parse_str(&String::from_utf8_lossy(input));
    }

    /// Reads `reader` to the end and replaces the contents of this tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceRead`](crate::Error::SourceRead) if reading
    /// fails; the tree is left untouched in that case.
    pub fn parse_reader<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        self.parse_slice(&buffer);
        Ok(())
    }

    /// Reads the file at `path` and replaces the contents of this tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceRead`](crate::Error::SourceRead) if the file
    /// cannot be opened or read.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        debug!(path = %path.as_ref().display(), "loading tree");
        let file = File::open(path.as_ref())?;
        self.parse_reader(file)
    }
}

impl FromStr for ValTree {
    type Err = Infallible;

    fn from_str(input: &str) -> std::result::Result<Self, Infallible> {
        let mut tree = ValTree::new();
        tree.parse_str(input);
        Ok(tree)
    }
}
