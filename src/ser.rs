//! Tree serialization.
//!
//! This module provides the [`Serializer`] that writes a tree back out in
//! its indented text form.
//!
//! ## Overview
//!
//! Nodes are written depth first in insertion order, one entry per line:
//!
//! - **Indentation**: `depth * indent_width` copies of the padding character
//! - **Entries**: the key, then a single space and the value when there is one
//! - **Root**: never written; its children are the top level entries
//!
//! The walk uses an explicit stack, so very deep trees do not grow the call
//! stack.
//!
//! ## Usage
//!
//! Most users should use [`ValTree::save`] or the functions in the crate root:
//!
//! ```rust
//! use valtree::ValTree;
//!
//! let mut tree = ValTree::new();
//! tree.add_child("1", None);
//! tree.add_child("1.2", Some("2"));
//! tree.add_child("3", Some("3"));
//!
//! let mut out = Vec::new();
//! tree.save(&mut out).unwrap();
//! assert_eq!(out, b"1\n 2 2\n3 3\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! Any node can be written on its own; its children become top level entries:
//!
//! ```rust
//! use valtree::{Serializer, ValTree, WriteOptions};
//!
//! let tree: ValTree = "orc\n grunt\n  health 100\n".parse().unwrap();
//!
//! let mut serializer = Serializer::new(WriteOptions::tabs());
//! serializer.serialize(tree.child("orc").unwrap());
//! assert_eq!(serializer.into_inner(), "grunt\n\thealth 100\n");
//! ```

use crate::node::NodeRef;
use crate::{NodeId, Result, ValTree, WriteOptions};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Writes nodes in the indented text form.
///
/// Created via [`Serializer::new`] with the layout options to use.
pub struct Serializer {
    output: String,
    options: WriteOptions,
    lines: usize,
}

impl Serializer {
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            lines: 0,
        }
    }

    /// Appends every descendant of `node`, with its children at depth 0.
    pub fn serialize(&mut self, node: NodeRef<'_>) {
        let tree = node.tree();
        let mut pending = Vec::new();
        push_children(&mut pending, node, 0);

        while let Some((key, id, depth)) = pending.pop() {
            let Some(child) = tree.get(id) else {
                continue;
            };
            // The map key is used so that cleared nodes still print under their slot.
            self.write_entry(depth, key, child.string());
            push_children(&mut pending, child, depth + 1);
        }
    }

    /// Number of entries written so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_entry(&mut self, depth: usize, key: &str, value: Option<&str>) {
        let width = depth * self.options.indent_width;
        self.output
            .extend(std::iter::repeat(self.options.padding).take(width));
        self.output.push_str(key);
        if let Some(value) = value {
            self.output.push(' ');
            self.output.push_str(value);
        }
        self.output.push_str(self.options.line_ending.as_str());
        self.lines += 1;
    }
}

/// Queues the children of `node` so that the first child is popped first.
fn push_children<'a>(pending: &mut Vec<(&'a str, NodeId, usize)>, node: NodeRef<'a>, depth: usize) {
    pending.extend(
        node.child_map()
            .iter()
            .rev()
            .map(|(key, id)| (key.as_str(), *id, depth)),
    );
}

impl ValTree {
    /// Renders the tree with `options`.
    #[must_use]
    pub fn to_string_with_options(&self, options: &WriteOptions) -> String {
        let mut serializer = Serializer::new(options.clone());
        serializer.serialize(self.root_ref());
        debug!(lines = serializer.lines(), "serialized tree");
        serializer.into_inner()
    }

    /// Writes the tree to `writer` with default options and flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceRead`](crate::Error::SourceRead) if the writer fails.
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        self.save_with_options(writer, &WriteOptions::default())
    }

    /// Writes the tree to `writer` with `options` and flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceRead`](crate::Error::SourceRead) if the writer fails.
    #[instrument(level = "debug", skip_all)]
    pub fn save_with_options<W: Write>(&self, mut writer: W, options: &WriteOptions) -> Result<()> {
        let text = self.to_string_with_options(options);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Creates or truncates the file at `path` and writes the tree into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceRead`](crate::Error::SourceRead) if the file
    /// cannot be created or written.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "saving tree");
        self.save(BufWriter::new(file))
    }
}

impl fmt::Display for ValTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root_ref(), f)
    }
}
