//! # valtree
//!
//! A small, hand-editable hierarchical configuration format and the tree that
//! holds it.
//!
//! ## What is a ValTree?
//!
//! A ValTree document is a tree of key/value entries, one per line, where
//! indentation alone decides which entry belongs to which. There are no
//! quotes, braces or separators: a line is a key, optionally followed by a
//! value.
//!
//! ```text
//! orc
//!   grunt
//!     health 100
//!     ability FLATULENCE
//!   wizard
//!     health 50 // comments run to the end of the line
//! ```
//!
//! ## Key Features
//!
//! - **Forgiving Parser**: Any whitespace indents, depth jumps are accepted, and
//!   parsing never fails on content
//! - **Ordered Trees**: Children keep insertion order, so a load/save cycle keeps
//!   the layout of a document
//! - **Path Queries**: Reach any node with dot separated paths like
//!   `orc.grunt.health`
//! - **Typed Values**: Values are stored as text and converted on demand through
//!   a pluggable [`converter`] registry
//! - **No Unsafe Code**: Written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! valtree = "0.1"
//! ```
//!
//! ### Parsing and Querying
//!
//! ```rust
//! use valtree::from_str;
//!
//! let tree = from_str("orc\n grunt\n  health 100\n wizard\n  health 50\n");
//!
//! assert_eq!(tree.query_for_integer("orc.grunt.health").unwrap(), Some(100));
//! assert_eq!(tree.query_for_string("orc.wizard.health"), Some("50"));
//! assert!(tree.query("orc.dragon").is_none());
//! ```
//!
//! ### Building and Saving
//!
//! ```rust
//! use valtree::{to_string, ValTree};
//!
//! let mut tree = ValTree::new();
//! tree.add_child("orc.grunt.health", Some("100"));
//! tree.add_child_value("orc.grunt.speed", &1.5f32).unwrap();
//!
//! assert_eq!(to_string(&tree), "orc\n grunt\n  health 100\n  speed 1.5\n");
//! ```
//!
//! ### Custom Value Types
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use valtree::converter::EnumConverter;
//! use valtree::ValTree;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
//! enum Ability {
//!     MindReading,
//!     Flatulence,
//! }
//!
//! let mut tree: ValTree = "grunt\n ability mind reading\n".parse().unwrap();
//! tree.register_converter(EnumConverter::<Ability>::new());
//!
//! assert_eq!(
//!     tree.query_for::<Ability>("grunt.ability").unwrap(),
//!     Some(Ability::MindReading)
//! );
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) in the number of lines with a single pass
//! - **Serialization**: O(n) in the number of nodes, without recursion
//! - **Queries**: O(d) hash lookups for a path of d segments
//! - **Typed Access**: `i32`/`f32` conversions are cached per node until the
//!   value changes
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Parent links are arena ids, never owning pointers, so trees have no cycles
//! - Proper error propagation with `Result` types
//! - No panics in public API (except for logic errors that indicate bugs)
//!
//! ## Format Reference
//!
//! The [`format`] module describes the text format in full.
//!
//! ## Demos
//!
//! See the `demos/` directory for runnable programs:
//!
//! - **`simple.rs`** - Parse, query, edit and save a document
//! - **`custom_converter.rs`** - Registering converters for your own types
//! - **`custom_options.rs`** - Changing indentation and line endings
//!
//! Run any demo with: `cargo run --example <name>`

pub mod converter;
pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod node;
pub mod options;
pub mod ser;
pub mod tree;

pub use converter::{ConverterRegistry, ValueConverter};
pub use de::Parser;
pub use error::{Error, Result};
pub use map::ChildMap;
pub use node::{Children, NodeMut, NodeRef};
pub use options::{LineEnding, WriteOptions};
pub use ser::Serializer;
pub use tree::{NodeId, ValTree};

use std::io;

/// Parse a tree from a string.
///
/// Parsing never fails: every line either becomes an entry or is skipped.
///
/// # Examples
///
/// ```rust
/// use valtree::from_str;
///
/// let tree = from_str("x 1\ny 2");
/// assert_eq!(tree.query_for_integer("y").unwrap(), Some(2));
/// ```
#[must_use]
pub fn from_str(s: &str) -> ValTree {
    let mut tree = ValTree::new();
    tree.parse_str(s);
    tree
}

/// Parse a tree from bytes of text, replacing invalid UTF-8.
///
/// # Examples
///
/// ```rust
/// use valtree::from_slice;
///
/// let tree = from_slice(b"x 1\ny 2");
/// assert_eq!(tree.size(), 2);
/// ```
#[must_use]
pub fn from_slice(v: &[u8]) -> ValTree {
    let mut tree = ValTree::new();
    tree.parse_slice(v);
    tree
}

/// Parse a tree from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use valtree::from_reader;
/// use std::io::Cursor;
///
/// let tree = from_reader(Cursor::new(b"x 1\ny 2")).unwrap();
/// assert_eq!(tree.query_for_string("x"), Some("1"));
/// ```
///
/// # Errors
///
/// Returns [`Error::SourceRead`] if reading from the reader fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(reader: R) -> Result<ValTree>
where
    R: io::Read,
{
    let mut tree = ValTree::new();
    tree.parse_reader(reader)?;
    Ok(tree)
}

/// Write a tree to a string with default options.
#[must_use]
pub fn to_string(tree: &ValTree) -> String {
    tree.to_string_with_options(&WriteOptions::default())
}

/// Write a tree to a string with custom options.
///
/// # Examples
///
/// ```rust
/// use valtree::{from_str, to_string_with_options, WriteOptions};
///
/// let tree = from_str("a\n b 1");
/// let text = to_string_with_options(&tree, &WriteOptions::new().with_indent_width(4));
/// assert_eq!(text, "a\n    b 1\n");
/// ```
#[must_use]
pub fn to_string_with_options(tree: &ValTree, options: &WriteOptions) -> String {
    tree.to_string_with_options(options)
}

/// Write a tree to a writer with default options.
///
/// # Examples
///
/// ```rust
/// use valtree::{from_str, to_writer};
///
/// let tree = from_str("a\n b 1");
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &tree).unwrap();
/// assert_eq!(buffer, b"a\n b 1\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::SourceRead`] if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, tree: &ValTree) -> Result<()>
where
    W: io::Write,
{
    tree.save(writer)
}

/// Write a tree to a writer with custom options.
///
/// # Errors
///
/// Returns [`Error::SourceRead`] if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(writer: W, tree: &ValTree, options: &WriteOptions) -> Result<()>
where
    W: io::Write,
{
    tree.save_with_options(writer, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONSTERS: &str = "\
orc
  grunt
    health 100
  wizard
    health 50
";

    #[test]
    fn test_parse_and_write_back() {
        let tree = from_str(MONSTERS);
        assert_eq!(
            to_string(&tree),
            "orc\n grunt\n  health 100\n wizard\n  health 50\n"
        );
    }

    #[test]
    fn test_written_text_parses_to_equal_tree() {
        let tree = from_str(MONSTERS);
        let again = from_str(&to_string(&tree));
        assert_eq!(tree, again);
    }

    #[test]
    fn test_writer_and_reader_agree() {
        let tree = from_str(MONSTERS);
        let mut buffer = Vec::new();
        to_writer_with_options(&mut buffer, &tree, &WriteOptions::tabs()).unwrap();

        let back = from_reader(buffer.as_slice()).unwrap();
        assert_eq!(tree, back);
    }

    #[test]
    fn test_from_slice_matches_from_str() {
        assert_eq!(from_slice(MONSTERS.as_bytes()), from_str(MONSTERS));
    }
}
