//! Configuration options for writing trees.
//!
//! This module provides types to customize the saved document layout:
//!
//! - [`WriteOptions`]: Main configuration struct
//! - [`LineEnding`]: Choice of line terminator
//!
//! Parsing needs no options: any whitespace indents, and both `\n` and
//! `\r\n` endings are accepted.
//!
//! ## Examples
//!
//! ```rust
//! use valtree::{to_string_with_options, LineEnding, ValTree, WriteOptions};
//!
//! let tree: ValTree = "a\n b 1\n".parse().unwrap();
//!
//! let options = WriteOptions::tabs();
//! assert_eq!(to_string_with_options(&tree, &options), "a\n\tb 1\n");
//!
//! let options = WriteOptions::new()
//!     .with_indent_width(2)
//!     .with_line_ending(LineEnding::CrLf);
//! assert_eq!(to_string_with_options(&tree, &options), "a\r\n  b 1\r\n");
//! ```

/// Line terminator written after every entry.
///
/// # Examples
///
/// ```rust
/// use valtree::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration options for writing trees.
///
/// A node at depth `D` is written after `D * indent_width` copies of
/// `padding`. Top level entries have depth 0.
///
/// # Examples
///
/// ```rust
/// use valtree::WriteOptions;
///
/// // One space per level, `\n` endings
/// let options = WriteOptions::new();
/// assert_eq!(options.padding, ' ');
/// assert_eq!(options.indent_width, 1);
///
/// // Custom configuration
/// let options = WriteOptions::new().with_padding('.').with_indent_width(4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    pub padding: char,
    pub indent_width: usize,
    pub line_ending: LineEnding,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            padding: ' ',
            indent_width: 1,
            line_ending: LineEnding::default(),
        }
    }
}

impl WriteOptions {
    /// Creates default options (one space per level, `\n` endings).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options indenting with one tab per level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::WriteOptions;
    ///
    /// let options = WriteOptions::tabs();
    /// assert_eq!(options.padding, '\t');
    /// ```
    #[must_use]
    pub fn tabs() -> Self {
        WriteOptions {
            padding: '\t',
            ..Default::default()
        }
    }

    /// Sets the character repeated for each level of indentation.
    ///
    /// Anything other than whitespace is written as given but will not be
    /// read back as indentation.
    #[must_use]
    pub fn with_padding(mut self, padding: char) -> Self {
        self.padding = padding;
        self
    }

    /// Sets how many padding characters make up one level.
    #[must_use]
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}
