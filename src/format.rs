//! Text Format Reference
//!
//! This module documents the indented key/value text format as read by
//! [`ValTree::parse_str`](crate::ValTree::parse_str) and written by
//! [`ValTree::save`](crate::ValTree::save).
//!
//! # Overview
//!
//! A document is a tree of entries. Each non-blank line holds one entry, and
//! an entry's parent is given by indentation alone. There are no quotes,
//! brackets or separators to balance, so any line can be edited by hand
//! without breaking the lines around it.
//!
//! ```text
//! // monsters.txt
//! orc
//!   grunt
//!     health 100
//!     ability FLATULENCE
//!   wizard
//!     health 50
//! ```
//!
//! # Entries
//!
//! | Line | Key | Value |
//! |------|-----|-------|
//! | `health 100` | `health` | `100` |
//! | `name Grug the Large` | `name` | `Grug the Large` |
//! | `name    padded` | `name` | `padded` |
//! | `grunt` | `grunt` | none |
//!
//! **Rules**:
//! - The key runs from the first non-whitespace character to the next
//!   whitespace character. Keys never contain whitespace.
//! - Any run of whitespace (spaces or tabs) separates key and value. It is
//!   not part of the value.
//! - The value is the rest of the line, trailing whitespace removed. It may
//!   contain further whitespace.
//! - A line with nothing after the key has no value. This is different from
//!   an empty value, which cannot be written in this format.
//! - Keys may contain `.`, but [queries](crate::ValTree::query) split paths
//!   on `.`, so such keys can only be reached by iteration.
//!
//! # Indentation
//!
//! The depth of a line is the number of whitespace characters before its
//! key. Every whitespace character counts as one, so a tab and a space are
//! the same depth.
//!
//! - A line deeper than the line before it is a child of that line.
//! - A line at the same depth is a sibling.
//! - A shallower line closes every open entry at its depth or deeper and
//!   attaches to the nearest shallower one still open.
//!
//! Depth does not need to increase in fixed steps:
//!
//! ```text
//! a
//!       b 1     <- child of a
//!   c 2         <- also a child of a: b is closed, a is still open
//! ```
//!
//! # Duplicate Keys
//!
//! Siblings have unique keys. When a key repeats under the same parent, the
//! later entry replaces the earlier one, subtree included, and takes over
//! its position.
//!
//! ```text
//! a 1
//! b 2
//! a 3     <- a is now 3 and still comes before b
//! ```
//!
//! # Comments and Blank Lines
//!
//! - `//` starts a comment that runs to the end of the line, wherever it
//!   appears. This includes values: `url http://host` reads as `url http:`.
//! - Lines that are empty once the comment is removed are ignored.
//! - Comments are not kept, so saving a parsed document drops them.
//!
//! # Line Endings and Encoding
//!
//! - Lines end with `\n` or `\r\n`.
//! - Byte input is read as UTF-8. Invalid sequences are replaced with
//!   `U+FFFD` rather than rejected.
//!
//! # Writing
//!
//! Saving writes entries depth first in insertion order. An entry at depth
//! `D` is prefixed with `D * indent_width` copies of the padding character
//! (see [`WriteOptions`](crate::WriteOptions)); the defaults are one space
//! per level and `\n` endings. The key is followed by a single space and the
//! value, or by nothing when there is no value.
//!
//! Parsing the written text gives back a tree with the same keys, values and
//! order, provided that values have no surrounding whitespace and contain no
//! `//`, and that the padding is whitespace.
//!
//! # Typed Values
//!
//! Values are always stored as text. Typed access goes through the
//! [converters](crate::converter) registered on a tree:
//!
//! | Type | Written As | Example |
//! |------|------------|---------|
//! | `i32`, `i64`, `u32`, `u64` | Decimal digits | `count 42` |
//! | `f32`, `f64` | Decimal, always with a fraction | `ratio 100.0` |
//! | `bool` | `true` or `false` | `enabled true` |
//! | `String` | As is | `name Grug` |
//! | `BigInt` | Decimal digits | `seed 123456789012345678901234567890` |
//! | `Vector2` | `(x, y)` | `position (1.0, 2.0)` |
//! | `Vector3` | `(x, y, z)` | `scale (1.0, 1.0, 2.5)` |
//! | `DateTime<Utc>` | RFC 3339 | `created 2024-01-15T10:30:00Z` |
//! | enums | Variant name, `_` as space | `ability MIND READING` |
