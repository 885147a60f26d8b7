/// Builds a [`ValTree`](crate::ValTree) from a list of paths.
///
/// Each entry is a string literal path, optionally followed by `=>` and a
/// value. Values are turned into text with [`ToString`]; entries without one
/// create blank nodes. Entries are added in order with
/// [`ValTree::add_child`](crate::ValTree::add_child), so later paths may
/// extend or overwrite earlier ones.
///
/// ```rust
/// use valtree::valtree;
///
/// let tree = valtree!({
///     "orc.grunt.health" => 100,
///     "orc.grunt.name" => "Grug",
///     "orc.wizard",
/// });
///
/// assert_eq!(tree.query_for_integer("orc.grunt.health").unwrap(), Some(100));
/// assert!(tree.query("orc.wizard").unwrap().is_null());
/// ```
#[macro_export]
macro_rules! valtree {
    // Handle an entry with a value
    (@entry $tree:ident, $path:literal => $value:expr) => {{
        let value = ::std::string::ToString::to_string(&$value);
        let _ = $tree.add_child($path, ::std::option::Option::Some(value.as_str()));
    }};

    // Handle a blank entry
    (@entry $tree:ident, $path:literal) => {{
        let _ = $tree.add_child($path, ::std::option::Option::None);
    }};

    // Handle empty tree
    () => {
        $crate::ValTree::new()
    };

    ({}) => {
        $crate::ValTree::new()
    };

    // Handle non-empty tree
    ({ $($path:literal $(=> $value:expr)?),* $(,)? }) => {{
        let mut tree = $crate::ValTree::new();
        $(
            $crate::valtree!(@entry tree, $path $(=> $value)?);
        )*
        tree
    }};
}
