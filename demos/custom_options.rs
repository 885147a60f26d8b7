//! Customizing the saved layout with WriteOptions.
//!
//! Run with: cargo run --example custom_options

use std::error::Error;
use valtree::{to_string_with_options, valtree, LineEnding, WriteOptions};

fn main() -> Result<(), Box<dyn Error>> {
    let tree = valtree!({
        "window.title" => "Marsh Editor",
        "window.size.width" => 1280,
        "window.size.height" => 720,
        "window.fullscreen" => false,
    });

    // Default format (one space per level)
    println!("Default:");
    println!("{}", tree);

    // Tabs (one per level)
    println!("Tabs:");
    println!("{}", to_string_with_options(&tree, &WriteOptions::tabs()));

    // Wider indentation
    println!("Four spaces:");
    let wide = WriteOptions::new().with_indent_width(4);
    println!("{}", to_string_with_options(&tree, &wide));

    // Windows line endings, written to a file
    let dir = std::env::temp_dir().join("valtree-demo");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("window.txt");
    let crlf = WriteOptions::new().with_line_ending(LineEnding::CrLf);
    tree.save_with_options(std::fs::File::create(&path)?, &crlf)?;
    println!("Wrote {} bytes to {}", std::fs::metadata(&path)?.len(), path.display());

    Ok(())
}
