//! Parse, query, edit and save a document.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use valtree::ValTree;

const MONSTERS: &str = "\
// Monsters of the eastern marsh
orc
  grunt
    health 100
    ability FLATULENCE
  wizard
    health 50
    ability MIND CONTROL
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut tree: ValTree = MONSTERS.parse()?;

    // Query by path
    let health = tree.query_for_integer("orc.grunt.health")?;
    println!("grunt health: {:?}", health);

    for monster in tree.query("orc").into_iter().flat_map(|orc| orc.children()) {
        println!(
            "{} -> {}",
            monster.key().unwrap_or_default(),
            monster.query_for_string("ability").unwrap_or("nothing")
        );
    }

    // Edit in place
    tree.add_child_value("orc.grunt.health", &120)?;
    tree.add_child("orc.shaman.health", Some("40"));
    if let Some(mut wizard) = tree.query_mut("orc.wizard") {
        wizard.set("archmage", &"boss".to_string())?;
    }

    // Save it back
    println!("\nSaved:\n{}", tree);

    let again: ValTree = tree.to_string().parse()?;
    assert_eq!(again, tree);
    println!("✓ Round-trip successful");

    Ok(())
}
