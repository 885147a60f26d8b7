//! Registering converters for your own value types.
//!
//! Run with: cargo run --example custom_converter

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;
use valtree::converter::{ConvertResult, ConverterRegistry, EnumConverter, ValueConverter, Vector2};
use valtree::ValTree;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum Ability {
    MindReading,
    ExplosiveArrows,
    MindControl,
    Flatulence,
}

/// Hit points written as `current/max`.
#[derive(Debug, PartialEq)]
struct Health {
    current: u32,
    max: u32,
}

struct HealthConverter;

impl ValueConverter for HealthConverter {
    type Value = Health;

    fn from_text(&self, text: &str) -> ConvertResult<Health> {
        let (current, max) = text
            .split_once('/')
            .ok_or_else(|| format!("expected current/max, found {:?}", text))?;
        Ok(Health {
            current: current.trim().parse()?,
            max: max.trim().parse()?,
        })
    }

    fn to_text(&self, value: &Health) -> String {
        format!("{}/{}", value.current, value.max)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // One registry shared by every tree of the game
    let mut registry = ConverterRegistry::new();
    registry
        .register(EnumConverter::<Ability>::new())
        .register(HealthConverter);
    let registry = Arc::new(registry);

    let mut grunt = ValTree::with_registry(Arc::clone(&registry));
    grunt.parse_str("grunt\n health 80/100\n ability flatulence\n spawn (4, 12.5)\n");

    println!("health: {:?}", grunt.query_for::<Health>("grunt.health")?);
    println!("ability: {:?}", grunt.query_for::<Ability>("grunt.ability")?);
    println!("spawn: {:?}", grunt.query_for::<Vector2>("grunt.spawn")?);

    grunt.add_child_value("grunt.ability", &Ability::ExplosiveArrows)?;
    grunt.add_child_value("grunt.health", &Health { current: 100, max: 100 })?;
    println!("\n{}", grunt);

    // Conversion failures keep the offending text
    let mut broken = ValTree::with_registry(registry);
    broken.parse_str("health lots");
    if let Err(err) = broken.query_for::<Health>("health") {
        println!("error: {}", err);
    }

    Ok(())
}
