//! `kinda examples`: print the recognition pattern for every registered
//! construct, grouped by category (spec §6 reference command).

use kinda_registry::{all, Category};

pub fn run() {
    println!("primitives:");
    for c in all().iter().filter(|c| c.category == Category::Primitive) {
        println!("  ~{:<20} recognized by: {}", c.name, c.pattern_src);
    }
    println!();
    println!("composites:");
    for c in all().iter().filter(|c| c.category == Category::Composite) {
        println!("  ~{:<20} recognized by: {}", c.name, c.pattern_src);
    }
}
