//! `kinda syntax`: print the construct registry table — name, category, and
//! dependency edges (spec §6 reference command).

use kinda_registry::all;

pub fn run() {
    for c in all() {
        let deps = if c.depends_on.is_empty() {
            "-".to_string()
        } else {
            c.depends_on.join(", ")
        };
        println!("{:<24} {:<10} depends_on: {}", c.name, format!("{:?}", c.category), deps);
    }
}
