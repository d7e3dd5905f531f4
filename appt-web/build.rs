//! Build script for appt-web.
//!
//! The browser has no filesystem, so `main.rs` builds its in-memory database
//! from CSV text compiled into the binary. Both fixtures are needed: the
//! status directory feeds the status select and the status column, and the
//! appointments file holds the rows. Each is copied to OUT_DIR for
//! `include_str!`; a missing fixture becomes an empty file and a warning.

use std::env;
use std::fs;
use std::path::Path;

const FIXTURES: [&str; 2] = ["statuses.csv", "appointments.csv"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for name in FIXTURES {
        let src = Path::new("../fixtures").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(&src, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy {} to {}: {}", src.display(), dest.display(), e);
            });
        } else {
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Fixture {} not found, the appointment list starts empty",
                src.display()
            );
        }
        println!("cargo:rerun-if-changed={}", src.display());
    }

    println!("cargo:rerun-if-changed=build.rs");
}
