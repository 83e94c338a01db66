//! Generates the quarter-wave sine table used by the fixed-point trig lookup.
//!
//! The table lands in `OUT_DIR/trig_table.rs` and is pulled into
//! `geometry.rs` with `include!`.

use std::f64::consts::FRAC_PI_2;
use std::fmt::Write as _;
use std::{env, fs, path::PathBuf};

/// Entries per quarter turn (must match `QUARTER_STEPS` in geometry.rs).
const QUARTER_STEPS: usize = 256;

/// Fixed-point value of 1.0 (must match `TRIG_MAX_RATIO` in geometry.rs).
const TRIG_MAX_RATIO: f64 = 65535.0;

fn main() {
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap());

    let mut src = String::new();
    writeln!(src, "/// sin(i * 90° / {QUARTER_STEPS}) scaled to `TRIG_MAX_RATIO`.").unwrap();
    writeln!(src, "const SIN_QUARTER: [i32; {}] = [", QUARTER_STEPS + 1).unwrap();
    for i in 0..=QUARTER_STEPS {
        let radians = i as f64 * FRAC_PI_2 / QUARTER_STEPS as f64;
        let value = (radians.sin() * TRIG_MAX_RATIO).round() as i32;
        writeln!(src, "    {value},").unwrap();
    }
    writeln!(src, "];").unwrap();

    fs::write(out.join("trig_table.rs"), src).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
