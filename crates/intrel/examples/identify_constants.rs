//! Constant Recognition Examples
//!
//! Identifies numbers given to 100 digits, first against a short
//! hand-picked dictionary, then against the standard one.
//!
//! Run with: cargo run --example identify_constants --features arbitrary-precision

use intrel::prelude::*;
use intrel::real::constants::{self, constant};
use std::time::Instant;

type F = Float100Digits;

fn main() {
    tracing_subscriber::fmt::init();

    println!("Constant recognition at 100 digits\n");

    let pi: F = constant(constants::PI);
    let zeta3: F = constant(constants::ZETA_THREE);
    let catalan: F = constant(constants::CATALAN);
    let bound = F::from_i64(1000);

    // A handful of candidates keeps the lattice small enough for 100 digits.
    let mut focused = Dictionary::new();
    focused.insert(pi.clone(), "π");
    focused.insert(pi.clone() * pi.clone(), "π²");
    focused.insert(zeta3.clone(), "ζ(3)");
    focused.insert(catalan.clone(), "G");
    focused.insert(F::ln2(), "ln(2)");

    println!("1. Against π, π², ζ(3), G, ln 2\n");

    // 2π − 3ζ(3): expect x + 3⋅ζ(3) − 2⋅π = 0.
    let x = F::from_i64(2) * pi.clone() - F::from_i64(3) * zeta3;
    identify_and_report("2π − 3ζ(3)", || identify_with(&focused, x.clone(), "x", bound.clone()));

    // π²/6 = ζ(2): expect 6⋅x − 1⋅π² = 0.
    let z = pi.clone() * pi / F::from_i64(6);
    identify_and_report("π²/6", || identify_with(&focused, z.clone(), "x", bound.clone()));

    println!("2. Against the standard dictionary\n");

    // G + ln 2: exp(x) = 2⋅exp(G) is the shortest relation available.
    let y = catalan + F::ln2();
    identify_and_report("G + ln 2", || identify(y.clone(), "x", bound.clone()));

    // With dozens of entries 100 digits are not enough, and the search
    // for π²/6 gives up without a relation.
    identify_and_report("π²/6 (expected: no relation)", || identify(z.clone(), "x", bound.clone()));
}

fn identify_and_report(label: &str, search: impl FnOnce() -> String) {
    let start = Instant::now();
    let report = search();
    let elapsed = start.elapsed();

    println!("x = {label}");
    if report.is_empty() {
        println!("    no relation found ({elapsed:?})\n");
    } else {
        println!("{report}");
        println!("    ({elapsed:?})\n");
    }
}
