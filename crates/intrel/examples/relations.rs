//! Integer Relation Examples
//!
//! Finds relations among small sets of reals at double precision and shows
//! what the search reports when there is nothing to find.
//!
//! Run with: cargo run --example relations

use intrel::prelude::*;

fn main() {
    tracing_subscriber::fmt::init();

    println!("Integer relations at double precision\n");

    example_1_rationals();
    example_2_silver_ratio();
    example_3_no_relation();
    example_4_rejected_inputs();
    example_5_dictionary();
}

fn show(label: &str, x: &[f64], max_norm_bound: f64) {
    match find_relation_default_gamma(x, max_norm_bound) {
        Ok(relation) => {
            println!("{label}: {relation}");
            println!(
                "    coefficients {:?}, {} iterations (bound {})",
                relation.coefficients(),
                relation.stats().iterations,
                relation.stats().expected_iterations
            );
        }
        Err(err) => println!("{label}: {err}"),
    }
}

fn example_1_rationals() {
    println!("1. Rational ratios");
    show("   (2, 3)", &[2.0, 3.0], 100.0);
    show("   (0.75, 1.25)", &[0.75, 1.25], 100.0);
    println!();
}

fn example_2_silver_ratio() {
    println!("2. 1 + √2 is a combination of 1 and √2");
    let root2 = 2.0_f64.sqrt();
    show("   (1, √2, 1+√2)", &[1.0, root2, 1.0 + root2], 1000.0);
    println!();
}

fn example_3_no_relation() {
    println!("3. Nothing below the bound");
    let x = [1.0, 2.0_f64.sqrt(), 3.0_f64.sqrt()];
    show("   (1, √2, √3)", &x, 1000.0);
    println!();
}

fn example_4_rejected_inputs() {
    println!("4. Inputs the search refuses");
    show("   unsorted", &[3.0, 2.0, 1.0], 10.0);
    show("   contains zero", &[0.0, 1.0], 10.0);
    show("   bound too large", &[1.0, 2.0], 1.0e12);
    println!();
}

fn example_5_dictionary() {
    println!("5. Naming the constants in a relation");
    let x = std::f64::consts::PI - std::f64::consts::E;
    let report = identify_with(&small_dictionary(), x, "x", 1000.0);
    println!("{report}");
}
