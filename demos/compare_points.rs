//! Load (or generate) a point file, pair every point with brute force and the
//! grid, then check that both agree.
//!
//! ```text
//! cargo run --example compare_points -- [points.csv]
//! RUST_LOG=debug cargo run --example compare_points
//! ```
use gridnn::io::{load_points, save_points};
use gridnn::prelude::*;
use rand::Rng;
use std::path::Path;
use std::time::Instant;

fn generate(count: usize) -> Vec<Point> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let x: i32 = rng.random_range(-200..=200);
            let y: i32 = rng.random_range(-200..=200);
            Point::new(x as f64, y as f64)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "points.csv".to_string());
    if !Path::new(&path).exists() {
        println!("{} not found, generating 100 random points", path);
        save_points(&path, &generate(100))?;
    }
    let points = load_points(&path)?;

    let brute_start = Instant::now();
    let raw = brute_force_nearest(&points);
    println!("Brute: {}ns", brute_start.elapsed().as_nanos());
    print_pairs(&raw);

    let grid_start = Instant::now();
    let fast = grid_nearest(&points);
    println!("Fast: {}ns", grid_start.elapsed().as_nanos());
    print_pairs(&fast);

    println!("Same result from brute force and fast?");
    let result = compare(&raw, &fast)?;
    for mismatch in result.mismatches() {
        println!("  {}", mismatch);
    }
    println!("{}", result.is_same());
    Ok(())
}

fn print_pairs(pairs: &[NearestPair]) {
    let line: Vec<String> = pairs.iter().map(|p| p.to_string()).collect();
    println!("[{}]\n", line.join(", "));
}
