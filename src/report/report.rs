use std::io::{self, Write};

use crate::classify::buckets::BucketCounts;
use crate::puzzle::puzzle::Puzzle;

/// Prints the puzzle statement: the visible counters first, then one line
/// per boundary with its convergence rate and delay as fractional values.
pub fn write_puzzle<W: Write>(out: &mut W, puzzle: &Puzzle) -> io::Result<()> {
    writeln!(out, "indicators: {}", puzzle.indicators)?;
    writeln!(out, "modules: {}", puzzle.modules)?;
    writeln!(out, "inputs: {}", puzzle.inputs)?;
    writeln!(out, "outputs: {}", puzzle.outputs)?;
    writeln!(out, "accuracy: {}", puzzle.required_accuracy)?;
    writeln!(out, "time: {} ms", puzzle.required_time)?;
    for layer in &puzzle.layers {
        writeln!(
            out,
            "{} / {}",
            hundredths(layer.convergence_rate),
            hundredths(layer.delay)
        )?;
    }
    Ok(())
}

/// Prints one line per bucket with its count and share of the sweep.
pub fn write_buckets<W: Write>(out: &mut W, counts: &BucketCounts) -> io::Result<()> {
    let total = counts.total();
    let labeled = [
        ("lls", counts.lls),
        ("lgs", counts.lgs),
        ("gls", counts.gls),
        ("ggs", counts.ggs),
    ];
    for (label, count) in labeled {
        let share = count as f64 * 100.0 / total as f64;
        writeln!(out, "{}: {} ({}%)", label, count, sig3(share))?;
    }
    Ok(())
}

/// Renders a ×100-scaled coefficient as its fractional value, keeping at
/// least one decimal digit: `999` → `9.99`, `500` → `5.0`, `1` → `0.01`.
fn hundredths(scaled: u32) -> String {
    let mut rendered = format!("{}", scaled as f64 / 100.0);
    if !rendered.contains('.') {
        rendered.push_str(".0");
    }
    rendered
}

/// Three significant digits, trailing zeros trimmed: `39.0625` → `39.1`,
/// `6.25` → `6.25`, `100.0` → `100`.
fn sig3(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (2 - magnitude).max(0) as usize;
    let mut rendered = format!("{value:.decimals$}");
    if rendered.contains('.') {
        while rendered.ends_with('0') {
            rendered.pop();
        }
        if rendered.ends_with('.') {
            rendered.pop();
        }
    }
    rendered
}
