//! Console output for the report and its diagnostics.
//!
//! Statistics go to stdout as plain lines; warnings and errors go to
//! stderr with a status glyph.

use owo_colors::OwoColorize;

use sortbin_analysis::DistanceStats;

/// Print a fatal error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Print the final statistics block, distances rounded to whole metres.
pub fn print_report(addresses: usize, containers: usize, stats: &DistanceStats) {
    println!("Loaded address points: {addresses}");
    println!("Loaded sorting containers: {containers}");
    println!();
    println!(
        "Mean distance to a public sorting container: {:.0} metres",
        stats.mean
    );
    println!("Median distance to a container: {:.0} metres", stats.median);
    println!(
        "Farthest from a container is '{}' at {:.0} metres",
        stats.farthest, stats.max
    );
}
