use std::process;

mod edits;
mod patch;
mod utils;

#[cfg(test)]
mod tests;

use crate::utils::display_diff_side_by_side;

fn run() -> anyhow::Result<()> {
    let pairs = edits::patch_pairs();
    println!(
        "\u{001b}[94mPatching {} ({} blocks)\u{001b}[0m",
        edits::TARGET_PATH,
        pairs.len()
    );

    for pair in &pairs {
        println!("\n\u{001b}[35m▌🔧 {}\u{001b}[0m", pair.label);
        display_diff_side_by_side(pair.expected, pair.replacement);
    }

    let summary = patch::patch_file(edits::TARGET_PATH, &pairs).map_err(|e| anyhow::anyhow!(e))?;

    println!("\n\u{001b}[92m{}\u{001b}[0m", summary);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("\u{001b}[91mError:\u{001b}[0m {}", e);
        process::exit(1);
    }
}
