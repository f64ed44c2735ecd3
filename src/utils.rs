const DIFF_MAX_LINES: usize = 14;
const DIFF_COL_WIDTH: usize = 60;

// Truncate to `max` bytes for log/error output, escaping control characters
// so CRLF payloads stay on one line.
pub fn clip(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.escape_debug().to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}… [truncated]", s[..end].escape_debug())
}

// Fit a single line into a diff column.
fn fit(line: &str, width: usize) -> String {
    if line.len() <= width {
        return line.to_string();
    }
    format!("{}...", &line[..width - 3])
}

/// Prints a before/after view of one substitution, old block on the left,
/// new block on the right.
pub fn display_diff_side_by_side(old_str: &str, new_str: &str) {
    let old_lines: Vec<&str> = old_str.lines().collect();
    let new_lines: Vec<&str> = new_str.lines().collect();

    let shown = old_lines.len().max(new_lines.len()).min(DIFF_MAX_LINES);
    let left_width = old_lines
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0)
        .clamp("Before".len(), DIFF_COL_WIDTH);

    println!("\u{001b}[36m╭─ Changes\u{001b}[0m");
    println!(
        "\u{001b}[90m│ {:width$} │ After\u{001b}[0m",
        "Before",
        width = left_width
    );
    println!(
        "\u{001b}[36m├─{:─<width$}─┼─\u{001b}[0m",
        "",
        width = left_width
    );

    for i in 0..shown {
        let old_line = old_lines.get(i).copied().unwrap_or("");
        let new_line = new_lines.get(i).copied().unwrap_or("");

        println!(
            "\u{001b}[31m│ {:width$}\u{001b}[0m \u{001b}[90m│\u{001b}[0m \u{001b}[32m{}\u{001b}[0m",
            fit(old_line, left_width),
            fit(new_line, DIFF_COL_WIDTH),
            width = left_width
        );
    }

    if old_lines.len() > shown || new_lines.len() > shown {
        println!("\u{001b}[90m│ ... (truncated)\u{001b}[0m");
    }

    println!("\u{001b}[36m╰─\u{001b}[0m");
}
