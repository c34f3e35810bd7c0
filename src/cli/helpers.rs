//! Shared helper functions for CLI commands

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Collapse a multi-line cell to its first line for one-line display
pub fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or_default()
}
