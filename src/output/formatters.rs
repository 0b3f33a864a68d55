//! Formatting utilities for terminal output

use crate::core::Coloring;

/// Format a coloring as emoji string
#[must_use]
pub fn coloring_to_emoji(coloring: Coloring) -> String {
    let mut result = String::with_capacity(20);

    for digit in coloring.digits() {
        result.push(match digit {
            0 => '⬜', // Absent
            1 => '🟨', // Present
            2 => '🟩', // Exact
            _ => unreachable!(),
        });
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format expected gain as a bar
#[must_use]
pub fn gain_bar(gain_nats: f64, width: usize) -> String {
    let max_gain = 10.0; // Roughly ln of a 20k-word candidate set
    create_progress_bar(gain_nats, max_gain, width)
}
