//! Formatting utilities for terminal output

use crate::solver::Ladder;

/// Format a ladder as an arrow-joined chain, or the no-path message
#[must_use]
pub fn format_ladder(ladder: &Ladder) -> String {
    if ladder.found() {
        ladder.to_string()
    } else {
        "No path found".to_string()
    }
}

/// Render a reveal mask, `_` for letters not matched yet
#[must_use]
pub fn format_reveal_mask(mask: &[Option<char>]) -> String {
    mask.iter().map(|slot| slot.unwrap_or('_')).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn format_ladder_joins_words() {
        let ladder = Ladder::from_words(
            ["bark", "dark", "dart"]
                .iter()
                .map(|&w| Word::new(w).unwrap())
                .collect(),
        );
        assert_eq!(format_ladder(&ladder), "bark -> dark -> dart");
    }

    #[test]
    fn format_ladder_empty_reports_no_path() {
        assert_eq!(format_ladder(&Ladder::empty()), "No path found");
    }

    #[test]
    fn reveal_mask_blanks_unmatched() {
        let mask = vec![None, Some('o'), Some('r'), None];
        assert_eq!(format_reveal_mask(&mask), "_or_");
    }

    #[test]
    fn reveal_mask_fully_revealed() {
        let mask = vec![Some('w'), Some('o'), Some('r'), Some('d')];
        assert_eq!(format_reveal_mask(&mask), "word");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
