//! Breadth-first shortest-path search
//!
//! Searches the implicit graph whose vertices are the corpus words (plus
//! the start and target) and whose edges are the one-letter adjacency
//! relation.

use super::Ladder;
use crate::core::{Dictionary, Word, is_adjacent};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Find a shortest ladder from `start` to `target` within `corpus`
///
/// Breadth-first search over a frontier of paths: the first dequeued path
/// ending at the target is shortest by edge count. When several shortest
/// paths exist, the one returned follows corpus iteration order; for a
/// fixed corpus order the result is deterministic.
///
/// Returns the empty ladder when no path exists, or when start and target
/// have different lengths (words of unequal length are never adjacent).
/// `start == target` yields the single-word ladder without searching,
/// since no word is adjacent to itself.
///
/// Interior words come from the corpus; the target itself is reachable
/// even when the corpus does not contain it.
#[must_use]
pub fn shortest_path(start: &Word, target: &Word, corpus: &Dictionary) -> Ladder {
    if start.len() != target.len() {
        return Ladder::empty();
    }

    if start == target {
        return Ladder::from_words(vec![start.clone()]);
    }

    let mut vertices: Vec<&Word> = corpus.iter().collect();
    if !corpus.contains(target) {
        vertices.push(target);
    }

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(start.text());

    let mut queue: VecDeque<Vec<&Word>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let current = *path.last().expect("queued paths are never empty");

        if current == target {
            return Ladder::from_words(path.into_iter().cloned().collect());
        }

        for &candidate in &vertices {
            if is_adjacent(current, candidate) && !visited.contains(candidate.text()) {
                visited.insert(candidate.text());
                let mut extended = path.clone();
                extended.push(candidate);
                queue.push_back(extended);
            }
        }
    }

    Ladder::empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn corpus(texts: &[&str]) -> Dictionary {
        texts.iter().map(|t| word(t)).collect()
    }

    #[test]
    fn start_equals_target() {
        let dictionary = corpus(&["bark", "dark"]);
        let path = shortest_path(&word("bark"), &word("bark"), &dictionary);

        assert!(path.found());
        assert_eq!(path.words(), &[word("bark")]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn start_equals_target_outside_corpus() {
        let dictionary = corpus(&["bark"]);
        let path = shortest_path(&word("frog"), &word("frog"), &dictionary);
        assert_eq!(path.words(), &[word("frog")]);
    }

    #[test]
    fn direct_neighbor() {
        let dictionary = corpus(&["bark", "dark"]);
        let path = shortest_path(&word("bark"), &word("dark"), &dictionary);

        assert_eq!(path.steps(), 1);
        assert_eq!(path.words(), &[word("bark"), word("dark")]);
    }

    #[test]
    fn finds_multi_step_chain() {
        let dictionary = corpus(&["dark", "dart", "cart", "card", "cord", "word"]);
        let path = shortest_path(&word("bark"), &word("word"), &dictionary);

        assert!(path.found());
        assert!(path.is_valid_chain());
        assert_eq!(path.words().first(), Some(&word("bark")));
        assert_eq!(path.words().last(), Some(&word("word")));
        // bark -> dark -> dart -> cart -> card -> cord -> word
        assert_eq!(path.steps(), 6);
    }

    #[test]
    fn clustered_corpus_has_no_bark_to_word_chain() {
        // The {bark,dark,park,lark} cluster has no one-letter bridge into
        // the {cart,card,hard,ward,word,cord} cluster, so the proven
        // outcome is the empty ladder.
        let dictionary = corpus(&[
            "bark", "dark", "park", "lark", "cart", "card", "hard", "ward", "word", "cord",
        ]);
        let path = shortest_path(&word("bark"), &word("word"), &dictionary);

        assert!(!path.found());
        assert_eq!(path, Ladder::empty());
    }

    #[test]
    fn clustered_corpus_connected_side_solves() {
        let dictionary = corpus(&[
            "bark", "dark", "park", "lark", "cart", "card", "hard", "ward", "word", "cord",
        ]);
        let path = shortest_path(&word("cart"), &word("word"), &dictionary);

        assert!(path.found());
        assert!(path.is_valid_chain());
        // Three steps, with "ward" winning the tie against "cord" because
        // it appears earlier in the corpus.
        assert_eq!(
            path.words(),
            &[word("cart"), word("card"), word("ward"), word("word")]
        );
    }

    #[test]
    fn interior_words_are_corpus_members() {
        let dictionary = corpus(&["dark", "dart", "cart", "card", "cord", "word"]);
        let path = shortest_path(&word("bark"), &word("word"), &dictionary);

        for interior in &path.words()[1..] {
            assert!(
                dictionary.contains(interior),
                "{interior} not in the corpus"
            );
        }
    }

    #[test]
    fn target_reachable_when_not_in_corpus() {
        let dictionary = corpus(&["dark"]);
        let path = shortest_path(&word("bark"), &word("darn"), &dictionary);

        assert_eq!(path.words(), &[word("bark"), word("dark"), word("darn")]);
    }

    #[test]
    fn shortest_beats_longer_detour() {
        // Both bark -> barn and bark -> dark -> darn -> barn exist; BFS
        // must return the one-step path.
        let dictionary = corpus(&["dark", "darn", "barn"]);
        let path = shortest_path(&word("bark"), &word("barn"), &dictionary);

        assert_eq!(path.steps(), 1);
    }

    #[test]
    fn tie_break_follows_corpus_order() {
        // Two shortest chains exist: via "dark" and via "barn". The first
        // hop enqueued wins, so reordering the corpus flips the result.
        let via_dark = corpus(&["dark", "darn", "barn"]);
        let path = shortest_path(&word("bark"), &word("darn"), &via_dark);
        assert_eq!(path.words()[1], word("dark"));

        let via_barn = corpus(&["barn", "darn", "dark"]);
        let path = shortest_path(&word("bark"), &word("darn"), &via_barn);
        assert_eq!(path.words()[1], word("barn"));
    }

    #[test]
    fn mismatched_lengths_yield_empty() {
        let dictionary = corpus(&["bark", "dark"]);
        let path = shortest_path(&word("bark"), &word("barks"), &dictionary);
        assert!(!path.found());
    }

    #[test]
    fn empty_corpus_unreachable_target() {
        let dictionary = Dictionary::new();
        let path = shortest_path(&word("bark"), &word("word"), &dictionary);
        assert!(!path.found());
    }

    #[test]
    fn empty_corpus_adjacent_target() {
        // The target is always a vertex, so a directly adjacent target is
        // reachable even through an empty corpus.
        let dictionary = Dictionary::new();
        let path = shortest_path(&word("bark"), &word("dark"), &dictionary);
        assert_eq!(path.steps(), 1);
    }
}
