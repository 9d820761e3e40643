//! Interactive play mode
//!
//! Text-based play loop: picks a random solvable puzzle, validates each
//! typed word through the session, and reveals the optimal ladder at the
//! end. Randomness lives here in the command layer; the core never picks
//! words itself.

use crate::core::{Dictionary, Word, WordError};
use crate::output::formatters::{format_ladder, format_reveal_mask};
use crate::session::{LadderSession, SessionState, ValidationResult};
use crate::solver::shortest_path;
use colored::Colorize;
use rand::prelude::IndexedRandom;
use std::io::{self, Write as _};

/// Attempts at drawing a random pair before giving up
const PUZZLE_DRAW_ATTEMPTS: usize = 500;

/// Pick a random start/target pair connected by at least two steps
///
/// Single-step puzzles are legal but trivial, so the draw retries until it
/// finds a pair whose shortest ladder has two or more steps.
fn random_puzzle(corpus: &Dictionary) -> Option<(Word, Word)> {
    let mut rng = rand::rng();

    for _ in 0..PUZZLE_DRAW_ATTEMPTS {
        let start = corpus.words().choose(&mut rng)?;
        let target = corpus.words().choose(&mut rng)?;
        if start == target {
            continue;
        }

        let path = shortest_path(start, target, corpus);
        if path.found() && path.steps() >= 2 {
            return Some((start.clone(), target.clone()));
        }
    }

    None
}

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error if no solvable puzzle can be drawn from the word list,
/// or on I/O failure reading player input.
pub fn run_play(words: &[Word], length: usize) -> Result<(), String> {
    let corpus: Dictionary = words.iter().filter(|w| w.len() == length).cloned().collect();

    if corpus.len() < 2 {
        return Err(format!(
            "Need at least two {length}-letter words to build a puzzle (got {})",
            corpus.len()
        ));
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Word Ladder                              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Change one letter at a time to reach the target word.");
    println!("Every step must be a dictionary word.\n");
    println!("Commands: 'quit' to exit, 'new' for a new puzzle, 'giveup' to see the solution\n");

    let mut session = new_session(&corpus)?;

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Start:   {}",
            session.start().text().to_uppercase().bright_white()
        );
        println!(
            "Target:  {}",
            format_reveal_mask(&session.reveal_mask())
                .to_uppercase()
                .bright_yellow()
        );
        println!(
            "Current: {}   (score: {})",
            session.current().text().to_uppercase().bright_cyan().bold(),
            session.score()
        );

        let input = get_user_input("Enter next word")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = new_session(&corpus)?;
                println!("\n🔄 New puzzle!\n");
                continue;
            }
            "giveup" | "give up" => {
                session.abandon();
                println!(
                    "\nThe shortest ladder was: {}\n",
                    format_ladder(session.best_known_path())
                );
                session = new_session(&corpus)?;
                println!("🔄 New puzzle!\n");
                continue;
            }
            _ => {}
        }

        let candidate = match Word::new(&input) {
            Ok(word) => word,
            Err(WordError::Empty) => continue,
            Err(e) => {
                println!("{}\n", e.to_string().red());
                continue;
            }
        };

        match session.submit_move(&candidate) {
            Ok(ValidationResult::Accepted) => {
                if session.state() == SessionState::Completed {
                    celebrate(&session);

                    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                        "yes" | "y" => {
                            session = new_session(&corpus)?;
                            println!("\n🔄 New puzzle!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
            Ok(ValidationResult::Rejected(reason)) => {
                println!("{}\n", reason.to_string().red());
            }
            Err(e) => {
                // Terminal session; only reachable if play continues past
                // the end, which the completion branch above prevents
                println!("{}\n", e.to_string().red());
                session = new_session(&corpus)?;
            }
        }
    }
}

fn new_session(corpus: &Dictionary) -> Result<LadderSession, String> {
    let (start, target) = random_puzzle(corpus)
        .ok_or_else(|| "Could not draw a solvable puzzle from this word list".to_string())?;

    LadderSession::new(start, target, corpus.clone()).map_err(|e| e.to_string())
}

fn celebrate(session: &LadderSession) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 Congratulations! You've completed the word ladder! 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Finished in {} steps with a score of {}",
        session.progress().len() - 1,
        session.score().to_string().bright_yellow().bold()
    );

    println!("\n  All steps taken:");
    for (i, word) in session.progress().iter().enumerate() {
        println!(
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white()
        );
    }

    println!("\n  Optimal solution (shortest path):");
    println!("    {}", format_ladder(session.best_known_path()).bright_cyan());

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
