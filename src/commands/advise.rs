//! Interactive advisor mode
//!
//! Line-oriented prompt loop: suggest a guess, read the game's coloring as
//! five digits, update the belief, repeat until a terminal state.

use crate::belief::Belief;
use crate::core::Coloring;
use crate::output::{print_candidates, print_shortlist};
use crate::solver::Advisor;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the interactive advisor loop
///
/// The advisor owns the round counter; the caller seeds the belief. Each
/// round the top recommendation is the guess to play, and the feedback the
/// user types applies to it.
///
/// # Errors
///
/// Returns an error on I/O failures reading input, or if no legal guess can
/// be scored while candidates remain.
pub fn run_advise<R: Rng>(mut belief: Belief, advisor: &mut Advisor<'_, R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Advisor - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest the guess with the highest expected information gain.");
    println!("Play it, then type the coloring the game showed you:\n");
    println!("  - 0 for gray (letter not in word)");
    println!("  - 1 for gold (letter in word, wrong position)");
    println!("  - 2 for green (correct position)\n");
    println!("So you might type 01002 and hit enter. 22222 means you won.");
    println!("Commands: 'win' if you got it, 'quit' to exit\n");

    let mut round = 1;

    loop {
        if belief.is_empty() {
            println!(
                "\n{}",
                "❌ No candidate fits the evidence. The secret is outside the word list."
                    .red()
                    .bold()
            );
            return Ok(());
        }

        if let Some(sole) = belief.sole_candidate() {
            println!(
                "\n{} {}",
                "🎯 The answer must be:".bright_cyan().bold(),
                sole.text().to_uppercase().bright_yellow().bold()
            );
            return Ok(());
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {round}: {} candidates, {:.3} nats of uncertainty",
            belief.support_size(),
            belief.entropy()
        );
        println!("────────────────────────────────────────────────────────────");

        let opener = advisor.opener(round).cloned();
        let guess = if let Some(opener) = opener {
            println!("\n{}", "Using the precomputed opening guess.".bright_black());
            opener
        } else {
            let shortlist = advisor.shortlist(&belief);
            let top = shortlist
                .first()
                .ok_or("No legal guesses available")?
                .word
                .clone();
            print_shortlist(&shortlist);
            top
        };

        println!(
            "\n📊 Suggested guess: {}\n",
            guess.text().to_uppercase().bright_white().bold()
        );

        if belief.support_size() <= 10 {
            print_candidates(&belief, 10);
        }

        let coloring = loop {
            let input = get_user_input("Enter coloring (digits 0/1/2, 'win', 'quit')")?
                .to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "win" | "correct" | "solved" => break Coloring::PERFECT,
                _ => match input.parse::<Coloring>() {
                    Ok(coloring) => break coloring,
                    Err(e) => {
                        println!("❌ {e}. Type 5 digits with no spaces, like 01002.\n");
                    }
                },
            }
        };

        if coloring.is_perfect() {
            println!(
                "\n{}",
                format!("🎉 Solved in {round} rounds!").bright_green().bold()
            );
            return Ok(());
        }

        belief = advisor.observe(&belief, &guess, coloring);
        round += 1;
    }
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
