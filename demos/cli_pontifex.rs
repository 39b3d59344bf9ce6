//! CLI Pontifex example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pontifex::{Card, Cipher, CipherOptions, Outcome, Phase, StepError, Suit, Tutorial};

fn main() {
    println!("Pontifex CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut tutorial = Tutorial::new(seed);
    let cipher = Cipher::new(CipherOptions::default());

    loop {
        print_deck(&tutorial);
        println!("Commands: [s]huffle [o]rdered [e]ncrypt [d]ecrypt [r]ound [v]alues [q]uit");

        match prompt_line("> ").as_str() {
            "s" | "shuffle" => {
                if let Err(err) = tutorial.shuffle_deck() {
                    println!("Shuffle error: {err}");
                }
            }
            "o" | "ordered" => tutorial.reset_deck(),
            "e" | "encrypt" => {
                let text = prompt_raw("Plaintext: ");
                match cipher.encrypt(&mut tutorial.deck().clone(), &text) {
                    Ok(ciphertext) => println!("Ciphertext: {ciphertext}"),
                    Err(err) => println!("Encrypt error: {err}"),
                }
            }
            "d" | "decrypt" => {
                let text = prompt_raw("Ciphertext: ");
                match cipher.decrypt(&mut tutorial.deck().clone(), &text) {
                    Ok(plaintext) => println!("Plaintext: {plaintext}"),
                    Err(err) => println!("Decrypt error: {err}"),
                }
            }
            "r" | "round" => {
                if !play_round(&mut tutorial) {
                    return;
                }
            }
            "v" | "values" => println!("Keystream so far: {:?}", tutorial.values()),
            "q" | "quit" => return,
            _ => println!("Unknown command."),
        }
    }
}

// Runs one guided round. Returns false if the user quit.
fn play_round(tutorial: &mut Tutorial) -> bool {
    if let Err(err) = tutorial.start_round() {
        println!("Round error: {err}");
        return true;
    }

    while tutorial.phase() != Phase::Ready {
        print_deck(tutorial);
        println!("{}", phase_hint(tutorial.phase()));
        println!("Commands: m <from> <to>, c <index>, x (confirm cut), a (auto), b (abandon), q");

        let input = prompt_line("step> ");
        let mut words = input.split_whitespace();
        let result = match (words.next(), parse(words.next()), parse(words.next())) {
            (Some("m"), Some(from), Some(to)) => tutorial.drag_card(from, to),
            (Some("c"), Some(index), None) => tutorial.click_card(index),
            (Some("x"), None, None) => confirm_cut(tutorial),
            (Some("a"), None, None) => tutorial.perform_step(),
            (Some("b"), None, None) => {
                tutorial.reset_round();
                return true;
            }
            (Some("q"), None, None) => return false,
            _ => {
                println!("Unknown command.");
                continue;
            }
        };

        match result {
            Ok(Outcome::Rejected) => println!("{}", colorize("Not quite. Try again.", "31")),
            Ok(Outcome::Value(value)) => println!("{}", colorize(&format!("Value {value}"), "32")),
            Ok(Outcome::JokerDiscarded) => {
                println!("A joker is not a value. Start over at step 1.");
            }
            Ok(Outcome::Advanced(phase)) => println!("Correct. On to step {}.", phase.number()),
            Ok(_) => {
                if let Some(count) = tutorial.revealed_count() {
                    println!("Bottom card counts {count}.");
                }
            }
            Err(err) => println!("Step error: {err}"),
        }
    }

    true
}

fn confirm_cut(tutorial: &mut Tutorial) -> Result<Outcome, StepError> {
    match tutorial.phase() {
        Phase::TripleCut => tutorial.confirm_selected_triple_cut(),
        Phase::CountCut => tutorial.confirm_selected_count_cut(),
        _ => Err(StepError::InvalidPhase),
    }
}

const fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Ready => "Ready.",
        Phase::MoveJokerA => "Step 1: move Joker A one card down.",
        Phase::MoveJokerB => "Step 2: move Joker B two cards down.",
        Phase::TripleCut => "Step 3: select the cards above and below the jokers, then confirm.",
        Phase::CountCut => {
            "Step 4: select the bottom card, then the last card to cut, then confirm."
        }
        Phase::Output => "Step 5: count down by the top card and pick the output card.",
    }
}

fn parse(word: Option<&str>) -> Option<usize> {
    word.and_then(|word| word.parse().ok())
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim_end_matches(['\r', '\n']).to_string()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).trim().to_lowercase()
}

fn print_deck(tutorial: &Tutorial) {
    let highlights = tutorial.highlights();
    println!();
    for (index, card) in tutorial.deck().iter().enumerate() {
        let text = format!("{index:>2}:{:<3}", format_card(card));
        if highlights.contains(&index) {
            print!("{} ", colorize(&text, "1"));
        } else {
            print!("{text} ");
        }
        if index % 9 == 8 {
            println!();
        }
    }
    println!();
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
        Suit::JokerA | Suit::JokerB => "35",
    };
    colorize(&card.label().to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
