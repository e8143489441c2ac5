//! CLI memory game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pairs::{Card, GameOptions, MatchEngine, RevealOutcome};

fn main() {
    println!("Memory CLI example (enter a position like 0_1, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let name = prompt_line("Your name: ");
    let options = GameOptions::default().with_player_name(if name.is_empty() {
        "Player".to_string()
    } else {
        name
    });

    let mut engine = match MatchEngine::new(options, seed) {
        Ok(engine) => engine,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&messages);
    engine.on_match_attempt(move |a, b, matched| {
        let verdict = if matched { "Pair!" } else { "No match." };
        sink.borrow_mut()
            .push(format!("{} {} {verdict}", format_card(a), format_card(b)));
    });
    let sink = Rc::clone(&messages);
    engine.on_score_changed(move |score| sink.borrow_mut().push(format!("Score: {score}")));
    let sink = Rc::clone(&messages);
    engine.on_error(move |err| sink.borrow_mut().push(colorize(&err.to_string(), "33")));

    loop {
        if let Err(err) = engine.start_game() {
            println!("Setup error: {err}");
            return;
        }
        let mut last_tick = Instant::now();

        while engine.state().is_playing() {
            print_board(&engine);
            let input = prompt_line("Reveal: ");
            engine.update(last_tick.elapsed().as_secs_f32());
            last_tick = Instant::now();

            if input == "q" || input == "quit" {
                println!("Goodbye.");
                return;
            }

            let outcome = engine.reveal_card(&input);
            for message in messages.borrow_mut().drain(..) {
                println!("{message}");
            }

            if outcome == Ok(RevealOutcome::Mismatched) {
                print_board(&engine);
                prompt_line("Press enter to flip them back...");
                engine.clear_and_hide();
            }
        }

        print_board(&engine);
        let stats = engine.game_stats();
        println!(
            "{} found all {} pairs: score {}, {} attempts, {:.1}% accuracy, {:.0}s",
            engine.player().name(),
            stats.matches,
            stats.score,
            stats.attempts,
            stats.accuracy,
            stats.elapsed
        );
        if let Some(card) = engine.most_valuable_matched_card() {
            println!("Most valuable pair: {}", format_card(card));
        }

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => break,
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_board(engine: &MatchEngine) {
    let (rows, columns) = engine.board().dimensions();
    println!();
    print!("    ");
    for column in 0..columns {
        print!("{column:^5}");
    }
    println!();

    for row in 0..rows {
        print!("{row:>3} ");
        for column in 0..columns {
            let cell = engine
                .board()
                .card_at(row, column)
                .map_or_else(|| "  ".to_string(), format_cell);
            print!(" {cell}  ");
        }
        println!();
    }

    let stats = engine.game_stats();
    println!(
        "\nPairs left: {} | score {} | attempts {}\n",
        stats.remaining_pairs, stats.score, stats.attempts
    );
}

fn format_cell(card: &Card) -> String {
    if card.is_matched() {
        colorize(&format_card(card), "90")
    } else if card.is_revealed() {
        format_card(card)
    } else {
        "??".to_string()
    }
}

fn format_card(card: &Card) -> String {
    let color_code = match card.kind().id() {
        0 | 1 => "31",
        2 | 3 => "34",
        _ => "33",
    };
    let text = format!("{}{}", card.kind().glyph(), card.value());
    if card.is_special() {
        colorize(&text, &format!("1;{color_code}"))
    } else {
        colorize(&text, color_code)
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
