use std::io::{self, BufRead, Write};

use chrono::Local;
use rand::Rng;

use crate::display;
use crate::hint::decryption_hint;
use crate::models::{config, Difficulty};
use crate::session::{GamePhase, GuessOutcome, Session, MAX_ATTEMPTS};

pub fn play_round(difficulty: Option<Difficulty>) {
    let difficulty = difficulty.unwrap_or_else(|| config::load_config().difficulty);
    let mut rng = rand::thread_rng();
    let mut session = Session::new(difficulty);

    if let Err(e) = session.start(&mut rng) {
        eprintln!("Failed to start session: {}", e);
        std::process::exit(1);
    }

    display::print_banner();
    println!(
        "Mode: {} | Nodes: {} | Attempts: {} | Lock: {}",
        difficulty.display_name(),
        difficulty.pin_count(),
        MAX_ATTEMPTS,
        display::format_clock(difficulty.time_budget_secs())
    );
    println!();
    print_board(&session);
    display::print_prompt_help();

    let stdin = io::stdin();
    let mut line = String::new();

    while !session.is_terminal() {
        if session.remaining_secs(Local::now()) == 0 {
            session.expire();
            break;
        }

        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                println!("\nSession terminated.");
                return;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                std::process::exit(1);
            }
        }

        // A command may have been typed after the lock ran out.
        if session.remaining_secs(Local::now()) == 0 {
            session.expire();
            break;
        }

        handle_command(line.trim(), &mut session, &mut rng);
    }

    narrate_ending(&session);
}

fn handle_command<R: Rng>(input: &str, session: &mut Session, rng: &mut R) {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    match tokens.as_slice() {
        [] => {}
        ["set", node, value] => {
            let (node, value) = match (node.parse::<usize>(), value.parse::<i32>()) {
                (Ok(n), Ok(v)) => (n, v),
                _ => {
                    println!("Usage: set <node> <value>");
                    return;
                }
            };
            if node == 0 {
                println!("Nodes are numbered from 1.");
                return;
            }
            match session.select_pin(node - 1, value) {
                Ok(()) => print_board(session),
                Err(e) => println!("REJECTED: {}", e),
            }
        }
        ["run"] => match session.submit() {
            Ok(GuessOutcome::Incomplete) => {
                println!("CRITICAL: ALL PINS MUST BE SET BEFORE BYPASS.");
            }
            Ok(GuessOutcome::Victory { .. }) | Ok(GuessOutcome::LockedOut { .. }) => {}
            Ok(GuessOutcome::Mismatch { computed, attempts }) => {
                println!(
                    "ERROR: SEQUENCE MISMATCH. ATTEMPT {}/{} | RESULT {}",
                    attempts, MAX_ATTEMPTS, computed
                );
            }
            Err(e) => println!("REJECTED: {}", e),
        },
        ["hint"] => {
            if let Some(round) = session.round.as_ref() {
                let hint = decryption_hint(round, rng);
                println!("INTERCEPTED_SIGNAL: {}", hint);
                session.log(format!("INTERCEPTED_SIGNAL: {}", hint));
            }
        }
        ["log"] => display::print_logs(&session.logs),
        ["status"] => print_board(session),
        ["quit"] => {
            println!("Session terminated.");
            std::process::exit(0);
        }
        _ => display::print_prompt_help(),
    }
}

fn print_board(session: &Session) {
    if let Some(round) = session.round.as_ref() {
        display::print_board(session, round);
    }
}

fn narrate_ending(session: &Session) {
    let round = match session.round.as_ref() {
        Some(round) => round,
        None => return,
    };

    println!();
    match session.phase {
        GamePhase::Victory => {
            println!("{}", "=".repeat(60));
            println!("  ACCESS_GRANTED - SYSTEM_BYPASSED");
            println!("{}", "=".repeat(60));
            println!();
            println!("  Sequence:   {}", round.equation());
            println!("  Attempts:   {}/{}", session.attempts + 1, MAX_ATTEMPTS);
            println!("  Time taken: {}", elapsed_display(session));
            println!();
            println!("{}", "=".repeat(60));
        }
        GamePhase::LockedOut => {
            println!("{}", "=".repeat(60));
            println!("  BYPASS_FAILED");
            println!("  Connection Severed / Data Purged");
            println!("{}", "=".repeat(60));
            println!();
            println!("  The sequence was: {}", round.equation());
            println!();
            display::print_logs(&session.logs);
        }
        GamePhase::NotStarted | GamePhase::InProgress => {}
    }
}

fn elapsed_display(session: &Session) -> String {
    let started = match session.started_at {
        Some(started) => started,
        None => return "unknown".to_string(),
    };

    let duration = Local::now().signed_duration_since(started);
    let total_secs = duration.num_seconds();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;

    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
