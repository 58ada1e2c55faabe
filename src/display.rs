use chrono::Local;

use crate::models::Round;
use crate::session::{Session, MAX_ATTEMPTS};

pub fn print_banner() {
    println!("\n{}", "=".repeat(60));
    println!("  RECOVERY_PINS - Operator Deduction Terminal");
    println!("{}\n", "=".repeat(60));
}

/// Renders the node board: the target cipher, the clock, each node's
/// options and current selection, and a `?` marker for every hushed
/// operator between them.
pub fn print_board(session: &Session, round: &Round) {
    let remaining = session.remaining_secs(Local::now());

    let last_run = match session.last_computed {
        Some(computed) => computed.to_string(),
        None => "-".to_string(),
    };

    println!("{}", "-".repeat(60));
    println!(
        "TARGET_CIPHER: {}   CLOCK: {}   ENTROPY: {}/{}   LAST_RUN: {}",
        round.target,
        format_clock(remaining),
        session.attempts,
        MAX_ATTEMPTS,
        last_run
    );
    println!("{}", "-".repeat(60));

    for (i, pin) in round.pins.iter().enumerate() {
        if i > 0 {
            println!("    [?] OP_HIDDEN");
        }
        let options: Vec<String> = pin.options.iter().map(|v| v.to_string()).collect();
        let dialed = match pin.selected_value {
            Some(value) => value.to_string(),
            None => "-".to_string(),
        };
        println!(
            "NODE_{:02}  options: {:<12} dialed: {}",
            i + 1,
            options.join(" "),
            dialed
        );
    }
    println!("{}", "-".repeat(60));
}

pub fn print_logs(logs: &[String]) {
    let stamp = Local::now().format("%H:%M:%S");
    println!("SYSTEM_LOGS");
    for log in logs {
        println!("[{}] {}", stamp, log);
    }
}

pub fn print_prompt_help() {
    println!("Commands:");
    println!("  set <node> <value>   dial a value into a node");
    println!("  run                  execute the bypass");
    println!("  hint                 request decryption assistance");
    println!("  log                  show the system log");
    println!("  status               redraw the board");
    println!("  quit                 terminate the session");
}

pub fn format_clock(seconds: i64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}
