use crate::models::{config, Difficulty};

pub fn handle_difficulty(level: Option<Difficulty>) {
    let mut user_config = config::load_config();

    match level {
        None => {
            println!(
                "Current difficulty: {}",
                user_config.difficulty.display_name()
            );
            println!();
            println!("Modes:");
            println!("  Easy:    3 nodes, 3 minute lock");
            println!("  Medium:  4 nodes, 6 minute lock");
            println!("  Hard:    6 nodes, 8 minute lock");
            println!();
            println!("To change: recovery-pins difficulty <level>");
        }
        Some(new_level) => {
            let old_level = user_config.difficulty;
            if old_level == new_level {
                println!(
                    "Difficulty is already set to {}",
                    new_level.display_name()
                );
                return;
            }

            user_config.difficulty = new_level;
            if let Err(e) = config::save_config(&user_config) {
                eprintln!("Failed to save config: {}", e);
                std::process::exit(1);
            }

            println!(
                "Difficulty changed from {} to {}",
                old_level.display_name(),
                new_level.display_name()
            );
            println!(
                "Next round: {} nodes, {}s on the clock",
                new_level.pin_count(),
                new_level.time_budget_secs()
            );
        }
    }
}
