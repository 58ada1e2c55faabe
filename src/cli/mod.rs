mod difficulty_cmd;
mod play;
mod rules;

use clap::{Parser, Subcommand};

use crate::models::Difficulty;

#[derive(Parser)]
#[command(name = "recovery-pins")]
#[command(about = "Deduce the hidden operator chain before the lock expires", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Play {
        #[arg(value_enum)]
        difficulty: Option<Difficulty>,
    },
    Difficulty {
        #[arg(value_enum)]
        level: Option<Difficulty>,
    },
    Rules,
}

pub fn run(cli: Cli) {
    match cli.command {
        None => play::play_round(None),
        Some(Commands::Play { difficulty }) => play::play_round(difficulty),
        Some(Commands::Difficulty { level }) => difficulty_cmd::handle_difficulty(level),
        Some(Commands::Rules) => rules::show_rules(),
    }
}
