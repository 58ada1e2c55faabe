mod cli;
mod display;
mod evaluate;
mod generate;
mod hint;
mod models;
mod session;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli::run(cli);
}
