use std::fs::File;

use clap::Parser;
use simplelog::{Config, WriteLogger};

use labreport::app::App;
use labreport::cli::Cli;
use labreport::error::AppError;
use reportdom::Terminal;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let log_file = File::create(&cli.log_file)?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)?;

    let mut term = Terminal::new(!cli.no_mouse)?;
    App::new().run(&mut term)
}
