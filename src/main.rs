use args::MinegridArgs;
use clap::Parser;
use color_eyre::Result;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::fs::File;

mod action;
mod args;
mod board;
mod cell_content;
mod cell_state;
mod clock;
mod config;
mod game_state;
mod input_state;
mod reveal;
mod session;
mod ui;
mod util;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = MinegridArgs::parse();

    if let Some(path) = &args.log_file {
        WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
    }

    let config = args.config()?;
    ui::main(args, config)
}
