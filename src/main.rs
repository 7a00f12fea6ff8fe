mod bank;
mod bank_explorer;
mod editor;
mod game;
mod logs;
mod main_window;
mod parser;
mod quiz;
mod render;

use std::path::PathBuf;

use clap::Parser;
use iced::Application;

use crate::main_window::{Config, MainWindow};

#[derive(Parser, Debug)]
#[command(about = "Two-choice quiz in a desktop window")]
struct Args {
    /// Question bank file to load instead of the built-in questions
    #[arg(long, value_name = "FILE")]
    questions: Option<PathBuf>,
}

fn main() -> iced::Result {
    let args = Args::parse();

    MainWindow::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(800.0, 440.0),
            resizable: false,
            decorations: true,
            ..iced::window::Settings::default()
        },
        ..iced::Settings::with_flags(Config {
            questions: args.questions,
        })
    })
}
