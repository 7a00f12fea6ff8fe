use chrono::Local;
use iced::{
    theme,
    widget::{button, column, horizontal_space, row, scrollable, text, Column},
    Color, Element, Length,
};

use crate::main_window::{Error, Message};

#[derive(Debug, Clone)]
struct LogEntry {
    severity: LogSeverity,
    timestamp: String,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LogSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Default)]
pub struct Logs {
    stash: Vec<LogEntry>,
}

impl LogSeverity {
    fn tag(self) -> &'static str {
        match self {
            LogSeverity::Info => "INFO",
            LogSeverity::Warning => "WARN",
            LogSeverity::Error => "ERROR",
        }
    }

    fn color(self) -> Color {
        match self {
            LogSeverity::Info => Color::from_rgb8(0x88, 0xc0, 0xd0),
            LogSeverity::Warning => Color::from_rgb8(0xeb, 0xcb, 0x8b),
            LogSeverity::Error => Color::from_rgb8(0xbf, 0x61, 0x6a),
        }
    }
}

impl Logs {
    pub fn view(&self) -> Element<Message> {
        if self.stash.is_empty() {
            return text("No messages").into();
        }

        // newest on top
        let entries = self.stash.iter().rev().fold(Column::new().spacing(5), |column, entry| {
            column.push(
                row![
                    text(&entry.timestamp).width(Length::Fixed(48.0)),
                    text(entry.severity.tag())
                        .width(Length::Fixed(56.0))
                        .style(theme::Text::Color(entry.severity.color())),
                    text(&entry.message).width(Length::Fill)
                ]
                .spacing(5),
            )
        });

        column![
            row![
                text(self.summary()),
                horizontal_space(),
                button("Clear log")
                    .on_press(Message::ClearLogs)
                    .style(theme::Button::Destructive)
            ]
            .spacing(5),
            scrollable(entries)
        ]
        .spacing(10)
        .padding(5)
        .into()
    }

    fn summary(&self) -> String {
        let count = |severity: LogSeverity| {
            self.stash
                .iter()
                .filter(|entry| entry.severity == severity)
                .count()
        };

        format!(
            "{} messages, {} warnings, {} errors",
            self.stash.len(),
            count(LogSeverity::Warning),
            count(LogSeverity::Error)
        )
    }

    pub fn info(&mut self, msg: &str) {
        self.push(LogSeverity::Info, msg.to_string());
    }

    pub fn warning(&mut self, msg: &str) {
        self.push(LogSeverity::Warning, msg.to_string());
    }

    pub fn error(&mut self, err: Error) {
        match err {
            Error::DialogClosed => self.push(LogSeverity::Info, "Dialog closed".to_string()),
            Error::IO(kind) => self.push(LogSeverity::Error, format!("IO: {}", kind)),
            Error::Parse(msg) => self.push(LogSeverity::Error, format!("Question bank: {}", msg)),
        }
    }

    pub fn clear_cache(&mut self) {
        self.stash.clear();
    }

    fn push(&mut self, severity: LogSeverity, message: String) {
        self.stash.push(LogEntry {
            severity,
            timestamp: Local::now().format("%H:%M").to_string(),
            message,
        })
    }
}
