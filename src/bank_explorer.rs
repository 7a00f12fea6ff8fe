use std::sync::Arc;

use iced::{
    widget::{column, container, scrollable, text, Column},
    Element, Length,
};

use crate::{
    bank::{Answer, QuestionBank},
    main_window::Message,
};

#[derive(Debug, Default)]
pub struct BankExplorer {
    pub bank: Arc<QuestionBank>,
}

impl BankExplorer {
    pub fn view(&self) -> Element<Message> {
        let entries = self.bank.iter().enumerate().fold(
            Column::new().spacing(20),
            |entries, (number, question)| {
                let answers = [Answer::A, Answer::B].into_iter().fold(
                    Column::new().spacing(3),
                    |col, answer| {
                        let marker = if question.is_correct(answer) { "*" } else { " " };
                        col.push(
                            text(format!("{} {}", marker, question.answer_text(answer)))
                                .size(14)
                                .width(Length::Fill),
                        )
                    },
                );

                entries.push(
                    container(
                        column![
                            text(format!("{}. {}", number + 1, question.prompt)).size(18),
                            answers
                        ]
                        .spacing(10),
                    )
                    .width(Length::Fill),
                )
            },
        );

        scrollable(
            column![
                text(format!("Questions: {}", self.bank.len())).size(16),
                entries
            ]
            .spacing(24),
        )
        .width(Length::Fill)
        .into()
    }
}
