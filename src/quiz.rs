use iced::{
    alignment::Horizontal,
    theme,
    widget::{button, column, container, horizontal_space, row, text, vertical_space, Column},
    Element, Length,
};

use crate::{
    bank::Answer,
    game::Event,
    main_window::Message,
    render::{Panel, RenderModel},
};

const HELP_TEXT: &str = "Each question has two possible answers. Pick one to see whether \
it was right, then move on with \"Next question\". After the last question the final \
score is shown.\n\nPress Escape at any time to quit.";

/// Maps the render model onto widgets.
pub fn view<'a>(model: &RenderModel) -> Element<'a, Message> {
    let panel: Element<'a, Message> = match model.visible_panel {
        Panel::Intro => column![
            text("My Quiz").size(32),
            text("Answer the questions one at a time and see how many you get right."),
            row![
                button("Start game")
                    .on_press(Message::Game(Event::StartGame))
                    .style(theme::Button::Primary),
                button("Help")
                    .on_press(Message::Game(Event::ShowHelp))
                    .style(theme::Button::Secondary),
            ]
            .spacing(10)
        ]
        .spacing(20)
        .into(),
        Panel::Help => column![
            text("How to play").size(24),
            text(HELP_TEXT),
            button("Back")
                .on_press(Message::Game(Event::LeaveHelp))
                .style(theme::Button::Secondary),
        ]
        .spacing(20)
        .into(),
        Panel::Question => question_panel(model),
    };

    column![
        container(panel).height(Length::Fill),
        row![
            horizontal_space(),
            button("Quit")
                .on_press(Message::Game(Event::Quit))
                .style(theme::Button::Destructive)
        ]
    ]
    .into()
}

fn question_panel<'a>(model: &RenderModel) -> Element<'a, Message> {
    macro_rules! answer {
        ($label: expr, $answer: expr) => {
            button(
                text($label.clone().unwrap_or_default())
                    .horizontal_alignment(Horizontal::Center)
                    .width(Length::Fill),
            )
            .on_press_maybe(
                model
                    .answers_enabled
                    .then_some(Message::Game(Event::AnswerPicked($answer))),
            )
            .width(Length::Fill)
        };
    }

    let mut form = Column::new()
        .spacing(20)
        .push(text(model.question_text.clone().unwrap_or_default()).size(24))
        .push(answer!(model.answer_a_text, Answer::A))
        .push(answer!(model.answer_b_text, Answer::B));

    if model.message_visible {
        form = form.push(text(model.message_text.clone().unwrap_or_default()));
    }

    form = form.push(vertical_space());

    if model.next_button_visible {
        form = form.push(
            button("Next question")
                .on_press(Message::Game(Event::NextQuestion))
                .style(theme::Button::Primary),
        );
    }
    if model.home_button_visible {
        form = form.push(
            button("Home")
                .on_press(Message::Game(Event::GoHome))
                .style(theme::Button::Primary),
        );
    }

    form.into()
}
