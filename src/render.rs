use crate::{
    bank::QuestionBank,
    game::{GameState, Session},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Intro,
    Help,
    Question,
}

/// What the window shows after a transition.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub visible_panel: Panel,
    pub question_text: Option<String>,
    pub answer_a_text: Option<String>,
    pub answer_b_text: Option<String>,
    pub answers_enabled: bool,
    pub next_button_visible: bool,
    pub home_button_visible: bool,
    pub message_text: Option<String>,
    pub message_visible: bool,
}

impl RenderModel {
    fn panel(visible_panel: Panel) -> Self {
        Self {
            visible_panel,
            question_text: None,
            answer_a_text: None,
            answer_b_text: None,
            answers_enabled: false,
            next_button_visible: false,
            home_button_visible: false,
            message_text: None,
            message_visible: false,
        }
    }
}

pub fn render(state: GameState, session: &Session, bank: &QuestionBank) -> RenderModel {
    let mut model = match state {
        GameState::IntroScreen => return RenderModel::panel(Panel::Intro),
        GameState::Help => return RenderModel::panel(Panel::Help),
        GameState::AskingQuestion => RenderModel {
            answers_enabled: true,
            ..RenderModel::panel(Panel::Question)
        },
        GameState::ShowingAnswer => RenderModel {
            next_button_visible: true,
            message_visible: true,
            ..RenderModel::panel(Panel::Question)
        },
        GameState::GameOver => RenderModel {
            home_button_visible: true,
            message_visible: true,
            ..RenderModel::panel(Panel::Question)
        },
    };

    if let Some(question) = bank.get(session.current_question_index) {
        model.question_text = Some(question.prompt.clone());
        model.answer_a_text = Some(question.answer_a.clone());
        model.answer_b_text = Some(question.answer_b.clone());
    }
    if model.message_visible {
        model.message_text = Some(session.last_message.clone());
    }

    model
}
