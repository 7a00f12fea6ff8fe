use std::fmt;

use crate::{
    bank::{Answer, QuestionBank},
    render::{render, RenderModel},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    IntroScreen,
    AskingQuestion,
    ShowingAnswer,
    GameOver,
    Help,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameState::IntroScreen => "intro",
            GameState::AskingQuestion => "asking question",
            GameState::ShowingAnswer => "showing answer",
            GameState::GameOver => "game over",
            GameState::Help => "help",
        })
    }
}

/// Per-playthrough data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub current_question_index: usize,
    pub correct_count: usize,
    pub last_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    StartGame,
    ShowHelp,
    LeaveHelp,
    AnswerPicked(Answer),
    NextQuestion,
    GoHome,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: GameState,
    pub session: Session,
    pub render: RenderModel,
    pub exit: bool,
}

/// Applies one event. Events that make no sense in `state` leave everything as is.
pub fn step(state: GameState, session: Session, event: Event, bank: &QuestionBank) -> Step {
    let (state, session) = match (state, event) {
        (GameState::IntroScreen, Event::StartGame) => {
            (GameState::AskingQuestion, Session::default())
        }
        (GameState::IntroScreen, Event::ShowHelp) => (GameState::Help, session),
        (GameState::Help, Event::LeaveHelp) => (GameState::IntroScreen, session),
        (GameState::AskingQuestion, Event::AnswerPicked(answer)) => {
            answer_picked(session, answer, bank)
        }
        (GameState::ShowingAnswer, Event::NextQuestion)
            if !bank.is_last(session.current_question_index) =>
        {
            let session = Session {
                current_question_index: session.current_question_index + 1,
                ..session
            };
            (GameState::AskingQuestion, session)
        }
        (GameState::GameOver, Event::GoHome) => (GameState::IntroScreen, session),
        (state, _) => (state, session),
    };

    Step {
        render: render(state, &session, bank),
        exit: event == Event::Quit,
        state,
        session,
    }
}

fn answer_picked(
    mut session: Session,
    answer: Answer,
    bank: &QuestionBank,
) -> (GameState, Session) {
    let Some(question) = bank.get(session.current_question_index) else {
        return (GameState::AskingQuestion, session);
    };

    session.last_message = if question.is_correct(answer) {
        session.correct_count += 1;
        String::from("Correct Answer!")
    } else {
        format!(
            "Incorrect Answer.  Correct answer was {}",
            question.correct_answer_text()
        )
    };

    // the last question skips straight to the summary
    if bank.is_last(session.current_question_index) {
        session.last_message = format!(
            "{}\nGame Over\nYour score: {}/{}",
            session.last_message,
            session.correct_count,
            bank.len()
        );
        return (GameState::GameOver, session);
    }

    (GameState::ShowingAnswer, session)
}

/// Owns the controller state between events.
#[derive(Debug, Default)]
pub struct Game {
    state: GameState,
    session: Session,
}

impl Game {
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn handle(&mut self, event: Event, bank: &QuestionBank) -> Step {
        let result = step(self.state, std::mem::take(&mut self.session), event, bank);

        self.state = result.state;
        self.session = result.session.clone();

        result
    }

    pub fn render(&self, bank: &QuestionBank) -> RenderModel {
        render(self.state, &self.session, bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Question;

    const ALL_STATES: [GameState; 5] = [
        GameState::IntroScreen,
        GameState::AskingQuestion,
        GameState::ShowingAnswer,
        GameState::GameOver,
        GameState::Help,
    ];

    fn session(index: usize, correct: usize) -> Session {
        Session {
            current_question_index: index,
            correct_count: correct,
            last_message: String::from("previous"),
        }
    }

    #[test]
    fn start_game_resets_session() {
        let bank = QuestionBank::default();
        let result = step(GameState::IntroScreen, session(2, 3), Event::StartGame, &bank);

        assert_eq!(result.state, GameState::AskingQuestion);
        assert_eq!(result.session.current_question_index, 0);
        assert_eq!(result.session.correct_count, 0);
    }

    #[test]
    fn correct_answer_increments_by_one() {
        let bank = QuestionBank::default();
        let result = step(
            GameState::AskingQuestion,
            session(0, 0),
            Event::AnswerPicked(Answer::B),
            &bank,
        );

        assert_eq!(result.state, GameState::ShowingAnswer);
        assert_eq!(result.session.correct_count, 1);
        assert_eq!(result.session.last_message, "Correct Answer!");
    }

    #[test]
    fn incorrect_answer_keeps_count_and_names_correct_one() {
        let bank = QuestionBank::default();
        let result = step(
            GameState::AskingQuestion,
            session(1, 1),
            Event::AnswerPicked(Answer::B),
            &bank,
        );

        assert_eq!(result.state, GameState::ShowingAnswer);
        assert_eq!(result.session.correct_count, 1);
        assert_eq!(
            result.session.last_message,
            "Incorrect Answer.  Correct answer was Olympia"
        );
    }

    #[test]
    fn last_answer_ends_game_with_score() {
        let bank = QuestionBank::default();
        let result = step(
            GameState::AskingQuestion,
            session(2, 0),
            Event::AnswerPicked(Answer::A),
            &bank,
        );

        assert_eq!(result.state, GameState::GameOver);
        assert!(result.session.last_message.contains("Game Over"));
        assert!(result.session.last_message.contains("0/3"));
    }

    #[test]
    fn single_question_bank_goes_straight_to_game_over() {
        let bank = QuestionBank::new(vec![Question::new("q", "yes", "no", Answer::A)]).unwrap();
        let result = step(
            GameState::AskingQuestion,
            Session::default(),
            Event::AnswerPicked(Answer::A),
            &bank,
        );

        assert_eq!(result.state, GameState::GameOver);
        assert!(result.session.last_message.contains("1/1"));
    }

    #[test]
    fn next_question_only_from_showing_answer() {
        let bank = QuestionBank::default();

        for state in ALL_STATES {
            let result = step(state, session(0, 0), Event::NextQuestion, &bank);

            if state == GameState::ShowingAnswer {
                assert_eq!(result.state, GameState::AskingQuestion);
                assert_eq!(result.session.current_question_index, 1);
            } else {
                assert_eq!(result.state, state);
                assert_eq!(result.session, session(0, 0));
            }
        }
    }

    #[test]
    fn next_question_past_the_end_is_ignored() {
        let bank = QuestionBank::default();
        let result = step(GameState::ShowingAnswer, session(2, 1), Event::NextQuestion, &bank);

        assert_eq!(result.state, GameState::ShowingAnswer);
        assert_eq!(result.session.current_question_index, 2);
    }

    #[test]
    fn invalid_events_are_ignored() {
        let bank = QuestionBank::default();
        let cases = [
            (GameState::IntroScreen, Event::AnswerPicked(Answer::A)),
            (GameState::IntroScreen, Event::GoHome),
            (GameState::Help, Event::StartGame),
            (GameState::AskingQuestion, Event::StartGame),
            (GameState::AskingQuestion, Event::ShowHelp),
            (GameState::ShowingAnswer, Event::AnswerPicked(Answer::B)),
            (GameState::GameOver, Event::StartGame),
            (GameState::GameOver, Event::AnswerPicked(Answer::A)),
        ];

        for (state, event) in cases {
            let result = step(state, session(1, 1), event, &bank);

            assert_eq!(result.state, state, "{:?} in {:?}", event, state);
            assert_eq!(result.session, session(1, 1));
            assert!(!result.exit);
        }
    }

    #[test]
    fn help_round_trip_keeps_session() {
        let bank = QuestionBank::default();
        let help = step(GameState::IntroScreen, session(1, 1), Event::ShowHelp, &bank);
        assert_eq!(help.state, GameState::Help);

        let back = step(help.state, help.session, Event::LeaveHelp, &bank);
        assert_eq!(back.state, GameState::IntroScreen);
        assert_eq!(back.session, session(1, 1));
    }

    #[test]
    fn quit_exits_from_every_state() {
        let bank = QuestionBank::default();

        for state in ALL_STATES {
            let result = step(state, session(0, 0), Event::Quit, &bank);

            assert!(result.exit);
            assert_eq!(result.state, state);
        }
    }

    #[test]
    fn full_game_on_default_bank() {
        let bank = QuestionBank::default();
        let mut game = Game::default();

        game.handle(Event::StartGame, &bank);
        game.handle(Event::AnswerPicked(Answer::B), &bank);
        assert_eq!(game.state(), GameState::ShowingAnswer);
        assert_eq!(game.session().correct_count, 1);

        game.handle(Event::NextQuestion, &bank);
        assert_eq!(game.state(), GameState::AskingQuestion);
        assert_eq!(game.session().current_question_index, 1);

        game.handle(Event::AnswerPicked(Answer::B), &bank);
        assert_eq!(game.state(), GameState::ShowingAnswer);
        assert_eq!(game.session().correct_count, 1);
        assert!(game.session().last_message.contains("Olympia"));

        game.handle(Event::NextQuestion, &bank);
        assert_eq!(game.session().current_question_index, 2);

        let last = game.handle(Event::AnswerPicked(Answer::B), &bank);
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.session().correct_count, 2);
        assert!(last.session.last_message.contains("2/3"));
        assert_eq!(last.render.message_text.as_deref(), Some(game.session().last_message.as_str()));

        game.handle(Event::GoHome, &bank);
        assert_eq!(game.state(), GameState::IntroScreen);

        game.handle(Event::StartGame, &bank);
        assert_eq!(game.session(), &Session::default());
    }
}
