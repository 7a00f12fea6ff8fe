use std::path::PathBuf;
use std::sync::Arc;

use iced::{
    event, keyboard,
    widget::{button, column, container, row, text, text_editor, vertical_space},
    window, {executor, theme, Application, Command, Element, Length, Subscription, Theme},
};
use tokio::io;

use crate::{
    bank::QuestionBank,
    bank_explorer::BankExplorer,
    editor::TextEditor,
    game::{Event, Game, GameState},
    logs::Logs,
    parser::parse_bank,
    quiz,
    render::RenderModel,
};

#[derive(Debug, Default)]
pub struct Config {
    pub questions: Option<PathBuf>,
}

pub struct MainWindow {
    bank: Arc<QuestionBank>,
    game: Game,
    screen: RenderModel,
    file: Option<PathBuf>,

    active_tab: Tabs,

    explorer: BankExplorer,
    logs: Logs,
    editor: TextEditor,
}

#[derive(Debug, Clone)]
pub enum Message {
    Game(Event),
    TabChanged(Tabs),

    OpenFile,
    FileOpened(Result<(PathBuf, Arc<String>), Error>),
    BankParsed(Result<Arc<QuestionBank>, Error>),

    EditorActionPerformed(text_editor::Action),
    ApplyEditor,

    ClearLogs,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Tabs {
    #[default]
    Quiz,
    Questions,
    Editor,
    Logs,
}

#[derive(Debug, Clone)]
pub enum Error {
    DialogClosed,
    IO(io::ErrorKind),
    Parse(Arc<String>),
}

impl Application for MainWindow {
    type Message = Message;
    type Theme = Theme;
    type Flags = Config;
    type Executor = executor::Default;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let bank = Arc::new(QuestionBank::default());
        let mut editor = TextEditor::default();
        editor.set_content(&bank.to_string());

        let command = match flags.questions {
            Some(path) => Command::perform(load_file(path), Message::FileOpened),
            None => Command::none(),
        };

        (
            Self {
                bank: Arc::clone(&bank),
                screen: Game::default().render(&bank),
                game: Game::default(),
                file: None,
                active_tab: Tabs::default(),
                explorer: BankExplorer { bank },
                logs: Logs::default(),
                editor,
            },
            command,
        )
    }

    fn title(&self) -> String {
        String::from("My Quiz")
    }

    fn theme(&self) -> Theme {
        Theme::Nord
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(quit_on_escape)
    }

    fn update(&mut self, message: Self::Message) -> Command<Message> {
        match message {
            Message::Game(event) => {
                let previous = self.game.state();
                let step = self.game.handle(event, &self.bank);

                if step.exit {
                    return window::close(window::Id::MAIN);
                }
                self.screen = step.render;
                if previous != step.state {
                    self.log_transition(previous);
                }

                Command::none()
            }
            Message::OpenFile => Command::perform(open_file(), Message::FileOpened),
            Message::FileOpened(result) => match result {
                Ok((path, contents)) => {
                    self.file = Some(path);
                    self.editor.set_content(&contents);

                    Command::perform(parse_file(contents), Message::BankParsed)
                }
                Err(error) => {
                    self.logs.error(error);
                    self.active_tab = Tabs::Logs;

                    Command::none()
                }
            },
            Message::BankParsed(result) => {
                match result {
                    Ok(bank) => self.replace_bank(bank),
                    Err(error) => {
                        self.active_tab = Tabs::Logs;

                        self.logs.error(error);
                    }
                }
                Command::none()
            }
            Message::TabChanged(new_tab) => {
                self.active_tab = new_tab;

                Command::none()
            }
            Message::EditorActionPerformed(action) => {
                self.editor.perform_action(action);

                Command::none()
            }
            Message::ApplyEditor => Command::perform(
                parse_file(Arc::new(self.editor.text())),
                Message::BankParsed,
            ),
            Message::ClearLogs => {
                self.logs.clear_cache();

                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let tabs = self.tabs();

        let file_indicator = text(
            self.file
                .as_ref()
                .and_then(|path| path.file_name())
                .and_then(|name| name.to_str())
                .unwrap_or("Built-in questions"),
        );

        let file_manager = container(
            column![
                button("Open question bank...")
                    .on_press(Message::OpenFile)
                    .width(Length::Fill)
                    .style(theme::Button::Primary),
                file_indicator,
            ]
            .spacing(8)
            .padding(8),
        )
        .style(theme::Container::Box);

        let left_pane = container(
            column![tabs, vertical_space(), file_manager]
                .width(Length::Fixed(240.0))
                .spacing(20),
        );

        let right_pane = match self.active_tab {
            Tabs::Quiz => quiz::view(&self.screen),
            Tabs::Questions => self.explorer.view(),
            Tabs::Logs => self.logs.view(),
            Tabs::Editor => self.editor.view(),
        };

        container(row![left_pane, container(right_pane).padding(10)])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl MainWindow {
    fn tabs(&self) -> Element<Message> {
        macro_rules! tab {
            ($name: expr, $tab: expr) => {
                button($name)
                    .on_press_maybe((self.active_tab != $tab).then_some(Message::TabChanged($tab)))
                    .width(Length::Fill)
                    .style(theme::Button::Secondary)
            };
        }

        column![
            tab!("Quiz", Tabs::Quiz),
            tab!("Questions", Tabs::Questions),
            tab!("Editor", Tabs::Editor),
            tab!("Log", Tabs::Logs),
        ]
        .spacing(5)
        .width(Length::Fill)
        .into()
    }

    fn replace_bank(&mut self, bank: Arc<QuestionBank>) {
        if !matches!(self.game.state(), GameState::IntroScreen | GameState::Help) {
            self.logs.warning("Game in progress was reset");
        }
        self.logs
            .info(&format!("Loaded question bank with {} questions", bank.len()));

        self.bank = Arc::clone(&bank);
        self.explorer.bank = bank;
        self.game = Game::default();
        self.screen = self.game.render(&self.bank);

        self.active_tab = Tabs::Quiz;
    }

    fn log_transition(&mut self, previous: GameState) {
        let state = self.game.state();
        self.logs
            .info(&format!("State changed: {} -> {}", previous, state));

        match state {
            GameState::AskingQuestion if previous == GameState::IntroScreen => {
                self.logs.info("Game started");
            }
            GameState::ShowingAnswer | GameState::GameOver => {
                self.logs
                    .info(&self.game.session().last_message.replace('\n', " "));
            }
            _ => {}
        }
    }
}

/// Escape quits even when a focused widget has already handled the key.
fn quit_on_escape(event: iced::Event, _status: event::Status) -> Option<Message> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Game(Event::Quit)),
        _ => None,
    }
}

async fn open_file() -> Result<(PathBuf, Arc<String>), Error> {
    let picked_file = rfd::AsyncFileDialog::new()
        .set_title("Open question bank...")
        .pick_file()
        .await
        .ok_or(Error::DialogClosed)?;

    load_file(picked_file.path().to_owned()).await
}

async fn load_file(path: PathBuf) -> Result<(PathBuf, Arc<String>), Error> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map(Arc::new)
        .map_err(|err| err.kind())
        .map_err(Error::IO)?;

    Ok((path, contents))
}

async fn parse_file(contents: Arc<String>) -> Result<Arc<QuestionBank>, Error> {
    parse_bank(&contents)
        .map(Arc::new)
        .map_err(|err| Error::Parse(Arc::new(err.to_string())))
}
