//! Log Shipping Unifier - Graphical User Interface
//!
//! One directory field and one button. The result of each run is shown in a
//! modal message box; dismissing a success message closes the application.

use iced::widget::{button, column, container, row, rule, text, text_input};
use iced::{Center, Element, Fill, Task, Theme};
use logshipping_unifier::{pipeline, Acknowledgment, DialogLevel, Outcome, Session, UnifyConfig};
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(App::new, App::update, App::view)
        .title("Log Shipping File Unifier")
        .theme(App::theme)
        .window_size((640.0, 220.0))
        .centered()
        .run()
}

// ============================================================================
// App State
// ============================================================================

struct App {
    directory: String,
    session: Session,
    status_text: String,
}

impl App {
    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn new() -> (Self, Task<Message>) {
        (
            App {
                directory: String::new(),
                session: Session::new(),
                status_text: String::new(),
            },
            Task::none(),
        )
    }
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone)]
enum Message {
    DirectoryChanged(String),
    BrowseFolder,
    FolderSelected(Option<PathBuf>),
    Unify,
    UnifyFinished(Outcome),
    DialogClosed,
}

// ============================================================================
// Update
// ============================================================================

impl App {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DirectoryChanged(v) => {
                self.directory = v;
                Task::none()
            }
            Message::BrowseFolder => Task::perform(
                async {
                    let folder = rfd::AsyncFileDialog::new()
                        .set_title("Select the folder with the Log Shipping Status exports")
                        .pick_folder()
                        .await;
                    folder.map(|f| f.path().to_path_buf())
                },
                Message::FolderSelected,
            ),
            Message::FolderSelected(path) => {
                if let Some(p) = path {
                    self.directory = p.display().to_string();
                }
                Task::none()
            }
            Message::Unify => {
                if !self.session.start() {
                    return Task::none();
                }
                self.status_text = "Unifying files...".to_string();
                let config = UnifyConfig::new(self.directory.trim());
                Task::perform(
                    async move { pipeline::unify(&config) },
                    Message::UnifyFinished,
                )
            }
            Message::UnifyFinished(outcome) => {
                self.status_text = outcome.message().to_string();
                let dialog = show_outcome(&outcome);
                self.session.finish(outcome);
                dialog
            }
            Message::DialogClosed => match self.session.acknowledge() {
                Acknowledgment::Terminate => iced::exit(),
                Acknowledgment::Dismiss => {
                    self.status_text.clear();
                    Task::none()
                }
            },
        }
    }
}

/// Open a modal message box for `outcome`; closing it sends `DialogClosed`.
fn show_outcome(outcome: &Outcome) -> Task<Message> {
    let level = match outcome.level() {
        DialogLevel::Warning => rfd::MessageLevel::Warning,
        DialogLevel::Error => rfd::MessageLevel::Error,
        DialogLevel::Success => rfd::MessageLevel::Info,
    };
    let title = outcome.title().to_string();
    let description = outcome.description();

    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(level)
                .set_title(title)
                .set_description(description)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await
        },
        |_| Message::DialogClosed,
    )
}

// ============================================================================
// View
// ============================================================================

impl App {
    fn view(&self) -> Element<'_, Message> {
        let idle = self.session.is_idle();

        let title = text("Log Shipping File Unifier").size(24);

        let input = text_input(
            "Enter the folder containing the files to unify...",
            &self.directory,
        )
        .on_input_maybe(if idle {
            Some(Message::DirectoryChanged)
        } else {
            None
        })
        .on_submit_maybe(if idle { Some(Message::Unify) } else { None })
        .width(Fill);

        let browse = button(text("Browse").size(13)).on_press_maybe(if idle {
            Some(Message::BrowseFolder)
        } else {
            None
        });

        let mut unify_btn = button(text("Unify files"));
        if idle {
            unify_btn = unify_btn.on_press(Message::Unify);
        }

        let status: Element<'_, Message> = if self.status_text.is_empty() {
            column![].into()
        } else {
            text(&self.status_text).size(13).into()
        };

        let body = column![
            title,
            rule::horizontal(1),
            row![input, browse].spacing(10).align_y(Center),
            row![unify_btn],
            status,
        ]
        .spacing(14);

        container(body).padding(20).width(Fill).height(Fill).into()
    }
}
