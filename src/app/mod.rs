// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a banner [`Manager`].
//!
//! The window itself is the parent of every banner. Buttons post banners of
//! each severity, report a real I/O failure, and post from a worker thread
//! through a [`Dispatcher`](crate::manager::Dispatcher).

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::banner::{BannerId, ParentWindow, Severity, ThemePreset};
use crate::config;
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::manager::Manager;
use crate::ui::toast;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Root state of the demo window.
#[derive(Debug)]
pub struct App {
    manager: Manager,
    parent: ParentWindow,
    preset: ThemePreset,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application from flags and the persisted config.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));

        if let Some(max) = flags.max_visible {
            config.notifications.max_visible = Some(max);
        }
        if let Some(preset) = flags.theme {
            config.notifications.theme = preset;
        }

        let i18n = I18n::new(flags.lang, &config);
        tracing::info!(
            locale = %i18n.current_locale(),
            theme = ?config.notifications.theme,
            "starting banner demo"
        );

        let mut app = Self {
            manager: Manager::new(&config, i18n),
            parent: ParentWindow::new(
                0,
                0,
                WINDOW_DEFAULT_WIDTH as i32,
                WINDOW_DEFAULT_HEIGHT as i32,
            ),
            preset: config.notifications.theme,
        };

        if let Some(key) = config_warning {
            let text = app.manager.i18n().tr(&key);
            report(app.notify(Severity::Warning, &text));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.manager.i18n().tr("window-title")
    }

    fn theme(&self) -> Theme {
        toast::app_theme(self.preset)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.manager.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Banner(msg) => self.manager.handle_message(&msg),
            Message::Tick(_) => {
                let closed = self.manager.tick();
                if !closed.is_empty() {
                    tracing::debug!(count = closed.len(), "banners closed");
                }
            }
            Message::WindowResized(size) => {
                self.parent = ParentWindow::new(0, 0, size.width as i32, size.height as i32);
            }
            Message::Show(severity) => {
                let text = self.manager.i18n().tr(&format!("demo-message-{severity}"));
                report(self.notify(severity, &text));
            }
            Message::SimulateFailure => {
                let missing = std::env::temp_dir().join("iced_banner_missing_file.txt");
                if let Err(err) = std::fs::read_to_string(&missing) {
                    report(self.manager.notify_from_error(self.parent, &err, None));
                }
            }
            Message::NotifyFromWorker => {
                let dispatcher = self.manager.dispatcher();
                let parent = self.parent;
                let text = self.manager.i18n().tr("demo-message-worker");
                std::thread::spawn(move || {
                    if let Err(err) = dispatcher.notify_success(parent, text, None) {
                        tracing::warn!(%err, "worker could not post banner");
                    }
                });
            }
            Message::DismissAll => self.manager.dismiss_all(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: self.manager.i18n(),
            manager: &self.manager,
        })
    }

    fn notify(&mut self, severity: Severity, text: &str) -> Result<Option<BannerId>> {
        self.manager.notify_severity(self.parent, text, severity, None)
    }
}

fn report(result: Result<Option<BannerId>>) {
    if let Err(err) = result {
        tracing::warn!(%err, "banner rejected");
    }
}
