// SPDX-License-Identifier: MPL-2.0
//! Cross-thread entry point into a [`Manager`](super::Manager).
//!
//! Banner state belongs to the UI context. Other threads hold a cloned
//! [`Dispatcher`] and enqueue [`Command`]s; the manager applies them the next
//! time the UI context drains its queue. Sending never blocks.

use crate::banner::{ParentWindow, Severity, Theme};
use crate::error::{Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Work queued for the UI context.
#[derive(Debug, Clone)]
pub enum Command {
    /// `Manager::notify`.
    Notify {
        parent: ParentWindow,
        message: String,
        severity: Severity,
        duration: Option<Duration>,
        theme: Option<Arc<Theme>>,
    },
    /// Per-severity shortcut; `None` uses the configured severity duration.
    Shortcut {
        parent: ParentWindow,
        message: String,
        severity: Severity,
        duration: Option<Duration>,
    },
    /// `Manager::notify_from_error`, with the error already rendered to text.
    NotifyFromError {
        parent: ParentWindow,
        description: String,
        custom_message: Option<String>,
    },
    DismissAll,
    /// `None` restores the built-in default theme.
    ConfigureTheme(Option<Theme>),
    ConfigureMaxVisible(usize),
}

/// Cloneable, thread-safe handle that enqueues commands for a manager.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    sender: mpsc::UnboundedSender<Command>,
}

impl Dispatcher {
    pub(super) fn new(sender: mpsc::UnboundedSender<Command>) -> Self {
        Self { sender }
    }

    /// Enqueues a command. Fails once the owning manager has been dropped.
    pub fn send(&self, command: Command) -> Result<()> {
        self.sender
            .send(command)
            .map_err(|_| Error::Dispatch("banner manager is gone".to_string()))
    }

    pub fn notify(
        &self,
        parent: ParentWindow,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
        theme: Option<Arc<Theme>>,
    ) -> Result<()> {
        self.send(Command::Notify {
            parent,
            message: message.into(),
            severity,
            duration,
            theme,
        })
    }

    pub fn notify_error(
        &self,
        parent: ParentWindow,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> Result<()> {
        self.shortcut(parent, message.into(), Severity::Error, duration)
    }

    pub fn notify_warning(
        &self,
        parent: ParentWindow,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> Result<()> {
        self.shortcut(parent, message.into(), Severity::Warning, duration)
    }

    pub fn notify_success(
        &self,
        parent: ParentWindow,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> Result<()> {
        self.shortcut(parent, message.into(), Severity::Success, duration)
    }

    pub fn notify_info(
        &self,
        parent: ParentWindow,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> Result<()> {
        self.shortcut(parent, message.into(), Severity::Info, duration)
    }

    /// Renders `error` on the calling thread, since errors need not be `Send`.
    pub fn notify_from_error(
        &self,
        parent: ParentWindow,
        error: &dyn std::error::Error,
        custom_message: Option<&str>,
    ) -> Result<()> {
        self.send(Command::NotifyFromError {
            parent,
            description: error.to_string(),
            custom_message: custom_message.map(str::to_string),
        })
    }

    pub fn dismiss_all(&self) -> Result<()> {
        self.send(Command::DismissAll)
    }

    pub fn configure_theme(&self, theme: Option<Theme>) -> Result<()> {
        self.send(Command::ConfigureTheme(theme))
    }

    pub fn configure_max_visible(&self, max: usize) -> Result<()> {
        self.send(Command::ConfigureMaxVisible(max))
    }

    fn shortcut(
        &self,
        parent: ParentWindow,
        message: String,
        severity: Severity,
        duration: Option<Duration>,
    ) -> Result<()> {
        self.send(Command::Shortcut {
            parent,
            message,
            severity,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_fails_once_receiver_is_dropped() {
        let (sender, receiver) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(sender);
        drop(receiver);

        let result = dispatcher.dismiss_all();
        assert!(matches!(result, Err(Error::Dispatch(_))));
    }

    #[test]
    fn shortcuts_carry_their_severity() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(sender);
        let parent = ParentWindow::new(0, 0, 800, 600);

        dispatcher.notify_warning(parent, "careful", None).unwrap();

        match receiver.try_recv().unwrap() {
            Command::Shortcut {
                severity, message, ..
            } => {
                assert_eq!(severity, Severity::Warning);
                assert_eq!(message, "careful");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn errors_are_rendered_before_crossing_threads() {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(sender);
        let err = std::io::Error::other("disk full");

        dispatcher
            .notify_from_error(ParentWindow::new(0, 0, 800, 600), &err, None)
            .unwrap();

        assert!(matches!(
            receiver.try_recv().unwrap(),
            Command::NotifyFromError { description, custom_message: None, .. } if description == "disk full"
        ));
    }
}
