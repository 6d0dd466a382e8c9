// SPDX-License-Identifier: MPL-2.0
//! Banner registry and lifecycle management.
//!
//! The `Manager` is the explicit context object owned by the UI layer. It
//! keeps the active banners in display order, caps how many are on screen,
//! stacks them vertically and advances their animation on every tick.
//!
//! When the cap is reached the oldest banner is evicted: it leaves the
//! registry at once and keeps sliding out on a separate departing list, so
//! it no longer counts against the cap nor anchors the stack.

mod dispatch;

pub use dispatch::{Command, Dispatcher};

use crate::banner::{
    Banner, BannerEvent, BannerId, Clock, ParentWindow, Severity, SystemClock, Theme,
};
use crate::config::{
    Config, DurationConfig, DEFAULT_DURATION_MS, DEFAULT_MAX_VISIBLE, MIN_MAX_VISIBLE,
    STACK_GAP_PX,
};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Messages for banner state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific banner by ID (click on the banner or its close glyph).
    Dismiss(BannerId),
    /// Advance every banner's timers.
    Tick,
}

/// Owns every live banner of one UI context.
#[derive(Debug)]
pub struct Manager {
    /// Registered banners, oldest first.
    banners: VecDeque<Banner>,
    /// Evicted banners still sliding out.
    departing: Vec<Banner>,
    default_theme: Option<Arc<Theme>>,
    builtin_theme: Arc<Theme>,
    max_visible: usize,
    durations: DurationConfig,
    clock: Arc<dyn Clock>,
    i18n: I18n,
    sender: mpsc::UnboundedSender<Command>,
    commands: mpsc::UnboundedReceiver<Command>,
}

impl Manager {
    /// Creates a manager configured from `config`.
    #[must_use]
    pub fn new(config: &Config, i18n: I18n) -> Self {
        let (sender, commands) = mpsc::unbounded_channel();
        let max_visible = config
            .notifications
            .max_visible
            .unwrap_or(DEFAULT_MAX_VISIBLE)
            .max(MIN_MAX_VISIBLE);

        Self {
            banners: VecDeque::new(),
            departing: Vec::new(),
            default_theme: Some(Arc::new(config.notifications.theme.build())),
            builtin_theme: Arc::new(Theme::default()),
            max_visible,
            durations: config.notifications.durations.clone(),
            clock: Arc::new(SystemClock),
            i18n,
            sender,
            commands,
        }
    }

    /// Replaces the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns a handle other threads can use to reach this manager.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.sender.clone())
    }

    /// Sets the theme used when a caller supplies none. `None` goes back to
    /// the built-in default theme.
    pub fn configure_theme(&mut self, theme: Option<Theme>) {
        self.default_theme = theme.map(Arc::new);
    }

    /// Sets the visible cap, floored at 1.
    pub fn configure_max_visible(&mut self, max: usize) {
        self.max_visible = max.max(MIN_MAX_VISIBLE);
    }

    /// Shows a banner.
    ///
    /// Returns `Ok(None)` without touching the registry when `message` is
    /// empty, and an error when `parent` has no usable size. When the cap is
    /// reached the oldest banner is evicted first. A `None` duration rests
    /// for 5 seconds; a `None` theme uses the configured default.
    pub fn notify(
        &mut self,
        parent: ParentWindow,
        message: &str,
        severity: Severity,
        duration: Option<Duration>,
        theme: Option<Arc<Theme>>,
    ) -> Result<Option<BannerId>> {
        parent.validate()?;
        if message.is_empty() {
            return Ok(None);
        }

        self.purge_closed();
        let now = self.clock.now();

        while self.banners.len() >= self.max_visible {
            let Some(mut oldest) = self.banners.pop_front() else {
                break;
            };
            tracing::info!(id = ?oldest.id(), "evicting oldest banner");
            oldest.dismiss(now);
            self.departing.push(oldest);
        }

        let theme = self.effective_theme(theme);
        let duration = duration.unwrap_or(Duration::from_millis(DEFAULT_DURATION_MS));
        let mut banner = Banner::new(parent, message, severity, duration, theme)?;

        if let Some(last) = self.banners.back() {
            banner.set_resting_y(last.resting_bottom() + STACK_GAP_PX);
        }

        banner.show(now);
        let id = banner.id();
        tracing::debug!(?id, %severity, resting_y = banner.resting_y(), "banner registered");
        self.banners.push_back(banner);
        Ok(Some(id))
    }

    /// Shows a banner resting for the configured duration of `severity`
    /// unless `duration` is given.
    pub fn notify_severity(
        &mut self,
        parent: ParentWindow,
        message: &str,
        severity: Severity,
        duration: Option<Duration>,
    ) -> Result<Option<BannerId>> {
        let duration = duration.unwrap_or_else(|| self.durations.for_severity(severity));
        self.notify(parent, message, severity, Some(duration), None)
    }

    pub fn notify_error(
        &mut self,
        parent: ParentWindow,
        message: &str,
        duration: Option<Duration>,
    ) -> Result<Option<BannerId>> {
        self.notify_severity(parent, message, Severity::Error, duration)
    }

    pub fn notify_warning(
        &mut self,
        parent: ParentWindow,
        message: &str,
        duration: Option<Duration>,
    ) -> Result<Option<BannerId>> {
        self.notify_severity(parent, message, Severity::Warning, duration)
    }

    pub fn notify_success(
        &mut self,
        parent: ParentWindow,
        message: &str,
        duration: Option<Duration>,
    ) -> Result<Option<BannerId>> {
        self.notify_severity(parent, message, Severity::Success, duration)
    }

    pub fn notify_info(
        &mut self,
        parent: ParentWindow,
        message: &str,
        duration: Option<Duration>,
    ) -> Result<Option<BannerId>> {
        self.notify_severity(parent, message, Severity::Info, duration)
    }

    /// Shows an error banner for `error`, using `custom_message` when given.
    pub fn notify_from_error(
        &mut self,
        parent: ParentWindow,
        error: &dyn std::error::Error,
        custom_message: Option<&str>,
    ) -> Result<Option<BannerId>> {
        self.notify_described_error(parent, &error.to_string(), custom_message)
    }

    fn notify_described_error(
        &mut self,
        parent: ParentWindow,
        description: &str,
        custom_message: Option<&str>,
    ) -> Result<Option<BannerId>> {
        let message = match custom_message {
            Some(custom) => custom.to_string(),
            None => self
                .i18n
                .tr_with_args("notification-error-generic", &[("message", description)]),
        };
        self.notify_error(parent, &message, None)
    }

    /// Asks every registered banner to slide out.
    pub fn dismiss_all(&mut self) {
        let now = self.clock.now();
        for banner in &mut self.banners {
            banner.dismiss(now);
        }
    }

    /// Asks one banner to slide out. Returns `false` if it is unknown or
    /// already leaving.
    pub fn dismiss(&mut self, id: BannerId) -> bool {
        let now = self.clock.now();
        self.banners
            .iter_mut()
            .chain(self.departing.iter_mut())
            .find(|banner| banner.id() == id)
            .is_some_and(|banner| banner.dismiss(now))
    }

    /// Applies queued commands, advances every banner and drops closed ones.
    ///
    /// Returns the IDs of banners that closed during this tick.
    pub fn tick(&mut self) -> Vec<BannerId> {
        self.drain_commands();

        let now = self.clock.now();
        let mut closed = Vec::new();
        for banner in self.banners.iter_mut().chain(self.departing.iter_mut()) {
            banner.advance(now);
            for event in banner.take_events() {
                match event {
                    BannerEvent::Entered(id) => tracing::trace!(?id, "banner resting"),
                    BannerEvent::Exiting(id) => tracing::trace!(?id, "banner sliding out"),
                    BannerEvent::Closed(id) => closed.push(id),
                }
            }
        }
        self.purge_closed();
        closed
    }

    /// Handles a banner message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Applies every command queued through a [`Dispatcher`].
    pub fn drain_commands(&mut self) {
        while let Ok(command) = self.commands.try_recv() {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        let result = match command {
            Command::Notify {
                parent,
                message,
                severity,
                duration,
                theme,
            } => self.notify(parent, &message, severity, duration, theme),
            Command::Shortcut {
                parent,
                message,
                severity,
                duration,
            } => self.notify_severity(parent, &message, severity, duration),
            Command::NotifyFromError {
                parent,
                description,
                custom_message,
            } => self.notify_described_error(parent, &description, custom_message.as_deref()),
            Command::DismissAll => {
                self.dismiss_all();
                Ok(None)
            }
            Command::ConfigureTheme(theme) => {
                self.configure_theme(theme);
                Ok(None)
            }
            Command::ConfigureMaxVisible(max) => {
                self.configure_max_visible(max);
                Ok(None)
            }
        };
        if let Err(err) = result {
            tracing::warn!(%err, "dispatched banner command rejected");
        }
    }

    fn purge_closed(&mut self) {
        self.banners.retain(|banner| !banner.is_closed());
        self.departing.retain(|banner| !banner.is_closed());
    }

    fn effective_theme(&self, explicit: Option<Arc<Theme>>) -> Arc<Theme> {
        explicit
            .or_else(|| self.default_theme.clone())
            .unwrap_or_else(|| Arc::clone(&self.builtin_theme))
    }

    /// Every banner on screen, bottom layer first: departing, then registered.
    pub fn visible(&self) -> impl Iterator<Item = &Banner> {
        self.departing.iter().chain(self.banners.iter())
    }

    /// Registered banners in display order.
    pub fn active(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter()
    }

    /// Returns the number of registered banners.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.banners.len()
    }

    /// Returns whether anything is still on screen.
    #[must_use]
    pub fn has_banners(&self) -> bool {
        !self.banners.is_empty() || !self.departing.is_empty()
    }

    /// Returns whether any banner needs frame-rate ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.visible().any(Banner::is_animating)
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    #[must_use]
    pub fn default_theme(&self) -> Arc<Theme> {
        self.effective_theme(None)
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn i18n_mut(&mut self) -> &mut I18n {
        &mut self.i18n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{ManualClock, Phase, ThemePreset};
    use crate::config::SLIDE_INTERVAL_MS;
    use crate::error::Error;

    const PARENT: ParentWindow = ParentWindow::new(0, 0, 800, 600);

    fn manager_with(config: &Config) -> (Manager, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let i18n = I18n::new(Some("en-US".to_string()), config);
        let manager = Manager::new(config, i18n).with_clock(clock.clone());
        (manager, clock)
    }

    fn manager() -> (Manager, Arc<ManualClock>) {
        let mut config = Config::default();
        config.notifications.theme = ThemePreset::Standard;
        manager_with(&config)
    }

    fn run_for(manager: &mut Manager, clock: &ManualClock, total: Duration) -> Vec<BannerId> {
        let step = Duration::from_millis(SLIDE_INTERVAL_MS);
        let mut closed = Vec::new();
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            clock.advance(step);
            elapsed += step;
            closed.extend(manager.tick());
        }
        closed
    }

    fn find(manager: &Manager, id: BannerId) -> &Banner {
        manager
            .visible()
            .find(|banner| banner.id() == id)
            .expect("banner on screen")
    }

    #[test]
    fn new_manager_is_empty() {
        let (manager, _) = manager();
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.has_banners());
        assert_eq!(manager.max_visible(), DEFAULT_MAX_VISIBLE);
    }

    #[test]
    fn empty_message_is_ignored() {
        let (mut manager, _) = manager();
        let result = manager.notify(PARENT, "", Severity::Info, None, None);
        assert_eq!(result, Ok(None));
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.has_banners());
    }

    #[test]
    fn unusable_parent_fails_fast() {
        let (mut manager, _) = manager();
        let result = manager.notify(
            ParentWindow::new(0, 0, 0, 0),
            "hello",
            Severity::Info,
            None,
            None,
        );
        assert!(matches!(result, Err(Error::InvalidParent(_))));
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn cap_evicts_oldest_first() {
        let (mut manager, _) = manager();
        manager.configure_max_visible(3);

        let mut ids = Vec::new();
        for i in 0..5 {
            let id = manager
                .notify(PARENT, &format!("message {i}"), Severity::Info, None, None)
                .unwrap()
                .unwrap();
            ids.push(id);
            assert!(manager.active_count() <= 3);

            if i == 3 {
                let active: Vec<BannerId> = manager.active().map(Banner::id).collect();
                assert!(!active.contains(&ids[0]));
                assert!(active.contains(&ids[1]));
            }
        }

        let active: Vec<BannerId> = manager.active().map(Banner::id).collect();
        assert_eq!(active, ids[2..].to_vec());
        assert_eq!(find(&manager, ids[0]).phase(), Phase::SlidingOut);
        assert_eq!(find(&manager, ids[1]).phase(), Phase::SlidingOut);
    }

    #[test]
    fn evicted_banners_slide_out_and_disappear() {
        let (mut manager, clock) = manager();
        manager.configure_max_visible(1);

        let first = manager
            .notify(PARENT, "first", Severity::Info, None, None)
            .unwrap()
            .unwrap();
        manager
            .notify(PARENT, "second", Severity::Info, None, None)
            .unwrap();
        assert_eq!(manager.visible().count(), 2);

        let closed = run_for(&mut manager, &clock, Duration::from_millis(500));
        assert_eq!(closed, vec![first]);
        assert_eq!(manager.visible().count(), 1);
        assert_eq!(manager.active_count(), 1);
    }

    #[test]
    fn max_visible_is_floored_at_one() {
        let (mut manager, _) = manager();
        manager.configure_max_visible(0);
        assert_eq!(manager.max_visible(), 1);
    }

    #[test]
    fn second_banner_stacks_below_first() {
        let (mut manager, _) = manager();
        let first = manager
            .notify(PARENT, "first", Severity::Info, None, None)
            .unwrap()
            .unwrap();
        let second = manager
            .notify(PARENT, "second", Severity::Info, None, None)
            .unwrap()
            .unwrap();

        let first = find(&manager, first);
        let second = find(&manager, second);
        assert_eq!(first.resting_y(), 20);
        assert_eq!(second.resting_y(), first.resting_bottom() + STACK_GAP_PX);
        assert_eq!(second.resting_y(), 90);
    }

    #[test]
    fn stack_restarts_at_top_margin_once_empty() {
        let (mut manager, clock) = manager();
        manager
            .notify(PARENT, "first", Severity::Info, Some(Duration::from_millis(50)), None)
            .unwrap();
        run_for(&mut manager, &clock, Duration::from_millis(800));
        assert!(!manager.has_banners());

        let id = manager
            .notify(PARENT, "again", Severity::Info, None, None)
            .unwrap()
            .unwrap();
        assert_eq!(find(&manager, id).resting_y(), 20);
    }

    #[test]
    fn shortcuts_use_severity_durations() {
        let (mut manager, _) = manager();
        let error = manager.notify_error(PARENT, "disk full", None).unwrap().unwrap();
        let success = manager.notify_success(PARENT, "saved", None).unwrap().unwrap();
        let warning = manager.notify_warning(PARENT, "careful", None).unwrap().unwrap();

        assert_eq!(find(&manager, error).display_duration(), Duration::from_millis(7000));
        assert_eq!(find(&manager, error).severity(), Severity::Error);
        assert_eq!(find(&manager, success).display_duration(), Duration::from_millis(4000));
        assert_eq!(find(&manager, warning).display_duration(), Duration::from_millis(5000));
    }

    #[test]
    fn explicit_duration_wins_over_shortcut_default() {
        let (mut manager, _) = manager();
        let id = manager
            .notify_info(PARENT, "hi", Some(Duration::from_millis(1234)))
            .unwrap()
            .unwrap();
        assert_eq!(find(&manager, id).display_duration(), Duration::from_millis(1234));
    }

    #[test]
    fn configured_durations_override_defaults() {
        let mut config = Config::default();
        config.notifications.theme = ThemePreset::Standard;
        config.notifications.durations.error_ms = 1000;
        let (mut manager, _) = manager_with(&config);

        let id = manager.notify_error(PARENT, "boom", None).unwrap().unwrap();
        assert_eq!(find(&manager, id).display_duration(), Duration::from_millis(1000));
    }

    #[test]
    fn plain_notify_rests_five_seconds() {
        let (mut manager, _) = manager();
        let id = manager
            .notify(PARENT, "hello", Severity::Error, None, None)
            .unwrap()
            .unwrap();
        assert_eq!(find(&manager, id).display_duration(), Duration::from_millis(5000));
    }

    #[test]
    fn dismiss_all_slides_everything_out() {
        let (mut manager, clock) = manager();
        for i in 0..3 {
            manager
                .notify(PARENT, &format!("m{i}"), Severity::Info, None, None)
                .unwrap();
        }
        run_for(&mut manager, &clock, Duration::from_millis(100));

        manager.dismiss_all();
        assert!(manager.active().all(|b| b.phase() == Phase::SlidingOut));

        let closed = run_for(&mut manager, &clock, Duration::from_secs(1));
        assert_eq!(closed.len(), 3);
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.has_banners());
    }

    #[test]
    fn banners_close_after_their_duration() {
        let (mut manager, clock) = manager();
        let id = manager
            .notify(PARENT, "short", Severity::Info, Some(Duration::from_millis(300)), None)
            .unwrap()
            .unwrap();

        run_for(&mut manager, &clock, Duration::from_millis(200));
        assert_eq!(find(&manager, id).phase(), Phase::Waiting);

        let closed = run_for(&mut manager, &clock, Duration::from_secs(1));
        assert_eq!(closed, vec![id]);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn dismiss_message_targets_one_banner() {
        let (mut manager, _) = manager();
        let a = manager.notify_info(PARENT, "a", None).unwrap().unwrap();
        let b = manager.notify_info(PARENT, "b", None).unwrap().unwrap();

        manager.handle_message(&Message::Dismiss(a));
        assert_eq!(find(&manager, a).phase(), Phase::SlidingOut);
        assert_eq!(find(&manager, b).phase(), Phase::SlidingIn);
        assert!(!manager.dismiss(a));
    }

    #[test]
    fn notify_from_error_formats_description() {
        let (mut manager, _) = manager();
        let err = std::io::Error::other("disk full");

        let id = manager.notify_from_error(PARENT, &err, None).unwrap().unwrap();
        let banner = find(&manager, id);
        assert_eq!(banner.message(), "An error occurred: disk full");
        assert_eq!(banner.severity(), Severity::Error);
        assert_eq!(banner.display_duration(), Duration::from_millis(7000));

        let id = manager
            .notify_from_error(PARENT, &err, Some("Could not save"))
            .unwrap()
            .unwrap();
        assert_eq!(find(&manager, id).message(), "Could not save");
    }

    #[test]
    fn theme_resolution_prefers_explicit_then_configured() {
        let (mut manager, _) = manager();
        manager.configure_theme(Some(Theme::minimal()));

        let configured = manager.notify_info(PARENT, "a", None).unwrap().unwrap();
        let explicit = manager
            .notify(
                PARENT,
                "b",
                Severity::Info,
                None,
                Some(Arc::new(Theme::dark())),
            )
            .unwrap()
            .unwrap();

        assert_eq!(find(&manager, configured).height(), 40);
        assert_eq!(find(&manager, explicit).height(), 55);
    }

    #[test]
    fn clearing_configured_theme_restores_builtin() {
        let mut config = Config::default();
        config.notifications.theme = ThemePreset::Minimal;
        let (mut manager, _) = manager_with(&config);
        assert_eq!(manager.default_theme().banner_height, 40);

        manager.configure_theme(None);
        assert_eq!(*manager.default_theme(), Theme::default());
        let id = manager.notify_info(PARENT, "a", None).unwrap().unwrap();
        assert_eq!(find(&manager, id).height(), 60);
    }

    #[test]
    fn configure_theme_does_not_restyle_existing_banners() {
        let (mut manager, _) = manager();
        let id = manager.notify_info(PARENT, "a", None).unwrap().unwrap();
        manager.configure_theme(Some(Theme::minimal()));
        assert_eq!(find(&manager, id).height(), 60);
    }

    #[test]
    fn dispatcher_reaches_manager_from_other_thread() {
        let (mut manager, _) = manager();
        let dispatcher = manager.dispatcher();

        std::thread::spawn(move || {
            dispatcher
                .notify_success(PARENT, "from worker", None)
                .expect("manager alive");
            dispatcher.configure_max_visible(7).expect("manager alive");
        })
        .join()
        .expect("worker thread");

        assert_eq!(manager.active_count(), 0);
        manager.tick();
        assert_eq!(manager.active_count(), 1);
        assert_eq!(manager.max_visible(), 7);
        let banner = manager.active().next().unwrap();
        assert_eq!(banner.message(), "from worker");
        assert_eq!(banner.display_duration(), Duration::from_millis(4000));
    }

    #[test]
    fn dispatcher_fails_after_manager_drop() {
        let (manager, _) = manager();
        let dispatcher = manager.dispatcher();
        drop(manager);
        assert!(matches!(
            dispatcher.dismiss_all(),
            Err(Error::Dispatch(_))
        ));
    }

    #[test]
    fn is_animating_tracks_slides_only() {
        let (mut manager, clock) = manager();
        manager.notify_info(PARENT, "a", None).unwrap();
        assert!(manager.is_animating());

        run_for(&mut manager, &clock, Duration::from_millis(200));
        assert!(!manager.is_animating());
        assert!(manager.has_banners());
    }
}
