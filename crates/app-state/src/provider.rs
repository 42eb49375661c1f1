//! Reactive theme provider
//!
//! Owns the resolved theme state and publishes changes over watch channels
//! so adaptive surfaces re-evaluate exactly when the value they read
//! changes. The host mounts one provider near the root, feeds it restored
//! preferences, and persists the snapshot it hands back.
//!
//! # Example
//!
//! ```rust
//! use app_state::provider::ThemeProvider;
//! use app_state::scheme::ThemeMode;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = ThemeProvider::new();
//!     let mut scheme_rx = provider.subscribe_scheme();
//!
//!     provider.set_mode(ThemeMode::Dark).await;
//!     if scheme_rx.has_changed().unwrap() {
//!         println!("scheme is now {}", *scheme_rx.borrow_and_update());
//!     }
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch, RwLock};
use tracing::{debug, trace};

use crate::scheme::{Clock, ColorScheme, SystemClock, ThemeMode, ThemeName, ThemePreferences};

/// Events emitted as the theme state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The user preference changed
    ModeChanged(ThemeMode),
    /// The resolved concrete theme changed
    ThemeChanged(ThemeName),
    /// The derived color scheme flipped
    SchemeChanged(ColorScheme),
}

/// Internal provider state
struct ProviderState {
    mode: ThemeMode,
    theme: ThemeName,
}

/// Reactive source of the active theme and color scheme
///
/// Values are published only when they actually change; an unchanged
/// re-resolution wakes no subscriber.
pub struct ThemeProvider {
    state: Arc<RwLock<ProviderState>>,
    theme_tx: watch::Sender<ThemeName>,
    scheme_tx: watch::Sender<ColorScheme>,
    events_tx: broadcast::Sender<ThemeEvent>,
    clock: Arc<dyn Clock>,
}

impl ThemeProvider {
    /// Create a provider on the system clock with default preferences
    pub fn new() -> Self {
        Self::with_clock(ThemePreferences::default(), Arc::new(SystemClock))
    }

    /// Create a provider from preferences the host restored
    pub fn with_preferences(prefs: ThemePreferences) -> Self {
        Self::with_clock(prefs, Arc::new(SystemClock))
    }

    /// Create a provider on an explicit clock
    pub fn with_clock(prefs: ThemePreferences, clock: Arc<dyn Clock>) -> Self {
        let theme = prefs.mode.resolve(clock.local_hour());
        let (theme_tx, _) = watch::channel(theme);
        let (scheme_tx, _) = watch::channel(theme.color_scheme());
        let (events_tx, _) = broadcast::channel(16);

        Self {
            state: Arc::new(RwLock::new(ProviderState {
                mode: prefs.mode,
                theme,
            })),
            theme_tx,
            scheme_tx,
            events_tx,
            clock,
        }
    }

    /// Subscribe to the resolved concrete theme
    pub fn subscribe_theme(&self) -> watch::Receiver<ThemeName> {
        self.theme_tx.subscribe()
    }

    /// Subscribe to the derived color scheme
    ///
    /// This is the signal adaptive surfaces such as the tab-bar background
    /// follow.
    pub fn subscribe_scheme(&self) -> watch::Receiver<ColorScheme> {
        self.scheme_tx.subscribe()
    }

    /// Subscribe to theme change events
    pub fn subscribe_events(&self) -> broadcast::Receiver<ThemeEvent> {
        self.events_tx.subscribe()
    }

    /// Current resolved theme
    pub async fn theme(&self) -> ThemeName {
        self.state.read().await.theme
    }

    /// Current derived color scheme
    pub async fn scheme(&self) -> ColorScheme {
        self.state.read().await.theme.color_scheme()
    }

    /// Current theme mode preference
    pub async fn mode(&self) -> ThemeMode {
        self.state.read().await.mode
    }

    /// Preference snapshot for the host to persist
    pub async fn preferences(&self) -> ThemePreferences {
        ThemePreferences::default().with_mode(self.state.read().await.mode)
    }

    /// Set the theme mode preference
    pub async fn set_mode(&self, mode: ThemeMode) {
        let mut state = self.state.write().await;
        if state.mode == mode {
            return;
        }
        state.mode = mode;
        debug!(%mode, "theme mode changed");
        let _ = self.events_tx.send(ThemeEvent::ModeChanged(mode));

        let resolved = mode.resolve(self.clock.local_hour());
        self.apply_resolved(&mut state, resolved);
    }

    /// Re-evaluate the schedule against the clock
    ///
    /// No-op unless the mode is `Auto` and the clock has crossed a band
    /// boundary since the last resolution.
    pub async fn refresh(&self) {
        let mut state = self.state.write().await;
        let resolved = state.mode.resolve(self.clock.local_hour());
        trace!(%resolved, "schedule re-evaluated");
        self.apply_resolved(&mut state, resolved);
    }

    fn apply_resolved(&self, state: &mut ProviderState, resolved: ThemeName) {
        if state.theme == resolved {
            return;
        }
        let previous_scheme = state.theme.color_scheme();
        state.theme = resolved;
        debug!(theme = %resolved, "theme changed");
        // send_replace stores the value even while no receiver is alive,
        // so a late subscriber starts from the current theme
        self.theme_tx.send_replace(resolved);
        let _ = self.events_tx.send(ThemeEvent::ThemeChanged(resolved));

        let scheme = resolved.color_scheme();
        if scheme != previous_scheme {
            self.scheme_tx.send_replace(scheme);
            let _ = self.events_tx.send(ThemeEvent::SchemeChanged(scheme));
        }
    }

    /// Start periodic schedule re-evaluation
    ///
    /// Spawns a background task calling [`refresh`](Self::refresh) on the
    /// given interval. The task stops when the returned handle drops.
    pub fn start_schedule(self: &Arc<Self>, interval: Duration) -> ScheduleHandle {
        let (stop_tx, mut stop_rx) = tokio::sync::oneshot::channel();
        let provider = Arc::clone(self);

        let handle = tokio::spawn(async move {
            let mut tick = tokio::time::interval(interval);

            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        provider.refresh().await;
                    }
                    _ = &mut stop_rx => {
                        break;
                    }
                }
            }
        });

        ScheduleHandle {
            stop_tx: Some(stop_tx),
            _handle: handle,
        }
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle keeping the schedule task alive
///
/// Dropping it stops the task.
pub struct ScheduleHandle {
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl ScheduleHandle {
    /// Stop the schedule task explicitly
    pub fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for ScheduleHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}
