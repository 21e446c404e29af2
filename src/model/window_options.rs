//! Window chrome options (pure Rust, no FFI).
//!
//! [`WindowOptions`] holds the transparency and always-on-top settings.
//! [`OptionsStore`] is the single shared copy: it is passed explicitly to
//! every surface that needs it, and surfaces that render the chrome
//! subscribe to be told when it changes.

use super::constants::*;
use crate::clamp;

/// Display settings owned by the presentation layer. They never affect
/// the timing core.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    /// Window alpha in [MIN_TRANSPARENCY, MAX_TRANSPARENCY].
    pub transparency: f64,
    /// Keep the window above normal windows.
    pub always_on_top: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            transparency: DEFAULT_TRANSPARENCY,
            always_on_top: DEFAULT_ALWAYS_ON_TOP,
        }
    }
}

impl WindowOptions {
    pub fn new(transparency: f64, always_on_top: bool) -> Self {
        let mut options = Self {
            transparency,
            always_on_top,
        };
        options.validate();
        options
    }

    /// Clamps all values to valid ranges.
    pub fn validate(&mut self) {
        if self.transparency.is_nan() {
            self.transparency = DEFAULT_TRANSPARENCY;
        }
        self.transparency = clamp(self.transparency, MIN_TRANSPARENCY, MAX_TRANSPARENCY);
    }

    /// Title for the menu command that flips always-on-top.
    pub fn always_on_top_menu_title(&self) -> &'static str {
        if self.always_on_top {
            MENU_DISABLE_ALWAYS_ON_TOP
        } else {
            MENU_ENABLE_ALWAYS_ON_TOP
        }
    }
}

/// Handle returned by [`OptionsStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&WindowOptions)>;

/// The shared window options plus their observers.
///
/// Observers run synchronously on the owning thread, only when a setter
/// actually changes a value.
pub struct OptionsStore {
    options: WindowOptions,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl OptionsStore {
    pub fn new(mut options: WindowOptions) -> Self {
        options.validate();
        Self {
            options,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> &WindowOptions {
        &self.options
    }

    /// Register an observer. It is not called for the current value.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&WindowOptions) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Set the transparency, clamped to the valid range.
    pub fn set_transparency(&mut self, transparency: f64) {
        let mut next = self.options.clone();
        next.transparency = transparency;
        self.replace(next);
    }

    pub fn set_always_on_top(&mut self, always_on_top: bool) {
        let mut next = self.options.clone();
        next.always_on_top = always_on_top;
        self.replace(next);
    }

    pub fn toggle_always_on_top(&mut self) {
        self.set_always_on_top(!self.options.always_on_top);
    }

    /// Replace all options at once. Observers see one notification.
    pub fn replace(&mut self, mut options: WindowOptions) {
        options.validate();
        if options == self.options {
            return;
        }
        tracing::debug!(?options, "window options changed");
        self.options = options;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.options);
        }
    }
}

impl Default for OptionsStore {
    fn default() -> Self {
        Self::new(WindowOptions::default())
    }
}
