//! Global hotkey capability.
//!
//! A [`HotkeySource`] turns a key combination pressed anywhere on the
//! system into [`AppEvent::ToggleStartStop`] on the event bus. The raw OS
//! callback stays inside the platform implementation; the timing core only
//! ever sees the event, delivered on its own thread.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;

use crate::events::{AppEvent, EventPublisher};

/// Modifier keys held together with the hotkey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub command: bool,
    pub shift: bool,
    pub control: bool,
    pub option: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !(self.command || self.shift || self.control || self.option)
    }
}

/// A key plus modifiers, e.g. `cmd+shift+s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    key: char,
    modifiers: Modifiers,
}

impl KeyCombo {
    /// The key is stored lowercase.
    pub fn new(key: char, modifiers: Modifiers) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            modifiers,
        }
    }

    pub fn key(&self) -> char {
        self.key
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (held, name) in [
            (m.control, "ctrl"),
            (m.option, "alt"),
            (m.shift, "shift"),
            (m.command, "cmd"),
        ] {
            if held {
                write!(f, "{}+", name)?;
            }
        }
        write!(f, "{}", self.key)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseKeyComboError {
    #[error("empty key combination")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("key combination `{0}` has no key")]
    MissingKey(String),
    #[error("key combination `{0}` has more than one key")]
    TooManyKeys(String),
}

impl FromStr for KeyCombo {
    type Err = ParseKeyComboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseKeyComboError::Empty);
        }

        let mut modifiers = Modifiers::default();
        let mut key = None;
        for part in s.split('+').map(str::trim) {
            let lower = part.to_ascii_lowercase();
            match lower.as_str() {
                "cmd" | "command" => modifiers.command = true,
                "shift" => modifiers.shift = true,
                "ctrl" | "control" => modifiers.control = true,
                "alt" | "opt" | "option" => modifiers.option = true,
                _ => {
                    let mut chars = lower.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => {
                            if key.replace(c).is_some() {
                                return Err(ParseKeyComboError::TooManyKeys(s.to_string()));
                            }
                        }
                        (None, _) => return Err(ParseKeyComboError::MissingKey(s.to_string())),
                        (Some(_), Some(_)) => {
                            return Err(ParseKeyComboError::UnknownModifier(part.to_string()))
                        }
                    }
                }
            }
        }

        key.map(|key| KeyCombo::new(key, modifiers))
            .ok_or_else(|| ParseKeyComboError::MissingKey(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum HotkeyError {
    #[error("key `{0}` cannot be used as a global hotkey")]
    UnsupportedKey(char),
    #[error("failed to install the hotkey handler (status {0})")]
    HandlerInstall(i32),
    #[error("failed to register {combo} (status {status})")]
    Registration { combo: KeyCombo, status: i32 },
    #[error("global hotkeys are not supported on this platform")]
    Unsupported,
}

/// A live hotkey registration. Dropping it unregisters the hotkey.
pub struct HotkeySubscription {
    combo: KeyCombo,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl HotkeySubscription {
    pub fn new<F>(combo: KeyCombo, cancel: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            combo,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn combo(&self) -> KeyCombo {
        self.combo
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
            tracing::debug!(combo = %self.combo, "hotkey unregistered");
        }
    }
}

impl Drop for HotkeySubscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for HotkeySubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotkeySubscription")
            .field("combo", &self.combo)
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Receives OS-level key presses outside normal window focus.
pub trait HotkeySource {
    /// Publish `AppEvent::ToggleStartStop` on `publisher` whenever `combo`
    /// is pressed, until the returned subscription is cancelled.
    fn subscribe(
        &mut self,
        combo: KeyCombo,
        publisher: EventPublisher,
    ) -> Result<HotkeySubscription, HotkeyError>;
}

type Registrations = Rc<RefCell<Vec<(u64, KeyCombo, EventPublisher)>>>;

/// Hotkey source driven by calling [`ManualHotkeySource::press`].
#[derive(Default)]
pub struct ManualHotkeySource {
    registrations: Registrations,
    next_id: u64,
}

impl ManualHotkeySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a key press. Returns true if a registration matched.
    pub fn press(&self, combo: KeyCombo) -> bool {
        let registrations = self.registrations.borrow();
        let mut matched = false;
        for (_, registered, publisher) in registrations.iter() {
            if *registered == combo {
                publisher.publish(AppEvent::ToggleStartStop);
                matched = true;
            }
        }
        matched
    }

    pub fn active_count(&self) -> usize {
        self.registrations.borrow().len()
    }
}

impl HotkeySource for ManualHotkeySource {
    fn subscribe(
        &mut self,
        combo: KeyCombo,
        publisher: EventPublisher,
    ) -> Result<HotkeySubscription, HotkeyError> {
        let id = self.next_id;
        self.next_id += 1;
        self.registrations
            .borrow_mut()
            .push((id, combo, publisher));

        let registrations = Rc::clone(&self.registrations);
        Ok(HotkeySubscription::new(combo, move || {
            registrations.borrow_mut().retain(|(rid, _, _)| *rid != id);
        }))
    }
}

/// Source for platforms without a global hotkey facility.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedHotkeySource;

impl HotkeySource for UnsupportedHotkeySource {
    fn subscribe(
        &mut self,
        _combo: KeyCombo,
        _publisher: EventPublisher,
    ) -> Result<HotkeySubscription, HotkeyError> {
        Err(HotkeyError::Unsupported)
    }
}
