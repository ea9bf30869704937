//! Type-safe key bindings shared by the portal components.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the short help text shown for it. Components expose their bindings through
//! a keymap struct that implements [`KeyMap`], so a help line can be built
//! without knowing the component's internals.
//!
//! ```rust
//! use medportal_widgets::key::{Binding, KeyMap};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//! let back = Binding::new(vec![(KeyCode::BackTab, KeyModifiers::SHIFT)])
//!     .with_help("shift+tab", "back");
//!
//! struct FormKeys {
//!     confirm: Binding,
//!     back: Binding,
//! }
//!
//! impl KeyMap for FormKeys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.confirm, &self.back]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.confirm], vec![&self.back]]
//!     }
//! }
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Reports whether an incoming key message is this key press.
    ///
    /// A press declared without modifiers ignores `SHIFT` on the incoming
    /// message, since terminals report it for upper-case characters.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.modifiers.is_empty() {
            msg.modifiers.difference(KeyModifiers::SHIFT).is_empty()
        } else {
            self.modifiers == msg.modifiers
        }
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key label, e.g. `"←/h"`.
    pub key: String,
    /// What the key does, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Attaches help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether the binding is active.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of help output.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Implemented by component keymaps to feed help views.
pub trait KeyMap {
    /// Bindings for a single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders the enabled bindings of a keymap as a compact help line,
/// e.g. `←/h prev page • →/l next page`.
pub fn short_help_line<K: KeyMap + ?Sized>(keymap: &K) -> String {
    keymap
        .short_help()
        .into_iter()
        .filter(|b| b.enabled())
        .map(|b| format!("{} {}", b.help.key, b.help.desc))
        .collect::<Vec<_>>()
        .join(" • ")
}
