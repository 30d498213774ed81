//! In-process terminal capability database.
//!
//! Carries the key capabilities of the common xterm-compatible terminal
//! families plus whatever the user adds. Extended capability names (those
//! that are not all lower case, like `kHOM5`) stay hidden until
//! [`CapabilityDatabase::enable_extended_names`] is called, which mirrors how
//! terminfo treats user-defined capabilities.

use std::collections::HashMap;

use crate::keycode::{
    KEY_DOWN, KEY_END, KEY_HOME, KEY_LEFT, KEY_NPAGE, KEY_PPAGE, KEY_RIGHT, KEY_UP,
};
use crate::resolver::{
    CAP_CTRL_END, CAP_CTRL_HOME, CapabilityDatabase, FALLBACK_CTRL_END, FALLBACK_CTRL_HOME,
};

const XTERM_FAMILIES: &[&str] = &[
    "xterm", "screen", "tmux", "rxvt", "alacritty", "kitty", "foot", "wezterm", "vte", "gnome",
    "konsole", "st",
];

const XTERM_KEYS: &[(&str, &str, i32)] = &[
    ("kcuu1", "\x1bOA", KEY_UP),
    ("kcud1", "\x1bOB", KEY_DOWN),
    ("kcub1", "\x1bOD", KEY_LEFT),
    ("kcuf1", "\x1bOC", KEY_RIGHT),
    ("khome", "\x1bOH", KEY_HOME),
    ("kend", "\x1bOF", KEY_END),
    ("kpp", "\x1b[5~", KEY_PPAGE),
    ("knp", "\x1b[6~", KEY_NPAGE),
    (CAP_CTRL_HOME, "\x1b[1;5H", FALLBACK_CTRL_HOME),
    (CAP_CTRL_END, "\x1b[1;5F", FALLBACK_CTRL_END),
];

/// Capability database for one terminal type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermCapabilities {
    term: String,
    capabilities: HashMap<String, String>,
    bindings: HashMap<String, i32>,
    extended_names: bool,
    extended_supported: bool,
}

impl TermCapabilities {
    /// Database for `term`. Unknown terminals start out empty.
    pub fn for_term(term: &str) -> Self {
        let mut caps = TermCapabilities {
            term: term.to_string(),
            extended_supported: true,
            ..Default::default()
        };
        if is_xterm_family(term) {
            for (capname, sequence, code) in XTERM_KEYS {
                caps.define(capname, sequence);
                caps.bind(sequence, *code);
            }
        }
        caps
    }

    /// Database for the terminal named by `$TERM`, `dumb` when unset.
    pub fn from_env() -> Self {
        let term = std::env::var("TERM").unwrap_or_default();
        if term.trim().is_empty() {
            Self::for_term("dumb")
        } else {
            Self::for_term(term.trim())
        }
    }

    /// Turn off extended name support, as on a terminfo library built
    /// without it.
    pub fn without_extended_names(mut self) -> Self {
        self.extended_supported = false;
        self.extended_names = false;
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Define or replace a capability string.
    pub fn define(&mut self, capname: &str, sequence: &str) {
        self.capabilities
            .insert(capname.to_string(), sequence.to_string());
    }

    /// Bind an escape sequence to a key code.
    pub fn bind(&mut self, sequence: &str, code: i32) {
        self.bindings.insert(sequence.to_string(), code);
    }

    pub fn extended_names_enabled(&self) -> bool {
        self.extended_names
    }
}

impl CapabilityDatabase for TermCapabilities {
    fn lookup(&self, capname: &str) -> Option<String> {
        if is_extended_name(capname) && !self.extended_names {
            return None;
        }
        self.capabilities.get(capname).cloned()
    }

    fn resolve_key_code(&self, sequence: &str) -> Option<i32> {
        self.bindings.get(sequence).copied()
    }

    fn enable_extended_names(&mut self) -> bool {
        self.extended_names = self.extended_supported;
        self.extended_supported
    }
}

fn is_xterm_family(term: &str) -> bool {
    let term = term.to_ascii_lowercase();
    XTERM_FAMILIES.iter().any(|family| {
        term == *family
            || term
                .strip_prefix(family)
                .is_some_and(|rest| rest.starts_with(['-', '.']))
    })
}

/// Standard terminfo names are lower case; anything else is user defined.
fn is_extended_name(capname: &str) -> bool {
    capname.chars().any(|c| c.is_ascii_uppercase())
}
