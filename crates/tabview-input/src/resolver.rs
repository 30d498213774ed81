//! Startup discovery of terminal specific key codes.

use tracing::debug;

/// Code used for Ctrl+Home when the terminal does not describe it.
pub const FALLBACK_CTRL_HOME: i32 = 538;
/// Code used for Ctrl+End when the terminal does not describe it.
pub const FALLBACK_CTRL_END: i32 = 533;

/// Terminfo name of the Ctrl+Home capability.
pub const CAP_CTRL_HOME: &str = "kHOM5";
/// Terminfo name of the Ctrl+End capability.
pub const CAP_CTRL_END: &str = "kEND5";

/// Source of terminal key descriptions.
///
/// Implementations must not fail: a missing capability or binding is
/// reported as `None` and handled by the caller.
pub trait CapabilityDatabase {
    /// Escape sequence a capability is defined as.
    fn lookup(&self, capname: &str) -> Option<String>;

    /// Key code the terminal driver binds to an escape sequence.
    fn resolve_key_code(&self, sequence: &str) -> Option<i32>;

    /// Make extended (user defined) capability names visible to `lookup`.
    ///
    /// Returns false when the database has no such mode.
    fn enable_extended_names(&mut self) -> bool {
        false
    }
}

impl<T: CapabilityDatabase + ?Sized> CapabilityDatabase for &mut T {
    fn lookup(&self, capname: &str) -> Option<String> {
        (**self).lookup(capname)
    }

    fn resolve_key_code(&self, sequence: &str) -> Option<i32> {
        (**self).resolve_key_code(sequence)
    }

    fn enable_extended_names(&mut self) -> bool {
        (**self).enable_extended_names()
    }
}

/// A database that knows nothing. Every lookup falls back.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapabilities;

impl CapabilityDatabase for NoCapabilities {
    fn lookup(&self, _capname: &str) -> Option<String> {
        None
    }

    fn resolve_key_code(&self, _sequence: &str) -> Option<i32> {
        None
    }
}

/// Key codes discovered at startup. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedKeycodes {
    pub ctrl_home: i32,
    pub ctrl_end: i32,
}

impl ResolvedKeycodes {
    pub const FALLBACK: ResolvedKeycodes = ResolvedKeycodes {
        ctrl_home: FALLBACK_CTRL_HOME,
        ctrl_end: FALLBACK_CTRL_END,
    };

    pub fn new(ctrl_home: i32, ctrl_end: i32) -> Self {
        Self {
            ctrl_home,
            ctrl_end,
        }
    }
}

impl Default for ResolvedKeycodes {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Queries a [`CapabilityDatabase`] once for the Ctrl+Home and Ctrl+End codes.
pub struct KeycodeResolver<D> {
    db: D,
}

impl<D: CapabilityDatabase> KeycodeResolver<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    /// Resolve both codes, falling back to the historical defaults for
    /// anything the database cannot answer.
    pub fn initialize(mut self) -> ResolvedKeycodes {
        let extended = self.db.enable_extended_names();
        debug!(extended, "capability database extended names");

        ResolvedKeycodes {
            ctrl_home: self.code_for(CAP_CTRL_HOME, FALLBACK_CTRL_HOME),
            ctrl_end: self.code_for(CAP_CTRL_END, FALLBACK_CTRL_END),
        }
    }

    fn code_for(&self, capname: &str, fallback: i32) -> i32 {
        let Some(sequence) = self.db.lookup(capname).filter(|s| !s.is_empty()) else {
            debug!(capname, fallback, "capability not defined, using fallback");
            return fallback;
        };
        match self.db.resolve_key_code(&sequence) {
            Some(code) if code > 0 => {
                debug!(capname, code, "resolved key code");
                code
            }
            _ => {
                debug!(capname, fallback, "sequence has no key binding, using fallback");
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeDb {
        caps: HashMap<&'static str, &'static str>,
        codes: HashMap<&'static str, i32>,
        extended_calls: usize,
    }

    impl CapabilityDatabase for FakeDb {
        fn lookup(&self, capname: &str) -> Option<String> {
            self.caps.get(capname).map(|s| s.to_string())
        }

        fn resolve_key_code(&self, sequence: &str) -> Option<i32> {
            self.codes.get(sequence).copied()
        }

        fn enable_extended_names(&mut self) -> bool {
            self.extended_calls += 1;
            true
        }
    }

    #[test]
    fn empty_database_uses_fallbacks() {
        let resolved = KeycodeResolver::new(NoCapabilities).initialize();
        assert_eq!(resolved.ctrl_home, 538);
        assert_eq!(resolved.ctrl_end, 533);
        assert_eq!(resolved, ResolvedKeycodes::default());
    }

    #[test]
    fn discovered_codes_win() {
        let mut db = FakeDb::default();
        db.caps.insert(CAP_CTRL_HOME, "\x1b[1;5H");
        db.caps.insert(CAP_CTRL_END, "\x1b[1;5F");
        db.codes.insert("\x1b[1;5H", 600);
        db.codes.insert("\x1b[1;5F", 601);

        let resolved = KeycodeResolver::new(db).initialize();
        assert_eq!(resolved, ResolvedKeycodes::new(600, 601));
    }

    #[test]
    fn each_capability_falls_back_independently() {
        let mut db = FakeDb::default();
        db.caps.insert(CAP_CTRL_END, "\x1b[1;5F");
        db.codes.insert("\x1b[1;5F", 601);

        let resolved = KeycodeResolver::new(db).initialize();
        assert_eq!(resolved, ResolvedKeycodes::new(538, 601));
    }

    #[test]
    fn unbound_or_sentinel_codes_fall_back() {
        let mut db = FakeDb::default();
        db.caps.insert(CAP_CTRL_HOME, "\x1b[1;5H");
        db.caps.insert(CAP_CTRL_END, "\x1b[1;5F");
        db.codes.insert("\x1b[1;5F", 0);

        let resolved = KeycodeResolver::new(db).initialize();
        assert_eq!(resolved, ResolvedKeycodes::FALLBACK);
    }

    #[test]
    fn empty_sequence_falls_back() {
        let mut db = FakeDb::default();
        db.caps.insert(CAP_CTRL_HOME, "");
        db.codes.insert("", 700);

        let resolved = KeycodeResolver::new(db).initialize();
        assert_eq!(resolved.ctrl_home, FALLBACK_CTRL_HOME);
    }

    #[test]
    fn extended_names_enabled_once() {
        let mut db = FakeDb::default();
        let resolver = KeycodeResolver::new(&mut db);
        let _ = resolver.initialize();
        assert_eq!(db.extended_calls, 1);
    }
}
