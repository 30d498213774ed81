//! Key code to command translation.
//!
//! Two static tables, picked by the alt flag. Codes missing from the picked
//! table are compared against the resolved Ctrl+Home / Ctrl+End codes and
//! otherwise become [`Command::Invalid`].

use tracing::trace;

use crate::command::Command;
use crate::keycode::{
    ESC, KEY_DOWN, KEY_END, KEY_HOME, KEY_LEFT, KEY_MOUSE, KEY_NPAGE, KEY_PPAGE, KEY_RESIZE,
    KEY_RIGHT, KEY_UP, RawEvent, ctrl, key_f,
};
use crate::resolver::ResolvedKeycodes;

/// Bindings for alt (escape prefixed) chords.
const ALT_BINDINGS: &[(i32, Command)] = &[
    ('m' as i32, Command::MouseToggle),
    ('o' as i32, Command::FlushBookmarks),
    ('k' as i32, Command::ToggleBookmark),
    ('i' as i32, Command::PrevBookmark),
    ('j' as i32, Command::NextBookmark),
    ('9' as i32, Command::ShowMenu),
    (ESC, Command::Quit),
    // Plain '0' releases frozen columns instead.
    ('0' as i32, Command::Quit),
];

/// Bindings for plain keys.
const PRIMARY_BINDINGS: &[(i32, Command)] = &[
    (KEY_RESIZE, Command::ResizeEvent),
    (KEY_MOUSE, Command::MouseEvent),
    (key_f(9), Command::ShowMenu),
    (key_f(10), Command::Quit),
    ('q' as i32, Command::Quit),
    (KEY_UP, Command::CursorUp),
    ('k' as i32, Command::CursorUp),
    (KEY_DOWN, Command::CursorDown),
    ('j' as i32, Command::CursorDown),
    ('0' as i32, Command::ReleaseCols),
    ('1' as i32, Command::FreezeOneCol),
    ('2' as i32, Command::FreezeTwoCols),
    ('3' as i32, Command::FreezeThreeCols),
    ('4' as i32, Command::FreezeFourCols),
    (ctrl('d'), Command::ScrollDownHalfPage),
    (ctrl('u'), Command::ScrollUpHalfPage),
    (ctrl('e'), Command::ScrollDown),
    (ctrl('y'), Command::ScrollUp),
    (KEY_LEFT, Command::MoveLeft),
    ('h' as i32, Command::MoveLeft),
    (KEY_RIGHT, Command::MoveRight),
    ('l' as i32, Command::MoveRight),
    ('H' as i32, Command::CursorFirstRowPage),
    ('L' as i32, Command::CursorLastRowPage),
    ('M' as i32, Command::CursorHalfPage),
    (KEY_PPAGE, Command::PageUp),
    (ctrl('b'), Command::PageUp),
    (KEY_NPAGE, Command::PageDown),
    (' ' as i32, Command::PageDown),
    (ctrl('f'), Command::PageDown),
    (KEY_HOME, Command::ShowFirstCol),
    ('^' as i32, Command::ShowFirstCol),
    (KEY_END, Command::ShowLastCol),
    ('$' as i32, Command::ShowLastCol),
    ('s' as i32, Command::SaveData),
    ('/' as i32, Command::ForwardSearch),
    ('?' as i32, Command::BackwardSearch),
    ('n' as i32, Command::SearchNext),
    ('N' as i32, Command::SearchPrev),
    ('g' as i32, Command::CursorFirstRow),
    ('G' as i32, Command::CursorLastRow),
];

/// The static table consulted for the given alt state.
pub fn bindings(alt: bool) -> &'static [(i32, Command)] {
    if alt { ALT_BINDINGS } else { PRIMARY_BINDINGS }
}

/// Translate one raw code.
///
/// Total: every input yields a command, unbound input yields
/// [`Command::Invalid`]. Table entries take precedence over the resolved
/// codes.
pub fn translate(code: i32, alt: bool, resolved: &ResolvedKeycodes) -> Command {
    if let Some(&(_, cmd)) = bindings(alt).iter().find(|(bound, _)| *bound == code) {
        return cmd;
    }

    if code == resolved.ctrl_home {
        Command::CursorFirstRow
    } else if code == resolved.ctrl_end {
        Command::CursorLastRow
    } else {
        Command::Invalid
    }
}

/// Translator bound to the key codes resolved at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventTranslator {
    resolved: ResolvedKeycodes,
}

impl EventTranslator {
    pub fn new(resolved: ResolvedKeycodes) -> Self {
        Self { resolved }
    }

    pub fn resolved(&self) -> ResolvedKeycodes {
        self.resolved
    }

    pub fn translate(&self, code: i32, alt: bool) -> Command {
        translate(code, alt, &self.resolved)
    }

    pub fn translate_event(&self, event: RawEvent) -> Command {
        let cmd = self.translate(event.code, event.alt);
        trace!(code = event.code, alt = event.alt, command = cmd.name(), "translated");
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn plain(c: char) -> Command {
        translate(c as i32, false, &ResolvedKeycodes::FALLBACK)
    }

    fn alt(c: char) -> Command {
        translate(c as i32, true, &ResolvedKeycodes::FALLBACK)
    }

    #[test]
    fn tables_have_no_duplicate_codes() {
        for alt in [false, true] {
            let mut seen = HashSet::new();
            for (code, cmd) in bindings(alt) {
                assert!(seen.insert(*code), "code {code} bound twice ({cmd:?})");
            }
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(bindings(true).len(), 8);
        assert_eq!(bindings(false).len(), 42);
    }

    #[test]
    fn tables_never_produce_invalid() {
        for alt in [false, true] {
            assert!(bindings(alt).iter().all(|(_, cmd)| *cmd != Command::Invalid));
        }
    }

    #[test]
    fn zero_depends_on_alt() {
        assert_eq!(plain('0'), Command::ReleaseCols);
        assert_eq!(alt('0'), Command::Quit);
        assert_eq!(translate(ESC, true, &ResolvedKeycodes::FALLBACK), Command::Quit);
    }

    #[test]
    fn alt_table() {
        assert_eq!(alt('m'), Command::MouseToggle);
        assert_eq!(alt('o'), Command::FlushBookmarks);
        assert_eq!(alt('k'), Command::ToggleBookmark);
        assert_eq!(alt('i'), Command::PrevBookmark);
        assert_eq!(alt('j'), Command::NextBookmark);
        assert_eq!(alt('9'), Command::ShowMenu);
    }

    #[test]
    fn alt_does_not_fall_back_to_primary() {
        assert_eq!(alt('q'), Command::Invalid);
        assert_eq!(alt('1'), Command::Invalid);
        assert_eq!(plain('m'), Command::Invalid);
        assert_eq!(plain('o'), Command::Invalid);
        assert_eq!(translate(ESC, false, &ResolvedKeycodes::FALLBACK), Command::Invalid);
    }

    #[test]
    fn control_keys_scroll_and_page() {
        let r = ResolvedKeycodes::FALLBACK;
        assert_eq!(translate(ctrl('d'), false, &r), Command::ScrollDownHalfPage);
        assert_eq!(translate(ctrl('u'), false, &r), Command::ScrollUpHalfPage);
        assert_eq!(translate(ctrl('e'), false, &r), Command::ScrollDown);
        assert_eq!(translate(ctrl('y'), false, &r), Command::ScrollUp);
        assert_eq!(translate(ctrl('b'), false, &r), Command::PageUp);
        assert_eq!(translate(ctrl('f'), false, &r), Command::PageDown);
        assert_eq!(translate(KEY_PPAGE, false, &r), Command::PageUp);
        assert_eq!(translate(KEY_NPAGE, false, &r), Command::PageDown);
        assert_eq!(plain(' '), Command::PageDown);
    }

    #[test]
    fn column_jumps() {
        let r = ResolvedKeycodes::FALLBACK;
        assert_eq!(translate(KEY_HOME, false, &r), Command::ShowFirstCol);
        assert_eq!(plain('^'), Command::ShowFirstCol);
        assert_eq!(translate(KEY_END, false, &r), Command::ShowLastCol);
        assert_eq!(plain('$'), Command::ShowLastCol);
    }

    #[test]
    fn page_relative_cursor() {
        assert_eq!(plain('H'), Command::CursorFirstRowPage);
        assert_eq!(plain('L'), Command::CursorLastRowPage);
        assert_eq!(plain('M'), Command::CursorHalfPage);
        assert_eq!(plain('g'), Command::CursorFirstRow);
        assert_eq!(plain('G'), Command::CursorLastRow);
        assert_eq!(plain('s'), Command::SaveData);
    }

    #[test]
    fn resolved_codes_checked_under_alt_too() {
        let r = ResolvedKeycodes::new(600, 601);
        assert_eq!(translate(600, true, &r), Command::CursorFirstRow);
        assert_eq!(translate(601, true, &r), Command::CursorLastRow);
    }

    #[test]
    fn table_entry_beats_resolved_code() {
        let r = ResolvedKeycodes::new('q' as i32, KEY_UP);
        assert_eq!(translate('q' as i32, false, &r), Command::Quit);
        assert_eq!(translate(KEY_UP, false, &r), Command::CursorUp);
        // Only the primary table binds 'q', so alt+q reaches the resolved check.
        assert_eq!(translate('q' as i32, true, &r), Command::CursorFirstRow);
    }

    #[test]
    fn translator_uses_its_resolved_codes() {
        let translator = EventTranslator::new(ResolvedKeycodes::new(700, 701));
        assert_eq!(translator.translate(700, false), Command::CursorFirstRow);
        assert_eq!(translator.translate(701, false), Command::CursorLastRow);
        assert_eq!(translator.translate(538, false), Command::Invalid);
        assert_eq!(
            translator.translate_event(RawEvent::alt('j' as i32)),
            Command::NextBookmark
        );
    }

    #[test]
    fn default_translator_uses_fallbacks() {
        let translator = EventTranslator::default();
        assert_eq!(translator.resolved(), ResolvedKeycodes::FALLBACK);
        assert_eq!(translator.translate(538, false), Command::CursorFirstRow);
        assert_eq!(translator.translate(533, false), Command::CursorLastRow);
    }
}
