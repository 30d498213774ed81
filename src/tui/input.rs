//! crossterm events to raw key codes.
//!
//! crossterm already parses the escape bytes; this only flattens its events
//! into the `(code, alt)` form the translator understands. Modifiers other
//! than alt are folded into the code (Ctrl+letter, Ctrl+Home/End) or dropped.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tabview_input::keycode::{
    ESC, KEY_BACKSPACE, KEY_BTAB, KEY_DC, KEY_DOWN, KEY_END, KEY_HOME, KEY_IC, KEY_LEFT,
    KEY_MOUSE, KEY_NPAGE, KEY_PPAGE, KEY_RESIZE, KEY_RIGHT, KEY_UP, ctrl, key_f,
};
use tabview_input::{RawEvent, ResolvedKeycodes};

/// Decode one terminal event. Returns `None` for events with no key code
/// (key release, focus changes, pastes, unsupported keys).
pub fn decode(event: &Event, resolved: &ResolvedKeycodes) -> Option<RawEvent> {
    match event {
        Event::Resize(_, _) => Some(RawEvent::plain(KEY_RESIZE)),
        Event::Mouse(_) => Some(RawEvent::plain(KEY_MOUSE)),
        Event::Key(key) => decode_key(key, resolved),
        _ => None,
    }
}

fn decode_key(key: &KeyEvent, resolved: &ResolvedKeycodes) -> Option<RawEvent> {
    // Windows reports Press + Release
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let code = match key.code {
        KeyCode::Char(c) if control && c.is_ascii_alphabetic() => ctrl(c),
        // Wider chars would land in the key code range.
        KeyCode::Char(c) if (c as u32) > 0xff => return None,
        KeyCode::Char(c) => c as i32,
        // A lone Escape is indistinguishable from an escape prefixed chord
        // that timed out, so it is reported as one.
        KeyCode::Esc => return Some(RawEvent::alt(ESC)),
        KeyCode::Home if control => resolved.ctrl_home,
        KeyCode::End if control => resolved.ctrl_end,
        KeyCode::Home => KEY_HOME,
        KeyCode::End => KEY_END,
        KeyCode::Up => KEY_UP,
        KeyCode::Down => KEY_DOWN,
        KeyCode::Left => KEY_LEFT,
        KeyCode::Right => KEY_RIGHT,
        KeyCode::PageUp => KEY_PPAGE,
        KeyCode::PageDown => KEY_NPAGE,
        KeyCode::Insert => KEY_IC,
        KeyCode::Delete => KEY_DC,
        KeyCode::Backspace => KEY_BACKSPACE,
        KeyCode::BackTab => KEY_BTAB,
        KeyCode::Enter => 10,
        KeyCode::Tab => 9,
        KeyCode::F(n) => key_f(n),
        _ => return None,
    };

    Some(RawEvent::new(code, alt))
}
