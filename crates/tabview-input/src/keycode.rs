//! Raw key codes.
//!
//! Codes share the curses numbering: printable and control characters are
//! their code points, named keys start at 0o402, and terminal specific keys
//! (e.g. Ctrl+Home) get whatever code the terminal driver assigns at runtime.

pub const ESC: i32 = 27;

pub const KEY_DOWN: i32 = 0o402;
pub const KEY_UP: i32 = 0o403;
pub const KEY_LEFT: i32 = 0o404;
pub const KEY_RIGHT: i32 = 0o405;
pub const KEY_HOME: i32 = 0o406;
pub const KEY_BACKSPACE: i32 = 0o407;
pub const KEY_F0: i32 = 0o410;
pub const KEY_DC: i32 = 0o512;
pub const KEY_IC: i32 = 0o513;
pub const KEY_NPAGE: i32 = 0o522;
pub const KEY_PPAGE: i32 = 0o523;
pub const KEY_ENTER: i32 = 0o527;
pub const KEY_BTAB: i32 = 0o541;
pub const KEY_END: i32 = 0o550;
/// Sentinel reported when a mouse event is pending.
pub const KEY_MOUSE: i32 = 0o631;
/// Sentinel reported after the terminal window changed size.
pub const KEY_RESIZE: i32 = 0o632;

const MAX_FUNCTION_KEY: u8 = 63;

/// Code of function key `n` (F1 is `key_f(1)`).
pub const fn key_f(n: u8) -> i32 {
    KEY_F0 + n as i32
}

/// Control character produced by Ctrl plus an ASCII letter.
pub const fn ctrl(c: char) -> i32 {
    (c as i32) & 0x1f
}

/// One decoded input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawEvent {
    pub code: i32,
    /// Received as an alt (escape prefixed) chord.
    pub alt: bool,
}

impl RawEvent {
    pub fn new(code: i32, alt: bool) -> Self {
        Self { code, alt }
    }

    pub fn plain(code: i32) -> Self {
        Self { code, alt: false }
    }

    pub fn alt(code: i32) -> Self {
        Self { code, alt: true }
    }

    pub fn char(c: char) -> Self {
        Self::plain(c as i32)
    }

    /// Display form, e.g. `M-m` or `C-d`.
    pub fn label(&self) -> String {
        if self.alt {
            format!("M-{}", key_label(self.code))
        } else {
            key_label(self.code)
        }
    }
}

/// Display name for a raw code.
///
/// Unknown codes render as `<code>`; this includes runtime assigned codes
/// such as Ctrl+Home, which only the resolver knows about.
pub fn key_label(code: i32) -> String {
    let named = match code {
        ESC => Some("Esc"),
        9 => Some("Tab"),
        10 | 13 => Some("Enter"),
        32 => Some("Space"),
        127 => Some("Backspace"),
        KEY_DOWN => Some("Down"),
        KEY_UP => Some("Up"),
        KEY_LEFT => Some("Left"),
        KEY_RIGHT => Some("Right"),
        KEY_HOME => Some("Home"),
        KEY_END => Some("End"),
        KEY_BACKSPACE => Some("Backspace"),
        KEY_DC => Some("Delete"),
        KEY_IC => Some("Insert"),
        KEY_NPAGE => Some("PageDown"),
        KEY_PPAGE => Some("PageUp"),
        KEY_ENTER => Some("Enter"),
        KEY_BTAB => Some("BackTab"),
        KEY_MOUSE => Some("Mouse"),
        KEY_RESIZE => Some("Resize"),
        _ => None,
    };
    if let Some(name) = named {
        return name.to_string();
    }

    if (1..=26).contains(&code) {
        let letter = char::from(b'a' + (code - 1) as u8);
        return format!("C-{}", letter);
    }
    if code > KEY_F0 && code <= key_f(MAX_FUNCTION_KEY) {
        return format!("F{}", code - KEY_F0);
    }
    // Above 0xff the code space belongs to keys, not characters.
    match u8::try_from(code).ok().map(char::from) {
        Some(c) if !c.is_control() => c.to_string(),
        _ => format!("<{}>", code),
    }
}
