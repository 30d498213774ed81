//! tabview-input - UI-agnostic input translation.
//!
//! Raw key codes (curses numbering) plus a single alt flag are turned into
//! [`Command`]s. Two codes, Ctrl+Home and Ctrl+End, differ between terminals
//! and are discovered once at startup by [`KeycodeResolver`].

pub mod capabilities;
pub mod command;
pub mod keycode;
pub mod resolver;
pub mod translate;

pub use capabilities::TermCapabilities;
pub use command::{Command, UNKNOWN_COMMAND, describe};
pub use keycode::{RawEvent, key_label};
pub use resolver::{CapabilityDatabase, KeycodeResolver, NoCapabilities, ResolvedKeycodes};
pub use translate::{EventTranslator, translate};
