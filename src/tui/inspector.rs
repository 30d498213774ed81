//! Interactive key inspector: shows which command every key produces.

use std::io::{self, Write};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::{debug, info};

use tabview_input::{Command, EventTranslator};

use super::input::decode;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Inspector {
    translator: EventTranslator,
    mouse_enabled: bool,
}

impl Inspector {
    pub fn new(translator: EventTranslator) -> Self {
        Self {
            translator,
            mouse_enabled: true,
        }
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    /// Decode, translate and report one event.
    pub fn handle<W: Write>(&mut self, event: &Event, out: &mut W) -> Result<Flow> {
        let Some(raw) = decode(event, &self.translator.resolved()) else {
            return Ok(Flow::Continue);
        };
        let cmd = self.translator.translate_event(raw);

        match (cmd, event) {
            (Command::ResizeEvent, Event::Resize(cols, rows)) => {
                write!(out, "{:<12} -> {} ({}x{})\r\n", raw.label(), cmd, cols, rows)?;
            }
            _ => write!(out, "{:<12} -> {}\r\n", raw.label(), cmd)?,
        }

        match cmd {
            Command::Quit => {
                out.flush()?;
                return Ok(Flow::Quit);
            }
            Command::MouseToggle => {
                self.mouse_enabled = !self.mouse_enabled;
                if self.mouse_enabled {
                    execute!(out, EnableMouseCapture)?;
                } else {
                    execute!(out, DisableMouseCapture)?;
                }
                debug!(enabled = self.mouse_enabled, "mouse capture toggled");
            }
            Command::Invalid => debug!(code = raw.code, alt = raw.alt, "unbound key"),
            _ => {}
        }
        out.flush()?;
        Ok(Flow::Continue)
    }
}

/// Run the inspector until a quit command arrives.
pub fn run(translator: EventTranslator) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    let result = execute!(stdout, EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|_| run_loop(Inspector::new(translator), &mut stdout));

    let restored = execute!(stdout, DisableMouseCapture).and_then(|_| disable_raw_mode());
    result?;
    restored?;
    Ok(())
}

fn run_loop<W: Write>(mut inspector: Inspector, out: &mut W) -> Result<()> {
    info!(resolved = ?inspector.translator.resolved(), "key inspector started");
    write!(out, "Press keys to see their commands. q, F10 or Esc quits.\r\n")?;
    out.flush()?;

    loop {
        let event = event::read()?;
        if inspector.handle(&event, out)? == Flow::Quit {
            info!(mouse = inspector.mouse_enabled(), "key inspector finished");
            return Ok(());
        }
    }
}
