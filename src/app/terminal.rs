use std::{
    io,
    ops::{Deref, DerefMut},
    sync::Once,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

static MOUSE_HOOK: Once = Once::new();

/// Alternate screen with mouse capture. Both are released on drop and when a
/// panic unwinds through the event loop.
pub struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::try_init().context("failed to initialize terminal")?;
        install_mouse_hook();
        if let Err(err) = execute!(io::stdout(), EnableMouseCapture) {
            ratatui::restore();
            return Err(err).context("failed to enable mouse capture");
        }
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        release_mouse();
        ratatui::restore();
    }
}

impl Deref for TerminalGuard {
    type Target = DefaultTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

// `ratatui::try_init` already restores raw mode and the screen on panic.
fn install_mouse_hook() {
    MOUSE_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            release_mouse();
            previous(panic_info);
        }));
    });
}

fn release_mouse() {
    let _ = execute!(io::stdout(), DisableMouseCapture);
}
