use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type ListTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Leaves raw mode and the alternate screen when dropped.
///
/// The panic hook shares the same flag, so the terminal is restored exactly
/// once whichever runs first.
pub struct TerminalGuard {
    active: Arc<AtomicBool>,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(&self.active);
    }
}

/// Restore the terminal if `active` is still set. Returns whether it did.
fn restore(active: &AtomicBool) -> bool {
    if !active.swap(false, Ordering::SeqCst) {
        return false;
    }
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
    true
}

pub fn setup_terminal() -> io::Result<(ListTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let active = Arc::new(AtomicBool::new(true));
    let guard = TerminalGuard {
        active: Arc::clone(&active),
    };

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore(&active);
        default_hook(info);
    }));

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
