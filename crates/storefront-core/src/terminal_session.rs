#![forbid(unsafe_code)]

//! Raw-mode terminal ownership.
//!
//! A [`TerminalSession`] records every terminal mode it switches on and
//! switches them off again, newest first, when it is dropped. The same
//! restore runs from a panic hook and, on Unix, when SIGINT or SIGTERM
//! arrives, so the shell is never left in raw mode with mouse reporting on.
//!
//! ```no_run
//! use storefront_core::terminal_session::{SessionOptions, TerminalSession};
//!
//! let session = TerminalSession::new(SessionOptions {
//!     alternate_screen: true,
//!     mouse_capture: true,
//! })?;
//! let (columns, rows) = session.size()?;
//! # let _ = (columns, rows);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};
use std::sync::Once;
use std::time::Duration;

use crossterm::{cursor, event as ct, execute, terminal};

use crate::event::Event;

/// Which optional modes to turn on. Raw mode and a hidden cursor are
/// always part of a session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Draw on the alternate screen so the shell's scrollback survives.
    pub alternate_screen: bool,
    /// Report clicks, drags and releases.
    pub mouse_capture: bool,
}

/// A mode switched on by the session, undone on drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Raw,
    AlternateScreen,
    MouseCapture,
    HiddenCursor,
}

impl Mode {
    fn enter(self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Self::Raw => terminal::enable_raw_mode(),
            Self::AlternateScreen => execute!(out, terminal::EnterAlternateScreen),
            Self::MouseCapture => execute!(out, ct::EnableMouseCapture),
            Self::HiddenCursor => execute!(out, cursor::Hide),
        }
    }

    fn leave(self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Self::Raw => terminal::disable_raw_mode(),
            Self::AlternateScreen => execute!(out, terminal::LeaveAlternateScreen),
            Self::MouseCapture => execute!(out, ct::DisableMouseCapture),
            Self::HiddenCursor => execute!(out, cursor::Show),
        }
    }
}

/// Owns the terminal for the lifetime of a program. Keep one at a time.
#[derive(Debug)]
pub struct TerminalSession {
    options: SessionOptions,
    active: Vec<Mode>,
    #[cfg(unix)]
    _signals: signals::SignalGuard,
}

impl TerminalSession {
    /// Switch the terminal into raw mode plus whatever `options` asks for.
    ///
    /// # Errors
    ///
    /// Fails if any mode cannot be enabled. Modes already enabled are
    /// restored before the error is returned.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        install_panic_hook();

        let mut wanted = vec![Mode::Raw];
        if options.alternate_screen {
            wanted.push(Mode::AlternateScreen);
        }
        if options.mouse_capture {
            wanted.push(Mode::MouseCapture);
        }
        wanted.push(Mode::HiddenCursor);

        let mut session = Self {
            options,
            active: Vec::with_capacity(wanted.len()),
            #[cfg(unix)]
            _signals: signals::SignalGuard::install()?,
        };

        let mut out = io::stdout();
        for mode in wanted {
            mode.enter(&mut out)?;
            crate::debug!(?mode, "terminal mode enabled");
            session.active.push(mode);
        }
        crate::info!(modes = session.active.len(), "terminal session started");
        Ok(session)
    }

    /// Columns and rows.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input. `Ok(false)` means none arrived.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<bool> {
        ct::poll(timeout)
    }

    /// Block for the next input. Input the storefront ignores yields `Ok(None)`.
    pub fn read_event(&self) -> io::Result<Option<Event>> {
        ct::read().map(Event::from_crossterm)
    }

    /// The options this session was opened with.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        while let Some(mode) = self.active.pop() {
            if let Err(err) = mode.leave(&mut out) {
                crate::warn!(?mode, %err, "failed to restore terminal mode");
            }
        }
        let _ = out.flush();
        crate::info!("terminal session ended");
    }
}

/// Undo every mode regardless of what was enabled. Used where the session
/// itself is unreachable.
fn restore_everything() {
    let mut out = io::stdout();
    for mode in [
        Mode::HiddenCursor,
        Mode::MouseCapture,
        Mode::AlternateScreen,
        Mode::Raw,
    ] {
        let _ = mode.leave(&mut out);
    }
    let _ = out.flush();
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let next = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_everything();
            next(info);
        }));
    });
}

#[cfg(unix)]
mod signals {
    use std::io;
    use std::thread::JoinHandle;

    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::{Handle, Signals};

    /// Restores the terminal and exits on SIGINT or SIGTERM.
    #[derive(Debug)]
    pub(super) struct SignalGuard {
        handle: Handle,
        worker: Option<JoinHandle<()>>,
    }

    impl SignalGuard {
        pub(super) fn install() -> io::Result<Self> {
            let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
            let handle = signals.handle();
            let worker = std::thread::Builder::new()
                .name("storefront-signals".into())
                .spawn(move || {
                    if let Some(signal) = signals.forever().next() {
                        crate::warn!(signal, "terminating on signal");
                        super::restore_everything();
                        std::process::exit(128 + signal);
                    }
                })?;
            Ok(Self {
                handle,
                worker: Some(worker),
            })
        }
    }

    impl Drop for SignalGuard {
        fn drop(&mut self) {
            self.handle.close();
            if let Some(worker) = self.worker.take() {
                let _ = worker.join();
            }
        }
    }
}
