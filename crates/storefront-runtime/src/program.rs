#![forbid(unsafe_code)]

//! Elm-style program runtime.
//!
//! A [`Program`] owns a [`Model`], a [`TerminalSession`] and a [`Presenter`].
//! Each loop iteration waits for input (up to the poll interval), converts the
//! event into a model message, runs `update`, executes the returned [`Cmd`]
//! and redraws.
//!
//! # Example
//!
//! ```ignore
//! use storefront_runtime::{Cmd, Model, Program, ProgramConfig};
//!
//! let mut program = Program::with_config(MyModel::default(), ProgramConfig::default())?;
//! program.run()?;
//! ```

use std::io::{self, Stdout};
use std::time::Duration;

use storefront_core::event::Event;
use storefront_core::terminal_session::{SessionOptions, TerminalSession};
use storefront_render::buffer::Buffer;
use storefront_render::diff::BufferDiff;
use storefront_render::frame::Frame;
use storefront_render::presenter::Presenter;
use tracing::{debug, info, info_span};

/// Application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Messages represent actions that update the model state.
    /// Must be convertible from terminal events.
    type Message: From<Event> + Send + 'static;

    /// Initialize the model with startup commands.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);
}

/// Side effects requested by `Model::update`.
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Quit the application.
    Quit,
    /// Execute multiple commands in order, stopping after a quit.
    Batch(Vec<Cmd<M>>),
    /// Send a message to the model.
    Msg(M),
    /// Emit a log line.
    ///
    /// The real runtime forwards it to `tracing` (the alternate screen owns
    /// the terminal); the simulator records it.
    Log(String),
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a batch of commands.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds = cmds;
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or_default(),
            _ => Self::Batch(cmds),
        }
    }

    /// Return a stable name for tracing.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Quit => "Quit",
            Self::Batch(_) => "Batch",
            Self::Msg(_) => "Msg",
            Self::Log(_) => "Log",
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Capture mouse events.
    pub mouse: bool,
    /// Use the alternate screen.
    pub alternate_screen: bool,
    /// How long to wait for input before delivering [`Event::Tick`].
    pub poll_interval: Duration,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            alternate_screen: true,
            poll_interval: Duration::from_millis(250),
        }
    }
}

impl ProgramConfig {
    /// Enable or disable mouse capture.
    #[must_use]
    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Set the input poll interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Blocking terminal program driving a [`Model`].
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
    session: TerminalSession,
    presenter: Presenter<Stdout>,
    /// Last presented buffer, diffed against the next frame.
    current: Buffer,
    width: u16,
    height: u16,
    running: bool,
    /// The next render must clear and repaint everything.
    full_redraw: bool,
}

impl<M: Model> Program<M> {
    /// Set up the terminal and create a program.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be put into raw mode or its
    /// size cannot be read.
    pub fn with_config(model: M, config: ProgramConfig) -> io::Result<Self> {
        let session = TerminalSession::new(SessionOptions {
            alternate_screen: config.alternate_screen,
            mouse_capture: config.mouse,
        })?;
        let (width, height) = session.size()?;
        info!(width, height, mouse = config.mouse, "program created");

        Ok(Self {
            model,
            config,
            session,
            presenter: Presenter::new(io::stdout()),
            current: Buffer::new(width, height),
            width,
            height,
            running: true,
            full_redraw: true,
        })
    }

    /// Run until the model returns [`Cmd::Quit`].
    ///
    /// The terminal is restored when the program is dropped.
    pub fn run(&mut self) -> io::Result<()> {
        let cmd = {
            let _span = info_span!("storefront.program.init").entered();
            self.model.init()
        };
        self.execute_cmd(cmd);
        // Tell the model the starting viewport.
        if self.running {
            self.handle_event(Event::Resize {
                width: self.width,
                height: self.height,
            });
        }
        if self.running {
            self.render_frame()?;
        }

        while self.running {
            let event = if self.session.poll_event(self.config.poll_interval)? {
                match self.session.read_event()? {
                    Some(event) => event,
                    None => continue,
                }
            } else {
                Event::Tick
            };
            let tick = event == Event::Tick;
            self.handle_event(event);
            if self.running && !tick {
                self.render_frame()?;
            }
        }

        info!("program exiting");
        Ok(())
    }

    /// Access the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            debug!(width, height, "resize event received");
            self.width = width;
            self.height = height;
            self.full_redraw = true;
        }
        let msg = M::Message::from(event);
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd);
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => {
                let cmd = self.model.update(m);
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    self.execute_cmd(c);
                    if !self.running {
                        break;
                    }
                }
            }
            Cmd::Log(text) => info!(target: "storefront.log", "{text}"),
        }
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let mut frame = Frame::new(self.width, self.height);
        self.model.view(&mut frame);

        if self.full_redraw {
            self.presenter.full_redraw(&frame.buffer)?;
            self.full_redraw = false;
        } else {
            let diff = BufferDiff::compute(&self.current, &frame.buffer);
            if !diff.is_empty() {
                self.presenter.present(&frame.buffer, &diff)?;
            }
        }
        self.current = frame.buffer;
        Ok(())
    }
}
