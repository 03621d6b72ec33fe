#![forbid(unsafe_code)]

//! Terminal-free driver for [`Model`]s.
//!
//! [`ProgramSimulator`] applies the same command semantics as
//! [`Program`](crate::Program) but never touches a terminal: events and
//! messages go straight to `update`, `Cmd::Log` text is collected instead of
//! written, and frames are rendered on request so tests can read cells and
//! resolve hit regions.
//!
//! ```ignore
//! let mut sim = ProgramSimulator::new(StorefrontApp::new(catalog));
//! sim.init();
//! sim.send(Msg::AddToCart);
//! let screen = sim.capture_frame(80, 30);
//! assert!(screen.row_text(0).contains("Minimalist Premium"));
//! ```

use crate::program::{Cmd, Model};
use storefront_core::event::Event;
use storefront_render::buffer::Buffer;
use storefront_render::frame::Frame;

/// One executed command, as the simulator saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdRecord {
    /// `Cmd::None`.
    None,
    /// `Cmd::Quit`.
    Quit,
    /// `Cmd::Msg`; the message itself is fed back to `update`.
    Msg,
    /// `Cmd::Batch` with this many children.
    Batch(usize),
    /// `Cmd::Log` with its text.
    Log(String),
}

/// Runs a model without a terminal.
pub struct ProgramSimulator<M: Model> {
    model: M,
    running: bool,
    history: Vec<CmdRecord>,
    logs: Vec<String>,
    screen: Option<Frame>,
    renders: usize,
}

impl<M: Model> ProgramSimulator<M> {
    /// Wrap `model`. Nothing runs until [`init`](Self::init), `send` or an
    /// injected event.
    pub fn new(model: M) -> Self {
        Self {
            model,
            running: true,
            history: Vec::new(),
            logs: Vec::new(),
            screen: None,
            renders: 0,
        }
    }

    /// Run `Model::init` and its command.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.drain(cmd);
    }

    /// Convert each event into a message and deliver it. Stops at the first
    /// quit; later events are discarded.
    pub fn inject_events(&mut self, events: &[Event]) {
        for event in events {
            self.send(M::Message::from(event.clone()));
        }
    }

    /// Deliver one event.
    pub fn inject_event(&mut self, event: Event) {
        self.send(M::Message::from(event));
    }

    /// Deliver a message directly. Ignored once the program has quit.
    pub fn send(&mut self, msg: M::Message) {
        if self.running {
            let cmd = self.model.update(msg);
            self.drain(cmd);
        }
    }

    /// Render the model into a fresh `width` x `height` frame and keep it as
    /// the current screen.
    pub fn capture_frame(&mut self, width: u16, height: u16) -> &Buffer {
        let mut frame = Frame::new(width, height);
        self.model.view(&mut frame);
        self.renders += 1;
        &self.screen.insert(frame).buffer
    }

    /// The screen from the latest [`capture_frame`](Self::capture_frame),
    /// hit grid included.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.screen.as_ref()
    }

    /// How many frames have been captured.
    pub fn frame_count(&self) -> usize {
        self.renders
    }

    /// The model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// `false` once a `Cmd::Quit` has run.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Text from every `Cmd::Log`, oldest first.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Every command executed so far, in execution order.
    pub fn command_log(&self) -> &[CmdRecord] {
        &self.history
    }

    /// Execute `cmd` and everything it produces, depth first. Nothing runs
    /// after a quit.
    fn drain(&mut self, cmd: Cmd<M::Message>) {
        let mut pending = vec![cmd];
        while let Some(cmd) = pending.pop() {
            match cmd {
                Cmd::None => self.history.push(CmdRecord::None),
                Cmd::Quit => {
                    self.history.push(CmdRecord::Quit);
                    self.running = false;
                    return;
                }
                Cmd::Msg(msg) => {
                    self.history.push(CmdRecord::Msg);
                    pending.push(self.model.update(msg));
                }
                Cmd::Batch(children) => {
                    self.history.push(CmdRecord::Batch(children.len()));
                    pending.extend(children.into_iter().rev());
                }
                Cmd::Log(text) => {
                    self.history.push(CmdRecord::Log(text.clone()));
                    self.logs.push(text);
                }
            }
        }
    }
}
