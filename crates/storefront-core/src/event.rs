#![forbid(unsafe_code)]

//! Input events.
//!
//! Crossterm input is translated into [`Event`] once, at the terminal edge.
//! Models and tests only ever see these types, and anything the storefront
//! has no use for (paste, function keys, focus changes) is dropped during
//! translation.
//!
//! Mouse coordinates are zero-based cells. Only the left button takes part
//! in pointer gestures; see [`MouseEvent::primary_phase`].

use bitflags::bitflags;
use crossterm::event as ct;

/// Something that happened at the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Mouse input.
    Mouse(MouseEvent),
    /// The terminal changed size.
    Resize {
        /// Columns.
        width: u16,
        /// Rows.
        height: u16,
    },
    /// The runtime's poll interval elapsed without input.
    Tick,
}

impl Event {
    /// Translate a crossterm event, or `None` if it carries nothing we use.
    #[must_use]
    pub fn from_crossterm(event: ct::Event) -> Option<Self> {
        match event {
            ct::Event::Key(key) => translate_key(key).map(Self::Key),
            ct::Event::Mouse(mouse) => Some(Self::Mouse(translate_mouse(mouse))),
            ct::Event::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }

    /// A left-button pointer event at `(x, y)`.
    #[must_use]
    pub const fn left(phase: PointerPhase, x: u16, y: u16) -> Self {
        let kind = match phase {
            PointerPhase::Down => MouseEventKind::Down(MouseButton::Left),
            PointerPhase::Drag => MouseEventKind::Drag(MouseButton::Left),
            PointerPhase::Up => MouseEventKind::Up(MouseButton::Left),
        };
        Self::Mouse(MouseEvent::new(kind, x, y))
    }
}

/// Where a left-button gesture is: pressed, moving, or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pressed.
    Down,
    /// Moved with the button held.
    Drag,
    /// Released.
    Up,
}

/// A key press, repeat or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key.
    pub code: KeyCode,
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// Press, repeat or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// An unmodified key press.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Replace the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Replace the kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is the character `c`.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        self.code == KeyCode::Char(c)
    }

    /// Whether Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Keys the storefront distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Enter.
    Enter,
    /// Esc.
    Escape,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

/// Press, repeat or release. Terminals that cannot tell report `Press`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Pressed.
    #[default]
    Press,
    /// Auto-repeat while held.
    Repeat,
    /// Released.
    Release,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1;
        /// Alt or Option.
        const ALT = 1 << 1;
        /// Control.
        const CTRL = 1 << 2;
    }
}

/// A mouse button, wheel or motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// What happened.
    pub kind: MouseEventKind,
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl MouseEvent {
    /// A mouse event of `kind` at `(x, y)`.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    /// `(x, y)`.
    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// The gesture phase if this is a left-button event.
    #[must_use]
    pub const fn primary_phase(&self) -> Option<PointerPhase> {
        match self.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(PointerPhase::Down),
            MouseEventKind::Drag(MouseButton::Left) => Some(PointerPhase::Drag),
            MouseEventKind::Up(MouseButton::Left) => Some(PointerPhase::Up),
            _ => None,
        }
    }
}

/// Kinds of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Button pressed.
    Down(MouseButton),
    /// Moved with a button held.
    Drag(MouseButton),
    /// Button released.
    Up(MouseButton),
    /// Moved with no button held.
    Moved,
    /// Wheel turned, in any direction.
    Scroll,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary.
    Left,
    /// Secondary.
    Right,
    /// Wheel click.
    Middle,
}

fn translate_key(key: ct::KeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Esc => KeyCode::Escape,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    let kind = match key.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        ct::KeyEventKind::Release => KeyEventKind::Release,
    };
    let mut modifiers = Modifiers::empty();
    for (from, to) in [
        (ct::KeyModifiers::SHIFT, Modifiers::SHIFT),
        (ct::KeyModifiers::ALT, Modifiers::ALT),
        (ct::KeyModifiers::CONTROL, Modifiers::CTRL),
    ] {
        if key.modifiers.contains(from) {
            modifiers |= to;
        }
    }
    Some(KeyEvent {
        code,
        modifiers,
        kind,
    })
}

fn translate_button(button: ct::MouseButton) -> MouseButton {
    match button {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    }
}

fn translate_mouse(mouse: ct::MouseEvent) -> MouseEvent {
    let kind = match mouse.kind {
        ct::MouseEventKind::Down(b) => MouseEventKind::Down(translate_button(b)),
        ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(translate_button(b)),
        ct::MouseEventKind::Up(b) => MouseEventKind::Up(translate_button(b)),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        ct::MouseEventKind::ScrollUp
        | ct::MouseEventKind::ScrollDown
        | ct::MouseEventKind::ScrollLeft
        | ct::MouseEventKind::ScrollRight => MouseEventKind::Scroll,
    };
    MouseEvent::new(kind, mouse.column, mouse.row)
}
