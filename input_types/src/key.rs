//! Key events and key strokes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::keymap::KeyError;

/// Keyboard event
///
/// One key state change as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: Modifiers, state: KeyState) -> Self {
        Self {
            code,
            modifiers,
            state,
        }
    }

    pub fn pressed(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Pressed)
    }

    pub fn released(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Released)
    }

    /// Plain press of a printable character
    pub fn char(ch: char) -> Self {
        Self::pressed(KeyCode::Char(ch), Modifiers::none())
    }

    /// Press and auto-repeat both count as input; release does not
    pub fn is_input(&self) -> bool {
        self.state != KeyState::Released
    }

    pub fn stroke(&self) -> KeyStroke {
        KeyStroke::new(self.code, self.modifiers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    Pressed,
    Released,
    Repeat,
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressed => write!(f, "pressed"),
            Self::Released => write!(f, "released"),
            Self::Repeat => write!(f, "repeat"),
        }
    }
}

/// Logical key code
///
/// Printable keys carry their character; everything the pane binds by name
/// has its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    Escape,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

impl KeyCode {
    fn name(&self) -> Option<&'static str> {
        let name = match self {
            KeyCode::Char(' ') => "Space",
            KeyCode::Char(_) => return None,
            KeyCode::Enter => "Enter",
            KeyCode::Tab => "Tab",
            KeyCode::Escape => "Escape",
            KeyCode::Backspace => "Backspace",
            KeyCode::Delete => "Delete",
            KeyCode::Insert => "Insert",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Up => "ArrowUp",
            KeyCode::Down => "ArrowDown",
            KeyCode::Left => "ArrowLeft",
            KeyCode::Right => "ArrowRight",
        };
        Some(name)
    }

    fn from_name(name: &str) -> Option<Self> {
        let code = match name {
            "Space" => KeyCode::Char(' '),
            "Enter" | "Return" => KeyCode::Enter,
            "Tab" => KeyCode::Tab,
            "Escape" | "Esc" => KeyCode::Escape,
            "Backspace" => KeyCode::Backspace,
            "Delete" | "Del" => KeyCode::Delete,
            "Insert" => KeyCode::Insert,
            "Home" => KeyCode::Home,
            "End" => KeyCode::End,
            "PageUp" => KeyCode::PageUp,
            "PageDown" => KeyCode::PageDown,
            "ArrowUp" | "Up" => KeyCode::Up,
            "ArrowDown" | "Down" => KeyCode::Down,
            "ArrowLeft" | "Left" => KeyCode::Left,
            "ArrowRight" | "Right" => KeyCode::Right,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyCode::Char(ch),
                    _ => return None,
                }
            }
        };
        Some(code)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.name()) {
            (_, Some(name)) => write!(f, "{}", name),
            (KeyCode::Char(ch), None) => write!(f, "{}", ch),
            _ => Ok(()),
        }
    }
}

/// Modifier keys
///
/// Bitflags representing modifier key states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Self = Self { bits: 0 };
    pub const CTRL: Self = Self { bits: 1 << 0 };
    pub const ALT: Self = Self { bits: 1 << 1 };
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    pub const META: Self = Self { bits: 1 << 3 };

    pub fn none() -> Self {
        Self::NONE
    }

    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    pub fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    pub fn is_alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    pub fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn is_meta(&self) -> bool {
        self.contains(Self::META)
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True when a command modifier is held, i.e. the key cannot be
    /// plain text input
    pub fn is_command(&self) -> bool {
        self.is_ctrl() || self.is_alt() || self.is_meta()
    }

    fn names(&self) -> Vec<&'static str> {
        let mut parts = Vec::new();
        if self.is_ctrl() {
            parts.push("Ctrl");
        }
        if self.is_alt() {
            parts.push("Alt");
        }
        if self.is_shift() {
            parts.push("Shift");
        }
        if self.is_meta() {
            parts.push("Meta");
        }
        parts
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        write!(f, "{}", self.names().join("+"))
    }
}

/// A key together with its modifiers, used as the key map lookup key
///
/// Letters chorded with a command modifier are stored lowercase so that
/// `"Ctrl+K"` and a host event for `k` with Ctrl held compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    code: KeyCode,
    modifiers: Modifiers,
}

impl KeyStroke {
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        let code = match code {
            KeyCode::Char(ch) if modifiers.is_command() => KeyCode::Char(ch.to_ascii_lowercase()),
            other => other,
        };
        Self { code, modifiers }
    }

    pub fn code(&self) -> KeyCode {
        self.code
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl fmt::Display for KeyStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.modifiers.names() {
            write!(f, "{}+", name)?;
        }
        match self.code {
            KeyCode::Char(ch) if self.modifiers.is_command() => {
                write!(f, "{}", ch.to_ascii_uppercase())
            }
            code => write!(f, "{}", code),
        }
    }
}

impl FromStr for KeyStroke {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "+" and "Ctrl++" name the plus key itself
        let (prefix, key) = if s == "+" {
            ("", "+")
        } else if let Some(prefix) = s.strip_suffix("++") {
            (prefix, "+")
        } else {
            match s.rsplit_once('+') {
                Some((prefix, key)) => (prefix, key),
                None => ("", s),
            }
        };

        let mut modifiers = Modifiers::none();
        for part in prefix.split('+').filter(|p| !p.is_empty()) {
            let modifier = match part {
                "Ctrl" | "Control" => Modifiers::CTRL,
                "Alt" | "Option" => Modifiers::ALT,
                "Shift" => Modifiers::SHIFT,
                "Meta" | "Cmd" | "Super" => Modifiers::META,
                _ => return Err(KeyError::InvalidStroke(s.to_string())),
            };
            modifiers = modifiers.with(modifier);
        }

        let code = KeyCode::from_name(key).ok_or_else(|| KeyError::InvalidStroke(s.to_string()))?;
        Ok(KeyStroke::new(code, modifiers))
    }
}
