//! Key events consumed by the processor chain.
//!
//! The chain dispatches on the raw character and modifier state rather
//! than on a symbolic key enum, because several interceptors share letter
//! keys and differ only in the modifiers held.

/// A key event with modifier flags and press/release discrimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The character produced by the key
    pub ch: char,
    /// Shift held
    pub shift: bool,
    /// Ctrl held
    pub ctrl: bool,
    /// True for a key-up event
    pub release: bool,
}

impl KeyEvent {
    /// A plain key-down event.
    pub fn press(ch: char) -> Self {
        KeyEvent {
            ch,
            shift: false,
            ctrl: false,
            release: false,
        }
    }

    /// The key-up counterpart of `press`.
    pub fn release(ch: char) -> Self {
        KeyEvent {
            release: true,
            ..Self::press(ch)
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// True when no modifier is held.
    pub fn plain(&self) -> bool {
        !self.shift && !self.ctrl
    }

    pub fn is_letter(&self) -> bool {
        self.ch.is_ascii_alphabetic()
    }
}
