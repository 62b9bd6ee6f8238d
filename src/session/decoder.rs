//! Input key decoding.
//!
//! Hosts report key presses by their DOM `KeyboardEvent.key` name. This module
//! turns those names into the logical keys the session understands. Pure
//! decoder: no buffers, no I/O.

/// Logical key pressed in the input field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Submit the input line
    Enter,

    /// History previous
    ArrowUp,

    /// History next
    ArrowDown,

    /// Delete the last character
    Backspace,

    /// Clear the input line
    Escape,

    /// Printable character
    Char(char),

    /// Anything the session does not handle (modifiers, function keys, ...)
    Other,
}

impl InputKey {
    /// Decode a DOM key name (`"Enter"`, `"ArrowUp"`, `"a"`, ...).
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(InputKey::from_key_name("ArrowUp"), InputKey::ArrowUp);
    /// assert_eq!(InputKey::from_key_name("x"), InputKey::Char('x'));
    /// assert_eq!(InputKey::from_key_name("Shift"), InputKey::Other);
    /// ```
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Enter" => InputKey::Enter,
            "ArrowUp" | "Up" => InputKey::ArrowUp,
            "ArrowDown" | "Down" => InputKey::ArrowDown,
            "Backspace" => InputKey::Backspace,
            "Escape" | "Esc" => InputKey::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => InputKey::Char(c),
                    _ => InputKey::Other,
                }
            }
        }
    }

    /// Whether the host must suppress the key's default action.
    ///
    /// Arrow keys would otherwise move the caret in the text field.
    pub fn prevents_default(&self) -> bool {
        matches!(self, InputKey::ArrowUp | InputKey::ArrowDown)
    }
}
