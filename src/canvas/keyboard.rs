#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Z,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Undo,
}

/// Map a raw key event to a session command. The undo chord is Ctrl+Z.
pub fn map_key_event_to_command(event: KeyEvent) -> Option<KeyCommand> {
    match (event.key, event.modifiers) {
        (
            KeyCode::Z,
            KeyModifiers {
                ctrl: true,
                shift: false,
            },
        ) => Some(KeyCommand::Undo),
        _ => None,
    }
}
