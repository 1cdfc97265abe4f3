//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the cursor to the previous branch
    MovePrevious,
    /// Move the cursor to the next branch
    MoveNext,
    /// Switch to the branch under the cursor
    Confirm,
    /// Leave without switching
    Abort,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MovePrevious => "up",
            Self::MoveNext => "down",
            Self::Confirm => "switch",
            Self::Abort => "quit",
        }
    }

    /// All actions in display order for hints
    pub const ALL: &'static [Self] = &[
        Self::MovePrevious,
        Self::MoveNext,
        Self::Confirm,
        Self::Abort,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    /// Map of key strings to actions
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Up".to_string(), Action::MovePrevious);
        bindings.insert("k".to_string(), Action::MovePrevious);
        bindings.insert("Down".to_string(), Action::MoveNext);
        bindings.insert("j".to_string(), Action::MoveNext);
        bindings.insert("Enter".to_string(), Action::Confirm);
        bindings.insert("Ctrl+c".to_string(), Action::Abort);
        bindings.insert("Esc".to_string(), Action::Abort);
        bindings.insert("q".to_string(), Action::Abort);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "↑/k")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        // Named keys first, then single characters
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            a_simple.cmp(&b_simple).then_with(|| a.cmp(b))
        });
        keys.iter()
            .map(|k| match k.as_str() {
                "Up" => "↑".to_string(),
                "Down" => "↓".to_string(),
                _ => k.clone(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Generate footer hint text (e.g., "↑/k up • ↓/j down")
    #[must_use]
    pub fn status_hints(&self) -> String {
        Action::ALL
            .iter()
            .filter_map(|&action| {
                let keys = self.format_keys(action);
                if keys.is_empty() {
                    None
                } else {
                    Some(format!("{keys} {}", action.description()))
                }
            })
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
