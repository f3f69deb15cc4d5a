// Input configuration and remapping

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use super::action::{default_bindings, Action};

/// Maps keys to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from keys to actions. A key drives at most one action.
    bindings: HashMap<KeyCode, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing any earlier binding for that key
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
