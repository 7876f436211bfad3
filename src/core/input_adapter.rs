use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{InputState, LogicalAction};

/// Physical key to logical action map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    map: HashMap<KeyCode, LogicalAction>,
}

impl KeyBindings {
    /// Empty map, nothing bound
    pub fn empty() -> Self {
        Self { map: HashMap::new() }
    }

    /// Bind `key` to `action`, replacing any earlier binding of that key
    pub fn bind(&mut self, key: KeyCode, action: LogicalAction) -> &mut Self {
        self.map.insert(key, action);
        self
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<LogicalAction> {
        self.map.remove(&key)
    }

    pub fn action_for(&self, key: KeyCode) -> Option<LogicalAction> {
        self.map.get(&key).copied()
    }

    /// Keys bound to `action`
    pub fn keys_for(&self, action: LogicalAction) -> impl Iterator<Item = KeyCode> + '_ {
        self.map
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(&key, _)| key)
    }
}

impl Default for KeyBindings {
    /// WASD strafing, R/F up and down, arrows for pitch and yaw, Q/E roll
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind(KeyCode::KeyW, LogicalAction::MoveForward)
            .bind(KeyCode::KeyS, LogicalAction::MoveBack)
            .bind(KeyCode::KeyA, LogicalAction::MoveLeft)
            .bind(KeyCode::KeyD, LogicalAction::MoveRight)
            .bind(KeyCode::KeyR, LogicalAction::MoveUp)
            .bind(KeyCode::KeyF, LogicalAction::MoveDown)
            .bind(KeyCode::ArrowUp, LogicalAction::PitchUp)
            .bind(KeyCode::ArrowDown, LogicalAction::PitchDown)
            .bind(KeyCode::ArrowLeft, LogicalAction::YawLeft)
            .bind(KeyCode::ArrowRight, LogicalAction::YawRight)
            .bind(KeyCode::KeyQ, LogicalAction::RollLeft)
            .bind(KeyCode::KeyE, LogicalAction::RollRight);
        bindings
    }
}

/// Adapter that bridges Winit keyboard events to the InputState trait
#[derive(Debug, Clone)]
pub struct WinitInput {
    bindings: KeyBindings,
    /// Currently pressed bound keys
    pressed_keys: HashSet<KeyCode>,
    /// Held key count per action, indexed by `LogicalAction::index`
    held: [u32; LogicalAction::COUNT],
}

impl WinitInput {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed_keys: HashSet::new(),
            held: [0; LogicalAction::COUNT],
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.press(keycode),
                        ElementState::Released => self.release(keycode),
                    }
                }
            }
            WindowEvent::Focused(false) => self.clear(),
            _ => {}
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.action_for(key) {
            if self.pressed_keys.insert(key) {
                self.held[action.index()] += 1;
            }
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        if self.pressed_keys.remove(&key) {
            if let Some(action) = self.bindings.action_for(key) {
                self.held[action.index()] -= 1;
            }
        }
    }

    /// Release every key, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.pressed_keys.clear();
        self.held = [0; LogicalAction::COUNT];
    }

    /// All actions currently held
    pub fn active_actions(&self) -> impl Iterator<Item = LogicalAction> + '_ {
        LogicalAction::ALL
            .into_iter()
            .filter(|&action| self.is_active(action))
    }
}

impl Default for WinitInput {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl InputState for WinitInput {
    fn is_active(&self, action: LogicalAction) -> bool {
        self.held[action.index()] > 0
    }
}
