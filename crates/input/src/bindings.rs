use crate::Action;
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Physical-key to logical-action table.
pub struct Bindings {
    map: HashMap<KeyCode, Action>,
}

impl Default for Bindings {
    /// WASD movement, U/J scaling, Escape quits.
    fn default() -> Self {
        let map = HashMap::from([
            (KeyCode::KeyW, Action::MoveForward),
            (KeyCode::KeyS, Action::MoveBackward),
            (KeyCode::KeyA, Action::MoveLeft),
            (KeyCode::KeyD, Action::MoveRight),
            (KeyCode::KeyU, Action::ScaleUp),
            (KeyCode::KeyJ, Action::ScaleDown),
            (KeyCode::Escape, Action::Quit),
        ]);
        Self { map }
    }
}

impl Bindings {
    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.map.get(&key).copied()
    }

    /// Bind or rebind a key.
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.map.insert(key, action);
    }
}

/// Key-held state fed from the window event stream and sampled per frame.
#[derive(Debug, Default)]
pub struct HeldKeys {
    held: HashSet<KeyCode>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release.
    pub fn set_pressed(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Actions for every currently held, bound key.
    pub fn actions<'a>(&'a self, bindings: &'a Bindings) -> impl Iterator<Item = Action> + 'a {
        self.held.iter().filter_map(|key| bindings.action_for(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_movement_and_scale() {
        let bindings = Bindings::default();
        assert_eq!(bindings.action_for(KeyCode::KeyW), Some(Action::MoveForward));
        assert_eq!(bindings.action_for(KeyCode::KeyS), Some(Action::MoveBackward));
        assert_eq!(bindings.action_for(KeyCode::KeyA), Some(Action::MoveLeft));
        assert_eq!(bindings.action_for(KeyCode::KeyD), Some(Action::MoveRight));
        assert_eq!(bindings.action_for(KeyCode::KeyU), Some(Action::ScaleUp));
        assert_eq!(bindings.action_for(KeyCode::KeyJ), Some(Action::ScaleDown));
        assert_eq!(bindings.action_for(KeyCode::Escape), Some(Action::Quit));
        assert_eq!(bindings.action_for(KeyCode::KeyQ), None);
    }

    #[test]
    fn rebinding_replaces_the_action() {
        let mut bindings = Bindings::default();
        bindings.bind(KeyCode::KeyW, Action::ScaleUp);
        assert_eq!(bindings.action_for(KeyCode::KeyW), Some(Action::ScaleUp));
    }

    #[test]
    fn held_keys_track_press_and_release() {
        let mut held = HeldKeys::new();
        held.set_pressed(KeyCode::KeyW, true);
        assert!(held.is_held(KeyCode::KeyW));
        held.set_pressed(KeyCode::KeyW, false);
        assert!(!held.is_held(KeyCode::KeyW));
    }

    #[test]
    fn actions_reflect_held_bound_keys() {
        let bindings = Bindings::default();
        let mut held = HeldKeys::new();
        held.set_pressed(KeyCode::KeyW, true);
        held.set_pressed(KeyCode::KeyU, true);
        held.set_pressed(KeyCode::F1, true); // unbound
        let actions: HashSet<Action> = held.actions(&bindings).collect();
        assert_eq!(actions.len(), 2);
        assert!(actions.contains(&Action::MoveForward));
        assert!(actions.contains(&Action::ScaleUp));
    }
}
