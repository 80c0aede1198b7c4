//! Key bindings for logical actions
//!
//! Physical keys map to logical movement actions so games read intent
//! (`MoveLeft`) instead of hardware (`KeyA`). Bindings come from the
//! configuration file at startup but can be rebound at runtime.
//!
//! # Example
//!
//! ```ignore
//! let bindings = BindingSet::wasd();
//! let velocity = bindings.direction(&input) * speed * dt;
//! ```

use glam::Vec2;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use winit::keyboard::KeyCode;

use crate::input::Input;

// ============================================================================
// Actions
// ============================================================================

/// Logical actions a game can bind keys to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Action {
    /// Move toward negative x
    MoveLeft,
    /// Move toward positive x
    MoveRight,
    /// Move toward negative y (up in screen coordinates)
    MoveUp,
    /// Move toward positive y
    MoveDown,
}

impl Action {
    /// The four movement actions, in reading order.
    pub const MOVEMENT: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
    ];

    /// Name used for this action in configuration files and logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Action::MoveLeft => "left",
            Action::MoveRight => "right",
            Action::MoveUp => "up",
            Action::MoveDown => "down",
        }
    }
}

// ============================================================================
// Key labels
// ============================================================================

/// Parse a key label from a configuration file into a key code.
///
/// Accepts a single letter or digit (`"a"`, `"7"`) or one of the common
/// named keys (`"space"`, `"escape"`, `"left"` for the left arrow, ...).
/// Matching is case-insensitive. Returns `None` for anything unrecognized.
#[must_use]
pub fn parse_key_label(label: &str) -> Option<KeyCode> {
    let label = label.trim().to_ascii_lowercase();

    if label.len() == 1 {
        let ch = label.chars().next()?;
        return single_char_key(ch);
    }

    let key = match label.as_str() {
        "space" => KeyCode::Space,
        "escape" | "esc" => KeyCode::Escape,
        "tab" => KeyCode::Tab,
        "enter" | "return" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "shift" | "lshift" => KeyCode::ShiftLeft,
        "rshift" => KeyCode::ShiftRight,
        "ctrl" | "lctrl" => KeyCode::ControlLeft,
        "rctrl" => KeyCode::ControlRight,
        "alt" | "lalt" => KeyCode::AltLeft,
        "up" => KeyCode::ArrowUp,
        "down" => KeyCode::ArrowDown,
        "left" => KeyCode::ArrowLeft,
        "right" => KeyCode::ArrowRight,
        _ => return None,
    };
    Some(key)
}

fn single_char_key(ch: char) -> Option<KeyCode> {
    let key = match ch {
        'a' => KeyCode::KeyA,
        'b' => KeyCode::KeyB,
        'c' => KeyCode::KeyC,
        'd' => KeyCode::KeyD,
        'e' => KeyCode::KeyE,
        'f' => KeyCode::KeyF,
        'g' => KeyCode::KeyG,
        'h' => KeyCode::KeyH,
        'i' => KeyCode::KeyI,
        'j' => KeyCode::KeyJ,
        'k' => KeyCode::KeyK,
        'l' => KeyCode::KeyL,
        'm' => KeyCode::KeyM,
        'n' => KeyCode::KeyN,
        'o' => KeyCode::KeyO,
        'p' => KeyCode::KeyP,
        'q' => KeyCode::KeyQ,
        'r' => KeyCode::KeyR,
        's' => KeyCode::KeyS,
        't' => KeyCode::KeyT,
        'u' => KeyCode::KeyU,
        'v' => KeyCode::KeyV,
        'w' => KeyCode::KeyW,
        'x' => KeyCode::KeyX,
        'y' => KeyCode::KeyY,
        'z' => KeyCode::KeyZ,
        '0' => KeyCode::Digit0,
        '1' => KeyCode::Digit1,
        '2' => KeyCode::Digit2,
        '3' => KeyCode::Digit3,
        '4' => KeyCode::Digit4,
        '5' => KeyCode::Digit5,
        '6' => KeyCode::Digit6,
        '7' => KeyCode::Digit7,
        '8' => KeyCode::Digit8,
        '9' => KeyCode::Digit9,
        _ => return None,
    };
    Some(key)
}

// ============================================================================
// Binding set
// ============================================================================

/// Maps logical actions to physical keys.
///
/// Each action is bound to at most one key, but nothing stops two actions
/// from sharing a key; the reverse map tracks every action a key drives so
/// callers can detect and report such collisions.
#[derive(Debug, Clone, Default)]
pub struct BindingSet {
    /// Action to key bindings
    key_for: FxHashMap<Action, KeyCode>,
    /// Reverse lookup: key to the actions it triggers
    by_key: FxHashMap<KeyCode, SmallVec<[Action; 2]>>,
}

impl BindingSet {
    /// Create an empty binding set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a binding set with the usual WASD movement keys.
    #[must_use]
    pub fn wasd() -> Self {
        let mut bindings = Self::new();
        bindings.bind(Action::MoveLeft, KeyCode::KeyA);
        bindings.bind(Action::MoveRight, KeyCode::KeyD);
        bindings.bind(Action::MoveUp, KeyCode::KeyW);
        bindings.bind(Action::MoveDown, KeyCode::KeyS);
        bindings
    }

    /// Bind an action to a key.
    ///
    /// If the action was previously bound, the old binding is replaced.
    pub fn bind(&mut self, action: Action, key: KeyCode) {
        if let Some(old_key) = self.key_for.insert(action, key)
            && let Some(actions) = self.by_key.get_mut(&old_key)
        {
            actions.retain(|a| *a != action);
        }
        self.by_key.entry(key).or_default().push(action);
    }

    /// Get the key bound to an action.
    #[must_use]
    pub fn key_for(&self, action: Action) -> Option<KeyCode> {
        self.key_for.get(&action).copied()
    }

    /// Get all actions a key triggers.
    #[must_use]
    pub fn actions_for(&self, key: KeyCode) -> &[Action] {
        self.by_key.get(&key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Keys that trigger more than one action, with the actions they drive.
    pub fn collisions(&self) -> impl Iterator<Item = (KeyCode, &[Action])> + '_ {
        self.by_key
            .iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(&key, actions)| (key, actions.as_slice()))
    }

    /// Get total number of bound actions.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.key_for.len()
    }

    /// Check whether an action's key is currently held down.
    #[must_use]
    pub fn is_pressed(&self, input: &Input, action: Action) -> bool {
        self.key_for(action)
            .is_some_and(|key| input.is_key_pressed(key))
    }

    /// Movement direction from the held movement keys.
    ///
    /// Each axis is -1, 0, or 1, so opposing keys cancel. The result is not
    /// normalized: holding a horizontal and a vertical key together gives a
    /// diagonal of length sqrt(2).
    #[must_use]
    pub fn direction(&self, input: &Input) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.is_pressed(input, Action::MoveLeft) {
            direction.x -= 1.0;
        }
        if self.is_pressed(input, Action::MoveRight) {
            direction.x += 1.0;
        }
        if self.is_pressed(input, Action::MoveUp) {
            direction.y -= 1.0;
        }
        if self.is_pressed(input, Action::MoveDown) {
            direction.y += 1.0;
        }
        direction
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::ElementState;

    fn input_with_keys(keys: &[KeyCode]) -> Input {
        let mut input = Input::new();
        for &key in keys {
            input.process_keyboard(key, ElementState::Pressed);
        }
        input
    }

    #[test]
    fn test_parse_single_chars() {
        assert_eq!(parse_key_label("a"), Some(KeyCode::KeyA));
        assert_eq!(parse_key_label("Z"), Some(KeyCode::KeyZ));
        assert_eq!(parse_key_label("7"), Some(KeyCode::Digit7));
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key_label("space"), Some(KeyCode::Space));
        assert_eq!(parse_key_label("Escape"), Some(KeyCode::Escape));
        assert_eq!(parse_key_label("left"), Some(KeyCode::ArrowLeft));
        assert_eq!(parse_key_label(" enter "), Some(KeyCode::Enter));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(parse_key_label(""), None);
        assert_eq!(parse_key_label("?"), None);
        assert_eq!(parse_key_label("aa"), None);
        assert_eq!(parse_key_label("meta-q"), None);
    }

    #[test]
    fn test_bind_and_lookup() {
        let mut bindings = BindingSet::new();
        bindings.bind(Action::MoveLeft, KeyCode::KeyA);

        assert_eq!(bindings.key_for(Action::MoveLeft), Some(KeyCode::KeyA));
        assert_eq!(bindings.actions_for(KeyCode::KeyA), &[Action::MoveLeft]);
        assert_eq!(bindings.binding_count(), 1);
    }

    #[test]
    fn test_rebind_replaces_key() {
        let mut bindings = BindingSet::wasd();

        bindings.bind(Action::MoveLeft, KeyCode::KeyJ);
        assert_eq!(bindings.key_for(Action::MoveLeft), Some(KeyCode::KeyJ));
        // the old key no longer drives the action
        assert!(bindings.actions_for(KeyCode::KeyA).is_empty());
    }

    #[test]
    fn test_shared_key_tracks_both_actions() {
        let mut bindings = BindingSet::new();
        bindings.bind(Action::MoveLeft, KeyCode::KeyK);
        bindings.bind(Action::MoveRight, KeyCode::KeyK);

        let actions = bindings.actions_for(KeyCode::KeyK);
        assert!(actions.contains(&Action::MoveLeft));
        assert!(actions.contains(&Action::MoveRight));

        let collisions: Vec<_> = bindings.collisions().collect();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].0, KeyCode::KeyK);
    }

    #[test]
    fn test_direction_single_axis() {
        let bindings = BindingSet::wasd();
        let input = input_with_keys(&[KeyCode::KeyD]);
        assert_eq!(bindings.direction(&input), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_direction_diagonal_is_unnormalized() {
        let bindings = BindingSet::wasd();
        let input = input_with_keys(&[KeyCode::KeyD, KeyCode::KeyS]);

        let direction = bindings.direction(&input);
        assert_eq!(direction, Vec2::new(1.0, 1.0));
        // both axes at full strength: diagonal movement is sqrt(2) faster
        assert!((direction.length() - std::f32::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_direction_opposing_keys_cancel() {
        let bindings = BindingSet::wasd();
        let input = input_with_keys(&[KeyCode::KeyA, KeyCode::KeyD, KeyCode::KeyW]);
        assert_eq!(bindings.direction(&input), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_direction_nothing_held() {
        let bindings = BindingSet::wasd();
        let input = Input::new();
        assert_eq!(bindings.direction(&input), Vec2::ZERO);
    }

    #[test]
    fn test_direction_scales_to_velocity() {
        let bindings = BindingSet::wasd();
        let input = input_with_keys(&[KeyCode::KeyD]);

        // one simulated frame at 10 fps with a 220 px/s entity
        let velocity = bindings.direction(&input) * 220.0 * 0.1;
        assert_eq!(velocity, Vec2::new(22.0, 0.0));
    }

    #[test]
    fn test_is_pressed_unbound_action() {
        let bindings = BindingSet::new();
        let input = input_with_keys(&[KeyCode::KeyA]);
        assert!(!bindings.is_pressed(&input, Action::MoveLeft));
    }
}
