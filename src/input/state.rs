//! Per-frame input state

use glam::Vec2;
use std::collections::HashSet;
use std::hash::Hash;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Pressed/just-pressed/just-released tracking for one class of button.
#[derive(Debug)]
struct ButtonSet<T> {
    held: HashSet<T>,
    just_pressed: HashSet<T>,
    just_released: HashSet<T>,
}

impl<T: Copy + Eq + Hash> ButtonSet<T> {
    fn new() -> Self {
        Self {
            held: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    fn process(&mut self, button: T, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.held.contains(&button) {
                    self.just_pressed.insert(button);
                }
                self.held.insert(button);
            }
            ElementState::Released => {
                self.held.remove(&button);
                self.just_released.insert(button);
            }
        }
    }

    fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

/// Input state manager.
///
/// The engine feeds window events in as they arrive; a key counts as pressed
/// from the moment its down event is seen until its up event is seen,
/// regardless of how many frames pass in between. `just_*` queries answer for
/// the current frame only and are cleared by [`Input::update`] after the
/// game has run.
#[derive(Debug)]
pub struct Input {
    keys: ButtonSet<KeyCode>,
    mouse: ButtonSet<MouseButton>,
    cursor_position: Vec2,
}

impl Input {
    /// Create a new input manager with nothing pressed
    pub fn new() -> Self {
        Self {
            keys: ButtonSet::new(),
            mouse: ButtonSet::new(),
            cursor_position: Vec2::ZERO,
        }
    }

    /// Call at the end of each frame to clear per-frame state
    pub fn update(&mut self) {
        self.keys.end_frame();
        self.mouse.end_frame();
    }

    /// Process a keyboard event
    pub fn process_keyboard(&mut self, key_code: KeyCode, state: ElementState) {
        self.keys.process(key_code, state);
    }

    /// Process a mouse button event
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.mouse.process(button, state);
    }

    /// Process cursor movement
    pub fn process_cursor_moved(&mut self, position: Vec2) {
        self.cursor_position = position;
    }

    /// Check if a key is currently held down
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys.held.contains(&key)
    }

    /// Check if a key went down this frame
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys.just_pressed.contains(&key)
    }

    /// Check if a key went up this frame
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.keys.just_released.contains(&key)
    }

    /// Check if a mouse button is currently held down
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse.held.contains(&button)
    }

    /// Check if a mouse button went down this frame
    pub fn is_mouse_just_pressed(&self, button: MouseButton) -> bool {
        self.mouse.just_pressed.contains(&button)
    }

    /// Check if a mouse button went up this frame
    pub fn is_mouse_just_released(&self, button: MouseButton) -> bool {
        self.mouse.just_released.contains(&button)
    }

    /// Last reported cursor position, in window pixels
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor_position
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
