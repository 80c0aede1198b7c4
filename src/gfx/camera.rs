//! Camera for 2D rendering

use glam::Vec2;

/// Scrolling camera over a 2D world.
///
/// `scroll` is the world position of the viewport's top-left corner.
/// Subtracting it from a world position gives screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera2D {
    /// World position of the viewport's top-left corner
    pub scroll: Vec2,
}

impl Camera2D {
    /// Create a camera at the world origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll so `target` sits in the middle of a viewport of the given size
    pub fn center_on(&mut self, target: Vec2, viewport: Vec2) {
        self.scroll = target - viewport / 2.0;
    }

    /// Convert a world position to screen pixels
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.scroll
    }

    /// Convert a screen position to world space
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_on_places_target_mid_viewport() {
        let mut camera = Camera2D::new();
        camera.center_on(Vec2::new(500.0, 300.0), Vec2::new(1280.0, 720.0));

        assert_eq!(camera.scroll, Vec2::new(-140.0, -60.0));
        assert_eq!(
            camera.to_screen(Vec2::new(500.0, 300.0)),
            Vec2::new(640.0, 360.0)
        );
    }

    #[test]
    fn test_screen_world_inverse() {
        let camera = Camera2D {
            scroll: Vec2::new(32.0, -17.5),
        };
        let world = Vec2::new(120.0, 45.0);
        assert_eq!(camera.to_world(camera.to_screen(world)), world);
    }
}
