//! Extensions on glam vectors

use glam::Vec2;

/// Decimal rounding for [`Vec2`].
///
/// Positions are rounded to a fixed decimal precision after movement so that
/// accumulated floating point drift never shows up in coordinates fed to the
/// HUD or the chunk bookkeeping.
pub trait Vec2Ext {
    /// Round both components to `places` decimal places.
    #[must_use]
    fn round_dp(self, places: u32) -> Self;
}

impl Vec2Ext for Vec2 {
    fn round_dp(self, places: u32) -> Self {
        let factor = 10f32.powi(places as i32);
        Vec2::new(
            (self.x * factor).round() / factor,
            (self.y * factor).round() / factor,
        )
    }
}
