//! Tile and chunk coordinate bookkeeping
//!
//! The world is partitioned into square tiles, and tiles into square chunks.
//! [`WorldGrid`] holds the two edge lengths and converts world positions into
//! grid coordinates. Conversions floor toward negative infinity, so positions
//! left of or above the origin land in negative chunks instead of being
//! truncated into chunk zero.

use glam::{IVec2, Vec2};

/// Grid constants for one game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldGrid {
    tile_size: u32,
    chunk_size: u32,
}

impl WorldGrid {
    /// Create a grid from a tile edge length in pixels and a chunk edge
    /// length in tiles.
    #[must_use]
    pub const fn new(tile_size: u32, chunk_size: u32) -> Self {
        Self {
            tile_size,
            chunk_size,
        }
    }

    /// Tile edge length in pixels.
    #[must_use]
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Chunk edge length in tiles.
    #[must_use]
    pub const fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Chunk edge length in pixels.
    #[must_use]
    pub const fn chunk_span(&self) -> u32 {
        self.tile_size * self.chunk_size
    }

    /// The tile containing a world position.
    #[must_use]
    pub fn tile_at(&self, position: Vec2) -> IVec2 {
        IVec2::new(
            (position.x / self.tile_size as f32).floor() as i32,
            (position.y / self.tile_size as f32).floor() as i32,
        )
    }

    /// The chunk containing a world position.
    #[must_use]
    pub fn chunk_at(&self, position: Vec2) -> IVec2 {
        IVec2::new(
            (position.x / self.tile_size as f32 / self.chunk_size as f32).floor() as i32,
            (position.y / self.tile_size as f32 / self.chunk_size as f32).floor() as i32,
        )
    }

    /// World position of a chunk's top-left corner.
    #[must_use]
    pub fn chunk_origin(&self, chunk: IVec2) -> Vec2 {
        Vec2::new(
            chunk.x as f32 * self.chunk_span() as f32,
            chunk.y as f32 * self.chunk_span() as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_at_origin() {
        let grid = WorldGrid::new(16, 8);
        assert_eq!(grid.chunk_at(Vec2::new(0.0, 0.0)), IVec2::new(0, 0));
        assert_eq!(grid.chunk_at(Vec2::new(50.0, 50.0)), IVec2::new(0, 0));
        assert_eq!(grid.chunk_at(Vec2::new(127.9, 127.9)), IVec2::new(0, 0));
    }

    #[test]
    fn test_chunk_at_boundary() {
        // 16 px tiles * 8 tiles = 128 px per chunk
        let grid = WorldGrid::new(16, 8);
        assert_eq!(grid.chunk_at(Vec2::new(128.0, 0.0)), IVec2::new(1, 0));
        assert_eq!(grid.chunk_at(Vec2::new(256.0, 128.0)), IVec2::new(2, 1));
    }

    #[test]
    fn test_chunk_at_negative_floors() {
        let grid = WorldGrid::new(16, 8);
        // floor, not truncation: anything left of zero is already chunk -1
        assert_eq!(grid.chunk_at(Vec2::new(-0.1, 0.0)), IVec2::new(-1, 0));
        assert_eq!(grid.chunk_at(Vec2::new(-1.0, -1.0)), IVec2::new(-1, -1));
        assert_eq!(grid.chunk_at(Vec2::new(-128.0, 0.0)), IVec2::new(-1, 0));
        assert_eq!(grid.chunk_at(Vec2::new(-128.1, 0.0)), IVec2::new(-2, 0));
    }

    #[test]
    fn test_tile_at() {
        let grid = WorldGrid::new(16, 8);
        assert_eq!(grid.tile_at(Vec2::new(15.9, 16.0)), IVec2::new(0, 1));
        assert_eq!(grid.tile_at(Vec2::new(-0.5, 31.9)), IVec2::new(-1, 1));
    }

    #[test]
    fn test_chunk_origin() {
        let grid = WorldGrid::new(16, 8);
        assert_eq!(grid.chunk_origin(IVec2::new(0, 0)), Vec2::new(0.0, 0.0));
        assert_eq!(
            grid.chunk_origin(IVec2::new(2, -1)),
            Vec2::new(256.0, -128.0)
        );
        // origin of the chunk a position maps to never exceeds the position
        let position = Vec2::new(-37.5, 201.0);
        let origin = grid.chunk_origin(grid.chunk_at(position));
        assert!(origin.x <= position.x && origin.y <= position.y);
    }
}
