//! Static level geometry
//!
//! Grid-cell coordinates map deterministically to world-space rectangles:
//! `world = grid * cell_size * scale`, top-left origin. The builder runs
//! once at scene setup and knows nothing about the player; the physics
//! host registers the emitted rectangles as immovable static bodies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BACKGROUND_WIDTH, CELL_HEIGHT, CELL_WIDTH, GROUND_ROW_YS, SPRITE_SCALE};
use crate::{cell_size, grid_to_world_x, grid_to_world_y};

/// Collision category of a static cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Ground,
    /// Question-mark block; shimmers via [`AnimKey::ItemBlockShimmer`](super::AnimKey)
    ItemBlock,
    /// Destructible brick (destruction itself is host behavior)
    Brick,
}

/// A grid-cell coordinate in the level's tile lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A static world-space collision rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticRect {
    pub kind: TileKind,
    pub pos: Vec2,
    pub size: Vec2,
}

impl StaticRect {
    /// Axis-aligned overlap test (shared edges do not count as overlap)
    pub fn overlaps(&self, other: &StaticRect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }
}

/// Cell dimensions and scale the grid→world mapping depends on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    pub cell_width: u32,
    pub cell_height: u32,
    pub scale: f32,
    /// Background image width the ground strip must span
    pub background_width: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            scale: SPRITE_SCALE,
            background_width: BACKGROUND_WIDTH,
        }
    }
}

impl GeometryConfig {
    /// World-space size of one scaled cell
    pub fn cell_size(&self) -> Vec2 {
        cell_size(self.cell_width, self.cell_height, self.scale)
    }
}

/// Block/brick placements for a level, loadable from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub item_blocks: Vec<GridCell>,
    pub bricks: Vec<GridCell>,
}

impl Default for LevelLayout {
    /// Placeholder overworld layout carried over from the prototype
    fn default() -> Self {
        Self {
            item_blocks: vec![
                GridCell::new(16, 9),
                GridCell::new(21, 9),
                GridCell::new(22, 5),
                GridCell::new(23, 9),
            ],
            bricks: vec![
                GridCell::new(20, 9),
                GridCell::new(22, 9),
                GridCell::new(24, 9),
            ],
        }
    }
}

impl LevelLayout {
    /// Parse a layout from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The three disjoint static-body collections for one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelGeometry {
    pub tiles: Vec<StaticRect>,
    pub blocks: Vec<StaticRect>,
    pub bricks: Vec<StaticRect>,
}

impl LevelGeometry {
    /// Build all static geometry for a level. Pure function of its inputs.
    pub fn build(cfg: &GeometryConfig, layout: &LevelLayout) -> Self {
        Self {
            tiles: ground_strip(cfg),
            blocks: cells_to_rects(&layout.item_blocks, TileKind::ItemBlock, cfg),
            bricks: cells_to_rects(&layout.bricks, TileKind::Brick, cfg),
        }
    }

    /// All rectangles, for bulk registration with the physics host
    pub fn iter(&self) -> impl Iterator<Item = &StaticRect> {
        self.tiles.iter().chain(&self.blocks).chain(&self.bricks)
    }

    pub fn len(&self) -> usize {
        self.tiles.len() + self.blocks.len() + self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if any two emitted rectangles overlap (ambiguous collision)
    pub fn has_overlaps(&self) -> bool {
        let rects: Vec<&StaticRect> = self.iter().collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                if a.overlaps(b) {
                    return true;
                }
            }
        }
        false
    }
}

/// Two stacked ground rows spanning the background width
///
/// Columns `0..=background_width / cell_width`, one rect per column per
/// row, at the fixed world Ys of [`GROUND_ROW_YS`].
pub fn ground_strip(cfg: &GeometryConfig) -> Vec<StaticRect> {
    let columns = cfg.background_width / cfg.cell_width;
    let size = cfg.cell_size();
    let mut rects = Vec::with_capacity((columns as usize + 1) * GROUND_ROW_YS.len());
    for c in 0..=columns as i32 {
        let x = grid_to_world_x(c, cfg.cell_width, cfg.scale);
        for y in GROUND_ROW_YS {
            rects.push(StaticRect {
                kind: TileKind::Ground,
                pos: Vec2::new(x, y),
                size,
            });
        }
    }
    rects
}

/// Map explicit grid placements to world rectangles of one kind
pub fn cells_to_rects(cells: &[GridCell], kind: TileKind, cfg: &GeometryConfig) -> Vec<StaticRect> {
    let size = cfg.cell_size();
    cells
        .iter()
        .map(|cell| StaticRect {
            kind,
            pos: Vec2::new(
                grid_to_world_x(cell.x, cfg.cell_width, cfg.scale),
                grid_to_world_y(cell.y, cfg.cell_height, cfg.scale),
            ),
            size,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_strip_reference_dimensions() {
        // cell 16, scale 2, background 768 -> columns 0..=48, 32x32 rects
        let cfg = GeometryConfig::default();
        let strip = ground_strip(&cfg);

        assert_eq!(strip.len(), 49 * 2);
        for rect in &strip {
            assert_eq!(rect.kind, TileKind::Ground);
            assert_eq!(rect.size, Vec2::new(32.0, 32.0));
            assert!(rect.pos.y == 416.0 || rect.pos.y == 448.0);
        }
        // First and last column origins
        assert_eq!(strip[0].pos, Vec2::new(0.0, 416.0));
        assert_eq!(strip.last().unwrap().pos, Vec2::new(48.0 * 32.0, 448.0));
    }

    #[test]
    fn test_build_is_deterministic() {
        let cfg = GeometryConfig::default();
        let layout = LevelLayout::default();
        let a = LevelGeometry::build(&cfg, &layout);
        let b = LevelGeometry::build(&cfg, &layout);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cell_to_world_mapping() {
        let cfg = GeometryConfig::default();
        let rects = cells_to_rects(&[GridCell::new(22, 5)], TileKind::ItemBlock, &cfg);
        assert_eq!(rects.len(), 1);
        // 22 * 16 * 2 = 704, 5 * 16 * 2 = 160
        assert_eq!(rects[0].pos, Vec2::new(704.0, 160.0));
        assert_eq!(rects[0].kind, TileKind::ItemBlock);
    }

    #[test]
    fn test_default_layout_has_no_overlaps() {
        let geometry = LevelGeometry::build(&GeometryConfig::default(), &LevelLayout::default());
        assert!(!geometry.has_overlaps());
        assert_eq!(geometry.blocks.len(), 4);
        assert_eq!(geometry.bricks.len(), 3);
    }

    #[test]
    fn test_overlap_predicate() {
        let a = StaticRect {
            kind: TileKind::Brick,
            pos: Vec2::ZERO,
            size: Vec2::new(32.0, 32.0),
        };
        let mut b = a;
        assert!(a.overlaps(&b));

        // Shared edge is not an overlap
        b.pos = Vec2::new(32.0, 0.0);
        assert!(!a.overlaps(&b));

        b.pos = Vec2::new(31.0, 0.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_layout_from_json() {
        let json = r#"{
            "item_blocks": [{ "x": 3, "y": 7 }],
            "bricks": [{ "x": 4, "y": 7 }, { "x": 5, "y": 7 }]
        }"#;
        let layout = LevelLayout::from_json(json).unwrap();
        assert_eq!(layout.item_blocks, vec![GridCell::new(3, 7)]);
        assert_eq!(layout.bricks.len(), 2);

        assert!(LevelLayout::from_json("not json").is_err());
    }
}
