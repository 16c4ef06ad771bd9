//! Tile grid storage and tile-space primitives shared by layout and rasterization.

use super::model::{Pos, Tile};

/// Row-major `width x height` tile storage. Always fully populated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    /// Wraps tiles whose length already matches `width * height`.
    pub(crate) fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        Self { width, height, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.in_bounds(pos).then(|| self.tiles[self.index(pos)])
    }

    pub(crate) fn set(&mut self, pos: Pos, tile: Tile) {
        let index = self.index(pos);
        self.tiles[index] = tile;
    }

    pub fn row(&self, y: usize) -> &[Tile] {
        &self.tiles[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row(y).iter().map(|tile| tile.symbol()).collect()).collect()
    }

    pub fn to_ascii(&self) -> String {
        self.rows().join("\n")
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    fn index(&self, pos: Pos) -> usize {
        pos.y * self.width + pos.x
    }
}

pub(super) fn manhattan(a: Pos, b: Pos) -> usize {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_have_grid_width_and_height() {
        let mut grid = TileGrid::filled(12, 10, Tile::Wall);
        grid.set(Pos { x: 3, y: 2 }, Tile::Floor);

        let rows = grid.rows();
        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|row| row.chars().count() == 12));
        assert_eq!(rows[2], "###.########");
        assert_eq!(grid.count(Tile::Floor), 1);
    }

    #[test]
    fn out_of_bounds_lookups_return_none() {
        let grid = TileGrid::filled(10, 10, Tile::Wall);
        assert_eq!(grid.get(Pos { x: 10, y: 0 }), None);
        assert_eq!(grid.get(Pos { x: 0, y: 9 }), Some(Tile::Wall));
    }

    #[test]
    fn ascii_joins_rows_without_trailing_newline() {
        let grid = TileGrid::filled(10, 10, Tile::Wall);
        let ascii = grid.to_ascii();
        assert_eq!(ascii.lines().count(), 10);
        assert!(!ascii.ends_with('\n'));
    }

    #[test]
    fn manhattan_sums_axis_distances() {
        assert_eq!(manhattan(Pos { x: 2, y: 9 }, Pos { x: 7, y: 4 }), 10);
    }
}
