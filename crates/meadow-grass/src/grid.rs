//! Block layout: how many square cells cover the disc, and where their centers sit.

use crate::constants::MIN_RADIUS;

/// One grid cell. `cx`/`cz` is the cell center relative to the field origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub ix: u32,
    pub iz: u32,
    pub cx: f32,
    pub cz: f32,
}

/// Square `grid_count x grid_count` layout centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPlan {
    pub grid_count: u32,
    pub block_side: f32,
    pub actual_radius: f32,
    /// Coordinate of the first cell center along each axis.
    pub start: f32,
}

impl GridPlan {
    /// Picks the cell count per axis so that `grid_count * block_side`
    /// approximates `2 * radius`, with at least one cell.
    pub fn new(radius: f32, block_side: f32) -> Self {
        let desired_total = 2.0 * radius.max(MIN_RADIUS);
        let grid_count = ((desired_total / block_side).round() as u32).max(1);
        let actual_total = grid_count as f32 * block_side;
        let actual_radius = actual_total * 0.5;
        let half_side = block_side * 0.5;
        Self {
            grid_count,
            block_side,
            actual_radius,
            start: -actual_radius + half_side,
        }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.grid_count as usize * self.grid_count as usize
    }

    #[inline]
    pub fn center(&self, i: u32) -> f32 {
        self.start + i as f32 * self.block_side
    }

    #[inline]
    pub fn cell(&self, ix: u32, iz: u32) -> GridCell {
        GridCell {
            ix,
            iz,
            cx: self.center(ix),
            cz: self.center(iz),
        }
    }

    /// Every candidate cell, row-major over `(ix, iz)` ascending.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        let n = self.grid_count;
        (0..n).flat_map(move |ix| (0..n).map(move |iz| self.cell(ix, iz)))
    }

    /// Cells that survive the optional circular mask. With `mask_radius` set,
    /// a cell is dropped when its center lies farther than that from the origin.
    pub fn surviving_cells(&self, mask_radius: Option<f32>) -> impl Iterator<Item = GridCell> + '_ {
        self.cells().filter(move |c| match mask_radius {
            Some(r) => !is_masked_out(c, r),
            None => true,
        })
    }
}

#[inline]
pub(crate) fn is_masked_out(cell: &GridCell, radius: f32) -> bool {
    cell.cx.hypot(cell.cz) > radius
}
