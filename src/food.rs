use crate::field::{Cell, HitRect, Playfield};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Food placement failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// No free cell is left to place food on; the session should treat this
    /// as a terminal state distinct from an ordinary game over
    NoFreeCells,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NoFreeCells => write!(f, "no free cell available for food placement"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// The single active food item: its cell plus the padded hit rectangle
/// used for the head-overlap check
#[derive(Clone, Debug)]
pub struct Food {
    pub cell: Cell,
    pub rect: HitRect,
}

impl Food {
    /// Place food on a cell drawn uniformly from the provided free set.
    ///
    /// The hit rectangle is derived from the cell anchor and the combined
    /// sprite half extent and hit-box padding.
    pub fn place(
        playfield: &Playfield,
        free_cells: &[Cell],
        hit_half_extent: f32,
        rng: &mut impl Rng,
    ) -> Result<Food, PlacementError> {
        let cell = *free_cells
            .choose(rng)
            .ok_or(PlacementError::NoFreeCells)?;
        let (cx, cy) = playfield.cell_anchor(cell);
        Ok(Food {
            cell,
            rect: HitRect::centered(cx, cy, hit_half_extent),
        })
    }
}
