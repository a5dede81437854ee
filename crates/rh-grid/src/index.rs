//! The `SpatialIndex` trait — the seam between the agent core and space.

use rh_core::{AgentId, Cell, SimRng};

use crate::GridResult;

/// Which cells count as adjacent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// The eight surrounding cells (diagonals included).
    Moore,
    /// The four orthogonally adjacent cells.
    VonNeumann,
}

/// Placement, movement and neighbour lookup for agents on a 2-D grid.
///
/// # Implementing
///
/// Only the cell-level primitives are required.  [`neighbors`][Self::neighbors]
/// and [`random_cell`][Self::random_cell] have defaults built on top of them.
pub trait SpatialIndex {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Put an unplaced agent on `cell`.
    fn place(&mut self, agent: AgentId, cell: Cell) -> GridResult<()>;

    /// Move a placed agent to `to`.
    fn move_agent(&mut self, agent: AgentId, to: Cell) -> GridResult<()>;

    /// Current cell of `agent`, or `None` if it was never placed.
    fn position(&self, agent: AgentId) -> Option<Cell>;

    /// Every agent in `cell`, in placement order.  Empty for unknown cells.
    fn agents_at(&self, cell: Cell) -> &[AgentId];

    /// Cells adjacent to `cell` under `mode`, without duplicates.
    ///
    /// `cell` itself is only included when `include_center` is set.
    fn neighborhood(&self, cell: Cell, mode: Neighborhood, include_center: bool) -> Vec<Cell>;

    /// Agents in the neighbourhood of `cell`.
    fn neighbors(&self, cell: Cell, mode: Neighborhood, include_center: bool) -> Vec<AgentId> {
        self.neighborhood(cell, mode, include_center)
            .into_iter()
            .flat_map(|c| self.agents_at(c).iter().copied())
            .collect()
    }

    /// A uniformly random cell of the grid.
    fn random_cell(&self, rng: &mut SimRng) -> Cell {
        Cell::new(rng.gen_range(0..self.width()), rng.gen_range(0..self.height()))
    }
}
