//! Dense multi-occupancy grid.
//!
//! # Data layout
//!
//! Cell contents live in a row-major `Vec<Vec<AgentId>>` (`y * width + x`),
//! and each agent's cell in a `Vec<Option<Cell>>` indexed by `AgentId`.  Both
//! lookups are O(1); moving an agent is a linear scan of its old cell, which
//! holds a handful of agents at most.
//!
//! With `torus = true` (the default) coordinates wrap at the edges, so every
//! cell has a full neighbourhood.  On grids narrower than three cells the
//! wrapped offsets collide; those duplicates, and the centre cell itself, are
//! filtered out.

use rh_core::{AgentId, Cell};

use crate::{GridError, GridResult, Neighborhood, SpatialIndex};

const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

const VON_NEUMANN_OFFSETS: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// A `width × height` grid where any number of agents may share a cell.
#[derive(Clone, Debug)]
pub struct MultiGrid {
    width:     u32,
    height:    u32,
    torus:     bool,
    cells:     Vec<Vec<AgentId>>,
    positions: Vec<Option<Cell>>,
}

impl MultiGrid {
    /// A wrap-around grid.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        Self::with_torus(width, height, true)
    }

    pub fn with_torus(width: u32, height: u32, torus: bool) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            torus,
            cells:     vec![Vec::new(); width as usize * height as usize],
            positions: Vec::new(),
        })
    }

    #[inline]
    pub fn is_torus(&self) -> bool {
        self.torus
    }

    /// Number of placed agents.
    pub fn placed_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }

    #[inline]
    fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    #[inline]
    fn slot(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    fn check(&self, cell: Cell) -> GridResult<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { cell, width: self.width, height: self.height })
        }
    }

    /// Apply an offset, wrapping on a torus and rejecting edges otherwise.
    fn offset(&self, cell: Cell, (dx, dy): (i64, i64)) -> Option<Cell> {
        let x = cell.x as i64 + dx;
        let y = cell.y as i64 + dy;
        let (w, h) = (self.width as i64, self.height as i64);
        if self.torus {
            Some(Cell::new(x.rem_euclid(w) as u32, y.rem_euclid(h) as u32))
        } else if (0..w).contains(&x) && (0..h).contains(&y) {
            Some(Cell::new(x as u32, y as u32))
        } else {
            None
        }
    }
}

impl SpatialIndex for MultiGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn place(&mut self, agent: AgentId, cell: Cell) -> GridResult<()> {
        self.check(cell)?;
        if self.position(agent).is_some() {
            return Err(GridError::AlreadyPlaced(agent));
        }
        if self.positions.len() <= agent.index() {
            self.positions.resize(agent.index() + 1, None);
        }
        self.positions[agent.index()] = Some(cell);
        let slot = self.slot(cell);
        self.cells[slot].push(agent);
        Ok(())
    }

    fn move_agent(&mut self, agent: AgentId, to: Cell) -> GridResult<()> {
        self.check(to)?;
        let from = self.position(agent).ok_or(GridError::NotPlaced(agent))?;
        if from == to {
            return Ok(());
        }
        let old = self.slot(from);
        self.cells[old].retain(|&a| a != agent);
        let new = self.slot(to);
        self.cells[new].push(agent);
        self.positions[agent.index()] = Some(to);
        Ok(())
    }

    fn position(&self, agent: AgentId) -> Option<Cell> {
        self.positions.get(agent.index()).copied().flatten()
    }

    fn agents_at(&self, cell: Cell) -> &[AgentId] {
        if !self.contains(cell) {
            return &[];
        }
        &self.cells[self.slot(cell)]
    }

    fn neighborhood(&self, cell: Cell, mode: Neighborhood, include_center: bool) -> Vec<Cell> {
        let offsets: &[(i64, i64)] = match mode {
            Neighborhood::Moore      => &MOORE_OFFSETS,
            Neighborhood::VonNeumann => &VON_NEUMANN_OFFSETS,
        };

        let mut out = Vec::with_capacity(offsets.len() + 1);
        if include_center && self.contains(cell) {
            out.push(cell);
        }
        for &off in offsets {
            if let Some(c) = self.offset(cell, off) {
                if c != cell && !out.contains(&c) {
                    out.push(c);
                }
            }
        }
        out
    }
}
