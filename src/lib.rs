use std::ops::Index;

mod fmt;
pub mod heap;
mod parse;
pub mod solve;

pub use solve::{Grouping, Path, Reach};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    exit_row: usize,
    cells: Box<[Cell]>,
}

impl Index<Pos> for Grid {
    type Output = Cell;
    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.row * self.width + pos.column]
    }
}

impl Grid {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn exit_row(&self) -> usize {
        self.exit_row
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Pos::new(i / width, i % width), cell))
    }

    fn is_open(&self, pos: Pos) -> bool {
        self[pos] == Cell::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Obstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub column: usize,
}

impl Pos {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    pub fn reversed(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pos: Pos,
    links: [Option<NodeId>; 4],
}

impl Node {
    fn new(pos: Pos) -> Self {
        Self {
            pos,
            links: [None; 4],
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The immediate neighbor in `dir`, not the slide target.
    pub fn link(&self, dir: Direction) -> Option<NodeId> {
        self.links[dir as usize]
    }
}

/// The pond as a node arena.
///
/// Every open cell owns one node, plus a single exit node placed one column
/// past the right edge of the exit row. Lookups by position cover
/// `height * (width + 1)` slots; the extra column only holds the exit.
#[derive(Debug, Clone)]
pub struct Graph {
    height: usize,
    width: usize,
    nodes: Box<[Node]>,
    slots: Box<[Option<NodeId>]>,
    exit: NodeId,
}

impl Index<NodeId> for Graph {
    type Output = Node;
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0 as usize]
    }
}

impl Graph {
    /// Build the adjacency graph of `grid`.
    ///
    /// # Panics
    /// If the exit row lies outside the grid, or the grid has more cells than
    /// a [`NodeId`] can address.
    pub fn new(grid: &Grid) -> Self {
        assert!(
            grid.exit_row < grid.height,
            "Exit row {} out of bound {}",
            grid.exit_row,
            grid.height,
        );
        // Every open cell plus the exit must fit a `NodeId`.
        assert!(
            grid.height
                .checked_mul(grid.width)
                .is_some_and(|cells| cells < u32::MAX as usize),
            "Pond of {}x{} cells is too large",
            grid.height,
            grid.width,
        );

        let stride = grid.width + 1;
        let mut nodes: Vec<Node> = Vec::new();
        let mut slots = vec![None; grid.height * stride];

        for (pos, _) in grid.cells().filter(|&(pos, _)| grid.is_open(pos)) {
            let id = NodeId(nodes.len() as u32);
            nodes.push(Node::new(pos));
            slots[pos.row * stride + pos.column] = Some(id);

            // Neighbors to the left and above already exist; the ones to the
            // right and below link back to us when they are created.
            let earlier = [
                (pos.column.checked_sub(1).map(|c| Pos::new(pos.row, c)), Direction::Left),
                (pos.row.checked_sub(1).map(|r| Pos::new(r, pos.column)), Direction::Up),
            ];
            for (other, dir) in earlier {
                let Some(other) = other.and_then(|p| slots[p.row * stride + p.column]) else {
                    continue;
                };
                nodes[id.0 as usize].links[dir as usize] = Some(other);
                nodes[other.0 as usize].links[dir.reversed() as usize] = Some(id);
            }
        }

        let exit_pos = Pos::new(grid.exit_row, grid.width);
        let exit = NodeId(nodes.len() as u32);
        nodes.push(Node::new(exit_pos));
        slots[exit_pos.row * stride + exit_pos.column] = Some(exit);
        // The exit is only a slide target: it carries no links of its own.
        let last = (grid.width > 0)
            .then(|| slots[grid.exit_row * stride + grid.width - 1])
            .flatten();
        if let Some(last) = last {
            nodes[last.0 as usize].links[Direction::Right as usize] = Some(exit);
        }

        log::debug!(
            "Built graph of {} nodes for a {}x{} pond, exit at {exit_pos}",
            nodes.len(),
            grid.height,
            grid.width,
        );

        Self {
            height: grid.height,
            width: grid.width,
            nodes: nodes.into(),
            slots: slots.into(),
            exit,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn exit(&self) -> NodeId {
        self.exit
    }

    /// Node at `pos`, where `pos.column` may be `width` for the exit.
    pub fn at(&self, pos: Pos) -> Option<NodeId> {
        if self.height <= pos.row || self.width < pos.column {
            return None;
        }
        self.slots[pos.row * (self.width + 1) + pos.column]
    }

    /// Nodes of open cells, column by column, top to bottom.
    pub fn open_cells(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.width)
            .flat_map(move |column| (0..self.height).map(move |row| Pos::new(row, column)))
            .filter_map(|pos| self.at(pos))
    }

    /// Follow links in `dir` until none is left.
    ///
    /// Returns `start` itself if it has no neighbor in that direction.
    pub fn slide(&self, start: NodeId, dir: Direction) -> NodeId {
        let mut cur = start;
        while let Some(next) = self[cur].link(dir) {
            cur = next;
        }
        cur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "too large")]
    fn oversized_pond() {
        let grid = Grid {
            height: 1 << 16,
            width: 1 << 16,
            exit_row: 0,
            cells: Box::new([]),
        };
        Graph::new(&grid);
    }
}
