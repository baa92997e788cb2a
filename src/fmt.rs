use std::fmt;

use crate::{Cell, Grid, Grouping, Pos, Reach};

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {}", self.height, self.width, self.exit_row)?;
        for (pos, cell) in self.cells() {
            cell.fmt(f)?;
            if pos.column + 1 == self.width {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Open => ".".fmt(f),
            Cell::Obstacle => "*".fmt(f),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

impl fmt::Display for Reach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reach::Steps(n) => n.fmt(f),
            Reach::NoPath => "No path".fmt(f),
        }
    }
}

/// Reachable groups by ascending distance, then the unreachable ones.
impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No starting square.");
        }
        let mut groups = self.iter().collect::<Vec<_>>();
        groups.sort_by_key(|&(reach, _)| reach);
        for (reach, cells) in groups {
            write!(f, "{reach}:")?;
            for pos in cells {
                write!(f, " {pos}")?;
            }
            "\n".fmt(f)?;
        }
        Ok(())
    }
}
