//! Per-module connectivity and corner rounding decisions.

/// One of the four edge directions of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Neighbor at (row - 1, col)
    Top,
    /// Neighbor at (row, col + 1)
    Right,
    /// Neighbor at (row + 1, col)
    Bottom,
    /// Neighbor at (row, col - 1)
    Left,
}

impl Direction {
    /// All directions in clockwise order starting at the top
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Row/column step towards the neighbor in this direction
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

/// One of the four corners of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

impl Corner {
    /// All corners, in drawing order
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The two edges that meet at this corner (vertical edge first)
    pub fn edges(self) -> (Direction, Direction) {
        match self {
            Corner::TopLeft => (Direction::Top, Direction::Left),
            Corner::TopRight => (Direction::Top, Direction::Right),
            Corner::BottomLeft => (Direction::Bottom, Direction::Left),
            Corner::BottomRight => (Direction::Bottom, Direction::Right),
        }
    }

    /// Whether the corner lies on the right / bottom side of the module
    pub fn is_far_side(self) -> (bool, bool) {
        match self {
            Corner::TopLeft => (false, false),
            Corner::TopRight => (true, false),
            Corner::BottomLeft => (false, true),
            Corner::BottomRight => (true, true),
        }
    }

    fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomLeft => 2,
            Corner::BottomRight => 3,
        }
    }
}

/// Shape of a single module corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerRounding {
    /// Quarter-circle cut-out
    Rounded,
    /// Left as the hard square corner
    Square,
}

/// Which of a module's four edge neighbors are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    /// Module above is filled
    pub top: bool,
    /// Module to the right is filled
    pub right: bool,
    /// Module below is filled
    pub bottom: bool,
    /// Module to the left is filled
    pub left: bool,
}

impl Neighbors {
    /// Neighbor flag for one direction
    pub fn connected(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// Number of filled edge neighbors
    pub fn count(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&d| self.connected(d))
            .count()
    }

    /// A corner stays square only when both edges meeting at it are connected.
    pub fn corner(&self, corner: Corner) -> CornerRounding {
        let (a, b) = corner.edges();
        if self.connected(a) && self.connected(b) {
            CornerRounding::Square
        } else {
            CornerRounding::Rounded
        }
    }

    /// Decisions for all four corners
    pub fn decisions(&self) -> CornerDecisions {
        let mut out = [CornerRounding::Rounded; 4];
        for corner in Corner::ALL {
            out[corner.index()] = self.corner(corner);
        }
        CornerDecisions(out)
    }
}

/// Rounding decision for each corner of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerDecisions([CornerRounding; 4]);

impl CornerDecisions {
    /// Every corner rounded
    pub const ALL_ROUNDED: CornerDecisions = CornerDecisions([CornerRounding::Rounded; 4]);

    /// Every corner square
    pub const ALL_SQUARE: CornerDecisions = CornerDecisions([CornerRounding::Square; 4]);

    /// Decision for one corner
    pub fn get(&self, corner: Corner) -> CornerRounding {
        self.0[corner.index()]
    }

    /// Corners that will be cut and re-rounded
    pub fn rounded(&self) -> impl Iterator<Item = Corner> + '_ {
        Corner::ALL
            .into_iter()
            .filter(move |&c| self.get(c) == CornerRounding::Rounded)
    }
}

/// A filled module with its position and neighbor flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    /// Grid row (0 = top)
    pub row: usize,
    /// Grid column (0 = left)
    pub col: usize,
    /// Filled edge neighbors
    pub neighbors: Neighbors,
}

impl Module {
    /// Corner decisions derived from the neighbor flags
    pub fn corners(&self) -> CornerDecisions {
        self.neighbors.decisions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_module_rounds_everything() {
        let n = Neighbors::default();
        assert_eq!(n.decisions(), CornerDecisions::ALL_ROUNDED);
        assert_eq!(n.count(), 0);
    }

    #[test]
    fn test_fully_surrounded_module_is_square() {
        let n = Neighbors {
            top: true,
            right: true,
            bottom: true,
            left: true,
        };
        assert_eq!(n.decisions(), CornerDecisions::ALL_SQUARE);
        assert_eq!(n.decisions().rounded().count(), 0);
    }

    #[test]
    fn test_square_requires_both_edges() {
        // Only left/right connected: a horizontal run keeps every corner rounded
        let run = Neighbors {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(run.decisions(), CornerDecisions::ALL_ROUNDED);

        // An L joint squares exactly the inner corner
        let elbow = Neighbors {
            top: true,
            left: true,
            ..Default::default()
        };
        let d = elbow.decisions();
        assert_eq!(d.get(Corner::TopLeft), CornerRounding::Square);
        assert_eq!(d.get(Corner::TopRight), CornerRounding::Rounded);
        assert_eq!(d.get(Corner::BottomLeft), CornerRounding::Rounded);
        assert_eq!(d.get(Corner::BottomRight), CornerRounding::Rounded);
    }

    #[test]
    fn test_corner_edges_are_adjacent() {
        for corner in Corner::ALL {
            let (a, b) = corner.edges();
            let (ar, ac) = a.offset();
            let (br, bc) = b.offset();
            // one vertical, one horizontal
            assert_eq!(ac, 0);
            assert_eq!(br, 0);
            assert_ne!(ar, 0);
            assert_ne!(bc, 0);
        }
    }
}
