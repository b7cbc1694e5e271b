/// Grid coordinate as `(row, col)`.
pub type Pos = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Obstacle,
    Wall,
    Player,
    Collided,
}

impl CellState {
    /// Two-column glyph used by the renderer.
    pub fn glyph(self) -> &'static str {
        match self {
            CellState::Empty => "  ",
            CellState::Obstacle => "██",
            CellState::Wall => "░░",
            CellState::Player => "<>",
            CellState::Collided => "**",
        }
    }

    pub fn is_player(self) -> bool {
        matches!(self, CellState::Player | CellState::Collided)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Positions of the four adjacent cells. Fixed once the board is assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors {
    pub up: Pos,
    pub down: Pos,
    pub left: Pos,
    pub right: Pos,
}

impl Neighbors {
    /// `pos` must be an interior position.
    pub(crate) fn of(pos: Pos) -> Self {
        let (row, col) = pos;
        Self {
            up: (row - 1, col),
            down: (row + 1, col),
            left: (row, col - 1),
            right: (row, col + 1),
        }
    }

    pub fn get(&self, dir: Direction) -> Pos {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Cell {
    pub state: CellState,
    links: Option<Neighbors>,
}

impl Cell {
    pub fn new(state: CellState) -> Self {
        Self { state, links: None }
    }

    pub(crate) fn link(&mut self, neighbors: Neighbors) {
        self.links = Some(neighbors);
    }

    /// Wall cells are never linked and return `None`.
    pub fn neighbor(&self, dir: Direction) -> Option<Pos> {
        self.links.map(|links| links.get(dir))
    }

    pub fn links(&self) -> Option<Neighbors> {
        self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_two_columns_and_distinct() {
        let states = [
            CellState::Empty,
            CellState::Obstacle,
            CellState::Wall,
            CellState::Player,
            CellState::Collided,
        ];
        for state in states {
            assert_eq!(state.glyph().chars().count(), 2, "{state:?}");
        }
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }

    #[test]
    fn unlinked_cell_has_no_neighbors() {
        let cell = Cell::new(CellState::Wall);
        assert_eq!(cell.neighbor(Direction::Left), None);
    }

    #[test]
    fn linked_cell_points_at_adjacent_positions() {
        let mut cell = Cell::default();
        cell.link(Neighbors::of((2, 5)));
        assert_eq!(cell.neighbor(Direction::Up), Some((1, 5)));
        assert_eq!(cell.neighbor(Direction::Down), Some((3, 5)));
        assert_eq!(cell.neighbor(Direction::Left), Some((2, 4)));
        assert_eq!(cell.neighbor(Direction::Right), Some((2, 6)));
    }
}
