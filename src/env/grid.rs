use super::Observation;

/// Symbol marking the agent on a text board
pub const FROG: char = 'F';

/// Symbols treated as an empty cell on a text board
const BLANKS: [char; 2] = ['.', ' '];

/// A plain text-board [`Observation`]
///
/// Rows are listed top to bottom, with the goal row at the top. Every cell holds either a
/// blank (`.` or space), the frog (`F`), or an arbitrary obstacle symbol. Progress is measured
/// in rows climbed from the bottom of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    cells: Vec<Vec<Option<char>>>,
    x: i32,
    y: i32,
    at_goal: bool,
    is_done: bool,
    score: f64,
}

impl GridSnapshot {
    /// Parse a board from newline-separated rows
    ///
    /// **Returns** `None` if the board does not contain exactly one frog
    pub fn parse(board: &str) -> Option<Self> {
        let mut frog = None;
        let mut cells = Vec::new();
        for (y, line) in board.lines().enumerate() {
            let mut row = Vec::new();
            for (x, c) in line.chars().enumerate() {
                if c == FROG {
                    if frog.replace((x as i32, y as i32)).is_some() {
                        return None;
                    }
                    row.push(None);
                } else if BLANKS.contains(&c) {
                    row.push(None);
                } else {
                    row.push(Some(c));
                }
            }
            cells.push(row);
        }
        let (x, y) = frog?;

        Some(Self {
            cells,
            x,
            y,
            at_goal: y == 0,
            is_done: y == 0,
            score: 0.0,
        })
    }

    /// Mark the snapshot as a goal state with the given score
    pub fn with_goal(mut self, score: f64) -> Self {
        self.at_goal = true;
        self.is_done = true;
        self.score = score;
        self
    }

    /// Mark the snapshot as a failed terminal state
    pub fn with_failure(mut self) -> Self {
        self.at_goal = false;
        self.is_done = true;
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    fn height(&self) -> usize {
        self.cells.len()
    }
}

impl Observation for GridSnapshot {
    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    fn occupant_at(&self, dx: i32, dy: i32) -> Option<char> {
        let x = usize::try_from(self.x + dx).ok()?;
        let y = usize::try_from(self.y + dy).ok()?;
        self.cells.get(y)?.get(x).copied().flatten()
    }

    fn at_goal(&self) -> bool {
        self.at_goal
    }

    fn is_done(&self) -> bool {
        self.is_done
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn progress(&self) -> f64 {
        (self.height() as f64 - 1.0) - self.y as f64
    }

    fn max_progress(&self) -> f64 {
        self.height() as f64 - 1.0
    }
}
