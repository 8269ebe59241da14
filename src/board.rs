//! Positions on the chess board and the attack rule between them.
//!
//! The search places exactly one queen per row, so two placements can never
//! share a row; the conflict rule below only has to inspect columns and the
//! two diagonal families.

/// A queen's position on the chess board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    /// The row index, ranging from 1 to `n`.
    pub row: usize,
    /// The column index, ranging from 1 to `n`.
    pub column: usize,
}

impl Placement {
    /// Return the leading diagonal index for a given side length.
    ///
    /// This value ranges from 0 to `2 * n - 2`.
    pub fn leading_diagonal(self, side_length: usize) -> usize {
        ((self.column as i128 - self.row as i128) + (side_length - 1) as i128) as usize
    }

    /// Return the trailing diagonal index.
    ///
    /// The value ranges from 2 to `2 * n`.
    pub fn trailing_diagonal(self) -> usize {
        self.row + self.column
    }

    /// Return true if this `Placement` attacks `other` along a column or
    /// either diagonal family.
    pub fn conflicts(self, other: Placement, side_length: usize) -> bool {
        self.column == other.column
            || self.leading_diagonal(side_length) == other.leading_diagonal(side_length)
            || self.trailing_diagonal() == other.trailing_diagonal()
    }
}

/// Render a complete assignment as a single output line.
///
/// Every queen becomes a `Q<row>:<row>,<col>` token followed by a single
/// space. The trailing space is part of the format.
pub fn format_solution(solution: &[Placement]) -> String {
    let mut line = String::with_capacity(solution.len() * 8);
    for queen in solution {
        line.push_str(&format!("Q{}:{},{} ", queen.row, queen.row, queen.column));
    }
    line
}
