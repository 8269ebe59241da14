use crate::board::Placement;
use std::collections::VecDeque;

/// Solver that iteratively returns solutions to the `n` queens puzzle.
#[derive(Debug)]
pub struct Solver {
    side_length: usize,

    // Values used to track the state of solving
    partial_assignment: Vec<Placement>,
    stack: Vec<Frame>,
    pending_empty_solution: bool,
}

#[derive(Debug)]
enum FrameState {
    // Before placing a queen in this frame's row
    Place,
    // After descending, before removing the queen again
    Remove,
}

#[derive(Debug)]
struct Frame {
    candidate_columns: VecDeque<usize>,
    state: FrameState,
}

impl Frame {
    fn new(side_length: usize) -> Self {
        Frame {
            candidate_columns: (1..=side_length).collect(),
            state: FrameState::Place,
        }
    }
}

impl Solver {
    /// Create a new `Solver` for a board with the given side length.
    pub fn new(side_length: usize) -> Self {
        let mut solver = Self {
            side_length,
            partial_assignment: Vec::with_capacity(side_length),
            stack: Vec::with_capacity(side_length),
            // A zero-size board is vacuously solved by the empty assignment,
            // so there is no frame to search; emit that solution exactly once.
            pending_empty_solution: side_length == 0,
        };

        if side_length > 0 {
            solver.stack.push(Frame::new(side_length));
        }

        solver
    }

    /// Reset all solver state, so that iteration restarts from the first
    /// solution.
    pub fn reset(&mut self) {
        self.partial_assignment.clear();
        self.stack.clear();
        self.pending_empty_solution = self.side_length == 0;

        if self.side_length > 0 {
            self.stack.push(Frame::new(self.side_length));
        }
    }

    /// Return all remaining solutions.
    pub fn all_solutions(&mut self) -> Vec<Vec<Placement>> {
        self.collect()
    }

    /// Compute up to the next solution, returning `None` if there are no
    /// more.
    pub fn next_solution(&mut self) -> Option<Vec<Placement>> {
        enum StackOp {
            Push(Frame),
            Pop,
            None,
        }

        if self.pending_empty_solution {
            self.pending_empty_solution = false;
            return Some(Vec::new());
        }

        while !self.stack.is_empty() {
            let curr_frame = self.stack.last_mut().unwrap();
            // The frame's row is implied by how deep its queen sits in the
            // assignment.
            let row = self.partial_assignment.len() + 1;

            let (stack_op, possible_solution) = match curr_frame.state {
                // Scan this row's remaining candidate columns until one
                // survives the conflict check against every queen already
                // placed.
                FrameState::Place => loop {
                    let Some(column) = curr_frame.candidate_columns.pop_front() else {
                        // Row exhausted, backtrack to the previous row.
                        break (StackOp::Pop, None);
                    };

                    let candidate = Placement { row, column };
                    let conflict = self
                        .partial_assignment
                        .iter()
                        .any(|queen| queen.conflicts(candidate, self.side_length));
                    if conflict {
                        continue;
                    }

                    self.partial_assignment.push(candidate);
                    curr_frame.state = FrameState::Remove;

                    // This is where the recursion happens, unless the last
                    // row was just filled.
                    if row == self.side_length {
                        break (StackOp::None, Some(self.partial_assignment.clone()));
                    } else {
                        break (StackOp::Push(Frame::new(self.side_length)), None);
                    }
                },
                // Cleanup the current row: remove its queen and resume the
                // candidate scan at the next column.
                FrameState::Remove => {
                    self.partial_assignment.pop();
                    curr_frame.state = FrameState::Place;

                    (StackOp::None, None)
                }
            };

            match stack_op {
                StackOp::Push(frame) => {
                    self.stack.push(frame);
                }
                StackOp::Pop => {
                    self.stack.pop();
                }
                StackOp::None => {}
            }

            if let Some(solution) = possible_solution {
                return Some(solution);
            }
        }

        None
    }
}

impl Iterator for Solver {
    type Item = Vec<Placement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, column: usize) -> Placement {
        Placement { row, column }
    }

    #[test]
    fn check_tiny_boards() {
        let empty_board_solutions = Solver::new(0).all_solutions();
        assert_eq!(empty_board_solutions, vec![Vec::new()]);

        let size_one_solutions = Solver::new(1).all_solutions();
        assert_eq!(size_one_solutions.len(), 1);
        assert_eq!(size_one_solutions[0], vec![p(1, 1)]);

        assert_eq!(Solver::new(2).count(), 0);
        assert_eq!(Solver::new(3).count(), 0);
    }

    #[test]
    fn check_small_board() {
        let mut solver = Solver::new(4);

        let first_solution = solver.next().unwrap();
        assert_eq!(first_solution, vec![p(1, 2), p(2, 4), p(3, 1), p(4, 3)]);

        let second_solution = solver.next().unwrap();
        assert_eq!(second_solution, vec![p(1, 3), p(2, 1), p(3, 4), p(4, 2)]);

        assert!(solver.next().is_none());
    }

    #[test]
    fn reset_restarts_iteration() {
        let mut solver = Solver::new(5);

        let first_pass = solver.all_solutions();
        solver.reset();
        let second_pass = solver.all_solutions();

        assert_eq!(first_pass.len(), 10);
        assert_eq!(first_pass, second_pass);
    }
}
