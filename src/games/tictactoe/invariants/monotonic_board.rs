//! Monotonic board check: a move fills exactly one empty square.

use super::super::{Board, Mark, Square};

/// Checks that `after` differs from `before` in exactly one square, which
/// went from empty to `mark`.
pub fn is_single_placement(before: &Board, after: &Board, mark: Mark) -> bool {
    let mut changed = before
        .squares()
        .iter()
        .zip(after.squares())
        .filter(|(b, a)| b != a);

    matches!(
        (changed.next(), changed.next()),
        (Some((Square::Empty, Square::Occupied(m))), None) if *m == mark
    )
}
