//! Pseudo-legal move generation for a single piece
//!
//! Generation only knows which squares are occupied, not by whom, so the returned squares include
//! capture candidates that may hold a friendly piece. Filtering those out, and anything to do with
//! check, is left to the board.

use crate::{BoardSquare, Color, Piece, PieceKind};

/// Directions a rook walks in, as `(rows, files)`
const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Directions a bishop walks in, as `(rows, files)`
const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// The jumps a knight can make, as `(rows, files)`
const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
];

impl Piece {
    /// Every square this piece could move to or capture on.
    ///
    /// `obstructions` marks the occupied squares of a board with the given side length. The
    /// piece's own square is never treated as an obstruction. The result is in a fixed order and
    /// has no duplicates. A piece standing off the board has no moves.
    ///
    /// ```
    /// use board::{BoardSquare, Color, Piece, PieceKind};
    ///
    /// let knight = Piece::new(PieceKind::Knight, Color::White, BoardSquare::A1);
    /// let mut moves = knight.pseudo_legal_moves(&[false; 64], 8);
    /// moves.sort();
    /// assert_eq!(moves, vec![BoardSquare::B3, BoardSquare::C2]);
    /// ```
    pub fn pseudo_legal_moves(
        &self,
        obstructions: &[bool],
        side_length: usize,
    ) -> Vec<BoardSquare> {
        debug_assert_eq!(obstructions.len(), side_length * side_length);
        if !self.square.is_valid(side_length) {
            return Vec::new();
        }
        match self.kind {
            PieceKind::King => king_moves(self.square, side_length),
            // Break the queen down into a rook and a bishop
            PieceKind::Queen => {
                let mut moves = Piece {
                    kind: PieceKind::Rook,
                    ..*self
                }
                .pseudo_legal_moves(obstructions, side_length);
                moves.extend(
                    Piece {
                        kind: PieceKind::Bishop,
                        ..*self
                    }
                    .pseudo_legal_moves(obstructions, side_length),
                );
                moves
            }
            PieceKind::Rook => slide(self.square, &ROOK_DIRECTIONS, obstructions, side_length),
            PieceKind::Bishop => slide(self.square, &BISHOP_DIRECTIONS, obstructions, side_length),
            PieceKind::Knight => KNIGHT_JUMPS
                .iter()
                .filter_map(|&(rows, files)| self.square.offset(rows, files, side_length))
                .collect(),
            PieceKind::Pawn => pawn_moves(self.square, self.color, obstructions, side_length),
        }
    }
}

fn is_occupied(obstructions: &[bool], square: BoardSquare) -> bool {
    obstructions.get(square.0).copied().unwrap_or(false)
}

/// The up to 8 neighbouring squares
fn king_moves(square: BoardSquare, side_length: usize) -> Vec<BoardSquare> {
    let (row, file) = (square.row(side_length), square.file(side_length));
    let up = row > 0;
    let down = row + 1 < side_length;
    let left = file > 0;
    let right = file + 1 < side_length;

    let n = side_length;
    let index = square.0;
    let mut moves = Vec::with_capacity(8);
    if up && left {
        moves.push(BoardSquare(index - n - 1));
    }
    if up {
        moves.push(BoardSquare(index - n));
    }
    if up && right {
        moves.push(BoardSquare(index - n + 1));
    }
    if right {
        moves.push(BoardSquare(index + 1));
    }
    if down && right {
        moves.push(BoardSquare(index + n + 1));
    }
    if down {
        moves.push(BoardSquare(index + n));
    }
    if down && left {
        moves.push(BoardSquare(index + n - 1));
    }
    if left {
        moves.push(BoardSquare(index - 1));
    }
    moves
}

/// Walk each direction until leaving the board, stopping on (and including) the first occupied
/// square
fn slide(
    square: BoardSquare,
    directions: &[(isize, isize)],
    obstructions: &[bool],
    side_length: usize,
) -> Vec<BoardSquare> {
    let mut moves = Vec::new();
    for &(rows, files) in directions {
        let mut current = square;
        while let Some(next) = current.offset(rows, files, side_length) {
            moves.push(next);
            if is_occupied(obstructions, next) {
                break;
            }
            current = next;
        }
    }
    moves
}

/// One step forward onto an empty square, or diagonally forward onto an occupied one
fn pawn_moves(
    square: BoardSquare,
    color: Color,
    obstructions: &[bool],
    side_length: usize,
) -> Vec<BoardSquare> {
    let forward = color.pawn_direction();
    let mut moves = Vec::with_capacity(3);
    if let Some(ahead) = square.offset(forward, 0, side_length) {
        if !is_occupied(obstructions, ahead) {
            moves.push(ahead);
        }
    }
    for files in [-1, 1] {
        if let Some(diagonal) = square.offset(forward, files, side_length) {
            if is_occupied(obstructions, diagonal) {
                moves.push(diagonal);
            }
        }
    }
    moves
}
