use board::{BoardSquare, Color, Piece, PieceKind};

/// The pieces on a board, one optional piece per square
///
/// This is a plain value: cloning it gives an independent snapshot that can be put back to undo
/// any changes made since.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    side_length: usize,
    cells: Vec<Option<Piece>>,
}

impl Placement {
    /// A board of the given side length with nothing on it
    pub fn empty(side_length: usize) -> Self {
        Self {
            side_length,
            cells: vec![None; side_length * side_length],
        }
    }

    /// The pieces at the start of a standard game
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut placement = Self::empty(8);
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            placement.place(kind, Color::Black, BoardSquare::from_row_file(0, file, 8));
            placement.place(PieceKind::Pawn, Color::Black, BoardSquare::from_row_file(1, file, 8));
            placement.place(PieceKind::Pawn, Color::White, BoardSquare::from_row_file(6, file, 8));
            placement.place(kind, Color::White, BoardSquare::from_row_file(7, file, 8));
        }
        placement
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Every square in order, for rendering
    pub fn cells(&self) -> &[Option<Piece>] {
        &self.cells
    }

    /// Returns whether the square is on this board
    pub fn contains(&self, square: BoardSquare) -> bool {
        square.is_valid(self.side_length)
    }

    /// Find the piece, if any, at the given square
    ///
    /// Returns `None` if the given square is off the board.
    pub fn get(&self, square: BoardSquare) -> Option<Piece> {
        self.cells.get(square.0).copied().flatten()
    }

    /// All the pieces on the board, in square order
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Which squares have something on them
    pub fn occupancy(&self) -> Vec<bool> {
        self.cells.iter().map(Option::is_some).collect()
    }

    /// The squares the piece on `origin` could move to under the current occupancy
    ///
    /// Empty if there is no piece there.
    pub fn pseudo_legal_moves(&self, origin: BoardSquare) -> Vec<BoardSquare> {
        self.get(origin).map_or_else(Vec::new, |piece| {
            piece.pseudo_legal_moves(&self.occupancy(), self.side_length)
        })
    }

    /// Put a new piece on the board, replacing whatever was there
    pub(crate) fn place(&mut self, kind: PieceKind, color: Color, square: BoardSquare) {
        if let Some(cell) = self.cells.get_mut(square.0) {
            *cell = Some(Piece::new(kind, color, square));
        }
    }

    /// Move the piece on `origin` to `target`, returning whatever was captured there
    ///
    /// Nothing happens if `origin` is empty or either square is off the board.
    pub(crate) fn relocate(&mut self, origin: BoardSquare, target: BoardSquare) -> Option<Piece> {
        if origin == target || !self.contains(target) {
            return None;
        }
        let mut piece = self.cells.get_mut(origin.0)?.take()?;
        piece.square = target;
        self.cells[target.0].replace(piece)
    }

    /// Take the piece off the given square
    pub(crate) fn remove(&mut self, square: BoardSquare) -> Option<Piece> {
        self.cells.get_mut(square.0)?.take()
    }

    /// Get the square on which the given player's King resides
    ///
    /// If there are several, the first in square order is used.
    pub fn king_square(&self, color: Color) -> Option<BoardSquare> {
        self.pieces()
            .find(|piece| piece.kind == PieceKind::King && piece.color == color)
            .map(|piece| piece.square)
    }

    /// Returns `true` if the given color's King could be captured by an opposing piece
    ///
    /// A side with no king is never in check.
    pub fn is_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };
        let occupancy = self.occupancy();
        self.pieces()
            .filter(|piece| piece.color != color)
            .any(|piece| {
                piece
                    .pseudo_legal_moves(&occupancy, self.side_length)
                    .contains(&king)
            })
    }
}
