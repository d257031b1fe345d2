use core::fmt;

use board::{
    Board, BoardConfig, BoardSquare, Color, ConfigError, Piece, PieceKind, SquareParseError,
};

mod castling;
mod fen;
#[cfg(test)]
mod logger;
mod placement;

pub use crate::castling::CastleRights;
pub use crate::placement::Placement;

pub type Result<T, E = FenError> = core::result::Result<T, E>;

/// Everything that can be wrong with a FEN string
///
/// Parsing either produces a whole board or one of these; no partially built board escapes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FenError {
    #[error("board configuration is invalid: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("expected {expected} FEN components, found {found}")]
    WrongComponentCount { expected: usize, found: usize },
    #[error("rank {rank:?} doesn't describe exactly {expected} squares")]
    RankWidth { rank: String, expected: usize },
    #[error("unrecognized piece letter {0:?}")]
    InvalidPiece(char),
    #[error("active color must be `w` or `b`, not {0:?}")]
    InvalidSideToMove(String),
    #[error("unrecognized castling right {0:?}")]
    InvalidCastlingRight(char),
    #[error("invalid en passant square: {0}")]
    InvalidEnPassant(#[from] SquareParseError),
    #[error("{field} must be a {expected} integer, not {value:?}")]
    InvalidClock {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Why a move was refused
///
/// Illegal moves are an ordinary outcome, so these only ever reach the caller as `false`, with the
/// reason logged at debug level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum Rejection {
    #[error("square is off the board")]
    OffBoard,
    #[error("required piece not found at move source")]
    SourcePieceMissing,
    #[error("target square holds a piece of the moving side")]
    OwnPieceAtTarget,
    #[error("piece can't move to the target square")]
    Unreachable,
    #[error("attempted en passant not allowed in current board state")]
    IllegalEnPassant,
    #[error("castling right has been lost")]
    CastleRightRevoked,
    #[error("no rook to castle with, or pieces in the way")]
    CastlePathBlocked,
    #[error("can't castle out of check")]
    CastleOutOfCheck,
    #[error("can't castle through an attacked square")]
    CastleThroughCheck,
    #[error("can't castle into check")]
    CastleIntoCheck,
}

/// What a successful move did, for the bookkeeping that follows it
#[derive(Clone, Copy, Debug)]
pub(crate) struct MoveOutcome {
    pub(crate) piece: Piece,
    pub(crate) target: BoardSquare,
    pub(crate) is_capture: bool,
    /// The square skipped by a pawn's double step, which may be captured through next move
    pub(crate) skipped: Option<BoardSquare>,
}

/// A board stored as one optional piece per square, plus the state of the game
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailboxRepresentation {
    config: BoardConfig,
    placement: Placement,
    side_to_move: Color,
    /// What castles are allowed, given the history of moves
    ///
    /// These castles aren't necessarily legal right now, as it may be blocked by intervening
    /// pieces and/or checks.
    castles: CastleRights,
    /// The square a pawn skipped on the previous move, if it double-stepped
    en_passant_target: Option<BoardSquare>,
    /// Number of half-moves since pawn was moved or piece was captured
    halfmove_clock: u32,
    /// The number of turns elapsed in the game, starting at 1
    fullmove_number: u32,
}

impl MailboxRepresentation {
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn side_length(&self) -> usize {
        self.config.side_length
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Every square in order, from the top-left corner
    pub fn cells(&self) -> &[Option<Piece>] {
        self.placement.cells()
    }

    /// Find the piece, if any, at the given square
    pub fn get(&self, square: BoardSquare) -> Option<Piece> {
        self.placement.get(square)
    }

    pub fn castling_rights(&self) -> CastleRights {
        self.castles
    }

    pub fn en_passant_target(&self) -> Option<BoardSquare> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The squares the piece on `origin` could move to, leaving out its own side's pieces
    ///
    /// Like [`Board::is_legal_move`], this doesn't include castling, en passant or double steps.
    pub fn pseudo_legal_moves(&self, origin: BoardSquare) -> Vec<BoardSquare> {
        let Some(piece) = self.placement.get(origin) else {
            return Vec::new();
        };
        self.placement
            .pseudo_legal_moves(origin)
            .into_iter()
            .filter(|&square| {
                self.placement
                    .get(square)
                    .map_or(true, |other| other.color != piece.color)
            })
            .collect()
    }

    fn square_name(&self, square: BoardSquare) -> String {
        if square.is_valid(self.side_length()) {
            square.to_algebraic(self.side_length())
        } else {
            square.to_string()
        }
    }

    /// Work out which kind of move this is and perform it on the pieces.
    ///
    /// On failure the pieces are as they were, though castling rights found to be impossible may
    /// have been dropped along the way.
    fn try_move(
        &mut self,
        origin: BoardSquare,
        target: BoardSquare,
    ) -> Result<MoveOutcome, Rejection> {
        if !self.placement.contains(origin) || !self.placement.contains(target) {
            return Err(Rejection::OffBoard);
        }
        let piece = self
            .placement
            .get(origin)
            .ok_or(Rejection::SourcePieceMissing)?;
        if self
            .placement
            .get(target)
            .is_some_and(|other| other.color == piece.color)
        {
            return Err(Rejection::OwnPieceAtTarget);
        }

        if self.is_legal_move(origin, target) {
            let captured = self.placement.relocate(origin, target);
            return Ok(MoveOutcome {
                piece,
                target,
                is_capture: captured.is_some(),
                skipped: None,
            });
        }

        match piece.kind {
            PieceKind::Pawn => {
                if let Some(skipped) = self.double_step(piece, target) {
                    tracing::trace!(square = %self.square_name(skipped), "pawn double step");
                    self.placement.relocate(origin, target);
                    return Ok(MoveOutcome {
                        piece,
                        target,
                        is_capture: false,
                        skipped: Some(skipped),
                    });
                }
                self.try_en_passant(piece, target)
            }
            PieceKind::King => self.try_castle(piece, target),
            _ => Err(Rejection::Unreachable),
        }
    }

    /// If `target` is two squares straight ahead of a pawn that hasn't left its starting row, with
    /// both squares empty, returns the square it skips.
    fn double_step(&self, pawn: Piece, target: BoardSquare) -> Option<BoardSquare> {
        let side_length = self.side_length();
        if pawn.square.row(side_length) != self.config.pawn_start_row(pawn.color) {
            return None;
        }
        let forward = pawn.color.pawn_direction();
        let skipped = pawn.square.offset(forward, 0, side_length)?;
        let landing = skipped.offset(forward, 0, side_length)?;
        (landing == target
            && self.placement.get(skipped).is_none()
            && self.placement.get(landing).is_none())
        .then_some(skipped)
    }

    /// Capture a pawn which just double-stepped past `target`
    fn try_en_passant(
        &mut self,
        pawn: Piece,
        target: BoardSquare,
    ) -> Result<MoveOutcome, Rejection> {
        let Some(en_passant_target) = self.en_passant_target else {
            return Err(Rejection::Unreachable);
        };
        if target != en_passant_target {
            return Err(Rejection::Unreachable);
        }
        // Pretend the skipped square is occupied, so the pawn's diagonal capture reaches it
        let mut obstructions = self.placement.occupancy();
        if let Some(skipped) = obstructions.get_mut(target.0) {
            *skipped = true;
        }
        if !pawn
            .pseudo_legal_moves(&obstructions, self.side_length())
            .contains(&target)
        {
            return Err(Rejection::IllegalEnPassant);
        }
        // The double-stepped pawn stands beside the capturing one, on the target's file
        let side_length = self.side_length();
        let captured = BoardSquare::from_row_file(
            pawn.square.row(side_length),
            target.file(side_length),
            side_length,
        );
        match self.placement.get(captured) {
            Some(Piece {
                kind: PieceKind::Pawn,
                color,
                ..
            }) if color != pawn.color => {}
            _ => return Err(Rejection::IllegalEnPassant),
        }
        tracing::trace!(captured = %self.square_name(captured), "en passant");
        self.placement.relocate(pawn.square, target);
        self.placement.remove(captured);
        Ok(MoveOutcome {
            piece: pawn,
            target,
            is_capture: true,
            skipped: None,
        })
    }

    /// Update the game state after a successful move
    fn finish_move(&mut self, origin: BoardSquare, outcome: MoveOutcome) {
        self.castles = self
            .castles
            .after_move(outcome.piece, origin, outcome.target, self.config);
        self.en_passant_target = outcome.skipped;
        if outcome.is_capture || outcome.piece.kind == PieceKind::Pawn {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.other();
        if self.side_to_move == Color::White {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
    }
}

impl Board for MailboxRepresentation {
    type Err = FenError;

    fn from_fen(fen: &str) -> Result<Self> {
        Self::with_config(fen, BoardConfig::STANDARD)
    }

    fn to_fen(&self) -> String {
        fen::write(self)
    }

    fn initial_state() -> Self {
        Self {
            config: BoardConfig::STANDARD,
            placement: Placement::standard(),
            side_to_move: Color::White,
            castles: CastleRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn is_legal_move(&self, origin: BoardSquare, target: BoardSquare) -> bool {
        self.placement.pseudo_legal_moves(origin).contains(&target)
    }

    fn apply_move(
        &mut self,
        origin: BoardSquare,
        target: BoardSquare,
        enforce_rules: bool,
    ) -> bool {
        if !enforce_rules {
            if self.placement.get(origin).is_none() || !self.placement.contains(target) {
                return false;
            }
            self.placement.relocate(origin, target);
            return true;
        }
        match self.try_move(origin, target) {
            Ok(outcome) => {
                tracing::trace!(
                    origin = %self.square_name(origin),
                    target = %self.square_name(target),
                    piece = ?outcome.piece.kind,
                    "move applied",
                );
                self.finish_move(origin, outcome);
                true
            }
            Err(reason) => {
                tracing::debug!(
                    origin = %self.square_name(origin),
                    target = %self.square_name(target),
                    %reason,
                    "move rejected",
                );
                false
            }
        }
    }

    fn is_check(&self, color: Color) -> bool {
        self.placement.is_check(color)
    }
}

/// Display as a grid of FEN letters, with `.` for empty squares
///
/// ```
/// use board::Board;
/// use mailbox::MailboxRepresentation;
///
/// let board = MailboxRepresentation::from_fen("8/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
/// assert_eq!(
///     board.to_string(),
///     "........\n........\n........\n........\n........\n........\n........\nR...K...\n",
/// );
/// ```
impl fmt::Display for MailboxRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for row in self.cells().chunks(self.side_length()) {
            for cell in row {
                f.write_char(cell.map_or('.', Piece::fen_letter))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::logger::setup_logger;

    use quickcheck::quickcheck;

    pub(crate) const STARTING_FEN: &str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[track_caller]
    pub(crate) fn board(fen: &str) -> MailboxRepresentation {
        setup_logger();
        MailboxRepresentation::from_fen(fen).expect("test FEN should parse")
    }

    #[track_caller]
    pub(crate) fn sq(name: &str) -> BoardSquare {
        BoardSquare::from_algebraic(name, 8).expect("test square should parse")
    }

    quickcheck! {
        /// Failed moves never touch the board, and successful ones always hand over the turn
        fn test_turn_flips_only_on_success(moves: Vec<(u8, u8)>) -> bool {
            setup_logger();
            let mut board = MailboxRepresentation::initial_state();
            for (origin, target) in moves {
                let origin = BoardSquare(origin as usize % 64);
                let target = BoardSquare(target as usize % 64);
                let before = board.clone();
                if board.apply_move(origin, target, true) {
                    if board.side_to_move() == before.side_to_move() {
                        return false;
                    }
                } else if board != before {
                    return false;
                }
            }
            true
        }

        /// Every piece keeps track of the square it stands on
        fn test_piece_squares_stay_in_sync(moves: Vec<(u8, u8)>) -> bool {
            let mut board = MailboxRepresentation::initial_state();
            for (origin, target) in moves {
                let origin = BoardSquare(origin as usize % 64);
                let target = BoardSquare(target as usize % 64);
                board.apply_move(origin, target, true);
            }
            board
                .cells()
                .iter()
                .enumerate()
                .all(|(index, cell)| cell.map_or(true, |piece| piece.square == BoardSquare(index)))
        }
    }

    #[test]
    fn test_starting_position() {
        let board = board(STARTING_FEN);
        assert_eq!(board, MailboxRepresentation::initial_state());
        assert_eq!(board.cells().len(), 64);
        assert_eq!(board.cells().iter().flatten().count(), 32);
        for color in [Color::White, Color::Black] {
            assert_eq!(
                board.cells().iter().flatten().filter(|p| p.color == color).count(),
                16
            );
        }
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.castling_rights(), CastleRights::all());
        assert_eq!(board.en_passant_target(), None);
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (0, 1));
    }

    #[test]
    fn test_is_legal_move() {
        let board = board(STARTING_FEN);
        assert!(board.is_legal_move(sq("g1"), sq("f3")));
        assert!(board.is_legal_move(sq("e2"), sq("e3")));
        assert!(!board.is_legal_move(sq("e2"), sq("e5")));
        assert!(!board.is_legal_move(sq("f1"), sq("c4")));
        assert!(!board.is_legal_move(sq("e4"), sq("e5")));
        // pseudo-legal: blocked-in pieces still "reach" their own neighbours
        assert!(board.is_legal_move(sq("a1"), sq("a2")));
        assert!(!board.pseudo_legal_moves(sq("a1")).contains(&sq("a2")));
    }

    #[test]
    fn test_pseudo_legal_moves_skip_own_pieces() {
        let board = board(STARTING_FEN);
        let mut knight = board.pseudo_legal_moves(sq("b1"));
        knight.sort();
        assert_eq!(knight, vec![sq("a3"), sq("c3")]);
        assert!(board.pseudo_legal_moves(sq("a1")).is_empty());
        assert!(board.pseudo_legal_moves(sq("e4")).is_empty());
    }

    #[test]
    fn test_simple_moves_and_turns() {
        let mut board = board(STARTING_FEN);
        assert!(board.apply_move(sq("g1"), sq("f3"), true));
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.get(sq("g1")), None);
        assert_eq!(
            board.get(sq("f3")),
            Some(Piece::new(PieceKind::Knight, Color::White, sq("f3")))
        );
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (1, 1));

        assert!(board.apply_move(sq("e7"), sq("e6"), true));
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!((board.halfmove_clock(), board.fullmove_number()), (0, 2));
    }

    #[test]
    fn test_clocks_stop_at_their_limit() {
        let mut board = board("4k3/8/8/8/8/8/8/4K3 b - - 0 4294967295");
        assert!(board.apply_move(sq("e8"), sq("d8"), true));
        assert_eq!(board.fullmove_number(), u32::MAX);
        assert_eq!(board.side_to_move(), Color::White);

        let mut board = self::board("4k3/8/8/8/8/8/8/4K3 w - - 4294967295 1");
        assert!(board.apply_move(sq("e1"), sq("d1"), true));
        assert_eq!(board.halfmove_clock(), u32::MAX);
        assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/3K4 b - - 4294967295 1");
    }

    #[test]
    fn test_illegal_moves_leave_board_alone() {
        let mut board = board(STARTING_FEN);
        let before = board.clone();
        for (origin, target) in [
            ("e4", "e5"), // nothing there
            ("a1", "a2"), // own piece
            ("d1", "d1"), // own square
            ("f1", "c4"), // blocked bishop
            ("e2", "d3"), // pawn diagonal with nothing to capture
            ("e2", "e5"), // too far
            ("b1", "b3"), // not a knight move
            ("e1", "g1"), // castle with pieces in the way
        ] {
            assert!(!board.apply_move(sq(origin), sq(target), true), "{origin}{target}");
            assert_eq!(board, before, "{origin}{target}");
        }
        assert!(!board.apply_move(BoardSquare(64), sq("e4"), true));
        assert!(!board.apply_move(sq("e2"), BoardSquare(100), true));
        assert_eq!(board, before);
    }

    #[test]
    fn test_self_capture_rejected() {
        let mut board = board("4k3/8/8/8/8/8/3P4/3QK3 w - - 0 1");
        let before = board.clone();
        assert!(!board.apply_move(sq("d1"), sq("d2"), true));
        assert!(!board.apply_move(sq("d1"), sq("e1"), true));
        assert_eq!(board, before);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn test_capture() {
        let mut board = board("4k3/8/8/3p4/8/8/8/3QK3 w - - 7 30");
        assert!(board.apply_move(sq("d1"), sq("d5"), true));
        assert_eq!(
            board.get(sq("d5")).map(|p| (p.kind, p.color)),
            Some((PieceKind::Queen, Color::White))
        );
        assert_eq!(board.cells().iter().flatten().count(), 3);
        assert_eq!(board.halfmove_clock(), 0);
        // kings only step one square at a time
        assert!(!board.apply_move(sq("e8"), sq("e6"), true));
    }

    #[test]
    fn test_pawn_capture_only_diagonal() {
        let mut board = board("4k3/8/8/8/8/3pp3/4P3/4K3 w - - 0 1");
        assert!(!board.apply_move(sq("e2"), sq("e3"), true));
        assert!(board.apply_move(sq("e2"), sq("d3"), true));
        assert_eq!(board.get(sq("d3")).map(|p| p.color), Some(Color::White));
    }

    #[test]
    fn test_turn_not_enforced() {
        // Either side may move; the turn just alternates after every successful move
        let mut board = board(STARTING_FEN);
        assert!(board.apply_move(sq("e7"), sq("e6"), true));
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_unenforced_move() {
        let mut board = board(STARTING_FEN);
        assert!(board.apply_move(sq("d1"), sq("d5"), false));
        assert_eq!(board.get(sq("d5")).map(|p| p.square), Some(sq("d5")));
        assert_eq!(board.side_to_move(), Color::White);
        // even onto its own pieces
        assert!(board.apply_move(sq("a1"), sq("a2"), false));
        assert_eq!(board.get(sq("a2")).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(board.cells().iter().flatten().count(), 31);
        assert!(!board.apply_move(sq("e4"), sq("e5"), false));
        assert_eq!(board.castling_rights(), CastleRights::all());
    }

    #[test]
    fn test_double_step_sets_en_passant_target() {
        let mut board = board(STARTING_FEN);
        assert!(board.apply_move(sq("e2"), sq("e4"), true));
        assert_eq!(board.en_passant_target(), Some(sq("e3")));
        assert!(board.apply_move(sq("g8"), sq("f6"), true));
        assert_eq!(board.en_passant_target(), None);
        assert!(board.apply_move(sq("d2"), sq("d4"), true));
        assert!(board.apply_move(sq("c7"), sq("c5"), true));
        assert_eq!(board.en_passant_target(), Some(sq("c6")));
        // only from the starting row, and never through a piece
        assert!(!board.apply_move(sq("e4"), sq("e6"), true));
        assert!(!board.apply_move(sq("d4"), sq("d6"), true));
    }

    #[test]
    fn test_double_step_blocked() {
        let mut board = board("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(!board.apply_move(sq("e2"), sq("e4"), true));
        let mut board = self::board("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert!(!board.apply_move(sq("e2"), sq("e4"), true));
        assert!(board.apply_move(sq("e2"), sq("e3"), true));
    }

    #[test]
    fn test_white_captures_en_passant() {
        let mut board = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        assert!(board.apply_move(sq("e5"), sq("d6"), true));
        assert_eq!(
            board.get(sq("d6")).map(|p| (p.kind, p.color)),
            Some((PieceKind::Pawn, Color::White))
        );
        assert_eq!(board.get(sq("d5")), None, "captured pawn should be gone");
        assert_eq!(board.get(sq("d7")), None);
        assert_eq!(board.get(sq("e5")), None);
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(board.halfmove_clock(), 0);
    }

    #[test]
    fn test_black_captures_en_passant() {
        let mut board = board("4k3/8/8/8/4Pp2/8/8/4K3 b - e3 0 1");
        assert!(board.apply_move(sq("f4"), sq("e3"), true));
        assert_eq!(
            board.get(sq("e3")).map(|p| (p.kind, p.color)),
            Some((PieceKind::Pawn, Color::Black))
        );
        assert_eq!(board.get(sq("e4")), None, "captured pawn should be gone");
        assert_eq!(board.get(sq("e2")), None);
        assert_eq!(board.cells().iter().flatten().count(), 3);
    }

    #[test]
    fn test_en_passant_after_double_step() {
        let mut board = board("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
        assert!(board.apply_move(sq("d7"), sq("d5"), true));
        assert_eq!(board.en_passant_target(), Some(sq("d6")));
        assert!(board.apply_move(sq("e5"), sq("d6"), true));
        assert_eq!(board.get(sq("d5")), None);
        assert_eq!(board.cells().iter().flatten().count(), 3);
    }

    #[test]
    fn test_en_passant_expires() {
        let mut board = board("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
        assert!(board.apply_move(sq("d7"), sq("d5"), true));
        assert!(board.apply_move(sq("e1"), sq("f1"), true));
        assert!(board.apply_move(sq("e8"), sq("f8"), true));
        let before = board.clone();
        assert!(!board.apply_move(sq("e5"), sq("d6"), true));
        assert_eq!(board, before);
    }

    #[test]
    fn test_en_passant_needs_a_pawn_to_capture() {
        // the target is set, but a knight stands where the pawn should be
        let mut board = board("4k3/8/8/3nP3/8/8/8/4K3 w - d6 0 1");
        let before = board.clone();
        assert!(!board.apply_move(sq("e5"), sq("d6"), true));
        assert_eq!(board, before);
        // and only pawns adjacent to the target can take
        let mut board = self::board("4k3/8/8/3p3P/8/8/8/4K3 w - d6 0 1");
        assert!(!board.apply_move(sq("h5"), sq("d6"), true));
    }

    #[test]
    fn test_no_promotion() {
        let mut board = board("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
        assert!(board.apply_move(sq("b7"), sq("b8"), true));
        assert_eq!(board.get(sq("b8")).map(|p| p.kind), Some(PieceKind::Pawn));
        assert!(board.pseudo_legal_moves(sq("b8")).is_empty());
    }

    #[test]
    fn test_move_sequence() {
        let moves = [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4")];
        let board = MailboxRepresentation::from_move_sequence(
            moves.iter().map(|&(origin, target)| (sq(origin), sq(target))),
        )
        .expect("opening should be legal");
        assert_eq!(
            board.to_fen(),
            "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3"
        );
        assert!(MailboxRepresentation::from_move_sequence([(sq("e2"), sq("e5"))]).is_none());
    }

    #[test]
    fn test_is_check() {
        let board = board("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1");
        assert!(board.is_check(Color::Black));
        assert!(!board.is_check(Color::White));
        // moving into check is only ruled out for castling
        let mut board = self::board("4k3/8/8/8/8/8/8/3RK3 b - - 0 1");
        assert!(board.apply_move(sq("e8"), sq("d8"), true));
        assert!(board.is_check(Color::Black));
    }
}
