//! Castling rights and the castle move itself

use board::{BoardConfig, BoardSquare, Color, Piece, PieceKind};

use crate::{FenError, MailboxRepresentation, MoveOutcome, Placement, Rejection};

bitflags::bitflags! {
    /// Which castles are still allowed (the king and rook haven't moved yet)
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CastleRights: u8 {
        const WhiteKingside = 0b0000_0001;
        const WhiteQueenside = 0b0000_0010;
        /// A mask for whether white can castle in either direction
        const White = 0b0000_0011;
        const BlackKingside = 0b0000_0100;
        const BlackQueenside = 0b0000_1000;
        /// A mask for whether black can castle in either direction
        const Black = 0b0000_1100;
    }
}

impl CastleRights {
    /// The right to castle towards one side of the board
    pub const fn for_side(color: Color, kingside: bool) -> Self {
        match (color, kingside) {
            (Color::White, true) => Self::WhiteKingside,
            (Color::White, false) => Self::WhiteQueenside,
            (Color::Black, true) => Self::BlackKingside,
            (Color::Black, false) => Self::BlackQueenside,
        }
    }

    /// Both of a player's rights
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }

    /// The right whose rook starts on the given square, if it's a corner
    pub fn from_corner(square: BoardSquare, config: BoardConfig) -> Self {
        let side_length = config.side_length;
        let last = side_length - 1;
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| [(color, true), (color, false)])
            .filter(|&(color, kingside)| {
                let file = if kingside { last } else { 0 };
                square == BoardSquare::from_row_file(config.home_row(color), file, side_length)
            })
            .fold(Self::empty(), |rights, (color, kingside)| {
                rights | Self::for_side(color, kingside)
            })
    }

    /// The rights left once the given piece has moved
    ///
    /// Moving a king gives up both of its player's castles, and anything leaving or landing on a
    /// corner gives up the castle with that corner's rook.
    pub fn after_move(
        self,
        piece: Piece,
        origin: BoardSquare,
        target: BoardSquare,
        config: BoardConfig,
    ) -> Self {
        let mut rights = self;
        if piece.kind == PieceKind::King {
            rights.remove(Self::for_color(piece.color));
        }
        rights.remove(Self::from_corner(origin, config));
        rights.remove(Self::from_corner(target, config));
        rights
    }

    /// Parse the castling field of a FEN string
    ///
    /// ```
    /// use mailbox::CastleRights;
    ///
    /// assert_eq!(CastleRights::from_fen("-"), Ok(CastleRights::empty()));
    /// assert_eq!(
    ///     CastleRights::from_fen("qK"),
    ///     Ok(CastleRights::BlackQueenside | CastleRights::WhiteKingside),
    /// );
    /// assert!(CastleRights::from_fen("KX").is_err());
    /// ```
    pub fn from_fen(field: &str) -> Result<Self, FenError> {
        if field == "-" {
            return Ok(Self::empty());
        }
        field.chars().try_fold(Self::empty(), |rights, letter| {
            let right = match letter {
                'K' => Self::WhiteKingside,
                'Q' => Self::WhiteQueenside,
                'k' => Self::BlackKingside,
                'q' => Self::BlackQueenside,
                _ => return Err(FenError::InvalidCastlingRight(letter)),
            };
            Ok(rights | right)
        })
    }

    /// Format as the castling field of a FEN string
    pub fn to_fen(self) -> String {
        let mut options = String::with_capacity(4);
        for (right, letter) in [
            (Self::WhiteKingside, 'K'),
            (Self::WhiteQueenside, 'Q'),
            (Self::BlackKingside, 'k'),
            (Self::BlackQueenside, 'q'),
        ] {
            if self.contains(right) {
                options.push(letter);
            }
        }
        if options.is_empty() {
            options.push('-');
        }
        options
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}

/// Walk along the king's row towards one edge, looking for a rook of the king's color at least two
/// squares away
///
/// With `require_clear_path`, any other piece in between means there's no castle.
fn castling_rook(
    placement: &Placement,
    king: Piece,
    kingside: bool,
    require_clear_path: bool,
) -> Option<BoardSquare> {
    let side_length = placement.side_length();
    let step = if kingside { 1 } else { -1 };
    let mut square = king.square;
    let mut distance = 0;
    loop {
        square = square.offset(0, step, side_length)?;
        distance += 1;
        match placement.get(square) {
            None => continue,
            Some(Piece {
                kind: PieceKind::Rook,
                color,
                ..
            }) if color == king.color && distance >= 2 => return Some(square),
            Some(_) if require_clear_path => return None,
            Some(_) => continue,
        }
    }
}

impl MailboxRepresentation {
    /// Drop whichever of the player's castling rights can no longer ever be used
    fn revalidate_castle_rights(&mut self, king: Piece) {
        let mut rights = self.castles;
        if king.square != self.config.king_home_square(king.color) {
            rights.remove(CastleRights::for_color(king.color));
        }
        for kingside in [true, false] {
            let right = CastleRights::for_side(king.color, kingside);
            if rights.contains(right)
                && castling_rook(&self.placement, king, kingside, false).is_none()
            {
                rights.remove(right);
            }
        }
        if rights != self.castles {
            tracing::debug!(before = ?self.castles, after = ?rights, "castling rights revoked");
            self.castles = rights;
        }
    }

    /// Castle the king on `king.square` so it lands on `target`
    ///
    /// Castling rights found to be impossible stay revoked even if the castle fails.
    pub(crate) fn try_castle(
        &mut self,
        king: Piece,
        target: BoardSquare,
    ) -> Result<MoveOutcome, Rejection> {
        let side_length = self.side_length();
        let kingside = if king.square.offset(0, 2, side_length) == Some(target) {
            true
        } else if king.square.offset(0, -2, side_length) == Some(target) {
            false
        } else {
            return Err(Rejection::Unreachable);
        };

        self.revalidate_castle_rights(king);
        if !self.castles.contains(CastleRights::for_side(king.color, kingside)) {
            return Err(Rejection::CastleRightRevoked);
        }
        let rook = castling_rook(&self.placement, king, kingside, true)
            .ok_or(Rejection::CastlePathBlocked)?;
        if self.placement.is_check(king.color) {
            return Err(Rejection::CastleOutOfCheck);
        }
        let transit = king
            .square
            .offset(0, if kingside { 1 } else { -1 }, side_length)
            .ok_or(Rejection::Unreachable)?;

        let snapshot = self.placement.clone();
        self.placement.relocate(king.square, transit);
        if self.placement.is_check(king.color) {
            self.placement = snapshot;
            return Err(Rejection::CastleThroughCheck);
        }
        self.placement.relocate(transit, target);
        if self.placement.is_check(king.color) {
            self.placement = snapshot;
            return Err(Rejection::CastleIntoCheck);
        }
        self.placement.relocate(rook, transit);
        tracing::trace!(kingside, color = ?king.color, "castled");

        Ok(MoveOutcome {
            piece: king,
            target,
            is_capture: false,
            skipped: None,
        })
    }
}
