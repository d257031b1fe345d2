use core::fmt;

pub mod movegen;

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}
impl PieceKind {
    /// All the kinds of pieces there are
    pub const KINDS: [PieceKind; 6] = [
        Self::Pawn,
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
    ];

    /// The capitalized version of the letter used for this piece in FEN
    pub const fn fen_letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// The kind named by a FEN letter, ignoring case
    pub const fn from_fen_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(Self::Pawn),
            'R' => Some(Self::Rook),
            'N' => Some(Self::Knight),
            'B' => Some(Self::Bishop),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The number of rows a pawn of this color advances per step
    ///
    /// Row 0 is the top of the board, where black starts, so white pawns walk towards lower rows.
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The active-color token used in FEN
    pub const fn fen_letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// A piece, along with the square it stands on
///
/// The square is kept up to date by whichever board owns the piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: BoardSquare,
}
impl Piece {
    pub const fn new(kind: PieceKind, color: Color, square: BoardSquare) -> Self {
        Self {
            kind,
            color,
            square,
        }
    }

    /// Parse a FEN letter into a piece standing on `square`
    ///
    /// Uppercase letters are white, lowercase are black.
    pub const fn from_fen_letter(letter: char, square: BoardSquare) -> Option<Self> {
        let Some(kind) = PieceKind::from_fen_letter(letter) else {
            return None;
        };
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(kind, color, square))
    }

    pub const fn fen_letter(self) -> char {
        match self.color {
            Color::White => self.kind.fen_letter().to_ascii_uppercase(),
            Color::Black => self.kind.fen_letter().to_ascii_lowercase(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SquareParseError {
    #[error("square {0:?} is too short to name a square")]
    TooShort(String),
    #[error("square {0:?} has a file outside the board")]
    InvalidFile(String),
    #[error("square {0:?} has a rank outside the board")]
    InvalidRank(String),
}

/// An index on the board
///
/// Squares are numbered row by row from the top-left corner, so for a board with side length `n`
/// the file is `index % n` (0 is the a-file) and the row is `index / n` (0 is the top row, which
/// is the highest rank).
///
/// The index doesn't know the size of its board, so everything that needs the geometry takes the
/// side length as an argument.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSquare(pub usize);

macro_rules! standard_squares {
    ($($name:ident = $index:literal),* $(,)?) => {
        /// Named squares of a standard 8x8 board
        impl BoardSquare {
            $(pub const $name: Self = Self($index);)*
        }
    };
}

standard_squares! {
    A8 = 0, B8 = 1, C8 = 2, D8 = 3, E8 = 4, F8 = 5, G8 = 6, H8 = 7,
    A7 = 8, B7 = 9, C7 = 10, D7 = 11, E7 = 12, F7 = 13, G7 = 14, H7 = 15,
    A6 = 16, B6 = 17, C6 = 18, D6 = 19, E6 = 20, F6 = 21, G6 = 22, H6 = 23,
    A5 = 24, B5 = 25, C5 = 26, D5 = 27, E5 = 28, F5 = 29, G5 = 30, H5 = 31,
    A4 = 32, B4 = 33, C4 = 34, D4 = 35, E4 = 36, F4 = 37, G4 = 38, H4 = 39,
    A3 = 40, B3 = 41, C3 = 42, D3 = 43, E3 = 44, F3 = 45, G3 = 46, H3 = 47,
    A2 = 48, B2 = 49, C2 = 50, D2 = 51, E2 = 52, F2 = 53, G2 = 54, H2 = 55,
    A1 = 56, B1 = 57, C1 = 58, D1 = 59, E1 = 60, F1 = 61, G1 = 62, H1 = 63,
}

impl BoardSquare {
    /// Returns if this square lies on a board with the given side length
    ///
    /// ```
    /// use board::BoardSquare;
    /// assert!(BoardSquare::H1.is_valid(8));
    /// assert!(!BoardSquare(64).is_valid(8));
    /// ```
    pub const fn is_valid(self, side_length: usize) -> bool {
        self.0 < side_length * side_length
    }

    /// The column, counting from the a-file
    pub const fn file(self, side_length: usize) -> usize {
        self.0 % side_length
    }

    /// The row, counting from the top of the board
    pub const fn row(self, side_length: usize) -> usize {
        self.0 / side_length
    }

    /// The rank as printed in algebraic notation, counting from the bottom starting at 1
    pub const fn rank(self, side_length: usize) -> usize {
        side_length - self.row(side_length)
    }

    /// Produce a square from its row and file
    pub const fn from_row_file(row: usize, file: usize, side_length: usize) -> Self {
        Self(row * side_length + file)
    }

    /// Offset by the given number of rows and files.
    ///
    /// Returns `None` if either the starting square or the result is off the board; moving off
    /// one edge never wraps around to the other side.
    ///
    /// ```
    /// use board::BoardSquare;
    /// assert_eq!(BoardSquare::A1.offset(-1, 3, 8), Some(BoardSquare::D2));
    /// assert_eq!(BoardSquare::D2.offset(1, -3, 8), Some(BoardSquare::A1));
    /// assert_eq!(BoardSquare::H4.offset(0, 1, 8), None);
    /// assert_eq!(BoardSquare::D1.offset(1, 0, 8), None);
    /// ```
    pub fn offset(self, rows: isize, files: isize, side_length: usize) -> Option<Self> {
        if !self.is_valid(side_length) {
            return None;
        }
        let row = self.row(side_length).checked_add_signed(rows)?;
        let file = self.file(side_length).checked_add_signed(files)?;
        (row < side_length && file < side_length)
            .then(|| Self::from_row_file(row, file, side_length))
    }

    /// Convert algebraic notation (like `"e4"`) into an index.
    ///
    /// Surrounding whitespace is ignored and the file letter may be either case.
    ///
    /// ```
    /// use board::BoardSquare;
    /// assert_eq!(BoardSquare::from_algebraic("a1", 8), Ok(BoardSquare::A1));
    /// assert_eq!(BoardSquare::from_algebraic(" H8 ", 8), Ok(BoardSquare::H8));
    /// assert_eq!(BoardSquare::from_algebraic("c10", 10), Ok(BoardSquare(2)));
    /// assert!(BoardSquare::from_algebraic("e", 8).is_err());
    /// assert!(BoardSquare::from_algebraic("i1", 8).is_err());
    /// assert!(BoardSquare::from_algebraic("a9", 8).is_err());
    /// ```
    pub fn from_algebraic(square: &str, side_length: usize) -> Result<Self, SquareParseError> {
        let square = square.trim();
        let mut chars = square.chars();
        let (Some(file_letter), Some(_)) = (chars.next(), chars.next()) else {
            return Err(SquareParseError::TooShort(square.to_owned()));
        };
        let file_letter = file_letter.to_ascii_lowercase();
        if !file_letter.is_ascii_lowercase() {
            return Err(SquareParseError::InvalidFile(square.to_owned()));
        }
        let file = (file_letter as u8 - b'a') as usize;
        if file >= side_length {
            return Err(SquareParseError::InvalidFile(square.to_owned()));
        }
        let rank = square[1..]
            .parse::<usize>()
            .map_err(|_| SquareParseError::InvalidRank(square.to_owned()))?;
        if rank == 0 || rank > side_length {
            return Err(SquareParseError::InvalidRank(square.to_owned()));
        }
        Ok(Self(side_length * (side_length - rank) + file))
    }

    /// Convert to algebraic notation
    ///
    /// ```
    /// use board::BoardSquare;
    /// assert_eq!(BoardSquare::E4.to_algebraic(8), "e4");
    /// assert_eq!(BoardSquare(0).to_algebraic(10), "a10");
    /// ```
    pub fn to_algebraic(self, side_length: usize) -> String {
        let file = char::from(b'a' + self.file(side_length) as u8);
        format!("{file}{}", self.rank(side_length))
    }

    /// An iterator over all squares on a board with the given side length
    ///
    /// ```
    /// assert_eq!(board::BoardSquare::all_squares(8).count(), 64);
    /// ```
    pub fn all_squares(side_length: usize) -> impl Iterator<Item = Self> {
        (0..side_length * side_length).map(Self)
    }
}

/// Shows the raw index, since the side length isn't known here
impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "side length {0} is outside the supported range {min}..={max}",
        min = BoardConfig::MIN_SIDE_LENGTH,
        max = BoardConfig::MAX_SIDE_LENGTH
    )]
    SideLength(usize),
    #[error("king home file {file} doesn't fit on a board of side length {side_length}")]
    KingHomeFile { file: usize, side_length: usize },
}

/// The shape of the board a game is played on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// The number of squares along each edge
    pub side_length: usize,
    /// The file on which each king starts, and from which it may castle
    pub king_home_file: usize,
}
impl BoardConfig {
    /// The standard chess board, with the kings starting on the e-file
    pub const STANDARD: Self = Self {
        side_length: 8,
        king_home_file: 4,
    };

    /// Smallest board on which pawns have somewhere to stand between the home rows
    pub const MIN_SIDE_LENGTH: usize = 3;
    /// Files are named by a single letter
    pub const MAX_SIDE_LENGTH: usize = 26;

    /// A board of the given size, with the kings starting on the middle file (rounding right)
    pub const fn square_board(side_length: usize) -> Self {
        Self {
            side_length,
            king_home_file: side_length / 2,
        }
    }

    pub const fn num_squares(self) -> usize {
        self.side_length * self.side_length
    }

    /// The row on which the given side's king and rooks start
    pub const fn home_row(self, color: Color) -> usize {
        match color {
            Color::White => self.side_length - 1,
            Color::Black => 0,
        }
    }

    /// The row from which the given side's pawns may advance two squares
    pub const fn pawn_start_row(self, color: Color) -> usize {
        match color {
            Color::White => self.side_length - 2,
            Color::Black => 1,
        }
    }

    /// The square on which the given side's king starts
    pub const fn king_home_square(self, color: Color) -> BoardSquare {
        BoardSquare::from_row_file(self.home_row(color), self.king_home_file, self.side_length)
    }

    pub const fn validate(self) -> Result<(), ConfigError> {
        if self.side_length < Self::MIN_SIDE_LENGTH || self.side_length > Self::MAX_SIDE_LENGTH {
            return Err(ConfigError::SideLength(self.side_length));
        }
        if self.king_home_file >= self.side_length {
            return Err(ConfigError::KingHomeFile {
                file: self.king_home_file,
                side_length: self.side_length,
            });
        }
        Ok(())
    }
}
impl Default for BoardConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Functionality belonging to all boards that can be made
pub trait Board: Sized {
    /// An error type that can be returned when parsing
    type Err: fmt::Debug;

    /// Parse a board from the given FEN
    fn from_fen(fen: &str) -> Result<Self, Self::Err>;

    /// Convert to a FEN string
    fn to_fen(&self) -> String;

    /// Get the state at the start of a chess game
    fn initial_state() -> Self;

    /// Whose turn it is
    fn side_to_move(&self) -> Color;

    /// Whether the piece on `origin` can reach `target` by its normal movement
    ///
    /// This ignores the special rules (castling, en passant) and whether the move would leave a
    /// king in check.
    fn is_legal_move(&self, origin: BoardSquare, target: BoardSquare) -> bool;

    /// Make the given move, in place
    ///
    /// With `enforce_rules` unset the piece is relocated without any checks. Returns `false`, and
    /// leaves the board untouched, if the move is illegal.
    fn apply_move(&mut self, origin: BoardSquare, target: BoardSquare, enforce_rules: bool)
        -> bool;

    /// Returns `true` if the given color's King is attacked
    fn is_check(&self, color: Color) -> bool;

    /// Make the board after the given sequence of moves from the start of a game
    ///
    /// Returns `None` as soon as one of the moves is illegal.
    fn from_move_sequence(
        moves: impl IntoIterator<Item = (BoardSquare, BoardSquare)>,
    ) -> Option<Self> {
        let mut state = Self::initial_state();
        for (origin, target) in moves {
            if !state.apply_move(origin, target, true) {
                return None;
            }
        }
        Some(state)
    }
}
