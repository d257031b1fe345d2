//! Reading and writing Forsyth-Edwards Notation

use board::{Board, BoardConfig, BoardSquare, Color, Piece};

use crate::{CastleRights, FenError, MailboxRepresentation, Placement, Result};

impl MailboxRepresentation {
    /// Parse a position on a board of the given shape
    ///
    /// Ranks are listed from the top of the board down, and runs of empty squares may take more
    /// than one digit on boards wider than nine squares.
    ///
    /// ```
    /// use board::{BoardConfig, BoardSquare, Color};
    /// use mailbox::MailboxRepresentation;
    ///
    /// let board = MailboxRepresentation::with_config(
    ///     "2k2/5/5/5/2K2 b - - 0 1",
    ///     BoardConfig::square_board(5),
    /// )
    /// .unwrap();
    /// assert_eq!(board.get(BoardSquare(22)).map(|piece| piece.color), Some(Color::White));
    /// ```
    pub fn with_config(fen: &str, config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let side_length = config.side_length;
        let fen = fen.trim().replace('/', " ");
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != side_length + 5 {
            return Err(FenError::WrongComponentCount {
                expected: side_length + 5,
                found: parts.len(),
            });
        }
        let (ranks, state) = parts.split_at(side_length);

        let mut placement = Placement::empty(side_length);
        for (row, rank) in ranks.iter().enumerate() {
            parse_rank(&mut placement, row, rank)?;
        }

        let side_to_move = match state[0] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_owned())),
        };
        let castles = CastleRights::from_fen(state[1])?;
        let en_passant_target = match state[2] {
            "-" => None,
            square => Some(BoardSquare::from_algebraic(square, side_length)?),
        };
        let halfmove_clock = parse_clock(state[3], "halfmove clock", "non-negative")?;
        let fullmove_number = parse_clock(state[4], "fullmove number", "positive")?;
        if fullmove_number == 0 {
            return Err(FenError::InvalidClock {
                field: "fullmove number",
                expected: "positive",
                value: state[4].to_owned(),
            });
        }

        Ok(Self {
            config,
            placement,
            side_to_move,
            castles,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
        })
    }
}

fn parse_rank(placement: &mut Placement, row: usize, rank: &str) -> Result<()> {
    let side_length = placement.side_length();
    let width_error = || FenError::RankWidth {
        rank: rank.to_owned(),
        expected: side_length,
    };
    let mut file = 0usize;
    let mut empty_run = 0usize;
    for letter in rank.chars() {
        if let Some(digit) = letter.to_digit(10) {
            empty_run = empty_run.saturating_mul(10).saturating_add(digit as usize);
            continue;
        }
        file = file.saturating_add(empty_run);
        empty_run = 0;
        if file >= side_length {
            return Err(width_error());
        }
        let square = BoardSquare::from_row_file(row, file, side_length);
        let piece = Piece::from_fen_letter(letter, square).ok_or(FenError::InvalidPiece(letter))?;
        placement.place(piece.kind, piece.color, square);
        file += 1;
    }
    if file.saturating_add(empty_run) != side_length {
        return Err(width_error());
    }
    Ok(())
}

fn parse_clock(value: &str, field: &'static str, expected: &'static str) -> Result<u32> {
    value.parse().map_err(|_| FenError::InvalidClock {
        field,
        expected,
        value: value.to_owned(),
    })
}

/// Write the position in the usual six fields
pub(crate) fn write(board: &MailboxRepresentation) -> String {
    let side_length = board.side_length();
    let ranks: Vec<String> = board
        .cells()
        .chunks(side_length)
        .map(|row| {
            let mut rank = String::with_capacity(side_length);
            let mut empty_run = 0;
            for cell in row {
                match cell {
                    Some(piece) => {
                        if empty_run > 0 {
                            rank.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        rank.push(piece.fen_letter());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                rank.push_str(&empty_run.to_string());
            }
            rank
        })
        .collect();
    let en_passant = board
        .en_passant_target()
        .map_or_else(|| "-".to_owned(), |square| square.to_algebraic(side_length));
    format!(
        "{} {} {} {} {} {}",
        ranks.join("/"),
        board.side_to_move().fen_letter(),
        board.castling_rights().to_fen(),
        en_passant,
        board.halfmove_clock(),
        board.fullmove_number(),
    )
}
