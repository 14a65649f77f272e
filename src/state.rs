use std::fmt;

use thiserror::Error;

use crate::attacks::is_in_check;
use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::movegen::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideRights {
    pub kingside: bool,
    pub queenside: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white: SideRights,
    pub black: SideRights,
}

impl CastlingRights {
    pub fn all() -> Self {
        let side = SideRights {
            kingside: true,
            queenside: true,
        };
        Self {
            white: side,
            black: side,
        }
    }

    pub fn none() -> Self {
        let side = SideRights {
            kingside: false,
            queenside: false,
        };
        Self {
            white: side,
            black: side,
        }
    }

    pub fn side(&self, color: Color) -> SideRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn side_mut(&mut self, color: Color) -> &mut SideRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    // Rights transition true -> false only, keyed on the rook home squares.
    fn revoke_for_rook_square(&mut self, square: Square) {
        match (square.row, square.col) {
            (7, 0) => self.white.queenside = false,
            (7, 7) => self.white.kingside = false,
            (0, 0) => self.black.queenside = false,
            (0, 7) => self.black.kingside = false,
            _ => {}
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece of the side to move on {0}")]
    VacantOrigin(Square),
    #[error("illegal move {from}{to}")]
    Illegal { from: Square, to: Square },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Check,
    Checkmate(Color), // the winner
    Stalemate,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Ongoing => write!(f, "ongoing"),
            Status::Check => write!(f, "check"),
            Status::Checkmate(winner) => write!(f, "checkmate, {} wins", winner),
            Status::Stalemate => write!(f, "stalemate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl GameState {
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
        }
    }

    /// Applies a move and returns the resulting state; the input state is
    /// left untouched.
    ///
    /// Performs no legality checking: callers must pass a pair previously
    /// returned by `legal_moves` for this state, or use `try_apply`. A
    /// vacant origin returns the state unchanged.
    pub fn apply(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> GameState {
        let mut board = self.board.clone();
        let piece = match board.remove(from) {
            Some(piece) => piece,
            None => return self.clone(),
        };
        let captured = self.board.occupant(to);

        // En passant: the captured pawn sits one rank behind the target,
        // which was empty before the move
        if piece.kind == PieceKind::Pawn && self.en_passant == Some(to) && captured.is_none() {
            board.remove(to.offset(-piece.color.forward(), 0));
        }

        // Castling: a two-file king move drags the rook across
        if piece.kind == PieceKind::King && (to.col - from.col).abs() == 2 {
            let row = from.row;
            let (rook_from, rook_to) = if to.col == 6 {
                (Square::new(row, 7), Square::new(row, 5))
            } else {
                (Square::new(row, 0), Square::new(row, 3))
            };
            if let Some(rook) = board.remove(rook_from) {
                board.place(rook_to, rook);
            }
        }

        board.place(to, piece);

        // Promotion on the opponent's back rank, queen unless chosen
        if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            board.place(to, Piece::new(piece.color, kind));
        }

        // Update castling rights
        let mut castling = self.castling;
        if piece.kind == PieceKind::King {
            let rights = castling.side_mut(piece.color);
            rights.kingside = false;
            rights.queenside = false;
        }
        if piece.kind == PieceKind::Rook {
            castling.revoke_for_rook_square(from);
        }
        if captured.map_or(false, |p| p.kind == PieceKind::Rook) {
            castling.revoke_for_rook_square(to);
        }

        // A double step opens the square behind the pawn for one half-move
        let en_passant = if piece.kind == PieceKind::Pawn && (to.row - from.row).abs() == 2 {
            Some(Square::new((from.row + to.row) / 2, from.col))
        } else {
            None
        };

        GameState {
            board,
            to_move: self.to_move.opposite(),
            castling,
            en_passant,
        }
    }

    /// Validating variant of `apply`: rejects pairs that `legal_moves` would
    /// not return for the side to move.
    pub fn try_apply(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<GameState, MoveError> {
        match self.board.occupant(from) {
            Some(piece) if piece.color == self.to_move => {}
            _ => return Err(MoveError::VacantOrigin(from)),
        }
        if !legal_moves(self, self.to_move).contains(&(from, to)) {
            return Err(MoveError::Illegal { from, to });
        }
        Ok(self.apply(from, to, promotion))
    }
}

/// Derived game status for the side to move; nothing terminal is stored in
/// the state itself.
pub fn status(state: &GameState) -> Status {
    let to_move = state.to_move;
    let checked = is_in_check(state, to_move);
    if legal_moves(state, to_move).is_empty() {
        if checked {
            Status::Checkmate(to_move.opposite())
        } else {
            Status::Stalemate
        }
    } else if checked {
        Status::Check
    } else {
        Status::Ongoing
    }
}
