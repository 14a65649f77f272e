use std::collections::HashSet;

use crate::board::{Board, Color, PieceKind, Square};
use crate::movegen::{king_moves, knight_moves, sliding_moves};
use crate::movegen::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use crate::state::GameState;

/// Every square `color` could capture on next move.
///
/// Pawn attacks are the two forward diagonals regardless of occupancy; a
/// sliding ray stops at the first occupied square and includes it only when
/// an opponent piece sits there.
pub fn attacked_squares(board: &Board, color: Color) -> HashSet<Square> {
    let mut squares = HashSet::new();
    for (square, piece) in board.iter() {
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => {
                for dc in [-1, 1] {
                    let target = square.offset(color.forward(), dc);
                    if target.in_bounds() {
                        squares.insert(target);
                    }
                }
            }
            PieceKind::Knight => squares.extend(knight_moves(board, square, piece)),
            PieceKind::Bishop => {
                squares.extend(sliding_moves(board, square, &BISHOP_DIRECTIONS, piece))
            }
            PieceKind::Rook => {
                squares.extend(sliding_moves(board, square, &ROOK_DIRECTIONS, piece))
            }
            PieceKind::Queen => {
                squares.extend(sliding_moves(board, square, &QUEEN_DIRECTIONS, piece))
            }
            PieceKind::King => squares.extend(king_moves(board, square, piece)),
        }
    }
    squares
}

pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    board
        .iter()
        .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

pub fn is_in_check(state: &GameState, color: Color) -> bool {
    let king_square = match find_king(&state.board, color) {
        Some(square) => square,
        // No king on the board: not reachable in normal play.
        None => return false,
    };
    attacked_squares(&state.board, color.opposite()).contains(&king_square)
}
