use crate::attacks::{attacked_squares, is_in_check};
use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::state::GameState;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// Ray-cast along each direction: stop at the first occupied square, keeping
// it only when it holds an opponent piece.
pub fn sliding_moves(
    board: &Board,
    start: Square,
    directions: &[(i8, i8)],
    piece: Piece,
) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, dc) in directions {
        let mut square = start;
        loop {
            square = square.offset(dr, dc);
            if !square.in_bounds() {
                break;
            }
            match board.occupant(square) {
                Some(occupant) => {
                    if piece.is_opponent(occupant) {
                        moves.push(square);
                    }
                    break;
                }
                None => moves.push(square),
            }
        }
    }
    moves
}

fn step_moves(board: &Board, start: Square, deltas: &[(i8, i8)], piece: Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, dc) in deltas {
        let square = start.offset(dr, dc);
        if !square.in_bounds() {
            continue;
        }
        match board.occupant(square) {
            Some(occupant) if !piece.is_opponent(occupant) => {}
            _ => moves.push(square),
        }
    }
    moves
}

pub fn knight_moves(board: &Board, start: Square, piece: Piece) -> Vec<Square> {
    step_moves(board, start, &KNIGHT_DELTAS, piece)
}

pub fn king_moves(board: &Board, start: Square, piece: Piece) -> Vec<Square> {
    step_moves(board, start, &QUEEN_DIRECTIONS, piece)
}

pub fn pawn_moves(state: &GameState, start: Square, piece: Piece) -> Vec<Square> {
    let board = &state.board;
    let direction = piece.color.forward();
    let mut moves = Vec::new();

    let one_step = start.offset(direction, 0);
    if one_step.in_bounds() && board.occupant(one_step).is_none() {
        moves.push(one_step);
        // Double push only from the starting rank, through an empty square
        let two_step = start.offset(2 * direction, 0);
        if start.row == piece.color.pawn_row() && board.occupant(two_step).is_none() {
            moves.push(two_step);
        }
    }

    for dc in [-1, 1] {
        let capture = start.offset(direction, dc);
        if !capture.in_bounds() {
            continue;
        }
        if let Some(occupant) = board.occupant(capture) {
            if piece.is_opponent(occupant) {
                moves.push(capture);
            }
        }
    }

    // Diagonal step onto the en-passant target captures without an occupant
    if let Some(target) = state.en_passant {
        if target.row == start.row + direction && (target.col - start.col).abs() == 1 {
            moves.push(target);
        }
    }

    moves
}

/// Pseudo-legal destinations for the piece on `start`, castling excluded.
pub fn piece_moves(state: &GameState, start: Square, piece: Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(state, start, piece),
        PieceKind::Knight => knight_moves(&state.board, start, piece),
        PieceKind::Bishop => sliding_moves(&state.board, start, &BISHOP_DIRECTIONS, piece),
        PieceKind::Rook => sliding_moves(&state.board, start, &ROOK_DIRECTIONS, piece),
        PieceKind::Queen => sliding_moves(&state.board, start, &QUEEN_DIRECTIONS, piece),
        PieceKind::King => king_moves(&state.board, start, piece),
    }
}

/// Castling destinations for a king on its home square.
///
/// Kingside needs both transit squares empty and unattacked. Queenside needs
/// three empty squares, but only the two the king crosses are checked for
/// attack; the knight-file square next to the rook may be attacked.
pub fn castling_moves(state: &GameState, start: Square, piece: Piece) -> Vec<Square> {
    if piece.kind != PieceKind::King {
        return Vec::new();
    }
    let row = piece.color.home_row();
    if start != Square::new(row, 4) {
        return Vec::new();
    }
    if is_in_check(state, piece.color) {
        return Vec::new();
    }

    let mut moves = Vec::new();
    let attacked = attacked_squares(&state.board, piece.color.opposite());
    let rights = state.castling.side(piece.color);

    if rights.kingside {
        let transit = [Square::new(row, 5), Square::new(row, 6)];
        if transit.iter().all(|sq| state.board.occupant(*sq).is_none())
            && transit.iter().all(|sq| !attacked.contains(sq))
        {
            moves.push(Square::new(row, 6));
        }
    }
    if rights.queenside {
        let between = [Square::new(row, 3), Square::new(row, 2), Square::new(row, 1)];
        if between.iter().all(|sq| state.board.occupant(*sq).is_none())
            && !attacked.contains(&Square::new(row, 3))
            && !attacked.contains(&Square::new(row, 2))
        {
            moves.push(Square::new(row, 2));
        }
    }
    moves
}

/// Every (origin, destination) pair for `color` that does not leave its own
/// king attacked. Each candidate is simulated with a queen promotion default;
/// the promotion choice never affects check status.
pub fn legal_moves(state: &GameState, color: Color) -> Vec<(Square, Square)> {
    let mut moves = Vec::new();
    for (square, piece) in state.board.iter() {
        if piece.color != color {
            continue;
        }
        let mut targets = piece_moves(state, square, piece);
        targets.extend(castling_moves(state, square, piece));
        for target in targets {
            let candidate = state.apply(square, target, None);
            if !is_in_check(&candidate, color) {
                moves.push((square, target));
            }
        }
    }
    moves
}
