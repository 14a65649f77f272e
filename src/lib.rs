pub mod attacks;
pub mod board;
pub mod movegen;
pub mod state;

pub use attacks::{attacked_squares, find_king, is_in_check};
pub use board::{Board, Color, Piece, PieceKind, Square};
pub use movegen::{castling_moves, legal_moves, piece_moves};
pub use state::{status, CastlingRights, GameState, MoveError, SideRights, Status};
