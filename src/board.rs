use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    // Pawn push direction: White marches toward row 0, Black toward row 7.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn home_row(&self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn pawn_row(&self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn promotion_row(&self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn is_opponent(&self, other: Piece) -> bool {
        self.color != other.color
    }
}

/// Row 0 is rank 8, column 0 is file 'a'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    pub fn offset(&self, dr: i8, dc: i8) -> Square {
        Square::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", file, 8 - self.row)
    }
}

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

// Sparse placement: only occupied squares are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pieces: HashMap<Square, Piece>,
}

impl Board {
    pub(crate) fn empty() -> Self {
        Self {
            pieces: HashMap::new(),
        }
    }

    pub fn initial() -> Self {
        let mut board = Board::empty();
        for col in 0..8 {
            board.place(Square::new(6, col), Piece::new(Color::White, PieceKind::Pawn));
            board.place(Square::new(1, col), Piece::new(Color::Black, PieceKind::Pawn));
            board.place(Square::new(7, col), Piece::new(Color::White, BACK_RANK[col as usize]));
            board.place(Square::new(0, col), Piece::new(Color::Black, BACK_RANK[col as usize]));
        }
        board
    }

    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.pieces.get(&square).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(&square, &piece)| (square, piece))
    }

    pub(crate) fn place(&mut self, square: Square, piece: Piece) {
        self.pieces.insert(square, piece);
    }

    pub(crate) fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces.remove(&square)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut result = String::new();
        for row in 0..8 {
            for col in 0..8 {
                match self.occupant(Square::new(row, col)) {
                    Some(piece) => match piece.color {
                        Color::White => result.push(piece.kind.letter()),
                        Color::Black => result.push(piece.kind.letter().to_ascii_lowercase()),
                    },
                    None => result.push('.'),
                }
                if col < 7 {
                    result.push(' ');
                }
            }
            result.push('\n');
        }
        write!(f, "{}", result)
    }
}
