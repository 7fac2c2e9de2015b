//! Standard algebraic notation for applied moves.
//!
//! Output only; reading SAN back into moves is not supported.

use crate::game_state::chess_types::PieceKind;
use crate::moves::board_move::{AppliedMove, MoveEffect, PrimaryMove};

/// Marker appended to a move that ends the game in a draw.
pub const DRAW_MARKER: &str = "(=)";

/// Render `applied` as SAN, e.g. `Nbd7`, `exd6`, `e8=Q+`, `O-O-O#`.
pub fn to_san(applied: &AppliedMove) -> String {
    let board_move = &applied.board_move;
    let mut out = String::new();

    match board_move.primary {
        PrimaryMove::KingSideCastle(_) => out.push_str("O-O"),
        PrimaryMove::QueenSideCastle(_) => out.push_str("O-O-O"),
        PrimaryMove::Move(m) => {
            let is_capture = applied.captured.is_some();
            match m.piece.kind.san_letter() {
                Some(letter) => {
                    out.push(letter);
                    if board_move.ambiguity.file {
                        out.push(m.from.file_char());
                    }
                    if board_move.ambiguity.rank {
                        out.push(m.from.rank_char());
                    }
                }
                None if is_capture => out.push(m.from.file_char()),
                None => {}
            }
            if is_capture {
                out.push('x');
            }
            out.push_str(&m.to.to_string());
            if let Some(kind) = board_move.promotion_kind() {
                out.push('=');
                out.push(kind.san_letter().unwrap_or('Q'));
            }
        }
    }

    match applied.effect {
        Some(MoveEffect::Check) => out.push('+'),
        Some(MoveEffect::Checkmate) => out.push('#'),
        Some(MoveEffect::Draw) => out.push_str(DRAW_MARKER),
        None => {}
    }
    out
}

/// Letter of a promotion piece, for hosts echoing coordinate input.
pub fn promotion_suffix(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::Pawn | PieceKind::King => None,
        other => other.san_letter().map(|c| c.to_ascii_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, Position};
    use crate::moves::board_move::{AmbiguityFlags, BoardMove, Consequence, PieceMove, PreMove};

    fn pos(text: &str) -> Position {
        text.parse().expect("test square should parse")
    }

    fn applied(
        board_move: BoardMove,
        captured: Option<Piece>,
        effect: Option<MoveEffect>,
    ) -> AppliedMove {
        AppliedMove {
            board_move,
            captured,
            effect,
        }
    }

    #[test]
    fn pawn_push_and_capture() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let push = applied(BoardMove::simple(pawn, pos("e2"), pos("e4")), None, None);
        assert_eq!(to_san(&push), "e4");

        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        let ep = BoardMove::simple(pawn, pos("e5"), pos("d6")).with_pre_move(PreMove::Capture {
            piece: black_pawn,
            position: pos("d5"),
        });
        assert_eq!(to_san(&applied(ep, Some(black_pawn), None)), "exd6");
    }

    #[test]
    fn piece_moves_carry_disambiguation_and_suffixes() {
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let file =
            BoardMove::simple(rook, pos("a1"), pos("d1")).with_ambiguity(AmbiguityFlags::FILE);
        assert_eq!(to_san(&applied(file, None, None)), "Rad1");

        let rank =
            BoardMove::simple(rook, pos("a1"), pos("a3")).with_ambiguity(AmbiguityFlags::RANK);
        assert_eq!(to_san(&applied(rank, None, Some(MoveEffect::Check))), "R1a3+");

        let queen = Piece::new(Color::Black, PieceKind::Queen);
        let both =
            BoardMove::simple(queen, pos("a1"), pos("b2")).with_ambiguity(AmbiguityFlags::BOTH);
        let knight = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(
            to_san(&applied(both, Some(knight), Some(MoveEffect::Checkmate))),
            "Qa1xb2#"
        );
    }

    #[test]
    fn castles_promotions_and_draws() {
        let king = Piece::new(Color::White, PieceKind::King);
        let castle = BoardMove::new(PrimaryMove::QueenSideCastle(PieceMove {
            piece: king,
            from: pos("e1"),
            to: pos("c1"),
        }));
        assert_eq!(to_san(&applied(castle, None, None)), "O-O-O");

        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let promote = BoardMove::simple(pawn, pos("e7"), pos("e8")).with_consequence(
            Consequence::Promotion {
                position: pos("e8"),
                piece: Piece::new(Color::White, PieceKind::Queen),
            },
        );
        assert_eq!(to_san(&applied(promote, None, Some(MoveEffect::Draw))), "e8=Q(=)");
        assert_eq!(promotion_suffix(PieceKind::Knight), Some('n'));
    }
}
