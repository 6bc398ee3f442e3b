use crate::domain::models::{GameStatus, Square};
use crate::domain::piece_code::PieceCode;
use crate::domain::snapshot::{BOARD_SIDE, BoardSnapshot};
use std::fmt::Write;

/// Diagnostic text rendering of a frame: piece letters (upper-case white,
/// lower-case black), `*` on empty candidate destinations, rank and file
/// legends, the capture lines and the status banner. This is a debugging
/// aid, not the pixel renderer.
pub fn render_text(
    board: &BoardSnapshot,
    selected: Option<Square>,
    targets: &[Square],
    taken_by_white: &[PieceCode],
    taken_by_black: &[PieceCode],
    status: GameStatus,
) -> String {
    let mut out = String::new();

    writeln!(out, "   a b c d e f g h").unwrap();
    for row in 0..BOARD_SIDE as u8 {
        let rank = BOARD_SIDE as u8 - row;
        write!(out, "{} |", rank).unwrap();
        for col in 0..BOARD_SIDE as u8 {
            let square = Square::new(row, col);
            let code = board.code_at(square);
            let glyph = if code.is_empty() && targets.contains(&square) {
                '*'
            } else {
                code.glyph()
            };
            write!(out, "{}|", glyph).unwrap();
        }
        writeln!(out, " {}", rank).unwrap();
    }
    writeln!(out, "   a b c d e f g h").unwrap();

    if let Some(square) = selected {
        writeln!(out, "selected: {:?}", square).unwrap();
    }
    writeln!(out, "white captured: {}", capture_line(taken_by_white)).unwrap();
    writeln!(out, "black captured: {}", capture_line(taken_by_black)).unwrap();
    if let GameStatus::Terminal(reason) = status {
        writeln!(out, ">> {}", reason.banner()).unwrap();
    }

    out
}

fn capture_line(taken: &[PieceCode]) -> String {
    if taken.is_empty() {
        return "-".to_string();
    }
    let glyphs: Vec<String> = taken.iter().map(|code| code.glyph().to_string()).collect();
    glyphs.join(" ")
}
