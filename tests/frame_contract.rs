mod common;

use clickchess::application::session::Session;
use clickchess::config::SurfaceConfig;
use clickchess::domain::models::{GameStatus, PieceKind, Player, TerminalReason};
use clickchess::infrastructure::input::SurfaceLayout;
use clickchess::interface::controller::BoardController;
use clickchess::interface::frame::RenderFrame;
use common::{ScriptedEngine, black, mv, sq, white};

fn controller(engine: ScriptedEngine) -> BoardController<ScriptedEngine> {
    BoardController::from_parts(Session::new(engine), SurfaceLayout::from_config(&SurfaceConfig::default()))
}

#[test]
fn idle_frame_has_no_highlights() {
    let controller = controller(ScriptedEngine::empty().place(sq(6, 4), white(PieceKind::Pawn)));
    let frame = controller.frame();

    assert_eq!(frame.side_to_move, Player::White);
    assert_eq!(frame.selected, None);
    assert!(frame.move_targets.is_empty());
    assert_eq!(frame.check_square, None);
    assert_eq!(frame.status, GameStatus::Active);
    assert!(frame.overlay.is_none());
}

#[test]
fn selection_shows_up_as_highlight_data() {
    let engine = ScriptedEngine::empty()
        .place(sq(6, 4), white(PieceKind::Pawn))
        .allow(mv(sq(6, 4), sq(5, 4)))
        .allow(mv(sq(6, 4), sq(4, 4)));
    let mut controller = controller(engine);

    controller.handle_pointer(260.0, 400.0).unwrap();
    let frame = controller.frame();

    assert_eq!(frame.selected, Some(sq(6, 4)));
    assert_eq!(frame.move_targets, vec![sq(5, 4), sq(4, 4)]);
}

#[test]
fn check_highlight_points_at_the_threatened_king() {
    let engine = ScriptedEngine::empty()
        .place(sq(7, 4), white(PieceKind::King))
        .place(sq(0, 4), black(PieceKind::King))
        .checked(Player::White);
    let controller = controller(engine);
    let frame = controller.frame();

    assert_eq!(frame.check_square, Some(sq(7, 4)));
}

#[test]
fn no_check_highlight_when_the_mover_is_safe() {
    let engine = ScriptedEngine::empty()
        .place(sq(7, 4), white(PieceKind::King))
        .checked(Player::Black); // the opponent is in check, not the mover
    let controller = controller(engine);

    assert_eq!(controller.frame().check_square, None);
}

#[test]
fn terminal_frame_carries_banner_and_reset_region() {
    let engine = ScriptedEngine::empty()
        .with_status(GameStatus::Terminal(TerminalReason::BlackWinsMate));
    let mut controller = controller(engine);
    controller.begin_frame();

    let frame = controller.frame();
    assert_eq!(
        frame.status,
        GameStatus::Terminal(TerminalReason::BlackWinsMate)
    );
    let overlay = frame.overlay.expect("terminal frames carry an overlay");
    assert_eq!(overlay.banner, "Checkmate! Black wins");
    assert_eq!(overlay.reset_control, controller.layout().reset_control);
}

#[test]
fn ledgers_are_projected_into_the_frame() {
    let engine = ScriptedEngine::empty()
        .place(sq(4, 3), white(PieceKind::Pawn))
        .place(sq(3, 4), black(PieceKind::Queen))
        .allow(mv(sq(4, 3), sq(3, 4)));
    let mut controller = controller(engine);

    controller.handle_pointer(200.0, 270.0).unwrap();
    controller.handle_pointer(280.0, 200.0).unwrap();

    let frame = controller.frame();
    assert_eq!(frame.captured_by_white, vec![black(PieceKind::Queen).code()]);
    assert!(frame.captured_by_black.is_empty());
}

#[test]
fn frame_round_trips_through_json() {
    let engine = ScriptedEngine::empty()
        .place(sq(6, 4), white(PieceKind::Pawn))
        .allow(mv(sq(6, 4), sq(4, 4)))
        .with_status(GameStatus::Terminal(TerminalReason::DrawStalemate));
    let mut controller = controller(engine);
    controller.begin_frame();

    let frame = controller.frame();
    let json = serde_json::to_string(&frame).unwrap();
    let back: RenderFrame = serde_json::from_str(&json).unwrap();
    assert_eq!(back, frame);
}

#[test]
fn text_view_reflects_the_frame() {
    let engine = ScriptedEngine::empty()
        .place(sq(6, 4), white(PieceKind::Pawn))
        .allow(mv(sq(6, 4), sq(5, 4)));
    let mut controller = controller(engine);
    controller.handle_pointer(260.0, 400.0).unwrap();

    let text = controller.frame().to_text();
    assert!(text.contains("selected: (6, 4)"));
    assert!(text.contains("*"), "move target missing:\n{text}");
}
