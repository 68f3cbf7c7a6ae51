use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use chesspp::board::piece::PieceKind;
use chesspp::board::position::Position;
use chesspp::board::suit::Suit;
use chesspp::config::game_config::GameConfig;
use chesspp::config::json_reader::JsonReader;
use chesspp::game::game::Game;
use chesspp::utils::random_layout::random_layout;

fn sq(s: &str) -> Position {
    Position::from_algebraic(s).unwrap()
}

fn shipped_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("config/chesspp.json")
}

#[test]
fn shipped_config_builds_standard_board() {
    let config = GameConfig::load(shipped_config()).expect("shipped config should load");
    assert_eq!(config.layout, GameConfig::standard().layout);

    let board = config.build_board().expect("shipped layout should build");
    assert_eq!(board.pieces_of(Suit::White).count(), 16);
    assert_eq!(board.pieces_of(Suit::Black).count(), 16);
    assert_eq!(
        config.assets.piece_asset(Suit::Black, PieceKind::Knight),
        Some(Path::new("res/img/black_knight.png"))
    );
    assert!(config.assets.board_asset().is_some());
}

#[test]
fn bishop_scenario_from_json() {
    let reader: JsonReader = r#"{"chesspp": {"board": {"pieces": [
        {"kind": "bishop", "suit": "white", "square": "d4"},
        {"kind": "rook",   "suit": "black", "square": "f6"},
        {"kind": "pawn",   "suit": "white", "square": "b6"}
    ]}}}"#
        .parse()
        .unwrap();
    let board = GameConfig::from_reader(&reader).unwrap().build_board().unwrap();
    let t = board.trajectory_at(sq("d4")).unwrap();

    assert!(t.trajectory.contains(&sq("e5")));
    assert!(t.capturing.contains(&sq("f6")));
    assert!(!t.trajectory.contains(&sq("f6")));
    assert!(!t.reaches(sq("g7")) && !t.reaches(sq("h8")));
    assert!(t.trajectory.contains(&sq("c5")));
    assert!(!t.reaches(sq("b6")) && !t.reaches(sq("a7")));
}

#[test]
fn trajectories_are_idempotent_and_sound_on_random_boards() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..50 {
        let board = random_layout(&mut rng, 20).build_board().unwrap();
        for (id, piece) in board.active_pieces() {
            let first = board.calc_trajectory(id).unwrap();
            let second = board.calc_trajectory(id).unwrap();
            assert_eq!(first, second);

            assert!(!first.reaches(piece.position()));
            assert!(first.trajectory.iter().all(|p| board.is_empty(*p)));
            assert!(first
                .capturing
                .iter()
                .all(|p| board.is_enemy_of(*p, piece.suit())));
        }
    }
}

#[test]
fn move_then_query_on_configured_game() {
    let mut game = Game::new_game();
    game.try_move(sq("g1"), sq("f3")).unwrap();
    game.try_move(sq("e7"), sq("e5")).unwrap();
    game.try_move(sq("f3"), sq("e5")).unwrap();

    let board = game.board();
    let knight = board.occupant_at(sq("e5")).unwrap();
    assert_eq!(board.piece(knight).unwrap().kind(), PieceKind::Knight);
    assert_eq!(board.occupant_at(sq("f3")), None);

    let victim = game.history()[2].captured.unwrap();
    assert!(board.piece(victim).unwrap().is_captured());
    assert!(Position::all().all(|p| board.occupant_at(p) != Some(victim)));
    assert_eq!(board.captured_pieces().count(), 1);
}
