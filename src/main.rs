use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, command, Command};
use tracing::error;

use chesspp::board::position::Position;
use chesspp::config::game_config::GameConfig;
use chesspp::game::game::Game;
use chesspp::utils::render_board::{render_board, render_trajectory};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chesspp=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = command!()
        .propagate_version(true)
        .arg(arg!(-c --config <PATH> "Configuration file (defaults to $CHESSPP_CONFIG, then config/chesspp.json)")
            .value_parser(clap::value_parser!(PathBuf)))
        .arg(arg!(--standard "Ignore the configuration file and use the standard layout"))
        .subcommand(Command::new("show").about("Print the configured board"))
        .subcommand(
            Command::new("moves")
                .about("Print the trajectory and capturing squares of one piece")
                .arg(arg!(<SQUARE> "Square of the piece, e.g. e2")),
        )
        .subcommand(
            Command::new("play")
                .about("Apply moves such as e2e4 in turn and print the result")
                .arg(arg!(<MOVES> ... "Moves in from-to form")),
        )
        .get_matches();

    let config = if matches.get_flag("standard") {
        GameConfig::standard()
    } else {
        let path = GameConfig::resolve_path(matches.get_one::<PathBuf>("config").map(PathBuf::as_path));
        match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("setup aborted: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let mut game = match Game::from_config(&config) {
        Ok(game) => game,
        Err(e) => {
            error!("setup aborted: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match matches.subcommand() {
        Some(("moves", sub)) => sub
            .get_one::<String>("SQUARE")
            .map_or(Err("missing square".to_owned()), |s| show_moves(&game, s)),
        Some(("play", sub)) => {
            let moves: Vec<&String> = sub.get_many::<String>("MOVES").into_iter().flatten().collect();
            play(&mut game, &moves)
        }
        _ => {
            println!("{}", render_board(game.board()));
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn show_moves(game: &Game, square: &str) -> Result<(), String> {
    let from = Position::from_algebraic(square).map_err(|e| e.to_string())?;
    let trajectory = game.destinations(from).map_err(|e| e.to_string())?;
    println!("{}", render_trajectory(game.board(), &trajectory));
    let list = |set: &std::collections::BTreeSet<Position>| {
        set.iter().map(Position::to_string).collect::<Vec<_>>().join(" ")
    };
    println!("trajectory: {}", list(&trajectory.trajectory));
    println!("capturing:  {}", list(&trajectory.capturing));
    Ok(())
}

fn play(game: &mut Game, moves: &[&String]) -> Result<(), String> {
    for text in moves {
        if text.len() != 4 || !text.is_ascii() {
            return Err(format!("invalid move: {text}"));
        }
        let from = Position::from_algebraic(&text[..2]).map_err(|e| e.to_string())?;
        let to = Position::from_algebraic(&text[2..]).map_err(|e| e.to_string())?;
        game.try_move(from, to).map_err(|e| e.to_string())?;
    }
    println!("{}", render_board(game.board()));
    println!("{} to move", game.side_to_move());
    Ok(())
}
