use anyhow::Result;
use tracing::info;
use xiangqi_core::{Board, Color, pick_uniform_random_move};

/// Random self-play demo: both sides draw uniformly from their legal moves
/// until one side runs out of options.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("xiangqi random self-play starting");

    let mut rng = rand::rng();
    let mut board = Board::starting_position();
    let mut side = Color::Red;
    let mut plies = 0u32;

    println!("{board}");

    while plies < 500 {
        let Some(mv) = pick_uniform_random_move(&board, side, &mut rng) else {
            info!(%side, "no legal move left");
            break;
        };
        board = board.apply_move(mv)?;
        info!(ply = plies + 1, %side, %mv, "played");
        side = !side;
        plies += 1;
    }

    println!("{board}");
    println!("finished after {plies} plies; position: {}", board.fen());
    Ok(())
}
