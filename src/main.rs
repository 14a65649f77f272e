use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;

use satranc::{legal_moves, status, GameState, Status};

// Random self-play until the game ends or the ply cap is hit, printing the
// moves and the final board. Stands in for a real front end.
fn main() -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut state = GameState::initial();

    for ply in 1..=300 {
        match status(&state) {
            Status::Checkmate(_) | Status::Stalemate => break,
            Status::Ongoing | Status::Check => {}
        }
        let moves = legal_moves(&state, state.to_move);
        let &(from, to) = moves
            .choose(&mut rng)
            .ok_or_else(|| anyhow!("no legal moves in a non-terminal position"))?;
        println!("{:3}. {} plays {}{}", ply, state.to_move, from, to);
        state = state.try_apply(from, to, None)?;
    }

    println!("{}", state.board);
    println!("{}", status(&state));
    Ok(())
}
