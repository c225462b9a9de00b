use crate::{board::Board, movegen::legal_moves_into, types::*};

/// Pure perft node count.
///
/// Counts leaf positions `depth` plies below the current one. A forced pass
/// uses up a ply; a finished game is a leaf regardless of remaining depth.
pub fn perft(board: &mut Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, color: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, color, buf);
        if buf.is_empty() {
            if !board.has_valid_move(color.other()) {
                return 1;
            }
            return inner(board, color.other(), depth - 1, rest);
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let Ok(mut child) = board.play(mv, color) else {
                continue;
            };
            nodes += inner(&mut child, color.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, color, depth, &mut layers[..])
}
