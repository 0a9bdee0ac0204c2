pub mod ai;
pub mod evaluation;
pub mod game;
pub mod search;

pub use ai::MoveSelector;
pub use evaluation::evaluate_position;
pub use game::{Game, GameConfig, PlayedMove, PlayerMode, Status};
pub use search::{search_best_move, search_best_move_parallel};
