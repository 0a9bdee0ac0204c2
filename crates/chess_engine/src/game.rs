use chess_core::{Board, ChessError, Color, History, Move, MoveInfo, Piece, Setup, Square};
use log::{info, warn};

use crate::ai::MoveSelector;

/// Color the human plays in a one-player game. The AI takes the other side.
pub const HUMAN_COLOR: Color = Color::White;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerMode {
    /// Human against the AI, which answers every human move automatically.
    #[default]
    OnePlayer,
    /// Two sides driven by the caller, move by move.
    TwoPlayers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub setup: Setup,
    pub mode: PlayerMode,
    pub allow_undo: bool,
    pub parallel_search: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            setup: Setup::Full,
            mode: PlayerMode::OnePlayer,
            allow_undo: true,
            parallel_search: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    /// A king was taken. This is the only way a game is won.
    KingCaptured { winner: Color },
    /// The side to move had nothing to play.
    NoMoves(Color),
}

impl Status {
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// One ply as it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub color: Color,
    pub mv: Move,
    pub captured: Piece,
}

/// A headless game session: board, side to move, AI and optional undo history.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Color,
    mode: PlayerMode,
    selector: MoveSelector,
    history: Option<History>,
    status: Status,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        info!(
            "new {:?} game, {:?} setup, undo {}",
            config.mode,
            config.setup,
            if config.allow_undo { "on" } else { "off" }
        );
        Self {
            board: Board::with_setup(config.setup),
            current: Color::White,
            mode: config.mode,
            selector: MoveSelector::new().parallel(config.parallel_search),
            history: config.allow_undo.then(History::new),
            status: Status::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }

    /// Plays `mv` for the side to move. In a one-player game the AI answers
    /// straight away and its reply is included in the returned plies.
    pub fn play(&mut self, mv: Move) -> Result<Vec<PlayedMove>, ChessError> {
        if self.status.is_over() {
            return Err(ChessError::GameOver);
        }
        if !self.is_playable(mv) {
            warn!("rejected {} for {}", mv, self.current);
            return Err(ChessError::IllegalMove {
                mv,
                color: self.current,
            });
        }

        let mut played = vec![self.commit(mv)];

        if self.mode == PlayerMode::OnePlayer && !self.status.is_over() {
            match self.play_ai_turn() {
                Ok(reply) => played.push(reply),
                // The game is now over with NoMoves; the human move still stands
                Err(ChessError::NoLegalMoves(_)) => {}
                Err(err) => return Err(err),
            }
        }

        Ok(played)
    }

    /// Lets the AI play one ply for the side to move.
    pub fn play_ai_turn(&mut self) -> Result<PlayedMove, ChessError> {
        if self.status.is_over() {
            return Err(ChessError::GameOver);
        }

        let color = self.current;
        let chosen = self.selector.best_move(&mut self.board, color).or_else(|| {
            // The scan skips root moves the opponent cannot answer; fall back to
            // any legal move rather than give up a playable position.
            let fallback = self.board.legal_moves(color).first().copied();
            if let Some(mv) = fallback {
                warn!("no scored move for {}, falling back to {}", color, mv);
            }
            fallback
        });

        match chosen {
            Some(mv) => Ok(self.commit(mv)),
            None => {
                info!("{} has no legal moves, game over", color);
                self.status = Status::NoMoves(color);
                Err(ChessError::NoLegalMoves(color))
            }
        }
    }

    /// Takes back the last ply, or in a one-player game the AI reply together
    /// with the human move before it, so the human is to move again.
    pub fn undo_last_move(&mut self) -> Result<Vec<MoveInfo>, ChessError> {
        let history = self.history.as_mut().ok_or(ChessError::UndoUnavailable)?;
        let mut undone = Vec::new();

        loop {
            let Some(info) = history.undo_last(&mut self.board) else {
                break;
            };
            // The piece is back on its source square, so it tells us who moved
            if let Some(mover) = self.board.piece_at(info.mv.from).color() {
                self.current = mover;
            }
            undone.push(info);

            let wait_for_human = self.mode == PlayerMode::OnePlayer && self.current != HUMAN_COLOR;
            if !wait_for_human || history.is_empty() {
                break;
            }
        }

        if undone.is_empty() {
            return Err(ChessError::UndoUnavailable);
        }

        self.status = Status::InProgress;
        info!("undid {} ply, {} to move", undone.len(), self.current);
        Ok(undone)
    }

    /// Squares the piece on `from` may be dropped on by the side to move.
    pub fn drop_targets(&self, from: Square) -> Vec<Square> {
        if !from.on_board() || self.status.is_over() {
            return Vec::new();
        }

        let piece = self.board.piece_at(from);
        (0..64)
            .map(Square::from_index)
            .filter(|&to| to != from && piece.is_legal(&self.board, self.current, Move::new(from, to)))
            .collect()
    }

    fn is_playable(&self, mv: Move) -> bool {
        if mv.is_null() || !mv.from.on_board() {
            return false;
        }
        self.board.piece_at(mv.from).is_legal(&self.board, self.current, mv)
    }

    fn commit(&mut self, mv: Move) -> PlayedMove {
        let color = self.current;
        let captured = self.board.apply_move(mv);
        if let Some(history) = self.history.as_mut() {
            history.record(mv, captured);
        }

        if captured.is_empty() {
            info!("{} plays {}", color, mv);
        } else {
            info!("{} plays {} taking {}", color, mv, captured);
        }

        if captured.label().ends_with("_king") {
            info!("{} captured the king, game over", color);
            self.status = Status::KingCaptured { winner: color };
        }

        self.current = color.opposite();
        PlayedMove { color, mv, captured }
    }
}
