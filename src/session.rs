//! Turn and game-over bookkeeping around a single board

use std::sync::mpsc::{channel, Receiver, Sender};

use tracing::{debug, info, instrument};

use crate::board::{Board, Cell, Player, Pos};
use crate::config::GameConfig;
use crate::error::{BoardError, MoveError};
use crate::rules::{check_win, WinResult, WIN_LENGTH};

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Terminal: no moves are accepted until reset
    Won {
        winner: Player,
        run: [Pos; WIN_LENGTH],
    },
}

/// Result of a submitted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stone placed, turn passes to the opponent
    Placed(Player),
    /// Stone placed and it completed five in a row
    PlacedAndWon(Player, [Pos; WIN_LENGTH]),
    /// Nothing changed
    Rejected(MoveError),
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    pub fn rejection(&self) -> Option<MoveError> {
        match self {
            MoveOutcome::Rejected(err) => Some(*err),
            _ => None,
        }
    }
}

/// Sent to every subscriber after a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetEvent {
    /// Round that has just started (the first round is 0, wrapping
    /// back to 0 after `u32::MAX`)
    pub round: u32,
}

/// One game between two players on one board.
///
/// Sessions share nothing; run one per match.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    current_turn: Player,
    status: GameStatus,
    move_count: usize,
    last_move: Option<Pos>,
    round: u32,
    reset_subscribers: Vec<Sender<ResetEvent>>,
}

impl GameSession {
    /// Start a game on an empty `width` x `height` board
    #[instrument]
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(width, height)?,
            current_turn: Player::One,
            status: GameStatus::InProgress,
            move_count: 0,
            last_move: None,
            round: 0,
            reset_subscribers: Vec::new(),
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        Self::new(config.width, config.height)
    }

    /// Submit a move for the player whose turn it is.
    ///
    /// Rejections leave the session untouched, so resubmitting the same
    /// invalid move yields the same rejection.
    #[instrument(skip(self), fields(player = ?self.current_turn))]
    pub fn submit_move(&mut self, x: i32, y: i32) -> MoveOutcome {
        match self.apply_move(x, y) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(%err, "move rejected");
                MoveOutcome::Rejected(err)
            }
        }
    }

    fn apply_move(&mut self, x: i32, y: i32) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyEnded);
        }

        let player = self.current_turn;
        let pos = self.board.place(x, y, player)?;
        self.move_count += 1;
        self.last_move = Some(pos);

        match check_win(&self.board, pos, player) {
            WinResult::Win { axis, run } => {
                info!(?axis, moves = self.move_count, "{player} has won");
                self.status = GameStatus::Won { winner: player, run };
                Ok(MoveOutcome::PlacedAndWon(player, run))
            }
            WinResult::NoWin => {
                self.current_turn = player.opponent();
                debug!(%pos, next = ?self.current_turn, "move placed");
                Ok(MoveOutcome::Placed(player))
            }
        }
    }

    /// Clear the board and start a new round with Player One to move.
    /// Subscribers are notified; those that hung up are dropped.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Player::One;
        self.status = GameStatus::InProgress;
        self.move_count = 0;
        self.last_move = None;
        self.round = self.round.wrapping_add(1);

        let event = ResetEvent { round: self.round };
        self.reset_subscribers.retain(|tx| tx.send(event).is_ok());
        info!(round = self.round, "Game has been reset");
    }

    /// Receive a [`ResetEvent`] each time the session is reset
    pub fn subscribe_resets(&mut self) -> Receiver<ResetEvent> {
        let (tx, rx) = channel();
        self.reset_subscribers.push(tx);
        rx
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell contents for rendering
    pub fn cell(&self, x: i32, y: i32) -> Result<Cell, MoveError> {
        self.board.get(x, y)
    }

    /// Player to move, or the winner once the game is over
    #[inline]
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won { winner, .. } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    pub fn winning_run(&self) -> Option<&[Pos; WIN_LENGTH]> {
        match &self.status {
            GameStatus::Won { run, .. } => Some(run),
            GameStatus::InProgress => None,
        }
    }

    /// Accepted moves this round
    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn round(&self) -> u32 {
        self.round
    }
}
