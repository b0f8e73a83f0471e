//! Match state machine
//!
//! Menu (with an idle demo running behind it) → Playing → GameOver → Menu.

/// Top-level game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// "Play" chosen from the menu
    StartMatch,
    /// Win condition met during play
    MatchWon,
    /// Confirm key pressed on the game-over screen
    ReturnToMenu,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game finite state machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Attempt a transition; an invalid action leaves the state unchanged
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;
        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Menu, GameAction::StartMatch) => Some(GameState::Playing),
            (GameState::Playing, GameAction::MatchWon) => Some(GameState::GameOver),
            (GameState::GameOver, GameAction::ReturnToMenu) => Some(GameState::Menu),
            _ => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}
