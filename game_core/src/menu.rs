//! Menu selection state. Drawing belongs to the host; this only tracks which
//! button is highlighted and turns key presses into commands.

use crate::resources::{InputState, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Play,
    Help,
    Exit,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::Play, MenuButton::Help, MenuButton::Exit];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Play,
    Exit,
}

#[derive(Debug, Clone)]
pub struct Menu {
    selected: usize,
    help_active: bool,
    // Set while any navigation key is held; presses only count on the edge
    latched: bool,
    winner: Option<Side>,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            selected: 1,
            help_active: false,
            latched: false,
            winner: None,
        }
    }
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MenuButton {
        MenuButton::ALL[self.selected]
    }

    /// Help panel is up once the Help button has been activated
    pub fn help_visible(&self) -> bool {
        self.help_active
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn set_winner(&mut self, side: Side) {
        self.winner = Some(side);
    }

    pub fn change_selection(&mut self, shift: isize) {
        let len = MenuButton::ALL.len() as isize;
        self.selected = (self.selected as isize + shift).rem_euclid(len) as usize;
        // Moving off a button deactivates it
        self.help_active = false;
    }

    /// Left paddle keys move the highlight; right-down activates, right-up
    /// deactivates.
    pub fn process(&mut self, input: &InputState) -> Option<MenuCommand> {
        let mut command = None;
        if !self.latched {
            if input.left_up {
                self.change_selection(-1);
            } else if input.left_down {
                self.change_selection(1);
            } else if input.right_down {
                command = self.activate();
            } else if input.right_up {
                self.help_active = false;
            }
        }
        self.latched = input.any_paddle_key();
        command
    }

    fn activate(&mut self) -> Option<MenuCommand> {
        match self.selected() {
            MenuButton::Play => Some(MenuCommand::Play),
            MenuButton::Help => {
                self.help_active = true;
                None
            }
            MenuButton::Exit => Some(MenuCommand::Exit),
        }
    }
}
