//! Game Controller - main menu and the top-level play loop.

use game_rules::PlayerState;
use log::{info, warn};

use crate::engine;
use crate::events::Ending;
use crate::persistence::{LoadError, SaveStore};
use crate::prompt::{ChoicePrompter, Narrator, PromptError};

pub const TITLE: &str = "\
====================================
        RUST TEXT ADVENTURE
====================================
";

const MENU: [&str; 3] = ["New Game", "Load Game", "Quit"];

/// What the main menu settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Play,
    Quit,
}

/// Owns the player state and the ports for one session.
pub struct Game<C, S> {
    console: C,
    store: S,
    state: PlayerState,
}

impl<C, S> Game<C, S>
where
    C: Narrator + ChoicePrompter,
    S: SaveStore,
{
    pub fn new(console: C, store: S) -> Self {
        Self {
            console,
            store,
            state: PlayerState::default(),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Play a whole session: menu, rooms, farewell.
    ///
    /// Closed input ends the session as a quit.
    pub fn run(&mut self) -> Ending {
        let ending = match self.session() {
            Ok(ending) => ending,
            Err(e) => {
                warn!("ending session: {e}");
                self.state.game_over = true;
                Ending::Quit
            }
        };
        self.console.say("Thanks for playing!");
        self.console.pause();
        ending
    }

    fn session(&mut self) -> Result<Ending, PromptError> {
        match self.main_menu()? {
            MenuOutcome::Play => self.play(),
            MenuOutcome::Quit => {
                self.state.game_over = true;
                Ok(Ending::Quit)
            }
        }
    }

    /// Show the menu until a game is started or the player quits.
    ///
    /// A failed load leaves the current state untouched.
    pub fn main_menu(&mut self) -> Result<MenuOutcome, PromptError> {
        loop {
            self.console.clear();
            self.console.show(TITLE);
            match self.console.choose("Main menu:", &MENU)? {
                0 => {
                    let name = self.ask_name()?;
                    info!("new game for {name}");
                    self.state = PlayerState::new(name);
                    return Ok(MenuOutcome::Play);
                }
                1 => match self.store.load() {
                    Ok(state) => {
                        self.state = state;
                        self.console.say("Game loaded successfully!");
                        return Ok(MenuOutcome::Play);
                    }
                    Err(LoadError::NotFound) => self.console.say("No saved game found."),
                    Err(e) => {
                        warn!("load failed: {e}");
                        self.console.say("Failed to load saved game.");
                    }
                },
                _ => return Ok(MenuOutcome::Quit),
            }
        }
    }

    fn ask_name(&mut self) -> Result<String, PromptError> {
        self.console.say("Welcome, adventurer!");
        let mut name = self.console.ask("What is your name?")?;
        while name.is_empty() {
            name = self.console.ask("Please enter your name:")?;
        }
        Ok(name)
    }

    /// Dispatch rooms until the game is over. Resumes at `current_room`.
    pub fn play(&mut self) -> Result<Ending, PromptError> {
        while !self.state.game_over {
            if let Some(ending) = engine::step(&mut self.state, &mut self.console, &mut self.store)? {
                return Ok(ending);
            }
        }
        Ok(Ending::Quit)
    }
}
