use log::{info, warn};

use crate::builder::{RecipeFinder, SearchResult};
use crate::error::SearchError;
use crate::ingredients::MAX_INGREDIENTS;
use crate::presenter::{present, summarize};
use crate::terminal::Terminal;

pub const INGREDIENT_PROMPT: &str = "Enter ingredients, separated by commas: ";
pub const AGAIN_PROMPT: &str = "Search again? (y/n): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Prompting,
    Done,
}

/// Interactive search loop over a terminal
pub struct Session<T: Terminal> {
    finder: RecipeFinder,
    terminal: T,
    state: SessionState,
}

impl<T: Terminal> Session<T> {
    pub fn new(finder: RecipeFinder, terminal: T) -> Self {
        Session {
            finder,
            terminal,
            state: SessionState::Prompting,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Give back the terminal, e.g. to inspect what was printed
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Run search cycles until the user declines to continue or input ends.
    ///
    /// Validation and lookup failures are reported and end only the current
    /// cycle. Terminal I/O errors are returned.
    pub async fn run(&mut self) -> Result<(), SearchError> {
        self.terminal.print_line(&format!(
            "Find recipes that use all of your ingredients (up to {}).",
            MAX_INGREDIENTS
        ));

        while self.state == SessionState::Prompting {
            self.state = self.run_cycle().await?;
        }

        info!("Session finished");
        Ok(())
    }

    async fn run_cycle(&mut self) -> Result<SessionState, SearchError> {
        let Some(raw) = self.terminal.prompt(INGREDIENT_PROMPT).await? else {
            return Ok(SessionState::Done);
        };

        match self.search(&raw).await {
            Ok(result) => self.show(&result),
            Err(e) if e.is_recoverable() => {
                warn!("Search failed: {}", e);
                self.terminal.print_line(&format!("Error: {}", e));
            }
            Err(e) => return Err(e),
        }

        let answer = self.terminal.prompt(AGAIN_PROMPT).await?;
        Ok(match answer {
            Some(answer) if wants_another(&answer) => SessionState::Prompting,
            _ => SessionState::Done,
        })
    }

    async fn search(&mut self, raw: &str) -> Result<SearchResult, SearchError> {
        let terminal = &mut self.terminal;
        self.finder
            .search_with_progress(raw, |ingredient, recipes| {
                terminal.print_line(&format!(
                    "Looked up '{}': {} recipe(s)",
                    ingredient,
                    recipes.len()
                ));
            })
            .await
    }

    fn show(&mut self, result: &SearchResult) {
        for line in present(&result.recipes) {
            self.terminal.print_line(&line);
        }
        for line in summarize(&result.ingredients, &result.recipes).lines() {
            self.terminal.print_line(&line);
        }
    }
}

fn wants_another(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
