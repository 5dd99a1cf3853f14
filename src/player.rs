use alloc::string::String;

use crate::ui::BoardView;

/// The I/O boundary of a game: where guesses come from and where results go.
///
/// Implementors only ever see a [`BoardView`], so ship positions stay hidden.
pub trait Player {
    /// Block until the player is ready for the first layout.
    fn wait_for_start(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Next raw guess, e.g. `"B7"`. Validation happens in the engine.
    fn next_guess(&mut self, view: &BoardView<'_>) -> anyhow::Result<String>;

    /// Asked after every win; `true` starts a fresh game.
    fn play_again(&mut self) -> anyhow::Result<bool>;

    /// Show the board before a guess and after the final one.
    fn show_board(&mut self, _view: &BoardView<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Report an outcome message such as `"Hit!"`.
    fn notify(&mut self, _message: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
