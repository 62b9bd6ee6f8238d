//! Command handler trait for executing commands.
//!
//! A command table is a [`CommandSet`] enum of names plus one
//! `CommandHandler` implementation that matches on it. Handlers never touch
//! the surface or collaborators directly: they read what they need from the
//! [`Context`] and describe lines and effects in a [`Response`].

use crate::command::CommandSet;
use crate::config::TerminalConfig;
use crate::error::TermError;
use crate::profile::Location;
use crate::response::Response;
use crate::services::{Clock, RandomSource, Router};
use crate::session::history::HistoryLog;

/// Read access to the session for the duration of one command.
pub struct Context<'a> {
    /// History, already including the line being executed
    pub history: &'a HistoryLog,

    /// Hosting page location
    pub location: &'a Location,

    /// Route resolution (navigation itself is an [`Effect`](crate::response::Effect))
    pub router: &'a dyn Router,

    /// Timestamp source
    pub clock: &'a dyn Clock,

    /// Randomness for pool picks
    pub rng: &'a mut dyn RandomSource,

    /// Whether the page has a theme toggle
    pub theme_available: bool,
}

impl core::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("history", &self.history.len())
            .field("location", &self.location)
            .field("theme_available", &self.theme_available)
            .finish_non_exhaustive()
    }
}

impl Context<'_> {
    /// Uniform pick from a non-empty pool.
    pub fn pick<'p>(&mut self, pool: &'p [&'p str]) -> &'p str {
        match pool.len() {
            0 => "",
            len => pool[self.rng.index(len).min(len - 1)],
        }
    }
}

/// Command execution handler trait.
///
/// Generic over `C: TerminalConfig` so handlers can honour the configured
/// listing limits.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Copy, Clone, CommandSet)]
/// enum MyCommands { Hello }
///
/// struct MyHandlers;
///
/// impl CommandHandler<DefaultConfig> for MyHandlers {
///     type Command = MyCommands;
///
///     fn execute(&self, command: MyCommands, args: &[&str], ctx: &mut Context<'_>)
///         -> Result<Response, TermError>
///     {
///         match command {
///             MyCommands::Hello => Ok(Response::success("hi")),
///         }
///     }
/// }
/// ```
pub trait CommandHandler<C: TerminalConfig> {
    /// Closed set of command names this handler executes.
    type Command: CommandSet;

    /// Execute one command.
    ///
    /// # Returns
    ///
    /// - `Ok(Response)`: lines to render and an optional effect
    /// - `Err(TermError)`: rendered in-band as a single error line
    fn execute(
        &self,
        command: Self::Command,
        args: &[&str],
        ctx: &mut Context<'_>,
    ) -> Result<Response, TermError>;
}
