//! Built-in site commands.
//!
//! `SiteCommand` is the fixed command table of the personal-site terminal and
//! `SiteHandlers` executes it. Content commands print canned text; `cd`,
//! `clear`, `exit` and `theme` hand an [`Effect`] back to the session.

use alloc::format;

use crate::config::TerminalConfig;
use crate::error::TermError;
use crate::io::LineStyle;
use crate::response::{Effect, Response};
use crate::session::content;
use crate::session::handler::{CommandHandler, Context};
use crate::CommandSet;

/// Commands understood by the site terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, CommandSet)]
pub enum SiteCommand {
    /// List commands
    Help,
    /// List pages
    Ls,
    /// Navigate to a page
    Cd,
    /// Show the current page
    Pwd,
    /// Show the site structure
    Tree,
    /// One-line introduction
    Whoami,
    /// Biography
    About,
    /// Technical skills
    Skills,
    /// Work experience pointer
    Experience,
    /// Education pointer
    Education,
    /// Projects pointer
    Projects,
    /// Contact pointer
    Contact,
    /// Current date and time
    Date,
    /// Site uptime
    Uptime,
    /// Toggle dark/light mode
    Theme,
    /// Clear the output
    Clear,
    /// Recent commands
    History,
    /// Close the terminal
    Exit,
    /// Random quote
    Fortune,
    /// Random programming joke
    Joke,
    /// Random easter egg
    Easter,
}

/// Handlers for [`SiteCommand`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SiteHandlers;

impl<C: TerminalConfig> CommandHandler<C> for SiteHandlers {
    type Command = SiteCommand;

    fn execute(
        &self,
        command: SiteCommand,
        args: &[&str],
        ctx: &mut Context<'_>,
    ) -> Result<Response, TermError> {
        match command {
            SiteCommand::Help => Ok(Response::info(content::HELP)),
            SiteCommand::Ls => Ok(Response::info(content::PAGES)),
            SiteCommand::Cd => change_page(args, ctx),
            SiteCommand::Pwd => Ok(current_location(ctx)),
            SiteCommand::Tree => Ok(Response::info(content::SITE_TREE)),
            SiteCommand::Whoami => Ok(Response::success(content::WHOAMI)),
            SiteCommand::About => Ok(Response::info(content::ABOUT)),
            SiteCommand::Skills => Ok(Response::info(content::SKILLS)),
            SiteCommand::Experience => Ok(Response::info(content::EXPERIENCE)),
            SiteCommand::Education => Ok(Response::info(content::EDUCATION)),
            SiteCommand::Projects => Ok(Response::info(content::PROJECTS)),
            SiteCommand::Contact => Ok(Response::info(content::CONTACT)),
            SiteCommand::Date => Ok(Response::info(ctx.clock.now())),
            SiteCommand::Uptime => Ok(Response::success(content::UPTIME)),
            SiteCommand::Theme => toggle_theme(ctx),
            SiteCommand::Clear => Ok(Response::empty()
                .with_effect(Effect::Clear)
                .returning("Terminal cleared.")),
            SiteCommand::History => Ok(show_history(ctx, C::HISTORY_LISTING)),
            SiteCommand::Exit => Ok(Response::empty().with_effect(Effect::Close)),
            SiteCommand::Fortune => Ok(Response::success(ctx.pick(content::FORTUNES))),
            SiteCommand::Joke => Ok(Response::success(ctx.pick(content::JOKES))),
            SiteCommand::Easter => Ok(Response::success(ctx.pick(content::EASTER_EGGS))),
        }
    }
}

fn change_page(args: &[&str], ctx: &Context<'_>) -> Result<Response, TermError> {
    let page = match args.first() {
        Some(page) if !page.is_empty() => *page,
        _ => return Err(TermError::invalid("Usage: cd <page>")),
    };

    match ctx.router.resolve(page) {
        Some(destination) => Ok(Response::success(format!("Navigating to {}...", page))
            .with_effect(Effect::Navigate(destination.into()))),
        None => Err(TermError::invalid(format!(
            "Page not found: {}. Use 'ls' to see available pages.",
            page
        ))),
    }
}

fn current_location(ctx: &Context<'_>) -> Response {
    let pathname = ctx.location.pathname.as_str();
    let page = ctx.router.page_name(pathname).unwrap_or("unknown");
    Response::info(format!("Current location: {} ({})", pathname, page))
}

fn toggle_theme(ctx: &Context<'_>) -> Result<Response, TermError> {
    if ctx.theme_available {
        Ok(Response::success("Theme toggled!").with_effect(Effect::ToggleTheme))
    } else {
        Err(TermError::unavailable("Theme toggle not available."))
    }
}

fn show_history(ctx: &Context<'_>, limit: usize) -> Response {
    if ctx.history.is_empty() {
        return Response::info("No command history.");
    }

    ctx.history
        .iter()
        .take(limit)
        .enumerate()
        .fold(Response::info("Command history:"), |response, (index, line)| {
            response.line(format!("  {}. {}", index + 1, line), LineStyle::Info)
        })
}
