//! Session orchestration: command dispatch, history and presentation.
//!
//! A `Session` is one terminal instance for one page load. The host owns it
//! and feeds it events: submitted lines, key presses, pointer-downs, header
//! clicks and elapsed time. Everything the user sees goes through the
//! session's [`Surface`]; everything else the page offers (routing, theme,
//! clock, randomness) comes from its [`Services`].

use alloc::string::String;
use core::marker::PhantomData;

use crate::command::CommandSet;
use crate::config::{DefaultConfig, TerminalConfig};
use crate::error::TermError;
use crate::io::{LineStyle, Surface};
use crate::presentation::{PointerTarget, Presentation, PresentationState, Variant, View};
use crate::profile::{Location, SiteProfile};
use crate::response::{Effect, Response};
use crate::services::Services;

// Sub-modules
pub mod builtins;
pub(crate) mod content;
pub mod decoder;
pub mod handler;
pub mod history;
pub mod parser;

// Re-export key types
pub use builtins::{SiteCommand, SiteHandlers};
pub use decoder::InputKey;
pub use handler::{CommandHandler, Context};
pub use history::{HistoryDirection, HistoryLog, Recall};
pub use parser::CommandLine;

/// What happened to a submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty line: nothing recorded, nothing rendered
    Ignored,

    /// Known command executed (successfully or with an in-band error)
    Executed {
        /// Display value the handler handed back, e.g. `Terminal cleared.`
        returned: Option<String>,
    },

    /// First token matched no command
    NotFound,
}

/// What the host should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Suppress the browser's default action (caret movement on arrows)
    pub prevent_default: bool,

    /// Outcome of the submission when the key was Enter
    pub submitted: Option<SubmitOutcome>,
}

/// Terminal session.
///
/// Generic over:
/// - `H`: CommandHandler implementation (the command table)
/// - `S`: Surface implementation (embedded or full-page rendering)
/// - `C`: TerminalConfig implementation
pub struct Session<H, S, C = DefaultConfig>
where
    H: CommandHandler<C>,
    S: Surface,
    C: TerminalConfig,
{
    /// Command handlers
    handlers: H,

    /// Output sink and presentation renderer
    surface: S,

    /// Host collaborators
    services: Services,

    /// Prompt prefix and welcome text
    profile: SiteProfile,

    /// Hosting page location, fixed for the session
    location: Location,

    /// Submitted lines and browsing cursor
    history: HistoryLog,

    /// Mirror of the input field
    input: String,

    /// Visibility state machine
    presentation: Presentation<C>,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

impl<H, S, C> core::fmt::Debug for Session<H, S, C>
where
    H: CommandHandler<C>,
    S: Surface,
    C: TerminalConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("location", &self.location.pathname)
            .field("input", &self.input)
            .field("history", &self.history.len())
            .field("cursor", &self.history.cursor())
            .field("view", &self.presentation.view())
            .finish_non_exhaustive()
    }
}

impl<H, S, C> Session<H, S, C>
where
    H: CommandHandler<C>,
    S: Surface,
    C: TerminalConfig,
{
    /// Create a new session for the page at `location`.
    ///
    /// Nothing is rendered yet. Call `activate()` to show the welcome message
    /// and the initial presentation.
    pub fn new(
        variant: Variant,
        handlers: H,
        surface: S,
        services: Services,
        profile: SiteProfile,
        location: Location,
    ) -> Self {
        log::debug!("session: {:?} at {}", variant, location.pathname);
        Self {
            handlers,
            surface,
            services,
            profile,
            location,
            history: HistoryLog::new(),
            input: String::new(),
            presentation: Presentation::new(variant),
            _config: PhantomData,
        }
    }

    /// Show the welcome message and the initial presentation.
    pub fn activate(&mut self) -> Result<(), S::Error> {
        let welcome = match self.presentation.variant() {
            Variant::FullPage => &self.profile.welcome_fullpage,
            Variant::AutoHide | Variant::Minimizing => &self.profile.welcome,
        };
        self.surface.write_line(welcome, LineStyle::Success)?;
        self.surface.present(&self.presentation.view())
    }

    /// Submit one command line.
    ///
    /// The caller trims the line. Empty and whitespace-only lines are
    /// ignored. Otherwise the raw line is recorded and echoed, then either
    /// dispatched or reported as not found. Command errors are rendered
    /// in-band; only surface failures are returned as `Err`.
    pub fn submit(&mut self, line: &str) -> Result<SubmitOutcome, S::Error> {
        if line.trim().is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }
        let Some(parsed) = CommandLine::parse(line) else {
            return Ok(SubmitOutcome::Ignored);
        };

        self.history.push(line);
        let echo = alloc::format!("{} {}", self.prompt(), line);
        self.surface.write_line(&echo, LineStyle::Command)?;

        let outcome = self.dispatch(&parsed)?;

        self.surface.scroll_to_bottom()?;
        Ok(outcome)
    }

    fn dispatch(&mut self, line: &CommandLine<'_>) -> Result<SubmitOutcome, S::Error> {
        let Some(command) = H::Command::from_name(line.name) else {
            log::debug!("dispatch: unknown command {:?}", line.name);
            let err = TermError::not_found(line.name);
            self.surface.write_line(&alloc::format!("{}", err), LineStyle::Error)?;
            return Ok(SubmitOutcome::NotFound);
        };

        log::debug!("dispatch: {} {:?}", command.name(), line.args);
        let result = {
            let mut ctx = Context {
                history: &self.history,
                location: &self.location,
                router: &*self.services.router,
                clock: &*self.services.clock,
                rng: &mut *self.services.rng,
                theme_available: self.services.theme.is_some(),
            };
            self.handlers.execute(command, &line.args, &mut ctx)
        };

        match result {
            Ok(response) => self.render(response),
            Err(err) => {
                log::debug!("dispatch: {} failed: {}", command.name(), err);
                self.surface.write_line(&alloc::format!("{}", err), LineStyle::Error)?;
                Ok(SubmitOutcome::Executed { returned: None })
            }
        }
    }

    fn render(&mut self, response: Response) -> Result<SubmitOutcome, S::Error> {
        if let Some(effect) = response.effect {
            self.apply(effect)?;
        }
        for line in &response.lines {
            self.surface.write_line(&line.text, line.style)?;
        }
        Ok(SubmitOutcome::Executed {
            returned: response.returned,
        })
    }

    fn apply(&mut self, effect: Effect) -> Result<(), S::Error> {
        log::debug!("effect: {:?}", effect);
        match effect {
            Effect::Clear => self.surface.clear(),
            Effect::Close => {
                if self.presentation.close() {
                    self.surface.present(&self.presentation.view())?;
                }
                Ok(())
            }
            Effect::Navigate(destination) => {
                self.services.router.navigate(&destination);
                Ok(())
            }
            Effect::ToggleTheme => {
                if let Some(theme) = self.services.theme.as_mut() {
                    theme.toggle();
                }
                Ok(())
            }
        }
    }

    /// Handle a key press in the input field.
    ///
    /// Enter trims, submits and clears the input, then resets the history
    /// cursor. Arrows browse history and ask the host to prevent the default
    /// caret movement.
    pub fn handle_key(&mut self, key: InputKey) -> Result<KeyOutcome, S::Error> {
        log::trace!("key: {:?}", key);
        let mut submitted = None;
        match key {
            InputKey::Enter => {
                let line = core::mem::take(&mut self.input);
                submitted = Some(self.submit(line.trim())?);
                self.history.reset_cursor();
            }
            InputKey::ArrowUp => self.navigate_history(HistoryDirection::Up),
            InputKey::ArrowDown => self.navigate_history(HistoryDirection::Down),
            InputKey::Backspace => {
                self.input.pop();
            }
            InputKey::Escape => self.input.clear(),
            InputKey::Char(c) => self.input.push(c),
            InputKey::Other => {}
        }
        Ok(KeyOutcome {
            prevent_default: key.prevents_default(),
            submitted,
        })
    }

    /// Browse history, updating the input buffer.
    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        match self.history.navigate(direction) {
            Recall::Unchanged => {}
            Recall::Entry(line) => {
                self.input.clear();
                self.input.push_str(line);
            }
            Recall::Cleared => self.input.clear(),
        }
    }

    /// Replace the input buffer (host text field edited directly).
    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Floating affordance clicked, or any other explicit open.
    pub fn open(&mut self) -> Result<(), S::Error> {
        let changed = self.presentation.open();
        self.present_if(changed)
    }

    /// Header bar or maximize control clicked.
    pub fn toggle(&mut self) -> Result<(), S::Error> {
        let changed = self.presentation.toggle();
        self.present_if(changed)
    }

    /// Close ("x") control clicked.
    pub fn close(&mut self) -> Result<(), S::Error> {
        let changed = self.presentation.close();
        self.present_if(changed)
    }

    /// Pointer-down somewhere on the page.
    pub fn pointer_down(&mut self, target: PointerTarget) -> Result<(), S::Error> {
        let changed = self.presentation.pointer_down(target);
        self.present_if(changed)
    }

    /// Hint bubble clicked away.
    pub fn dismiss_hint(&mut self) -> Result<(), S::Error> {
        let changed = self.presentation.dismiss_hint();
        self.present_if(changed)
    }

    /// Host time moved forward by `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: u64) -> Result<(), S::Error> {
        let changed = self.presentation.advance(elapsed_ms);
        self.present_if(changed)
    }

    /// Milliseconds until the host should call `advance()` again.
    pub fn next_timer_in(&self) -> Option<u64> {
        self.presentation.next_timer_in()
    }

    fn present_if(&mut self, changed: bool) -> Result<(), S::Error> {
        if changed {
            self.surface.present(&self.presentation.view())?;
        }
        Ok(())
    }

    /// Prompt, e.g. `tony@tonybenoy.com:~$`.
    pub fn prompt(&self) -> String {
        self.profile.prompt(&self.location)
    }

    /// Presentation snapshot.
    pub fn view(&self) -> View {
        self.presentation.view()
    }

    /// Active presentation state.
    pub fn state(&self) -> PresentationState {
        self.presentation.state()
    }

    /// Command history.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Hosting page location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Borrow the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
