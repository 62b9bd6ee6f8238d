//! Line-driven site terminal on stdin/stdout.
//!
//! Each stdin line is submitted as if typed into the widget and Enter pressed.
//! `cd` reloads the session at the destination page, like a browser
//! navigation would. `exit` on an embedded page ends the program.
//!
//! ```bash
//! cargo run --features repl --bin site-terminal-repl -- [profile.toml] [--pathname /app]
//! ```
//!
//! Set `RUST_LOG=debug` to see dispatch and presentation logs on stderr.

use std::cell::{Cell, RefCell};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use site_terminal::{
    InputKey, LineStyle, Location, OsRandom, PresentationState, RouteTable, Router, Services,
    Session, SiteHandlers, SiteProfile, Surface, SystemClock, ThemeToggle, Variant, View,
};

// =============================================================================
// Surface
// =============================================================================

/// Prints output lines to stdout with ANSI colours.
struct StdoutSurface {
    stdout: io::Stdout,
}

impl StdoutSurface {
    fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Surface for StdoutSurface {
    type Error = io::Error;

    fn write_line(&mut self, text: &str, style: LineStyle) -> Result<(), Self::Error> {
        let colour = match style {
            LineStyle::Info => "",
            LineStyle::Success => "\x1b[32m",
            LineStyle::Error => "\x1b[31m",
            LineStyle::Command => "\x1b[1m",
        };
        let mut out = self.stdout.lock();
        if colour.is_empty() {
            writeln!(out, "{}", text)
        } else {
            writeln!(out, "{}{}\x1b[0m", colour, text)
        }
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        let mut out = self.stdout.lock();
        write!(out, "\x1b[2J\x1b[H")?;
        out.flush()
    }

    fn scroll_to_bottom(&mut self) -> Result<(), Self::Error> {
        self.stdout.lock().flush()
    }

    fn present(&mut self, view: &View) -> Result<(), Self::Error> {
        log::info!("terminal {:?}", view.state);
        Ok(())
    }
}

// =============================================================================
// Host services
// =============================================================================

/// Route table that records the requested destination for the main loop.
struct ReloadRouter {
    table: RouteTable,
    pending: Rc<RefCell<Option<String>>>,
}

impl Router for ReloadRouter {
    fn resolve(&self, page: &str) -> Option<&str> {
        self.table.resolve(page)
    }

    fn page_name(&self, pathname: &str) -> Option<&str> {
        self.table.page_name(pathname)
    }

    fn navigate(&mut self, destination: &str) {
        *self.pending.borrow_mut() = Some(destination.into());
    }
}

/// Dark/light flag shared across page reloads.
struct ReplTheme {
    dark: Rc<Cell<bool>>,
}

impl ThemeToggle for ReplTheme {
    fn toggle(&mut self) {
        self.dark.set(!self.dark.get());
        log::info!("theme: {}", if self.dark.get() { "dark" } else { "light" });
    }
}

// =============================================================================
// Command line
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "site-terminal-repl", about = "Drive the site terminal from stdin", version)]
struct Args {
    /// Site profile (TOML); the built-in profile when omitted
    profile: Option<PathBuf>,

    /// Page the first session starts on
    #[arg(long, default_value = "/terminal")]
    pathname: String,
}

// =============================================================================
// Main loop
// =============================================================================

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let profile = match &args.profile {
        Some(path) => SiteProfile::load(path)?,
        None => SiteProfile::default(),
    };
    let mut pathname = args.pathname;

    let dark = Rc::new(Cell::new(true));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let location = Location::from_pathname(&pathname);
        let variant = if location.is_terminal_page() {
            Variant::FullPage
        } else {
            Variant::Minimizing
        };

        let pending = Rc::new(RefCell::new(None));
        let services = Services {
            router: Box::new(ReloadRouter {
                table: RouteTable::from_profile(&profile),
                pending: Rc::clone(&pending),
            }),
            theme: Some(Box::new(ReplTheme {
                dark: Rc::clone(&dark),
            })),
            clock: Box::new(SystemClock),
            rng: Box::new(OsRandom),
        };

        let mut session: Session<SiteHandlers, StdoutSurface> = Session::new(
            variant,
            SiteHandlers,
            StdoutSurface::new(),
            services,
            profile.clone(),
            location,
        );
        session.activate()?;
        session.open()?;

        loop {
            print!("{} ", session.prompt());
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };
            session.set_input(&line?);
            session.handle_key(InputKey::Enter)?;

            let destination = pending.borrow_mut().take();
            if let Some(destination) = destination {
                pathname = destination;
                break;
            }
            if session.state() == PresentationState::Dismissed {
                return Ok(());
            }
        }
    }
}
