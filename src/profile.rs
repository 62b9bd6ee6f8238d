//! Site profile and page location.
//!
//! A `SiteProfile` carries the per-site content the session needs at runtime:
//! prompt prefix, welcome messages, route aliases and page names. The default
//! profile is the personal site this widget was written for. With the
//! `profile` feature a profile can be loaded from TOML, any missing key
//! falling back to the default.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "profile")]
use alloc::string::ToString;
#[cfg(feature = "profile")]
use core::fmt;

/// Logical page alias accepted by `cd`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "profile", derive(serde::Deserialize))]
pub struct RouteAlias {
    /// Token typed after `cd`
    pub alias: String,
    /// Destination path navigated to
    pub destination: String,
}

/// Display name of a page path, used by `pwd`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "profile", derive(serde::Deserialize))]
pub struct PageName {
    /// Exact pathname
    pub path: String,
    /// Human readable page name
    pub name: String,
}

/// Per-site runtime content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "profile", derive(serde::Deserialize))]
#[cfg_attr(feature = "profile", serde(default))]
pub struct SiteProfile {
    /// Text before `:<path>$` in the prompt and command echo
    pub prompt_prefix: String,

    /// First line shown by an embedded session
    pub welcome: String,

    /// First line shown by a full-page session
    pub welcome_fullpage: String,

    /// `cd` aliases, matched exactly
    pub routes: Vec<RouteAlias>,

    /// Page names reported by `pwd`
    pub pages: Vec<PageName>,
}

fn route(alias: &str, destination: &str) -> RouteAlias {
    RouteAlias {
        alias: alias.into(),
        destination: destination.into(),
    }
}

fn page(path: &str, name: &str) -> PageName {
    PageName {
        path: path.into(),
        name: name.into(),
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            prompt_prefix: "tony@tonybenoy.com".into(),
            welcome: "Welcome to Tony's Interactive Terminal! Type \"help\" for available commands."
                .into(),
            welcome_fullpage:
                "Welcome to Tony's Full-Page Terminal! Type \"help\" for available commands."
                    .into(),
            routes: vec![
                route("home", "/"),
                route("~", "/"),
                route("/", "/"),
                route("apps", "/app"),
                route("app", "/app"),
                route("timeline", "/timeline"),
                route("contact", "/contact"),
                route("terminal", "/terminal"),
            ],
            pages: vec![
                page("/", "home"),
                page("/home", "home"),
                page("/app", "apps"),
                page("/apps", "apps"),
                page("/timeline", "timeline"),
                page("/contact", "contact"),
                page("/terminal", "terminal"),
            ],
        }
    }
}

impl SiteProfile {
    /// Prompt for the given location, e.g. `tony@tonybenoy.com:~$`.
    pub fn prompt(&self, location: &Location) -> String {
        let capacity = self.prompt_prefix.len() + location.display.len() + 2;
        let mut prompt = String::with_capacity(capacity);
        prompt.push_str(&self.prompt_prefix);
        prompt.push(':');
        prompt.push_str(&location.display);
        prompt.push('$');
        prompt
    }
}

/// Error loading a site profile.
#[cfg(feature = "profile")]
#[derive(Debug)]
pub enum ProfileError {
    /// Profile file could not be read
    Io(std::io::Error),

    /// Profile is not valid TOML or has wrongly typed keys
    Parse(String),
}

#[cfg(feature = "profile")]
impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::Io(err) => write!(f, "cannot read profile: {}", err),
            ProfileError::Parse(msg) => write!(f, "invalid profile: {}", msg),
        }
    }
}

#[cfg(feature = "profile")]
impl std::error::Error for ProfileError {}

#[cfg(feature = "profile")]
impl SiteProfile {
    /// Parse a profile from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ProfileError> {
        toml::from_str(text).map_err(|err| ProfileError::Parse(err.to_string()))
    }

    /// Read and parse a profile file.
    pub fn load(path: &std::path::Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path).map_err(ProfileError::Io)?;
        Self::from_toml(&text)
    }
}

/// Hosting page location, derived once at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Raw pathname of the hosting page
    pub pathname: String,

    /// Path shown in the prompt (`~` for the site root)
    pub display: String,
}

impl Location {
    /// Derive a location from the host pathname.
    ///
    /// An empty pathname is treated as the site root.
    pub fn from_pathname(pathname: &str) -> Self {
        let pathname = if pathname.is_empty() { "/" } else { pathname };
        let display = if pathname == "/" { "~" } else { pathname };
        Self {
            pathname: pathname.into(),
            display: display.into(),
        }
    }

    /// Whether this location is the full-page terminal.
    ///
    /// Hosts use this to skip the embedded widget on that page.
    pub fn is_terminal_page(&self) -> bool {
        self.pathname.contains("/terminal")
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::from_pathname("/")
    }
}
