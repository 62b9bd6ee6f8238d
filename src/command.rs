//! Command name sets.
//!
//! A command table is a closed enum of command names paired with a
//! [`CommandHandler`](crate::session::handler::CommandHandler) that matches
//! on it. `CommandSet` is the name side of that pairing.

/// Closed set of command names.
///
/// Lookup is exact and case-sensitive; there is no prefix matching or
/// abbreviation expansion. Usually derived with `#[derive(CommandSet)]`.
pub trait CommandSet: Copy + 'static {
    /// Every command in declaration order.
    const ALL: &'static [Self];

    /// Exact-match lookup of a command name.
    fn from_name(name: &str) -> Option<Self>
    where
        Self: Sized;

    /// Name the user types.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CommandSet;

    #[derive(Debug, Copy, Clone, PartialEq, Eq, CommandSet)]
    enum Sample {
        Help,
        WhoAmI,
        #[command(name = "sudo")]
        Sandwich,
    }

    #[test]
    fn test_derived_names() {
        assert_eq!(Sample::Help.name(), "help");
        assert_eq!(Sample::WhoAmI.name(), "whoami");
        assert_eq!(Sample::Sandwich.name(), "sudo");
        assert_eq!(Sample::ALL, &[Sample::Help, Sample::WhoAmI, Sample::Sandwich]);
    }

    #[test]
    fn test_exact_case_sensitive_lookup() {
        assert_eq!(Sample::from_name("help"), Some(Sample::Help));
        assert_eq!(Sample::from_name("sudo"), Some(Sample::Sandwich));
        assert_eq!(Sample::from_name("Help"), None);
        assert_eq!(Sample::from_name("hel"), None);
        assert_eq!(Sample::from_name("sandwich"), None);
        assert_eq!(Sample::from_name(""), None);
    }
}
