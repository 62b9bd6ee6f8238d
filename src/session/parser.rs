//! Command line tokenizer.
//!
//! Lines are split on single spaces: the first token is the command name and
//! the rest are arguments, passed verbatim. There is no quoting, escaping or
//! type coercion; repeated spaces produce empty argument tokens.

use alloc::vec::Vec;

/// A submitted line split into command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    /// First token, matched exactly against the command table
    pub name: &'a str,

    /// Remaining tokens in order
    pub args: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Tokenize a line. Returns `None` for an empty line.
    pub fn parse(line: &'a str) -> Option<Self> {
        if line.is_empty() {
            return None;
        }
        let mut tokens = line.split(' ');
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_args() {
        let line = CommandLine::parse("cd apps now").unwrap();
        assert_eq!(line.name, "cd");
        assert_eq!(line.args, ["apps", "now"]);
    }

    #[test]
    fn test_no_args() {
        let line = CommandLine::parse("help").unwrap();
        assert_eq!(line.name, "help");
        assert!(line.args.is_empty());
    }

    #[test]
    fn test_split_on_single_spaces() {
        let line = CommandLine::parse("cd  apps").unwrap();
        assert_eq!(line.args, ["", "apps"]);
    }

    #[test]
    fn test_no_quoting_or_case_folding() {
        let line = CommandLine::parse("Echo \"a b\"").unwrap();
        assert_eq!(line.name, "Echo");
        assert_eq!(line.args, ["\"a", "b\""]);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(CommandLine::parse(""), None);
    }
}
