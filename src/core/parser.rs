//! Input line parsing.
//!
//! The simulator keeps shell syntax deliberately small:
//! - Words are separated by runs of whitespace
//! - The command name is case-insensitive
//! - No quoting, escaping, variables or pipes; `echo` strips one layer of
//!   surrounding quotes on its own

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// One leading or one trailing quote character.
static SURROUNDING_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["']|["']$"#).expect("quote pattern is valid"));

/// A command line split into name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased command name (empty for a blank line)
    pub name: String,
    pub args: Vec<String>,
}

/// Parse a raw input line.
pub fn parse_input(input: &str) -> ParsedCommand {
    let mut words = input.split_whitespace();
    let name = words.next().unwrap_or_default().to_lowercase();
    let args = words.map(str::to_string).collect();

    ParsedCommand { name, args }
}

/// Strip one quote character from each end of `text`, if present.
///
/// The two ends are handled independently, so `"hello'` becomes `hello`
/// and `"hello` becomes `hello`.
pub fn strip_quotes(text: &str) -> Cow<'_, str> {
    SURROUNDING_QUOTE.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let parsed = parse_input("ls -a documents");
        assert_eq!(parsed.name, "ls");
        assert_eq!(parsed.args, vec!["-a", "documents"]);
    }

    #[test]
    fn test_parse_whitespace_runs() {
        let parsed = parse_input("   cd \t  projects   ");
        assert_eq!(parsed.name, "cd");
        assert_eq!(parsed.args, vec!["projects"]);
    }

    #[test]
    fn test_parse_lowercases_name_only() {
        let parsed = parse_input("CAT Notes.TXT");
        assert_eq!(parsed.name, "cat");
        assert_eq!(parsed.args, vec!["Notes.TXT"]);
    }

    #[test]
    fn test_parse_empty() {
        let parsed = parse_input("   ");
        assert_eq!(parsed.name, "");
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"Hello, Terminal!\""), "Hello, Terminal!");
        assert_eq!(strip_quotes("'single'"), "single");
        assert_eq!(strip_quotes("\"open"), "open");
        assert_eq!(strip_quotes("close'"), "close");
        assert_eq!(strip_quotes("plain"), "plain");
        // Only one layer
        assert_eq!(strip_quotes("\"\"x\"\""), "\"x\"");
        assert_eq!(strip_quotes("\""), "");
    }
}
