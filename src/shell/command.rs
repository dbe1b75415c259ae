//! Interactive command parsing.

use strum_macros::EnumIter;

/// The commands understood by the prompt, used to build the help listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum CommandKind {
    /// `scan <URL>`
    Scan,
    /// `help`
    Help,
    /// `about`
    About,
    /// `version`
    Version,
    /// `clear`
    Clear,
    /// `exit`
    Exit,
}

impl CommandKind {
    /// Usage string as shown in the help listing.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Scan => "scan <URL>",
            CommandKind::Help => "help",
            CommandKind::About => "about",
            CommandKind::Version => "version",
            CommandKind::Clear => "clear",
            CommandKind::Exit => "exit",
        }
    }

    /// One-line summary as shown in the help listing.
    pub fn summary(&self) -> &'static str {
        match self {
            CommandKind::Scan => "Scans the specified URL for security headers.",
            CommandKind::Help => "Displays this help message.",
            CommandKind::About => "Shows information and disclaimer about WebTester.",
            CommandKind::Version => "Displays the tool's name and version.",
            CommandKind::Clear => "Clears the console screen.",
            CommandKind::Exit => "Exits the WebTester tool.",
        }
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scan a target; `None` when the URL argument is missing
    Scan(Option<String>),
    /// Show the command listing
    Help,
    /// Show the about text and disclaimer
    About,
    /// Show the version banner
    Version,
    /// Clear the screen
    Clear,
    /// Leave the loop
    Exit,
    /// Anything else (holds the lowercased command word)
    Unknown(String),
    /// Blank line
    Empty,
}

impl Command {
    /// Parses a line of input.
    ///
    /// The command word is matched case-insensitively. The argument keeps its
    /// original case, since URL paths are case-sensitive.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let word = word.to_lowercase();

        match word.as_str() {
            "" => Command::Empty,
            "scan" => Command::Scan((!rest.is_empty()).then(|| rest.to_string())),
            "help" => Command::Help,
            "about" => Command::About,
            "version" => Command::Version,
            "clear" => Command::Clear,
            "exit" => Command::Exit,
            _ => Command::Unknown(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_scan_with_url() {
        assert_eq!(
            Command::parse("scan example.com"),
            Command::Scan(Some("example.com".to_string()))
        );
    }

    #[test]
    fn test_parse_scan_keeps_argument_case() {
        assert_eq!(
            Command::parse("SCAN https://Example.com/Path"),
            Command::Scan(Some("https://Example.com/Path".to_string()))
        );
    }

    #[test]
    fn test_parse_scan_without_url() {
        assert_eq!(Command::parse("scan"), Command::Scan(None));
        assert_eq!(Command::parse("  scan   "), Command::Scan(None));
    }

    #[test]
    fn test_parse_scan_collapses_separator_whitespace() {
        assert_eq!(
            Command::parse("scan \t  example.com  "),
            Command::Scan(Some("example.com".to_string()))
        );
    }

    #[test]
    fn test_parse_static_commands() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("About"), Command::About);
        assert_eq!(Command::parse("VERSION"), Command::Version);
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse("exit\n"), Command::Exit);
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert_eq!(
            Command::parse("Fetch example.com"),
            Command::Unknown("fetch".to_string())
        );
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \n"), Command::Empty);
    }

    #[test]
    fn test_every_command_kind_is_parseable_by_its_usage_word() {
        for kind in CommandKind::iter() {
            let word = kind.usage().split_whitespace().next().unwrap();
            assert!(
                !matches!(Command::parse(word), Command::Unknown(_)),
                "{:?} usage word should parse",
                kind
            );
            assert!(!kind.summary().is_empty());
        }
    }
}
