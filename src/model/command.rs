/// A chat command parsed from a prefixed message.
///
/// `name` is the first whitespace-delimited word after the prefix and is
/// matched case-sensitively. `args` is everything after it, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: String,
}

impl Command {
    pub fn new(name: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: args.into(),
        }
    }

    /// Parses message content into a command.
    ///
    /// # Arguments
    /// - `content` - Raw message content
    /// - `prefix` - Command prefix, e.g. `!`
    ///
    /// # Returns
    /// - `Some(Command)` - Content starts with the prefix directly followed by a name
    /// - `None` - Not addressed to the bot
    pub fn parse(content: &str, prefix: &str) -> Option<Self> {
        let rest = content.trim_start().strip_prefix(prefix)?;

        // "! issues" is not a command
        if rest.starts_with(char::is_whitespace) {
            return None;
        }

        let (name, args) = match rest.find(char::is_whitespace) {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };

        if name.is_empty() {
            return None;
        }

        Some(Self::new(name, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_only() {
        assert_eq!(Command::parse("!issues", "!"), Some(Command::new("issues", "")));
    }

    #[test]
    fn keeps_raw_arguments() {
        let command = Command::parse("!pokedex  Mr Mime ", "!").unwrap();
        assert_eq!(command.name, "pokedex");
        assert_eq!(command.args, "  Mr Mime ");
    }

    #[test]
    fn ignores_unprefixed_messages() {
        assert_eq!(Command::parse("issues", "!"), None);
    }

    #[test]
    fn ignores_bare_prefix() {
        assert_eq!(Command::parse("!", "!"), None);
        assert_eq!(Command::parse("! issues", "!"), None);
    }

    #[test]
    fn supports_multi_character_prefix() {
        assert_eq!(
            Command::parse("dex!stats", "dex!"),
            Some(Command::new("stats", ""))
        );
    }
}
