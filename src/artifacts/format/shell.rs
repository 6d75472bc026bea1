use clap::ValueEnum;
use regex::Regex;

const ESCAPE_SEQUENCE_REGEX: &str = r"\x1b\[[0-9;]*m";

/// How escape sequences are marked so the shell can measure prompt width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Shell {
    #[default]
    Plain,
    Bash,
    Zsh,
}

impl Shell {
    fn replacement(&self) -> Option<&'static str> {
        match self {
            Shell::Plain => None,
            Shell::Bash => Some(r"\[${0}\]"),
            Shell::Zsh => Some("%{${0}%}"),
        }
    }

    /// Wrap every SGR escape sequence in the shell's zero-width markers.
    pub fn wrap_escapes(&self, text: &str) -> anyhow::Result<String> {
        let Some(replacement) = self.replacement() else {
            return Ok(text.to_string());
        };

        let re = Regex::new(ESCAPE_SEQUENCE_REGEX)?;
        Ok(re.replace_all(text, replacement).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const PAINTED: &str = "\x1b[1;36mmain\x1b[0m";

    #[rstest]
    #[case(Shell::Plain, PAINTED)]
    #[case(Shell::Bash, "\\[\x1b[1;36m\\]main\\[\x1b[0m\\]")]
    #[case(Shell::Zsh, "%{\x1b[1;36m%}main%{\x1b[0m%}")]
    fn escapes_are_wrapped_per_shell(#[case] shell: Shell, #[case] expected: &str) {
        assert_eq!(shell.wrap_escapes(PAINTED).unwrap(), expected);
    }

    #[test]
    fn uncolored_text_is_untouched() {
        assert_eq!(Shell::Bash.wrap_escapes(" [main]").unwrap(), " [main]");
    }
}
