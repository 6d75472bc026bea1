use crate::areas::git::GitRunner;
use std::collections::BTreeMap;
use tracing::debug;

/// Every key the prompt reads, fetched in a single `git config` call
pub const CONFIG_KEY_REGEX: &str = r"^(bash\.|svn-remote\..*\.url$)";

const TRUE_WORDS: [&str; 3] = ["true", "yes", "on"];
const FALSE_WORDS: [&str; 3] = ["false", "no", "off"];

/// Read-only view of the git config entries relevant to the prompt.
///
/// Keys are lowercased, the way `git config --get-regexp` reports section and
/// variable names. A key set without `=value` is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    entries: BTreeMap<String, Vec<Option<String>>>,
}

impl ConfigSnapshot {
    pub fn load(git: &impl GitRunner) -> Self {
        match git.run(&["config", "-z", "--get-regexp", CONFIG_KEY_REGEX]) {
            Ok(raw) => Self::parse(&raw),
            Err(error) => {
                // git config exits 1 when nothing matches
                debug!(event = "prompt.config.no_entries", error = %error);
                Self::default()
            }
        }
    }

    /// Parse `git config -z` output: `key\nvalue` records separated by NUL.
    pub fn parse(raw: &str) -> Self {
        let mut entries = BTreeMap::<String, Vec<Option<String>>>::new();

        for record in raw.split('\0').filter(|record| !record.is_empty()) {
            let (key, value) = match record.split_once('\n') {
                Some((key, value)) => (key, Some(value.to_string())),
                None => (record, None),
            };

            entries
                .entry(key.to_ascii_lowercase())
                .or_default()
                .push(value);
        }

        ConfigSnapshot { entries }
    }

    /// Last value wins, as with `git config --get`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .and_then(|values| values.last())
            .map(|value| value.as_deref().unwrap_or(""))
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        let value = self
            .entries
            .get(&key.to_ascii_lowercase())
            .and_then(|values| values.last())?;

        match value {
            None => Some(true),
            Some(value) => {
                let parsed = parse_bool(value);
                if parsed.is_none() {
                    debug!(event = "prompt.config.invalid_bool", key = key, value = %value);
                }
                parsed
            }
        }
    }

    /// Values of every `<prefix>*<suffix>` key, in config order per key.
    pub fn values_matching<'s>(
        &'s self,
        prefix: &'s str,
        suffix: &'s str,
    ) -> impl Iterator<Item = &'s str> + 's {
        self.entries
            .iter()
            .filter(move |(key, _)| key.starts_with(prefix) && key.ends_with(suffix))
            .flat_map(|(_, values)| values.iter().filter_map(|value| value.as_deref()))
    }
}

/// git's boolean spelling: words, or any integer (non-zero is true).
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim().to_ascii_lowercase();

    if TRUE_WORDS.contains(&value.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&value.as_str()) || value.is_empty() {
        Some(false)
    } else {
        value.parse::<i64>().ok().map(|number| number != 0)
    }
}
