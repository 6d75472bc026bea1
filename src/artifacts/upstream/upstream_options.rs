use derive_new::new;

/// Where the upstream comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
    /// The branch's remote-tracking ref, `@{upstream}`
    Git,
    /// The branch named by the latest `git-svn-id:` footer
    Svn,
}

/// How commits are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountingStrategy {
    /// `rev-list --count --left-right`
    #[default]
    Combined,
    /// `rev-list --left-right`, tallied line by line, for gits without `--count`
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct UpstreamOptions {
    pub kind: UpstreamKind,
    pub strategy: CountingStrategy,
}

impl UpstreamOptions {
    /// Resolve the `showUpstream` setting.
    ///
    /// The config value wins over the environment override. Neither set, or
    /// a config value that is empty, turns upstream comparison off. Words are
    /// `git` or `svn` (last one wins) and `legacy`; anything else is ignored.
    pub fn resolve(
        config_value: Option<&str>,
        env_value: Option<&str>,
        has_svn_remotes: bool,
    ) -> Option<Self> {
        let value = config_value.or(env_value)?;

        if value.trim().is_empty() {
            return None;
        }

        let default_kind = if has_svn_remotes {
            UpstreamKind::Svn
        } else {
            UpstreamKind::Git
        };
        let mut options = UpstreamOptions::new(default_kind, CountingStrategy::Combined);

        for word in value.split_whitespace() {
            match word {
                "git" => options.kind = UpstreamKind::Git,
                "svn" => options.kind = UpstreamKind::Svn,
                "legacy" => options.strategy = CountingStrategy::Legacy,
                _ => {}
            }
        }

        Some(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_settings_disable_comparison() {
        assert_eq!(UpstreamOptions::resolve(None, None, false), None);
    }

    #[test]
    fn empty_config_value_disables_comparison_even_with_environment() {
        assert_eq!(UpstreamOptions::resolve(Some(""), Some("git"), false), None);
    }

    #[test]
    fn config_value_beats_environment() {
        let options = UpstreamOptions::resolve(Some("svn"), Some("git legacy"), false);

        assert_eq!(
            options,
            Some(UpstreamOptions::new(UpstreamKind::Svn, CountingStrategy::Combined))
        );
    }

    #[test]
    fn environment_is_used_when_config_is_absent() {
        let options = UpstreamOptions::resolve(None, Some("legacy"), false);

        assert_eq!(
            options,
            Some(UpstreamOptions::new(UpstreamKind::Git, CountingStrategy::Legacy))
        );
    }

    #[test]
    fn last_kind_keyword_wins() {
        let options = UpstreamOptions::resolve(Some("svn verbose git"), None, true);

        assert_eq!(
            options,
            Some(UpstreamOptions::new(UpstreamKind::Git, CountingStrategy::Combined))
        );
    }

    #[test]
    fn svn_remotes_change_the_default_kind() {
        let options = UpstreamOptions::resolve(Some("auto"), None, true);

        assert_eq!(options.map(|o| o.kind), Some(UpstreamKind::Svn));
    }
}
