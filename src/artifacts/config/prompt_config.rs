use crate::areas::environment::Environment;
use crate::areas::git::GitRunner;
use crate::artifacts::config::display_config::DisplayConfig;
use crate::artifacts::config::git_config::ConfigSnapshot;
use crate::artifacts::upstream::upstream_options::UpstreamOptions;

const DESCRIBE_STYLE_KEY: &str = "bash.describeStyle";
const SHOW_UPSTREAM_KEY: &str = "bash.showUpstream";
const SVN_REMOTE_PREFIX: &str = "svn-remote.";
const SVN_REMOTE_SUFFIX: &str = ".url";

/// How a detached HEAD is described
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescribeStyle {
    /// `git describe --contains`
    Contains,
    /// `git describe --contains --all`
    Branch,
    /// `git describe`
    Describe,
    /// `git describe --tags --exact-match`
    #[default]
    ExactTag,
}

impl DescribeStyle {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "contains" => DescribeStyle::Contains,
            "branch" => DescribeStyle::Branch,
            "describe" => DescribeStyle::Describe,
            _ => DescribeStyle::ExactTag,
        }
    }

    pub fn describe_args(&self) -> &'static [&'static str] {
        match self {
            DescribeStyle::Contains => &["describe", "--contains", "HEAD"],
            DescribeStyle::Branch => &["describe", "--contains", "--all", "HEAD"],
            DescribeStyle::Describe => &["describe", "HEAD"],
            DescribeStyle::ExactTag => &["describe", "--tags", "--exact-match", "HEAD"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptConfig {
    pub display: DisplayConfig,
    pub describe_style: DescribeStyle,
    /// `None` when upstream comparison is off
    pub upstream: Option<UpstreamOptions>,
    pub svn_remotes: Vec<String>,
}

impl PromptConfig {
    pub fn load(git: &impl GitRunner, environment: &Environment) -> Self {
        Self::from_snapshot(&ConfigSnapshot::load(git), environment)
    }

    /// Config values take precedence over their environment overrides.
    pub fn from_snapshot(snapshot: &ConfigSnapshot, environment: &Environment) -> Self {
        let describe_style = snapshot
            .get(DESCRIBE_STYLE_KEY)
            .or(environment.describe_style.as_deref())
            .map(DescribeStyle::parse)
            .unwrap_or_default();

        let svn_remotes = snapshot
            .values_matching(SVN_REMOTE_PREFIX, SVN_REMOTE_SUFFIX)
            .map(str::to_string)
            .collect::<Vec<_>>();

        let upstream = UpstreamOptions::resolve(
            snapshot.get(SHOW_UPSTREAM_KEY),
            environment.show_upstream.as_deref(),
            !svn_remotes.is_empty(),
        );

        PromptConfig {
            display: DisplayConfig::from_snapshot(snapshot),
            describe_style,
            upstream,
            svn_remotes,
        }
    }
}
