use crate::areas::git::GitRunner;
use crate::artifacts::upstream::upstream_options::{CountingStrategy, UpstreamKind, UpstreamOptions};
use derive_new::new;
use tracing::debug;

/// The upstream of the current branch
pub const TRACKING_UPSTREAM: &str = "@{upstream}";
/// Branch name git-svn uses for checkouts without a standard layout
pub const DEFAULT_SVN_BRANCH: &str = "git-svn";

const SVN_FOOTER_REGEX: &str = r"(?m)^\s*git-svn-id:\s+(\S+)\s+\S+\s*$";
const ERE_SPECIAL_CHARS: &str = r"\.[]{}()*+?^$|";

/// Commits HEAD has that the upstream lacks, and vice versa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct UpstreamDelta {
    pub ahead: u32,
    pub behind: u32,
}

/// Which branch color the delta selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divergence {
    InSync,
    Ahead,
    Behind,
    Diverged,
}

impl UpstreamDelta {
    pub fn divergence(&self) -> Divergence {
        match (self.ahead > 0, self.behind > 0) {
            (true, true) => Divergence::Diverged,
            (false, true) => Divergence::Behind,
            (true, false) => Divergence::Ahead,
            (false, false) => Divergence::InSync,
        }
    }
}

#[derive(new)]
pub struct UpstreamComparator<'g, G: GitRunner> {
    git: &'g G,
    options: UpstreamOptions,
    svn_remotes: &'g [String],
    svn_id: Option<&'g str>,
}

impl<'g, G: GitRunner> UpstreamComparator<'g, G> {
    /// Count divergence from the upstream; any failure counts as in sync.
    pub fn compare(&self) -> UpstreamDelta {
        let upstream = self.resolve_upstream();
        let range = format!("{upstream}...HEAD");

        let delta = match self.options.strategy {
            CountingStrategy::Combined => self
                .git
                .run(&["rev-list", "--count", "--left-right", &range])
                .ok()
                .and_then(|output| parse_combined_counts(&output)),
            CountingStrategy::Legacy => self
                .git
                .run(&["rev-list", "--left-right", &range])
                .ok()
                .map(|output| tally_left_right(&output)),
        };

        debug!(
            event = "prompt.upstream.compared",
            upstream = %upstream,
            strategy = ?self.options.strategy,
            delta = ?delta
        );

        delta.unwrap_or_default()
    }

    pub fn resolve_upstream(&self) -> String {
        match self.options.kind {
            UpstreamKind::Git => TRACKING_UPSTREAM.to_string(),
            UpstreamKind::Svn => self
                .svn_upstream()
                .unwrap_or_else(|| TRACKING_UPSTREAM.to_string()),
        }
    }

    /// Branch named by the most recent first-parent `git-svn-id:` footer that
    /// matches one of the configured svn remotes.
    fn svn_upstream(&self) -> Option<String> {
        let alternation = svn_url_alternation(self.svn_remotes);
        let grep = format!("--grep=^git-svn-id: ({alternation})");
        let log = self
            .git
            .run(&["log", "--first-parent", "-1", "-E", &grep])
            .ok()?;

        let footer_url = parse_svn_footer(&log)?;
        Some(self.svn_branch(&footer_url))
    }

    fn svn_branch(&self, footer_url: &str) -> String {
        let mut branch = footer_url;

        for remote in self.svn_remotes {
            branch = branch.strip_prefix(remote.as_str()).unwrap_or(branch);
        }

        if branch.is_empty() {
            self.svn_id.unwrap_or(DEFAULT_SVN_BRANCH).to_string()
        } else {
            branch.strip_prefix('/').unwrap_or(branch).to_string()
        }
    }
}

/// `behind<TAB>ahead`, as printed by `rev-list --count --left-right`.
pub fn parse_combined_counts(output: &str) -> Option<UpstreamDelta> {
    let mut counts = output.split_whitespace().map(str::parse::<u32>);

    let behind = counts.next()?.ok()?;
    let ahead = counts.next()?.ok()?;

    Some(UpstreamDelta::new(ahead, behind))
}

/// One `<sha` (upstream only) or `>sha` (HEAD only) line per commit.
pub fn tally_left_right(output: &str) -> UpstreamDelta {
    output
        .lines()
        .fold(UpstreamDelta::default(), |mut delta, line| {
            match line.trim_start().chars().next() {
                Some('<') => delta.behind += 1,
                Some('>') => delta.ahead += 1,
                _ => {}
            }
            delta
        })
}

/// URL of the last `git-svn-id: <url>@<rev> <uuid>` footer, without `@<rev>`.
pub fn parse_svn_footer(log: &str) -> Option<String> {
    let re = regex::Regex::new(SVN_FOOTER_REGEX).ok()?;
    let captures = re.captures_iter(log).last()?;
    let id = captures.get(1)?.as_str();

    let url = id.rsplit_once('@').map_or(id, |(url, _)| url);
    Some(url.to_string())
}

fn svn_url_alternation(remotes: &[String]) -> String {
    remotes
        .iter()
        .map(|remote| escape_extended_regex(remote))
        .collect::<Vec<_>>()
        .join("|")
}

fn escape_extended_regex(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut escaped, c| {
        if ERE_SPECIAL_CHARS.contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
        escaped
    })
}
