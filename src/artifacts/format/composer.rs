use crate::artifacts::config::display_config::{DisplayConfig, SegmentStyle, Toggles};
use crate::artifacts::state::repo_state::RepoState;
use crate::artifacts::status::file_status_tally::{ChangeCounts, FileStatusTally};
use crate::artifacts::upstream::comparator::{Divergence, UpstreamDelta};
use derive_new::new;
use std::fmt::Write;

/// Everything the prompt shows, gathered before formatting starts
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct StatusInputs {
    pub state: RepoState,
    pub delta: UpstreamDelta,
    pub tally: FileStatusTally,
    pub has_stash: bool,
}

/// Which optional segments a tally produces under the current toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPlan {
    pub index: bool,
    pub delimiter: bool,
    pub working: bool,
}

impl SegmentPlan {
    pub fn new(tally: &FileStatusTally, show_when_zero: bool) -> Self {
        let index = tally.index.total() != 0 || show_when_zero;
        let working = tally.working.total() != 0 || show_when_zero;

        SegmentPlan {
            index,
            delimiter: tally.index.total() != 0 && working,
            working,
        }
    }
}

#[derive(new)]
pub struct Formatter<'c> {
    config: &'c DisplayConfig,
}

impl<'c> Formatter<'c> {
    /// Compose the colorized status. A pure function of `inputs` and the
    /// display config.
    pub fn format(&self, inputs: &StatusInputs) -> String {
        let texts = &self.config.texts;
        let palette = &self.config.palette;
        let mut out = String::new();

        self.push(&mut out, &palette.before, &texts.before);
        let branch_style = self.branch_style(inputs.delta);
        self.push(&mut out, branch_style, &inputs.state.label());

        if self.config.is_enabled(Toggles::ENABLE_FILE_STATUS) {
            let plan = SegmentPlan::new(
                &inputs.tally,
                self.config.is_enabled(Toggles::SHOW_STATUS_WHEN_ZERO),
            );

            self.push_counts(&mut out, &palette.index, &inputs.tally.index, plan.index);
            if plan.delimiter {
                self.push(&mut out, &palette.delim, &texts.delim);
            }
            self.push_counts(
                &mut out,
                &palette.working,
                &inputs.tally.working,
                plan.working,
            );
        }

        if let Some(tag) = inputs.state.operation_tag() {
            self.push(&mut out, &palette.operation, &tag);
        }

        self.push(&mut out, &palette.after, &texts.after);

        if self.config.is_enabled(Toggles::SHOW_STASH_STATE) && inputs.has_stash {
            self.push(&mut out, &palette.stash, &texts.stash);
        }

        out
    }

    pub fn branch_style(&self, delta: UpstreamDelta) -> &'c SegmentStyle {
        let palette = &self.config.palette;

        match delta.divergence() {
            Divergence::Diverged => &palette.branch_diverged,
            Divergence::Behind => &palette.branch_behind,
            Divergence::Ahead => &palette.branch_ahead,
            Divergence::InSync => &palette.branch,
        }
    }

    fn push_counts(
        &self,
        out: &mut String,
        style: &SegmentStyle,
        counts: &ChangeCounts,
        shown: bool,
    ) {
        if shown {
            self.push(out, style, &counts.summary());
        }
        if counts.unmerged != 0 {
            out.push(' ');
            self.push(out, style, &counts.unmerged_summary());
        }
    }

    fn push(&self, out: &mut String, style: &SegmentStyle, text: &str) {
        if !text.is_empty() {
            // writing into a String cannot fail
            let _ = write!(out, "{}", style.paint(text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::config::display_config::Palette;
    use crate::artifacts::state::operation::SpecialOperation;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn strip_ansi(text: &str) -> String {
        regex::Regex::new(r"\x1b\[[0-9;]*m")
            .unwrap()
            .replace_all(text, "")
            .into_owned()
    }

    fn config_with(toggles: Toggles) -> DisplayConfig {
        DisplayConfig {
            toggles,
            ..Default::default()
        }
    }

    fn on_main() -> RepoState {
        RepoState {
            inside_work_tree: true,
            ..RepoState::on_branch("refs/heads/main")
        }
    }

    fn no_changes(has_stash: bool) -> StatusInputs {
        StatusInputs::new(
            on_main(),
            UpstreamDelta::default(),
            FileStatusTally::default(),
            has_stash,
        )
    }

    fn render(config: &DisplayConfig, inputs: &StatusInputs) -> String {
        strip_ansi(&Formatter::new(config).format(inputs))
    }

    #[test]
    fn clean_branch_shows_only_the_name() {
        let config = DisplayConfig::default();
        let inputs = no_changes(false);

        assert_eq!(render(&config, &inputs), " [main]");
    }

    #[test]
    fn ahead_with_one_staged_file() {
        let config = DisplayConfig::default();
        let tally = FileStatusTally {
            index: ChangeCounts::new(1, 0, 0, 0),
            working: ChangeCounts::default(),
        };
        let delta = UpstreamDelta::new(2, 0);
        let inputs = StatusInputs::new(on_main(), delta, tally, false);

        let formatter = Formatter::new(&config);

        assert_eq!(render(&config, &inputs), " [main +1 ~0 -0]");
        assert_eq!(
            formatter.branch_style(delta),
            &Palette::default().branch_ahead
        );
    }

    #[test]
    fn both_sides_are_split_by_the_delimiter() {
        let config = DisplayConfig::default();
        let tally = FileStatusTally {
            index: ChangeCounts::new(1, 2, 0, 0),
            working: ChangeCounts::new(3, 0, 1, 0),
        };
        let inputs = StatusInputs::new(on_main(), UpstreamDelta::default(), tally, false);

        assert_eq!(render(&config, &inputs), " [main +1 ~2 -0 | +3 ~0 -1]");
    }

    #[test]
    fn working_changes_alone_have_no_delimiter() {
        let config = DisplayConfig::default();
        let tally = FileStatusTally {
            index: ChangeCounts::default(),
            working: ChangeCounts::new(0, 1, 0, 0),
        };
        let inputs = StatusInputs::new(on_main(), UpstreamDelta::default(), tally, false);

        assert_eq!(render(&config, &inputs), " [main +0 ~1 -0]");
    }

    #[test]
    fn unmerged_counts_follow_their_side() {
        let config = DisplayConfig::default();
        let tally = FileStatusTally {
            index: ChangeCounts::new(0, 0, 0, 1),
            working: ChangeCounts::new(0, 0, 0, 1),
        };
        let state = RepoState {
            operation: SpecialOperation::Merging,
            ..on_main()
        };
        let inputs = StatusInputs::new(state, UpstreamDelta::default(), tally, false);

        assert_eq!(
            render(&config, &inputs),
            " [main +0 ~0 -0 !1 | +0 ~0 -0 !1|MERGING]"
        );
    }

    #[test]
    fn zero_counts_are_shown_when_configured() {
        let config = config_with(Toggles::default() | Toggles::SHOW_STATUS_WHEN_ZERO);
        let inputs = no_changes(false);

        assert_eq!(render(&config, &inputs), " [main +0 ~0 -0 +0 ~0 -0]");
    }

    #[test]
    fn operation_tag_survives_disabled_file_status() {
        let config = config_with(Toggles::ENABLE_GIT_STATUS);
        let state = RepoState {
            operation: SpecialOperation::RebaseInteractive,
            progress: Some((3, 10)),
            ..RepoState::on_branch("refs/heads/feature")
        };
        let tally = FileStatusTally {
            index: ChangeCounts::new(4, 0, 0, 0),
            working: ChangeCounts::default(),
        };
        let inputs = StatusInputs::new(state, UpstreamDelta::default(), tally, false);

        assert_eq!(render(&config, &inputs), " [feature|REBASE-i 3/10]");
    }

    #[test]
    fn stash_glyph_follows_the_after_text() {
        let shown = DisplayConfig::default();
        let hidden = config_with(Toggles::ENABLE_GIT_STATUS | Toggles::ENABLE_FILE_STATUS);
        let inputs = no_changes(true);

        assert_eq!(render(&shown, &inputs), " [main]$");
        assert_eq!(render(&hidden, &inputs), " [main]");
    }

    #[test]
    fn formatting_is_deterministic() {
        let config = DisplayConfig::default();
        let tally = FileStatusTally {
            index: ChangeCounts::new(1, 1, 1, 0),
            working: ChangeCounts::new(2, 0, 0, 0),
        };
        let inputs = StatusInputs::new(on_main(), UpstreamDelta::new(1, 1), tally, true);
        let formatter = Formatter::new(&config);

        assert_eq!(formatter.format(&inputs), formatter.format(&inputs));
    }

    fn counts() -> impl Strategy<Value = ChangeCounts> {
        (0u32..3, 0u32..3, 0u32..3, 0u32..3)
            .prop_map(|(added, modified, deleted, unmerged)| {
                ChangeCounts::new(added, modified, deleted, unmerged)
            })
    }

    proptest! {
        #[test]
        fn branch_style_tracks_divergence(ahead in 0u32..5, behind in 0u32..5) {
            let config = DisplayConfig::default();
            let palette = Palette::default();
            let formatter = Formatter::new(&config);
            let style = *formatter.branch_style(UpstreamDelta::new(ahead, behind));

            let expected = match (ahead > 0, behind > 0) {
                (true, true) => palette.branch_diverged,
                (false, true) => palette.branch_behind,
                (true, false) => palette.branch_ahead,
                (false, false) => palette.branch,
            };
            prop_assert_eq!(style, expected);
        }

        #[test]
        fn segment_laws_hold(index in counts(), working in counts(), show_zero in any::<bool>()) {
            let tally = FileStatusTally { index, working };
            let plan = SegmentPlan::new(&tally, show_zero);

            prop_assert_eq!(plan.index, index.total() != 0 || show_zero);
            prop_assert_eq!(plan.working, working.total() != 0 || show_zero);
            prop_assert_eq!(plan.delimiter, plan.index && plan.working && index.total() != 0);

            let mut toggles = Toggles::default();
            toggles.set(Toggles::SHOW_STATUS_WHEN_ZERO, show_zero);
            let config = config_with(toggles);
            let inputs = StatusInputs::new(on_main(), UpstreamDelta::default(), tally, false);
            let rendered = render(&config, &inputs);

            prop_assert_eq!(rendered.contains(" |"), plan.delimiter);
            let shown_sides = rendered.matches('+').count();
            prop_assert_eq!(shown_sides, usize::from(plan.index) + usize::from(plan.working));
        }
    }
}
