use crate::artifacts::config::git_config::ConfigSnapshot;
use bitflags::bitflags;
use colored::{Color, ColoredString, Colorize};
use tracing::debug;

bitflags! {
    /// Boolean prompt switches
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Toggles: u8 {
        const ENABLE_FILE_STATUS = 1;
        const SHOW_STATUS_WHEN_ZERO = 1 << 1;
        const SHOW_STASH_STATE = 1 << 2;
        const ENABLE_GIT_STATUS = 1 << 3;
    }
}

impl Default for Toggles {
    fn default() -> Self {
        Toggles::ENABLE_FILE_STATUS | Toggles::SHOW_STASH_STATE | Toggles::ENABLE_GIT_STATUS
    }
}

const TOGGLE_KEYS: [(&str, Toggles); 4] = [
    ("bash.enableFileStatus", Toggles::ENABLE_FILE_STATUS),
    ("bash.showStatusWhenZero", Toggles::SHOW_STATUS_WHEN_ZERO),
    ("bash.showStashState", Toggles::SHOW_STASH_STATE),
    ("bash.enableGitStatus", Toggles::ENABLE_GIT_STATUS),
];

/// Foreground, background and weight of one prompt segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl SegmentStyle {
    pub const fn new(fg: Option<Color>, bold: bool) -> Self {
        SegmentStyle { fg, bg: None, bold }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();

        if let Some(fg) = self.fg {
            painted = painted.color(fg);
        }
        if let Some(bg) = self.bg {
            painted = painted.on_color(bg);
        }
        if self.bold {
            painted = painted.bold();
        }

        painted
    }
}

/// Segments whose style can be configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Before,
    Delim,
    After,
    Branch,
    BranchAhead,
    BranchBehind,
    BranchDiverged,
    Index,
    Working,
    Stash,
    Operation,
}

impl Segment {
    pub const ALL: [Segment; 11] = [
        Segment::Before,
        Segment::Delim,
        Segment::After,
        Segment::Branch,
        Segment::BranchAhead,
        Segment::BranchBehind,
        Segment::BranchDiverged,
        Segment::Index,
        Segment::Working,
        Segment::Stash,
        Segment::Operation,
    ];

    /// Name used in `bash.<name>ForegroundColor` / `bash.<name>BackgroundColor`
    pub fn config_name(&self) -> &'static str {
        match self {
            Segment::Before => "before",
            Segment::Delim => "delim",
            Segment::After => "after",
            Segment::Branch => "branch",
            Segment::BranchAhead => "branchAhead",
            Segment::BranchBehind => "branchBehind",
            Segment::BranchDiverged => "branchBehindAndAhead",
            Segment::Index => "index",
            Segment::Working => "working",
            Segment::Stash => "stash",
            Segment::Operation => "rebase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub before: SegmentStyle,
    pub delim: SegmentStyle,
    pub after: SegmentStyle,
    pub branch: SegmentStyle,
    pub branch_ahead: SegmentStyle,
    pub branch_behind: SegmentStyle,
    pub branch_diverged: SegmentStyle,
    pub index: SegmentStyle,
    pub working: SegmentStyle,
    pub stash: SegmentStyle,
    pub operation: SegmentStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            before: SegmentStyle::new(Some(Color::Yellow), true),
            delim: SegmentStyle::new(Some(Color::Yellow), true),
            after: SegmentStyle::new(Some(Color::Yellow), true),
            branch: SegmentStyle::new(Some(Color::Cyan), true),
            branch_ahead: SegmentStyle::new(Some(Color::Green), true),
            branch_behind: SegmentStyle::new(Some(Color::Red), false),
            branch_diverged: SegmentStyle::new(Some(Color::Yellow), true),
            index: SegmentStyle::new(Some(Color::Green), true),
            working: SegmentStyle::new(Some(Color::Red), false),
            stash: SegmentStyle::new(Some(Color::Blue), false),
            operation: SegmentStyle::default(),
        }
    }
}

impl Palette {
    fn style_mut(&mut self, segment: Segment) -> &mut SegmentStyle {
        match segment {
            Segment::Before => &mut self.before,
            Segment::Delim => &mut self.delim,
            Segment::After => &mut self.after,
            Segment::Branch => &mut self.branch,
            Segment::BranchAhead => &mut self.branch_ahead,
            Segment::BranchBehind => &mut self.branch_behind,
            Segment::BranchDiverged => &mut self.branch_diverged,
            Segment::Index => &mut self.index,
            Segment::Working => &mut self.working,
            Segment::Stash => &mut self.stash,
            Segment::Operation => &mut self.operation,
        }
    }

    fn apply_overrides(&mut self, snapshot: &ConfigSnapshot) {
        for segment in Segment::ALL {
            let fg_key = format!("bash.{}ForegroundColor", segment.config_name());
            let bg_key = format!("bash.{}BackgroundColor", segment.config_name());
            let style = self.style_mut(segment);

            if let Some(value) = snapshot.get(&fg_key) {
                match parse_foreground(value) {
                    Ok((fg, bold)) => {
                        style.fg = fg;
                        style.bold = bold;
                    }
                    Err(error) => {
                        debug!(event = "prompt.config.invalid_color", key = %fg_key, error = %error)
                    }
                }
            }

            if let Some(value) = snapshot.get(&bg_key) {
                match parse_color(value) {
                    Ok(bg) => style.bg = bg,
                    Err(error) => {
                        debug!(event = "prompt.config.invalid_color", key = %bg_key, error = %error)
                    }
                }
            }
        }
    }
}

/// Literal text around and between segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTexts {
    pub before: String,
    pub delim: String,
    pub after: String,
    pub stash: String,
}

impl Default for SegmentTexts {
    fn default() -> Self {
        SegmentTexts {
            before: " [".to_string(),
            delim: " |".to_string(),
            after: "]".to_string(),
            stash: "$".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    pub texts: SegmentTexts,
    pub palette: Palette,
    pub toggles: Toggles,
}

impl DisplayConfig {
    pub fn from_snapshot(snapshot: &ConfigSnapshot) -> Self {
        let mut config = DisplayConfig::default();

        for (key, flag) in TOGGLE_KEYS {
            if let Some(enabled) = snapshot.get_bool(key) {
                config.toggles.set(flag, enabled);
            }
        }

        let texts = [
            ("bash.beforeText", &mut config.texts.before),
            ("bash.delimText", &mut config.texts.delim),
            ("bash.afterText", &mut config.texts.after),
            ("bash.stashText", &mut config.texts.stash),
        ];
        for (key, text) in texts {
            if let Some(value) = snapshot.get(key) {
                *text = value.to_string();
            }
        }

        config.palette.apply_overrides(snapshot);
        config
    }

    pub fn is_enabled(&self, toggle: Toggles) -> bool {
        self.toggles.contains(toggle)
    }
}

/// `[bold] <color>`, where `<color>` is any name `colored` understands, or
/// `none`/empty for the terminal default.
pub fn parse_foreground(value: &str) -> anyhow::Result<(Option<Color>, bool)> {
    let value = value.trim();

    let (bold, color) = match value.split_once(char::is_whitespace) {
        Some((first, rest)) if first.eq_ignore_ascii_case("bold") => (true, rest),
        _ if value.eq_ignore_ascii_case("bold") => (true, ""),
        _ => (false, value),
    };

    Ok((parse_color(color)?, bold))
}

pub fn parse_color(value: &str) -> anyhow::Result<Option<Color>> {
    let value = value.trim();

    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    value
        .parse::<Color>()
        .map(Some)
        .map_err(|_| anyhow::anyhow!("unknown color: {}", value))
}
