use phf::phf_map;

/// What happened to a path, as far as the prompt counts it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Unmerged,
}

/// First porcelain column: the index (staged) side.
///
/// Renames and copies have no category of their own and count as modified.
pub static INDEX_CHANGES: phf::Map<char, ChangeKind> = phf_map! {
    'A' => ChangeKind::Added,
    'M' => ChangeKind::Modified,
    'R' => ChangeKind::Modified,
    'C' => ChangeKind::Modified,
    'D' => ChangeKind::Deleted,
    'U' => ChangeKind::Unmerged,
};

/// Second porcelain column: the working tree (unstaged) side.
pub static WORKING_CHANGES: phf::Map<char, ChangeKind> = phf_map! {
    '?' => ChangeKind::Added,
    'A' => ChangeKind::Added,
    'M' => ChangeKind::Modified,
    'D' => ChangeKind::Deleted,
    'U' => ChangeKind::Unmerged,
};

/// The two status columns of one porcelain line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileChange {
    pub index: Option<ChangeKind>,
    pub working: Option<ChangeKind>,
}

impl FileChange {
    /// Parse `XY path`; lines too short to hold both columns yield `None`.
    pub fn parse_porcelain(line: &str) -> Option<Self> {
        let mut columns = line.chars();
        let x = columns.next()?;
        let y = columns.next()?;

        Some(FileChange {
            index: INDEX_CHANGES.get(&x).copied(),
            working: WORKING_CHANGES.get(&y).copied(),
        })
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            ChangeKind::Added => "+",
            ChangeKind::Modified => "~",
            ChangeKind::Deleted => "-",
            ChangeKind::Unmerged => "!",
        };
        write!(f, "{}", symbol)
    }
}
