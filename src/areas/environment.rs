use std::ffi::OsString;
use std::path::PathBuf;

/// Environment-style inputs, captured once per invocation.
///
/// Components never read the process environment themselves; they receive
/// this snapshot so the whole pipeline stays a function of its inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Metadata directory already resolved by the calling shell (`__git_dir`)
    pub cached_git_dir: Option<PathBuf>,
    /// `GIT_DIR`
    pub git_dir: Option<PathBuf>,
    /// `GIT_PS1_SHOWUPSTREAM`
    pub show_upstream: Option<String>,
    /// `GIT_PS1_DESCRIBE_STYLE`
    pub describe_style: Option<String>,
    /// `GIT_SVN_ID`
    pub svn_id: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Environment {
            cached_git_dir: non_empty_var("__git_dir").map(PathBuf::from),
            git_dir: non_empty_var("GIT_DIR").map(PathBuf::from),
            show_upstream: non_empty_var("GIT_PS1_SHOWUPSTREAM")
                .map(|value| value.to_string_lossy().into_owned()),
            describe_style: non_empty_var("GIT_PS1_DESCRIBE_STYLE")
                .map(|value| value.to_string_lossy().into_owned()),
            svn_id: non_empty_var("GIT_SVN_ID").map(|value| value.to_string_lossy().into_owned()),
        }
    }
}

fn non_empty_var(name: &str) -> Option<OsString> {
    std::env::var_os(name).filter(|value| !value.is_empty())
}
