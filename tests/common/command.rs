use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use rstest::fixture;
use std::path::Path;

/// Variables that would leak the developer's shell setup into a test
const INHERITED_PROMPT_VARS: [&str; 8] = [
    "GIT_DIR",
    "__git_dir",
    "GIT_PS1_SHOWUPSTREAM",
    "GIT_PS1_DESCRIBE_STYLE",
    "GIT_SVN_ID",
    "BIT_PROMPT_LOG",
    "BIT_PROMPT_LOG_LEVEL",
    "GIT_WORK_TREE",
];

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository on `main` with one commit holding `1.txt` and `a/2.txt`.
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    git(repository_dir.path(), &["init", "-b", "main"]);

    write_file(repository_dir.path(), "1.txt", "one");
    write_file(repository_dir.path(), "a/2.txt", "two");

    git(repository_dir.path(), &["add", "."]);
    git(repository_dir.path(), &["commit", "-m", "Initial commit"]);

    repository_dir
}

pub fn write_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Keep git from discovering repositories above the temp directory.
fn isolate(cmd: &mut Command) {
    for var in INHERITED_PROMPT_VARS {
        cmd.env_remove(var);
    }

    let author = fake_author();
    cmd.envs(vec![
        ("GIT_CONFIG_NOSYSTEM", "1"),
        ("GIT_CONFIG_GLOBAL", "/dev/null"),
        ("GIT_AUTHOR_NAME", author.name.as_str()),
        ("GIT_AUTHOR_EMAIL", author.email.as_str()),
        ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"),
        ("GIT_COMMITTER_NAME", author.name.as_str()),
        ("GIT_COMMITTER_EMAIL", author.email.as_str()),
        ("GIT_COMMITTER_DATE", "2023-01-01 12:00:00 +0000"),
    ]);
    cmd.env("GIT_CEILING_DIRECTORIES", std::env::temp_dir());
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    isolate(&mut cmd);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run git, insist that it succeeds, and return its stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = run_git_command(dir, args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("git printed non-UTF-8 output")
}

pub fn git_config(dir: &Path, key: &str, value: &str) {
    git(dir, &["config", key, value]);
}

pub fn run_prompt_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bit-prompt").expect("Failed to find bit-prompt binary");
    cmd.current_dir(dir);
    isolate(&mut cmd);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run `bit-prompt` from `dir` after the shell has removed `dir` beneath
/// itself, leaving the process without a working directory.
pub fn run_prompt_from_removed_directory(dir: &Path, args: &[&str]) -> Command {
    let binary = assert_cmd::cargo::cargo_bin("bit-prompt");
    let mut cmd = Command::new("sh");
    cmd.current_dir(dir);
    isolate(&mut cmd);
    cmd.arg("-c")
        .arg(r#"rmdir "$PWD" && exec "$@""#)
        .arg("sh")
        .arg(binary);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Stdout of a successful `bit-prompt` run.
pub fn prompt(dir: &Path, args: &[&str]) -> String {
    let output = run_prompt_command(dir, args).assert().success();
    String::from_utf8(output.get_output().stdout.clone())
        .expect("bit-prompt printed non-UTF-8 output")
}

/// Stdout of `bit-prompt --color never query`.
pub fn plain_query(dir: &Path) -> String {
    prompt(dir, &["--color", "never", "query"])
}

#[derive(Debug, Clone, new)]
struct RandomAuthor {
    name: String,
    email: String,
}

fn fake_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}
