use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_with(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn detect_with(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && !no_color,
        supports_unicode: !dumb && !ascii_locale(&get_env),
        is_ci: ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_HOME"]
            .iter()
            .any(|k| get_env(k).is_some()),
    }
}

/// `C`/`POSIX` locales cannot be trusted with box-drawing characters
fn ascii_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|k| get_env(k).filter(|v| !v.is_empty()))
        .is_some_and(|v| v == "C" || v == "POSIX")
}
