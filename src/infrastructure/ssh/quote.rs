//! Shell quoting for remote commands

/// Single-quote a string for a POSIX shell
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Quote a remote path, leaving a leading `~/` for the remote shell to expand
pub fn quote_path(path: &str) -> String {
    match path.strip_prefix("~/") {
        Some(rest) => format!("~/{}", quote(rest)),
        None => quote(path),
    }
}
