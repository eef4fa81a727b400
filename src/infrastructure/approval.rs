//! Terminal Approver
//!
//! Reads one line from the operator before a plan is applied.

use std::io::{self, BufRead, Write};

use is_terminal::IsTerminal;

use crate::domain::ports::Approver;
use crate::domain::services::SyncPlan;

pub const PROMPT: &str = "Apply these changes? (yes/no)";

/// `yes` or `y`, any case, surrounding whitespace ignored
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "yes" | "y")
}

/// Prompts on the terminal, or reads a line from piped stdin
pub struct TerminalApprover;

impl TerminalApprover {
    fn read_piped_line() -> io::Result<String> {
        eprint!("{} ", PROMPT);
        io::stderr().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

impl Approver for TerminalApprover {
    fn approve(&self, _machine: &str, _plan: &SyncPlan) -> bool {
        let answer = if io::stdin().is_terminal() {
            dialoguer::Input::<String>::new()
                .with_prompt(PROMPT)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
        } else {
            Self::read_piped_line()
        };

        match answer {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                log::debug!("confirmation prompt failed: {}", e);
                false
            }
        }
    }
}
