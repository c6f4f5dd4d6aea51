//! Completions command - print shell completion scripts

use crate::{HubError, cli::Cli};
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

type Result<T> = std::result::Result<T, HubError>;

/// Execute the completions command, writing the script to stdout
///
/// # Errors
/// Returns `HubError::Io` if stdout cannot be flushed.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout();
    write_completions(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

/// Write the completion script for `shell` to `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_name_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("cathub"));
        assert!(script.contains("browse"));
        assert!(script.contains("completions"));
    }
}
