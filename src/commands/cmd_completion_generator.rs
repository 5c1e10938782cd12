use crate::action::Action;
use crate::cli::Cli;
use crate::prelude::*;
use clap::ValueEnum;
use clap_complete::{generate, Shell};
use std::io::IsTerminal;
use std::io::Write;

fn gen(action: Action, shell: Shell, buf: &mut dyn Write) {
    let mut cmd = Cli::command_for(action);
    generate(shell, &mut cmd, action.bin_name(), buf);
}

fn detect_shell() -> Result<Shell> {
    use std::env::var;

    if let Ok(shell) = var("SHELL") {
        if shell.ends_with("/fish") {
            return Ok(Shell::Fish);
        } else if shell.ends_with("/bash") {
            return Ok(Shell::Bash);
        } else if shell.ends_with("/zsh") {
            return Ok(Shell::Zsh);
        }
    }

    Err(anyhow!("This shell is unsupported, if this is a mistake set the shell explicitly using the argument"))
}

/// Generates basic completion scripts by `clap_complete`
///
/// Shell `auto` is detected from the environment
pub fn shell_completion_generation(action: Action, shell: &str) -> Result<()> {
    // prevent terminal text spillage
    if std::io::stdout().is_terminal() {
        return Err(anyhow!("This command writes a lot of text, please pipe it into a file"));
    }

    // `auto` is what a bare `--completions` turns into
    let shell = if shell == "auto" {
        detect_shell()?
    } else {
        Shell::from_str(shell, true).map_err(|err| anyhow!("Unknown shell {shell:?}: {err}"))?
    };

    gen(action, shell, &mut std::io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_names_binary() {
        let mut buf = vec![];
        gen(Action::Restart, Shell::Bash, &mut buf);

        let script = String::from_utf8_lossy(&buf);
        assert!(script.contains("hot-restart"));
        assert!(script.contains("--fail-on-error"));
    }
}
