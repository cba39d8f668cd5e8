// Dweve benchlog - Benchmark Log Extraction
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Write the completion script for `shell` to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::Shell;
/// use benchlog_cli::commands::generate_completion_for_command;
///
/// let mut cmd = Command::new("benchlog");
/// generate_completion_for_command(Shell::Bash, &mut cmd);
/// ```
pub fn generate_completion_for_command(shell: Shell, cmd: &mut Command) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut io::stdout());
}

/// Installation instructions for the completion script of `shell`.
///
/// # Examples
///
/// ```
/// use benchlog_cli::commands::print_installation_instructions;
/// use clap_complete::Shell;
///
/// let instructions = print_installation_instructions(Shell::Zsh);
/// assert!(instructions.contains("~/.zshrc"));
/// ```
pub fn print_installation_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => {
            r#"# Bash completion installation:

# For current session only:
eval "$(benchlog completion bash)"

# Or save to completions directory:
benchlog completion bash > ~/.local/share/bash-completion/completions/benchlog
"#
        }
        Shell::Zsh => {
            r#"# Zsh completion installation:

# For persistent installation, add to your ~/.zshrc:
echo 'eval "$(benchlog completion zsh)"' >> ~/.zshrc
"#
        }
        Shell::Fish => {
            r#"# Fish completion installation:

benchlog completion fish > ~/.config/fish/completions/benchlog.fish
"#
        }
        Shell::PowerShell => {
            r#"# PowerShell completion installation:

# Add this line to the profile at $PROFILE:
benchlog completion powershell | Out-String | Invoke-Expression
"#
        }
        Shell::Elvish => {
            r#"# Elvish completion installation:

# Add to your ~/.elvish/rc.elv:
eval (benchlog completion elvish)
"#
        }
        _ => "Unsupported shell",
    }
    .to_string()
}
