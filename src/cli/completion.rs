use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io::{self, Write};

/// Generate shell completion scripts for jobwire
#[derive(Parser, Debug, Clone)]
pub struct Completion {
    /// The shell to generate completions for
    #[arg(value_enum, long)]
    pub shell: Shell,
}

impl Completion {
    pub fn run(&self) -> anyhow::Result<()> {
        self.write_to(&mut io::stdout())
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let mut cmd = crate::cli::Cli::command();
        let bin_name = cmd.get_name().to_string();

        if self.shell == Shell::Zsh {
            // clap_complete emits a bare `compdef` call that errors when the
            // script is sourced before compinit.
            let mut buf = Vec::new();
            generate(self.shell, &mut cmd, bin_name.clone(), &mut buf);
            let script = String::from_utf8(buf)?;

            let bare = format!("compdef _{0} {0}", bin_name);
            let guarded = format!("(( $+functions[compdef] )) && compdef _{0} {0}", bin_name);
            out.write_all(script.replace(&bare, &guarded).as_bytes())?;
        } else {
            generate(self.shell, &mut cmd, bin_name, out);
        }

        Ok(())
    }
}
