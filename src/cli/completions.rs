use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rcwrap completions bash > ~/.bash_completion.d/rcwrap\n\n\
                  Generate zsh completions:\n    rcwrap completions zsh > ~/.zfunc/_rcwrap\n\n\
                  Generate fish completions:\n    rcwrap completions fish > ~/.config/fish/completions/rcwrap.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
