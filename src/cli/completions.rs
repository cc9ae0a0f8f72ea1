use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    dockpin completions bash > ~/.bash_completion.d/dockpin\n\n\
                  Generate zsh completions:\n    dockpin completions zsh > ~/.zfunc/_dockpin\n\n\
                  Generate fish completions:\n    dockpin completions fish > ~/.config/fish/completions/dockpin.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
