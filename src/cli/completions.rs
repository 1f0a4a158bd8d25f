use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    fdroid-meta completions bash > ~/.bash_completion.d/fdroid-meta\n\n\
                  Generate zsh completions:\n    fdroid-meta completions zsh > ~/.zfunc/_fdroid-meta\n\n\
                  Generate fish completions:\n    fdroid-meta completions fish > ~/.config/fish/completions/fdroid-meta.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
