use clap::Parser;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install dependencies:\n    rcwrap run -- install\n\n\
                   Clean install without scripts:\n    rcwrap run -- ci --ignore-scripts\n\n\
                   Publish:\n    rcwrap run -- publish")]
pub struct RunArgs {
    /// Extra npm configuration keys that must not be copied into the override
    #[arg(long, value_name = "KEY", num_args = 1)]
    pub deny: Vec<String>,

    /// Arguments passed to npm
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
