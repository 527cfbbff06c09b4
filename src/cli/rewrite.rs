use clap::Parser;

/// Arguments for the rewrite command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Write the override:\n    rcwrap rewrite\n\n\
                   Also drop machine-specific keys:\n    rcwrap rewrite --deny cache prefix\n\n\
                   Undo it later:\n    rcwrap restore\n\n\
                   Replace the project .npmrc for good (e.g. in CI):\n    rcwrap rewrite --permanent")]
pub struct RewriteArgs {
    /// Extra npm configuration keys that must not be copied into the override
    #[arg(long, value_name = "KEY", num_args = 1..)]
    pub deny: Vec<String>,

    /// Keep the override for good and delete the backup of the original
    #[arg(long)]
    pub permanent: bool,
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_rewrite_deny() {
        let cli = Cli::try_parse_from(["rcwrap", "rewrite", "--deny", "cache", "prefix"]).unwrap();
        match cli.command {
            Commands::Rewrite(args) => assert_eq!(args.deny, vec!["cache", "prefix"]),
            _ => panic!("Expected Rewrite command"),
        }
    }
}
