use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the console generator
#[derive(Parser, Debug)]
#[command(name = "console-gen", about = "Generate the console.log selector table and Solidity library")]
pub struct Cli {
    /// Directory receiving `args.rs` and `console.sol`
    #[arg(long, env = "CONSOLE_GEN_OUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Verify the generated files are up to date instead of writing them.
    ///
    /// Exits with a non-zero status if either file is missing or differs
    /// from freshly rendered output. Nothing is written.
    #[arg(long)]
    pub check: bool,

    /// Enable structured JSON logging instead of human-readable output.
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["console-gen"]);
        assert_eq!(cli.out_dir, PathBuf::from("."));
        assert!(!cli.check);
        assert!(!cli.log_json);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["console-gen", "--out-dir", "gen", "--check", "--log-json"]);
        assert_eq!(cli.out_dir, PathBuf::from("gen"));
        assert!(cli.check);
        assert!(cli.log_json);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
