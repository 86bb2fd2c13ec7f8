use crate::demo::{run_demo, run_rules, run_scan, ScanArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use privacy_risk_scanner::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Privacy Risk Scanner",
    about = "Score the privacy risk of an app or website from the permissions it requests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single app or website from the command line
    Scan(ScanArgs),
    /// Print the scoring rule table
    Rules,
    /// Walk through a few sample apps and their scores
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Scan(args) => run_scan(args),
        Command::Rules => run_rules(),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_serve_when_no_subcommand() {
        let cli = Cli::try_parse_from(["privacy-risk-scanner"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn scan_flags_parse() {
        let cli = Cli::try_parse_from([
            "privacy-risk-scanner",
            "scan",
            "--target",
            "TikTok",
            "--camera",
            "--third-party-sharing",
            "--json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Scan(args)) => {
                assert_eq!(args.target.as_deref(), Some("TikTok"));
                assert!(args.camera);
                assert!(args.third_party_sharing);
                assert!(!args.privacy_policy);
                assert!(args.json);
            }
            other => panic!("expected scan command, got {other:?}"),
        }
    }
}
