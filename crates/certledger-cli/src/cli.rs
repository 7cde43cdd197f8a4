use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "certledger",
    about = "Tamper-evident ledger of university certificates",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the chain file.
    #[arg(long, global = true, default_value = "chain.json")]
    pub ledger: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new ledger with only the genesis block
    Init,
    /// Issue a certificate
    Issue(IssueArgs),
    /// Revoke an issued certificate
    Revoke(RevokeArgs),
    /// Verify a certificate against the chain
    Verify(VerifyArgs),
    /// Show the most recent blocks
    Log(LogArgs),
    /// Check chain length and integrity
    Validate,
}

#[derive(Args)]
pub struct IssueArgs {
    pub certificate_id: String,
    #[arg(long)]
    pub student: String,
    #[arg(long)]
    pub course: String,
    #[arg(long)]
    pub university: String,
    /// Issue date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
}

#[derive(Args)]
pub struct RevokeArgs {
    pub certificate_id: String,
    /// Reason recorded with the revocation
    #[arg(long)]
    pub reason: Option<String>,
}

#[derive(Args)]
pub struct VerifyArgs {
    pub certificate_id: String,
}

#[derive(Args)]
pub struct LogArgs {
    #[arg(short = 'n', long, default_value = "5")]
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init() {
        let cli = Cli::try_parse_from(["certledger", "init"]).unwrap();
        assert!(matches!(cli.command, Command::Init));
    }

    #[test]
    fn parse_issue() {
        let cli = Cli::try_parse_from([
            "certledger",
            "issue",
            "CERT-001",
            "--student",
            "A. Lee",
            "--course",
            "CS101",
            "--university",
            "State U",
            "--date",
            "2024-01-10",
        ])
        .unwrap();
        if let Command::Issue(args) = cli.command {
            assert_eq!(args.certificate_id, "CERT-001");
            assert_eq!(args.student, "A. Lee");
            assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_issue_rejects_bad_date() {
        let result = Cli::try_parse_from([
            "certledger",
            "issue",
            "CERT-001",
            "--student",
            "A. Lee",
            "--course",
            "CS101",
            "--university",
            "State U",
            "--date",
            "not-a-date",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_revoke_with_reason() {
        let cli = Cli::try_parse_from([
            "certledger",
            "revoke",
            "CERT-001",
            "--reason",
            "transcript error",
        ])
        .unwrap();
        if let Command::Revoke(args) = cli.command {
            assert_eq!(args.certificate_id, "CERT-001");
            assert_eq!(args.reason.as_deref(), Some("transcript error"));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_verify() {
        let cli = Cli::try_parse_from(["certledger", "verify", "CERT-001"]).unwrap();
        assert!(matches!(cli.command, Command::Verify(_)));
    }

    #[test]
    fn parse_log_limit() {
        let cli = Cli::try_parse_from(["certledger", "log", "-n", "3"]).unwrap();
        if let Command::Log(args) = cli.command {
            assert_eq!(args.limit, 3);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_custom_ledger_path() {
        let cli = Cli::try_parse_from(["certledger", "--ledger", "/tmp/other.json", "validate"])
            .unwrap();
        assert_eq!(cli.ledger, PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["certledger", "--verbose", "validate"]).unwrap();
        assert!(cli.verbose);
    }
}
