//! Mint a service-to-service token signed with `SERVICE_TOKEN_SECRET`.

use anyhow::Context;
use chrono::Duration;
use clap::Parser;
use favorites_api::token::issue_service_token;

/// One year.
const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Parser)]
#[command(name = "issue-token", about = "Mint a service-to-service token")]
struct Args {
    /// Calling service, stored as the token subject.
    subject: String,

    /// Token lifetime in minutes.
    #[arg(default_value_t = 60, value_parser = clap::value_parser!(i64).range(1..=MAX_TTL_MINUTES))]
    ttl_minutes: i64,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let secret = std::env::var("SERVICE_TOKEN_SECRET").context("SERVICE_TOKEN_SECRET is not set")?;
    let ttl = Duration::try_minutes(args.ttl_minutes)
        .with_context(|| format!("ttl of {} minutes is out of range", args.ttl_minutes))?;

    let token = issue_service_token(&secret, &args.subject, ttl)?;
    println!("{token}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_subject_and_default_ttl() {
        let args = Args::try_parse_from(["issue-token", "catalog"]).unwrap();
        assert_eq!(args.subject, "catalog");
        assert_eq!(args.ttl_minutes, 60);

        let args = Args::try_parse_from(["issue-token", "catalog", "15"]).unwrap();
        assert_eq!(args.ttl_minutes, 15);
    }

    #[test]
    fn help_is_not_taken_as_a_subject() {
        let err = Args::try_parse_from(["issue-token", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn rejects_out_of_range_ttl() {
        for ttl in ["999999999999999", "0", "-5"] {
            assert!(Args::try_parse_from(["issue-token", "catalog", ttl]).is_err(), "{ttl}");
        }
        assert!(Args::try_parse_from(["issue-token"]).is_err());
    }
}
