use anyhow::{bail, Context, Result};
use roster::{present::CardFields, present::RosterPage, Config, RosterPipeline};
use std::{env, io::Write};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: roster [card <first-name> <last-name> <expiration-date>]";

#[derive(Debug, PartialEq)]
enum Command {
    /// Fetch the feed and print the whole roster.
    Roster,
    /// Print wallet-card fields from raw values, no fetch involved.
    Card(CardFields),
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [] => Ok(Command::Roster),
        [cmd, first, last, expiration] if cmd == "card" => {
            Ok(Command::Card(CardFields::new(first, last, expiration)))
        }
        _ => bail!(USAGE),
    }
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let out = match parse_args(&args)? {
        // ─── card payload fields from raw values ───────────────────────
        Command::Card(fields) => fields.to_json()?,

        // ─── full roster: config → fetch → parse → normalize ───────────
        Command::Roster => {
            let config = Config::from_env().context("loading configuration")?;
            info!(feed = %config.feed_url, "startup");
            let pipeline = RosterPipeline::from_config(&config)?;
            let members = pipeline
                .run()
                .with_context(|| format!("fetching member data from {}", config.feed_url))?;
            RosterPage::new(members).to_json()?
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_runs_the_roster() -> Result<()> {
        assert_eq!(parse_args(&args(&[]))?, Command::Roster);
        Ok(())
    }

    #[test]
    fn card_takes_three_raw_values() -> Result<()> {
        let cmd = parse_args(&args(&["card", "Ann", "Lee", "2024-03-15"]))?;
        let fields = match cmd {
            Command::Card(fields) => fields,
            other => panic!("expected a card command, got {:?}", other),
        };
        assert_eq!(
            fields.to_json()?,
            r#"{"firstName":"Ann","lastName":"Lee","expirationDate":"2024-03-15"}"#
        );
        Ok(())
    }

    #[test]
    fn card_values_pass_through_untouched() -> Result<()> {
        let cmd = parse_args(&args(&["card", "", " Lee ", "someday"]))?;
        assert_eq!(cmd, Command::Card(CardFields::new("", " Lee ", "someday")));
        Ok(())
    }

    #[test]
    fn wrong_arguments_report_usage() {
        for bad in [
            &["card"][..],
            &["card", "Ann", "Lee"],
            &["card", "Ann", "Lee", "2024-03-15", "extra"],
            &["roster"],
        ] {
            let err = parse_args(&args(bad)).unwrap_err();
            assert_eq!(err.to_string(), USAGE, "args {:?}", bad);
        }
    }
}
