//! Command line front end for the MyAnimeList API.
//!
//! Walks through the OAuth2 PKCE flow and issues a few read calls, printing
//! every result as JSON on stdout. Logs go to stderr.

use clap::{Parser, Subcommand};
use malkit::types::AnimeRankingType;
use malkit::{ClientBuilder, MalClient};
use serde::Serialize;
use tracing::{debug, info};

// ============================================================================
// CLI Arguments
// ============================================================================

/// Talk to the MyAnimeList API from the command line.
#[derive(Parser, Debug)]
#[command(name = "malkit")]
#[command(version, about, long_about = None)]
struct Args {
    /// Application client id
    #[arg(long, env = "MAL_CLIENT_ID", hide_env_values = true)]
    client_id: String,

    /// Application client secret (needed for exchange and refresh)
    #[arg(long, env = "MAL_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,

    /// User access token
    #[arg(long, env = "MAL_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Redirect URI registered for the application
    #[arg(long, env = "MAL_REDIRECT_URI")]
    redirect_uri: Option<String>,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a fresh code verifier and the authorization URL
    AuthUrl {
        /// Also embed a random state value
        #[arg(long)]
        state: bool,
    },
    /// Exchange an authorization code for tokens
    Exchange {
        code: String,
        verifier: String,
    },
    /// Trade a refresh token for a new token pair
    Refresh { refresh_token: String },
    /// Search anime by title
    Search {
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Show an anime ranking
    Ranking {
        /// all, airing, upcoming, tv, ova, movie, special, bypopularity, favorite
        #[arg(default_value = "all", value_parser = parse_ranking_type)]
        ranking_type: AnimeRankingType,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show the authorized user's profile
    Me,
}

fn parse_ranking_type(s: &str) -> Result<AnimeRankingType, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|_| format!("Invalid ranking type: {s}"))
}

// ============================================================================
// Main
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn build_client(args: &Args) -> malkit::Result<MalClient> {
    let mut builder = ClientBuilder::new().client_id(&args.client_id);
    if let Some(secret) = &args.client_secret {
        builder = builder.client_secret(secret);
    }
    if let Some(token) = &args.access_token {
        builder = builder.access_token(token);
    }
    if let Some(uri) = &args.redirect_uri {
        builder = builder.redirect_uri(uri);
    }
    builder.build()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let client = build_client(&args)?;
    debug!(client = ?client, command = ?args.command, "Client ready");

    match &args.command {
        Command::AuthUrl { state } => {
            let request = if *state {
                client.auth().generate_auth_url_with_state()?
            } else {
                client.auth().generate_auth_url()?
            };
            print_json(&serde_json::json!({
                "code_verifier": request.code_verifier,
                "url": request.url,
                "state": request.state,
            }))?;
        }
        Command::Exchange { code, verifier } => {
            let tokens = client.auth().exchange(code, verifier).await?;
            info!(expires_in = ?tokens.expires_in, "Authorization complete");
            print_json(&tokens)?;
        }
        Command::Refresh { refresh_token } => {
            let tokens = client.auth().refresh(refresh_token).await?;
            print_json(&tokens)?;
        }
        Command::Search {
            query,
            limit,
            offset,
        } => {
            let page = client.anime().search(query, *limit, *offset).await?;
            print_json(&page)?;
        }
        Command::Ranking {
            ranking_type,
            limit,
        } => {
            let page = client.anime().ranking(*ranking_type, *limit, 0).await?;
            print_json(&page)?;
        }
        Command::Me => {
            let user = client.users().me().await?;
            print_json(&user)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ranking_type() {
        assert_eq!(parse_ranking_type("all"), Ok(AnimeRankingType::All));
        assert_eq!(
            parse_ranking_type("bypopularity"),
            Ok(AnimeRankingType::ByPopularity)
        );
        assert!(parse_ranking_type("best").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "malkit",
            "--client-id",
            "abc",
            "-vv",
            "search",
            "frieren",
            "--limit",
            "5",
        ])
        .unwrap();
        assert_eq!(args.client_id, "abc");
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Command::Search { limit: 5, .. }));
    }

    #[test]
    fn test_args_verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
