use clap::Parser;
use quire_cli::CliError;
use quire_cli::commands::Command;
use quire_cli::config::{resolve_db_path, resolve_user};
use quire_cli::output::ErrorBody;
use quire_db::Database;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Quire - hierarchical todo lists
#[derive(Parser)]
#[command(name = "quire")]
#[command(version = "0.1.0")]
#[command(about = "Hierarchical todo lists", long_about = None)]
struct Args {
    /// Path to the database directory (can also be set via QUIRE_DB_PATH env var)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Acting user (can also be set via QUIRE_USER env var)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Print JSON instead of messages
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Initialize logging from RUST_LOG
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=quire_db=debug` - show debug logs from the core
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let args = Args::parse();
    match run_with_args(&args).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            if args.json {
                let body = ErrorBody {
                    success: false,
                    kind: e.kind(),
                    message: e.full_message(),
                };
                match serde_json::to_string(&body) {
                    Ok(json) => println!("{}", json),
                    Err(_) => eprintln!("error: {}", e.full_message()),
                }
            } else {
                eprintln!("error: {}", e.full_message());
            }
            process::exit(1);
        }
    }
}

/// Run the application with the given arguments
async fn run_with_args(args: &Args) -> Result<String, CliError> {
    let Some(command) = &args.command else {
        return Ok("Welcome to Quire!\nUse 'quire --help' for usage information.".to_string());
    };

    let user = resolve_user(args.user.as_deref())?;
    let db_path = resolve_db_path(args.db.clone())?;
    debug!("Using database at {:?} as {}", db_path, user);

    let db = Database::connect(&db_path).await?;
    db.init().await?;

    let response = command.execute(&db, &user).await?;
    Ok(response.render(args.json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_db(name: &str) -> PathBuf {
        env::temp_dir().join(format!(
            "quire-main-{}-{}-{:?}-{}",
            name,
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from(["quire"]).unwrap();
        assert!(args.db.is_none());
        assert!(args.user.is_none());
        assert!(!args.json);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["quire", "lists", "--user", "alice", "--db", "/tmp/q", "--json"])
                .unwrap();
        assert_eq!(args.user.as_deref(), Some("alice"));
        assert_eq!(args.db, Some(PathBuf::from("/tmp/q")));
        assert!(args.json);
    }

    #[tokio::test]
    async fn test_run_with_args_no_command() {
        let args = Args::try_parse_from(["quire"]).unwrap();
        let output = run_with_args(&args).await.unwrap();
        assert!(output.starts_with("Welcome to Quire!"));
    }

    #[tokio::test]
    async fn test_run_new_list_then_lists_as_json() {
        let temp_dir = temp_db("json");
        let db = temp_dir.to_str().unwrap();

        let args =
            Args::try_parse_from(["quire", "--db", db, "-u", "alice", "new-list", "Chores"])
                .unwrap();
        let output = run_with_args(&args).await.unwrap();
        assert!(output.starts_with("List created successfully!"));

        let args =
            Args::try_parse_from(["quire", "--db", db, "-u", "alice", "--json", "lists"]).unwrap();
        let output = run_with_args(&args).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["title"], "Chores");
        assert_eq!(parsed[0]["owner"], "alice");

        let _ = std::fs::remove_dir_all(&temp_dir);
    }

    #[tokio::test]
    async fn test_run_reports_core_errors() {
        let temp_dir = temp_db("err");
        let args = Args::try_parse_from([
            "quire",
            "--db",
            temp_dir.to_str().unwrap(),
            "-u",
            "alice",
            "show",
            "nolist",
        ])
        .unwrap();

        let err = run_with_args(&args).await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.to_string(), "List 'nolist' not found");

        let _ = std::fs::remove_dir_all(&temp_dir);
    }
}
