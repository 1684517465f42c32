use crate::prelude::*;
use autofix_core::rewrite::RewriteOutcome;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

mod backend;
mod prelude;
mod report;
mod rewrite;

use backend::{Backend, BackendOptions};
use rewrite::RewriteOptions;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Send a source file to an LLM for a defensive rewrite. The original is kept as <file>.bak"
)]
pub struct App {
    /// File to rewrite in place
    file_path: Option<PathBuf>,

    /// What the rewrite should achieve (e.g. "server.js hardening")
    #[clap(allow_hyphen_values = true)]
    purpose: Option<String>,

    /// Anything after the purpose is ignored
    #[clap(hide = true, allow_hyphen_values = true)]
    #[allow(dead_code)]
    extra: Vec<String>,

    #[clap(flatten)]
    backend: BackendOptions,

    /// Remove a markdown code fence wrapping the whole response
    #[clap(long)]
    strip_fences: bool,

    /// Print the rewritten file instead of writing it and its backup
    #[clap(long)]
    dry_run: bool,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "AUTOFIX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = match App::try_parse() {
        Ok(app) => app,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                report::invalid_arguments(&err);
                std::process::exit(1);
            }
        },
    };

    if let Err(err) = run(app, |name| std::env::var(name).ok()).await {
        report::failure(&err);
        std::process::exit(err.exit_code());
    }

    Ok(())
}

/// Validate the invocation, build the configured backend, and rewrite the file.
///
/// `env` resolves credential variables; it is only consulted after the target
/// was found, and nothing is read or written if the credential is missing.
async fn run(
    app: App,
    env: impl Fn(&str) -> Option<String>,
) -> std::result::Result<RewriteOutcome, RewriteError> {
    let file_path = app.file_path.ok_or(RewriteError::Usage)?;
    rewrite::ensure_target(&file_path)?;

    let config = app.backend.resolve(env)?;

    if app.global.verbose {
        anstream::eprintln!("Backend: {}", config.kind);
        anstream::eprintln!("Model: {}", config.model);
        if let Some(base_url) = &config.base_url {
            anstream::eprintln!("Base URL: {}", base_url);
        }
    }

    let backend = Backend::from_config(&config)?;

    let options = RewriteOptions {
        style: config.kind.prompt_style(),
        strip_fences: app.strip_fences,
        dry_run: app.dry_run,
    };

    rewrite::rewrite_file(&backend, &file_path, app.purpose, &options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> App {
        App::try_parse_from(std::iter::once("autofix").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_purpose_is_optional() {
        let app = parse(&["server.js"]);
        assert_eq!(app.file_path, Some(PathBuf::from("server.js")));
        assert_eq!(app.purpose, None);

        let app = parse(&["server.js", "server.js hardening"]);
        assert_eq!(app.purpose.as_deref(), Some("server.js hardening"));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let app = parse(&["server.js", "tighten routes", "extra", "more"]);
        assert_eq!(app.purpose.as_deref(), Some("tighten routes"));
        assert_eq!(app.extra, vec!["extra".to_string(), "more".to_string()]);
    }

    #[test]
    fn test_purpose_may_start_with_a_hyphen() {
        let app = parse(&["server.js", "-tighten null checks"]);
        assert_eq!(app.purpose.as_deref(), Some("-tighten null checks"));
    }

    #[test]
    fn test_flags_after_purpose_still_apply() {
        let app = parse(&["server.js", "tighten routes", "--dry-run"]);
        assert!(app.dry_run);
        assert!(app.extra.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_backend_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("server.js");
        fs::write(&target, "let x=1").unwrap();
        let target_arg = target.to_string_lossy().to_string();

        let err = run(
            parse(&[target_arg.as_str(), "--backend", "claude"]),
            |_| Some("key".to_string()),
        )
        .await
        .unwrap_err();

        assert!(
            matches!(&err, RewriteError::Configuration(message) if message.contains("claude")),
            "{err}"
        );
        assert_eq!(err.exit_code(), 1);
        assert_eq!(fs::read_to_string(&target).unwrap(), "let x=1");
        assert!(!dir.path().join("server.js.bak").exists());
    }

    #[tokio::test]
    async fn test_missing_file_argument_is_a_usage_error() {
        let err = run(parse(&[]), |_| None).await.unwrap_err();
        assert_eq!(err, RewriteError::Usage);
        assert_eq!(err.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_missing_target_fails_without_backup() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing.js");
        let target_arg = target.to_string_lossy().to_string();

        let err = run(parse(&[target_arg.as_str()]), |_| Some("key".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err, RewriteError::FileNotFound(target.clone()));
        assert!(err.to_string().contains("missing.js"));
        assert!(!dir.path().join("missing.js.bak").exists());
    }

    #[tokio::test]
    async fn test_missing_credential_leaves_files_alone() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("server.js");
        fs::write(&target, "let x=1").unwrap();
        let target_arg = target.to_string_lossy().to_string();

        for backend in ["openai", "gemini"] {
            let err = run(parse(&[target_arg.as_str(), "--backend", backend]), |_| None)
                .await
                .unwrap_err();

            assert!(
                matches!(err, RewriteError::Configuration(_)),
                "{backend}: {err}"
            );
            assert_eq!(err.exit_code(), 1);
        }

        assert_eq!(fs::read_to_string(&target).unwrap(), "let x=1");
        assert!(!dir.path().join("server.js.bak").exists());
    }

    #[tokio::test]
    async fn test_blank_credential_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("server.js");
        fs::write(&target, "let x=1").unwrap();
        let target_arg = target.to_string_lossy().to_string();

        let err = run(parse(&[target_arg.as_str()]), |_| Some("   ".to_string()))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RewriteError::Configuration("OPENAI_API_KEY is not set".to_string())
        );
    }
}
