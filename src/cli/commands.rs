//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::http_server::HttpServer;
use crate::logging::init_logging;
use crate::post::{validate, Post};
use crate::repository::{InMemoryPostRepository, JsonFilePostRepository, PostRepository};

use super::args::Command;
use super::config::{Config, StoreConfig};
use super::errors::{CliError, CliResult};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Start the HTTP server
///
/// Boot order: config, logging, store, seed, server.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    init_logging(&config.logging()).map_err(CliError::boot_failed)?;

    let repository = open_store(&config.store)?;

    if let Some(seed_path) = &config.seed_path {
        let seeded = seed_store(repository.as_ref(), seed_path)?;
        info!(count = seeded, path = %seed_path.display(), "seeded post store");
    }

    let server = HttpServer::with_config(config.server.clone(), repository);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate configuration and print it as JSON
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

/// Open the configured post store
pub fn open_store(store: &StoreConfig) -> CliResult<Arc<dyn PostRepository>> {
    match store {
        StoreConfig::Memory => Ok(Arc::new(InMemoryPostRepository::new())),
        StoreConfig::File { path } => Ok(Arc::new(JsonFilePostRepository::open(path)?)),
    }
}

/// Load the posts in `seed_path` into `repository` if it is empty.
///
/// Every seed post is validated before any is saved. Returns the number
/// of posts saved, 0 when the store already held data.
pub fn seed_store(repository: &dyn PostRepository, seed_path: &Path) -> CliResult<usize> {
    if !repository.find_all()?.is_empty() {
        return Ok(0);
    }

    let content = fs::read_to_string(seed_path).map_err(|e| {
        CliError::seed_error(format!("Failed to read {}: {}", seed_path.display(), e))
    })?;
    let posts: Vec<Post> = serde_json::from_str(&content).map_err(|e| {
        CliError::seed_error(format!("Invalid seed JSON in {}: {}", seed_path.display(), e))
    })?;

    for (index, post) in posts.iter().enumerate() {
        validate(post).map_err(|e| {
            CliError::seed_error(format!("Seed entry {} (id {}): {}", index, post.id, e))
        })?;
    }

    let count = posts.len();
    for post in posts {
        repository.save(post)?;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use tempfile::TempDir;

    fn write_seed(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("seed.json");
        fs::write(&path, content).unwrap();
        path
    }

    const SEED: &str = r#"[
        {"id": 1, "userId": 1, "title": "Hello", "body": "Welcome", "version": null},
        {"id": 2, "userId": 2, "title": "Welcome", "body": "Hello", "version": null}
    ]"#;

    #[test]
    fn test_seed_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(&dir, SEED);
        let repo = InMemoryPostRepository::new();

        assert_eq!(seed_store(&repo, &path).unwrap(), 2);

        let ids: Vec<_> = repo.find_all().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_seed_skips_populated_store() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(&dir, SEED);
        let repo = InMemoryPostRepository::with_posts(vec![Post::new(9, 9, "kept", "kept")]);

        assert_eq!(seed_store(&repo, &path).unwrap(), 0);
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_seed_rejects_invalid_entry_without_saving() {
        let dir = TempDir::new().unwrap();
        let path = write_seed(
            &dir,
            r#"[
                {"id": 1, "userId": 1, "title": "ok", "body": "ok"},
                {"id": 2, "userId": 2, "title": "", "body": "missing title"}
            ]"#,
        );
        let repo = InMemoryPostRepository::new();

        let err = seed_store(&repo, &path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::SeedError);
        assert!(err.message().contains("Seed entry 1"));
        assert!(repo.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_seed_missing_file() {
        let dir = TempDir::new().unwrap();
        let repo = InMemoryPostRepository::new();
        let err = seed_store(&repo, &dir.path().join("missing.json")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::SeedError);
    }

    #[test]
    fn test_open_file_store() {
        let dir = TempDir::new().unwrap();
        let store = StoreConfig::File {
            path: dir.path().join("posts.json"),
        };

        let repo = open_store(&store).unwrap();
        repo.save(Post::new(1, 1, "a", "b")).unwrap();

        let reopened = open_store(&store).unwrap();
        assert_eq!(reopened.find_by_id(1).unwrap().title, "a");
    }

    #[test]
    fn test_check_config_defaults() {
        assert!(check_config(None).is_ok());
    }
}
