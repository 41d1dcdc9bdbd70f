//! Command-line interface.
//!
//! Flags are the highest configuration layer: each one that is given
//! replaces the corresponding value loaded by [`ServiceConfig::load`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::{LogFormat, ServiceConfig, StoreKind};

/// Blog posts HTTP service.
#[derive(Parser, Debug)]
#[command(name = "blog-server")]
#[command(about = "CRUD HTTP service for blog posts")]
#[command(version)]
pub struct Cli {
    /// YAML configuration file (default: blog-config.yaml, if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Database host
    #[arg(long)]
    pub host: Option<String>,

    /// Database port
    #[arg(long)]
    pub port: Option<u16>,

    /// Database user
    #[arg(long)]
    pub user: Option<String>,

    /// Database password
    #[arg(long, env = "BLOG_DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Database name
    #[arg(long)]
    pub dbname: Option<String>,

    /// Database sslmode (disable, prefer, require, verify-ca, verify-full)
    #[arg(long)]
    pub ssl: Option<String>,

    /// HTTP bind address
    #[arg(long)]
    pub http_host: Option<String>,

    /// HTTP port
    #[arg(long)]
    pub http_port: Option<u16>,

    /// Store backend
    #[arg(long, value_enum)]
    pub store: Option<StoreKind>,

    /// Start the in-memory store empty instead of with the sample post
    #[arg(long)]
    pub no_seed: bool,

    /// Apply database migrations after connecting
    #[arg(long)]
    pub migrate: bool,

    /// Append logs to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Whether any discrete database connection flag was given.
    const fn has_connection_flags(&self) -> bool {
        self.host.is_some()
            || self.port.is_some()
            || self.user.is_some()
            || self.password.is_some()
            || self.dbname.is_some()
            || self.ssl.is_some()
    }

    /// Overlay the given flags onto `config`.
    ///
    /// Discrete connection flags take precedence over a `DATABASE_URL`.
    pub fn apply(&self, config: &mut ServiceConfig) {
        let db = &mut config.database;
        if self.has_connection_flags() {
            db.url = None;
        }
        if let Some(host) = &self.host {
            db.host.clone_from(host);
        }
        if let Some(port) = self.port {
            db.port = port;
        }
        if let Some(user) = &self.user {
            db.user.clone_from(user);
        }
        if let Some(password) = &self.password {
            db.password.clone_from(password);
        }
        if let Some(dbname) = &self.dbname {
            db.dbname.clone_from(dbname);
        }
        if let Some(ssl) = &self.ssl {
            db.ssl.clone_from(ssl);
        }
        if self.migrate {
            db.migrate = true;
        }

        if let Some(host) = &self.http_host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.http_port {
            config.server.port = port;
        }

        if let Some(kind) = self.store {
            config.store.kind = kind;
        }
        if self.no_seed {
            config.store.seed = false;
        }

        let logging = &mut config.logging;
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
        if let Some(format) = self.log_format {
            logging.format = format;
        }
        if let Some(level) = &self.log_level {
            logging.level.clone_from(level);
        }
        match self.verbose {
            0 => {}
            1 => logging.level = String::from("debug"),
            _ => logging.level = String::from("trace"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = Cli::try_parse_from(["blog-server"]).unwrap();
        let mut config = ServiceConfig::default();
        cli.apply(&mut config);
        if std::env::var_os("BLOG_DB_PASSWORD").is_none() {
            assert_eq!(config, ServiceConfig::default());
        }
    }

    #[test]
    fn database_flags_override_config() {
        let cli = Cli::try_parse_from([
            "blog-server",
            "--host",
            "db.internal",
            "--port",
            "6543",
            "--user",
            "app",
            "--password",
            "secret",
            "--dbname",
            "blog",
            "--ssl",
            "require",
            "--migrate",
        ])
        .unwrap();
        let mut config = ServiceConfig::default();
        config.database.url = Some(String::from("postgres://elsewhere/db"));
        cli.apply(&mut config);

        let db = &config.database;
        assert!(db.url.is_none());
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.port, 6543);
        assert_eq!(db.user, "app");
        assert_eq!(db.password, "secret");
        assert_eq!(db.dbname, "blog");
        assert_eq!(db.ssl, "require");
        assert!(db.migrate);
    }

    #[test]
    fn server_store_and_logging_flags() {
        let cli = Cli::try_parse_from([
            "blog-server",
            "--config",
            "custom.yaml",
            "--http-host",
            "127.0.0.1",
            "--http-port",
            "8080",
            "--store",
            "memory",
            "--no-seed",
            "--log-file",
            "blog.log",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some(Path::new("custom.yaml")));

        let mut config = ServiceConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.kind, StoreKind::Memory);
        assert!(!config.store.seed);
        assert_eq!(config.logging.file.as_deref(), Some(Path::new("blog.log")));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn verbosity_overrides_log_level() {
        let cli = Cli::try_parse_from(["blog-server", "--log-level", "warn", "-vv"]).unwrap();
        let mut config = ServiceConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.logging.level, "trace");

        let cli = Cli::try_parse_from(["blog-server", "--log-level", "warn"]).unwrap();
        let mut config = ServiceConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["blog-server", "--store", "redis"]).is_err());
        assert!(Cli::try_parse_from(["blog-server", "--http-port", "99999"]).is_err());
        assert!(Cli::try_parse_from(["blog-server", "--port", "abc"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
