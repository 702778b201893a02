//! The `yamdown` application: logging setup and command dispatch.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing_subscriber::EnvFilter;
use yamdown_core::{Error, Result, Settings};
use yamdown_reader::{MarkdownYamlReader, Metadata};

use crate::cli::{CliArgs, Command};

/// JSON shape printed for each document.
#[derive(Debug, Serialize)]
pub struct DocumentOutput<'a> {
    pub path: &'a Path,
    pub content: &'a str,
    pub metadata: &'a Metadata,
}

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// CLI application bound to loaded settings.
pub struct YamdownCli {
    settings: Settings,
}

impl YamdownCli {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Create from CLI args, loading settings from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        Ok(Self::new(Settings::load(args.config.as_deref())?))
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run one command, writing its output to `out`.
    ///
    /// A `read` path of `-` takes the document from `input`.
    pub fn run(
        &self,
        command: Command,
        input: &mut impl Read,
        out: &mut impl Write,
    ) -> Result<()> {
        match command {
            Command::Read { paths, pretty } => self.read_documents(&paths, pretty, input, out),
            Command::Config => {
                let toml = self.settings.to_toml_string()?;
                out.write_all(toml.as_bytes())?;
                Ok(())
            }
            Command::Version => {
                writeln!(out, "yamdown {}", env!("CARGO_PKG_VERSION"))?;
                Ok(())
            }
        }
    }

    fn read_documents(
        &self,
        paths: &[PathBuf],
        pretty: bool,
        input: &mut impl Read,
        out: &mut impl Write,
    ) -> Result<()> {
        let reader = MarkdownYamlReader::new(self.settings.clone())?;

        for path in paths {
            let doc = if path.as_os_str() == STDIN_PATH {
                log::debug!("Reading document from stdin");
                let mut text = String::new();
                input.read_to_string(&mut text)?;
                reader.read_str(&text)?
            } else {
                if !MarkdownYamlReader::accepts(path) {
                    log::warn!(
                        "{} does not have a Markdown extension ({})",
                        path.display(),
                        MarkdownYamlReader::file_extensions().join(", ")
                    );
                }
                reader.read(path)?
            };
            let output = DocumentOutput {
                path,
                content: &doc.content,
                metadata: &doc.metadata,
            };
            let json = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }
            .map_err(|e| Error::serialization(e.to_string()))?;
            writeln!(out, "{json}")?;
        }

        tracing::info!(count = paths.len(), "Read documents");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Command) -> Result<String> {
        run_with_input(command, "")
    }

    fn run_with_input(command: Command, input: &str) -> Result<String> {
        let cli = YamdownCli::new(Settings::default());
        let mut out = Vec::new();
        cli.run(command, &mut input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_read_prints_json_per_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let first = dir.path().join("first.md");
        let second = dir.path().join("second.md");
        std::fs::write(&first, "---\ntitle: One\ntags: [a, b]\n---\nBody\n").unwrap();
        std::fs::write(&second, "No metadata\n").unwrap();

        let output = run(Command::Read {
            paths: vec![first.clone(), second],
            pretty: false,
        })
        .unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let doc: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(doc["path"], first.to_str().unwrap());
        assert_eq!(doc["content"], "<p>Body</p>\n");
        assert_eq!(doc["metadata"]["title"], "One");
        assert_eq!(doc["metadata"]["tags"][1]["slug"], "b");

        let doc: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(doc["metadata"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_read_dash_reads_stdin() {
        let output = run_with_input(
            Command::Read {
                paths: vec![PathBuf::from("-")],
                pretty: false,
            },
            "---\ntitle: Piped\ntags: [x]\n---\nFrom *stdin*\n",
        )
        .unwrap();

        let doc: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(doc["path"], "-");
        assert_eq!(doc["content"], "<p>From <em>stdin</em></p>\n");
        assert_eq!(doc["metadata"]["title"], "Piped");
        assert_eq!(doc["metadata"]["tags"][0]["name"], "x");
    }

    #[test]
    fn test_read_dash_with_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("file.md");
        std::fs::write(&path, "From a file\n").unwrap();

        let output = run_with_input(
            Command::Read {
                paths: vec![path, PathBuf::from("-")],
                pretty: false,
            },
            "From stdin\n",
        )
        .unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let piped: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(piped["content"], "<p>From stdin</p>\n");
    }

    #[test]
    fn test_read_rejects_invalid_slug_settings() {
        let mut settings = Settings::default();
        settings.slug.substitutions.push(yamdown_core::SlugSubstitution {
            pattern: "(".into(),
            replacement: String::new(),
        });
        let cli = YamdownCli::new(settings);
        let err = cli
            .run(
                Command::Read {
                    paths: vec![PathBuf::from("-")],
                    pretty: false,
                },
                &mut "".as_bytes(),
                &mut Vec::new(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_read_fails_on_bad_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.md");
        std::fs::write(&path, "---\ndate: someday\n---\n").unwrap();

        let err = run(Command::Read {
            paths: vec![path],
            pretty: true,
        })
        .unwrap_err();
        assert!(err.is_date_format());
    }

    #[test]
    fn test_read_missing_file() {
        let err = run(Command::Read {
            paths: vec![PathBuf::from("/nonexistent/post.md")],
            pretty: false,
        })
        .unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_config_prints_toml() {
        let output = run(Command::Config).unwrap();
        assert!(output.contains("[markdown]"));
        assert!(output.contains("[urls]"));
    }

    #[test]
    fn test_version() {
        let output = run(Command::Version).unwrap();
        assert!(output.starts_with("yamdown "));
    }
}
