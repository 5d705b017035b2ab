// Command-line configuration. Every flag has a sensible default so the
// client runs with no arguments at all.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "https://pdf-parser-7mnz.onrender.com/api/parse-resume/";

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Upload a file to the parsing service and show what it extracted",
    long_about = None
)]
pub struct Config {
    /// Parse endpoint that receives the multipart upload
    #[arg(long, env = "FILE_PARSER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Upload this file once and exit instead of opening the menu
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// With --file: print the parsed result as JSON only
    #[arg(long, requires = "file")]
    pub json: bool,

    /// Type file paths instead of opening the native file dialog
    #[arg(long)]
    pub no_dialog: bool,

    /// Log request details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> String {
        let level = if self.verbose { "debug" } else { "warn" };
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_hosted_parser() {
        let c = Config::try_parse_from(["file-parser-cli"]).unwrap();
        // FILE_PARSER_ENDPOINT may be set in the environment running the tests.
        if std::env::var_os("FILE_PARSER_ENDPOINT").is_none() {
            assert_eq!(c.endpoint, DEFAULT_ENDPOINT);
        }
        assert!(c.file.is_none());
        assert!(!c.json);
        assert_eq!(c.log_filter(), "file_parser_cli=warn");
    }

    #[test]
    fn one_shot_flags() {
        let c = Config::try_parse_from([
            "file-parser-cli",
            "--endpoint",
            "http://127.0.0.1:9/parse/",
            "--file",
            "cv.pdf",
            "--json",
            "-v",
        ])
        .unwrap();
        assert_eq!(c.endpoint, "http://127.0.0.1:9/parse/");
        assert_eq!(c.file, Some(PathBuf::from("cv.pdf")));
        assert!(c.json);
        assert_eq!(c.log_filter(), "file_parser_cli=debug");
    }

    #[test]
    fn json_needs_a_file() {
        assert!(Config::try_parse_from(["file-parser-cli", "--json"]).is_err());
    }
}
