// Entrypoint for the CLI application.
// - Keeps `main` small: read config, set up logging, build the uploader and
//   hand it to either the interactive menu or the one-shot upload.

use clap::Parser;
use file_parser_cli::{
    api::ApiClient,
    config::Config,
    picker::FilePicker,
    ui::{main_menu, one_shot},
    uploader::Uploader,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never mix with the screen or --json output.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api = ApiClient::new(&config)?;
    info!(endpoint = api.endpoint(), "file-parser-cli v{}", env!("CARGO_PKG_VERSION"));
    let uploader = Uploader::new(api);

    match &config.file {
        Some(path) => one_shot(&uploader, path, config.json),
        None => main_menu(&uploader, FilePicker::new(!config.no_dialog)),
    }
}
