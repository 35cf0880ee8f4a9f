//! Entry point: collects `UIStrings` and regenerates the locale files.

use std::path::Path;
use std::process::ExitCode;

use collect_strings::config::load_settings;
use collect_strings::{
    Error,
    run,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // 進捗行をそのまま読めるよう、時刻・レベル・ターゲットは出さない
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .with_level(false)
        .with_target(false)
        .init();

    // <project>/scripts/collect-strings に置かれている前提
    let project_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    let result = load_settings(&project_root)
        .map_err(Error::from)
        .and_then(|settings| run(&project_root, &settings));

    match result {
        Ok(summary) => {
            tracing::debug!(
                entries = summary.entry_count,
                default_locale = %summary.default_locale_path.display(),
                pseudo_locale = %summary.pseudo_locale_path.display(),
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
