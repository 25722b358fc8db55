use bottle_song::utils::error::ErrorSeverity;
use bottle_song::utils::{logger, validation::Validate};
use bottle_song::{sink_for, CliConfig, SongConfig, SongEngine, SongError, SongGenerator};
use clap::Parser;
use std::io::ErrorKind;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 載入設定檔（可選）
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            let loaded = SongConfig::from_file(path).and_then(|file| {
                file.validate()?;
                Ok(file)
            });
            match loaded {
                Ok(file) => Some(file),
                Err(e) => fail(&e, &e.user_friendly_message()),
            }
        }
        None => None,
    };

    let settings = config.settings(file_config.as_ref());
    tracing::debug!("Resolved settings: {:?}", settings);

    // 先完整解析數量，失敗時不輸出任何歌詞
    let start = match settings.bottle_count(config.count.as_deref()) {
        Ok(start) => start,
        Err(e) => {
            let message = match &e {
                SongError::InvalidCountFormat { raw } => {
                    settings.language.invalid_count_message(raw)
                }
                other => other.user_friendly_message(),
            };
            fail(&e, &message)
        }
    };

    let stdout = std::io::stdout();
    let sink = sink_for(settings.output_format, stdout.lock());
    let mut engine =
        SongEngine::new(sink, SongGenerator::new(settings.language)).with_title(settings.show_title);

    if let Err(e) = engine.run(start) {
        // 下游提早關閉（例如接到 `head`）不算錯誤
        if matches!(&e, SongError::IoError(io) if io.kind() == ErrorKind::BrokenPipe) {
            tracing::debug!("Output closed early, stopping");
            return Ok(());
        }
        let message = e.user_friendly_message();
        fail(&e, &message);
    }

    Ok(())
}

fn fail(error: &SongError, message: &str) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );

    eprintln!("❌ {}", message);
    eprintln!("💡 {}", error.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match error.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
