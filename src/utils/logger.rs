use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 由 `ALBUM_LOG_FORMAT` 選擇輸出格式，預設 compact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub const ENV_VAR: &'static str = "ALBUM_LOG_FORMAT";

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }

    pub fn from_env(default: LogFormat) -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or(default)
    }
}

fn album_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        album_filter("wechat_album=debug,info")
    } else {
        album_filter("wechat_album=info")
    };

    // stdout 保留給 JSON 結果，日誌一律寫 stderr
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    match LogFormat::from_env(LogFormat::Compact) {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
    }
}

pub fn init_lambda_logger() {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .without_time(); // CloudWatch 自帶時間戳

    match LogFormat::from_env(LogFormat::Json) {
        LogFormat::Json => tracing_subscriber::registry()
            .with(album_filter("wechat_album=info"))
            .with(layer.json())
            .init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(album_filter("wechat_album=info"))
            .with(layer.compact())
            .init(),
    }
}
