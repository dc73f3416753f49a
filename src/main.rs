use clap::Parser;
use wechat_album::config::cli::{render_articles, render_responses, write_output};
use wechat_album::utils::error::AlbumError;
use wechat_album::utils::{logger, validation::Validate};
use wechat_album::{AlbumHandler, AlbumRequest, CliConfig};

fn report_failure(url: &str, e: &AlbumError) {
    tracing::error!("❌ {} failed: {}", url, e);
    eprintln!("❌ {}: {}", url, e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
}

/// 400 → 1，其餘錯誤 → 2
fn exit_code_for(status: u16) -> i32 {
    match status {
        200 => 0,
        400 => 1,
        _ => 2,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting wechat-album CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置；設定檔只載入與編譯一次
    let handler = match config
        .validate()
        .and_then(|_| config.profile())
        .and_then(AlbumHandler::from_profile)
    {
        Ok(handler) => handler,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let targets = config.targets();
    let mut statuses = Vec::with_capacity(targets.len());

    // 依序處理每個網址，互不影響
    let json = if config.articles.is_empty() {
        let mut responses = Vec::with_capacity(targets.len());
        for url in targets {
            let result = handler.extract(&AlbumRequest::new(url.clone())).await;
            if let Err(e) = &result {
                report_failure(&url, e);
            }
            let response = handler.respond(result);
            statuses.push(response.status);
            responses.push((url, response));
        }
        render_responses(&responses, config.limit, config.pretty)?
    } else {
        let mut articles = Vec::with_capacity(targets.len());
        for url in targets {
            let result = handler.fetch_article(&url).await;
            match &result {
                Ok(_) => statuses.push(200),
                Err(e) => {
                    report_failure(&url, e);
                    statuses.push(e.status_code());
                }
            }
            articles.push((url, result));
        }
        render_articles(&articles, config.pretty)?
    };

    match &config.output {
        Some(path) => {
            write_output(path, &json)?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => println!("{}", json),
    }

    let exit_code = statuses
        .into_iter()
        .map(exit_code_for)
        .max()
        .unwrap_or(0);
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
