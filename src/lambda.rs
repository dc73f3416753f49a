#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use std::sync::Arc;
#[cfg(feature = "lambda")]
use wechat_album::adapters::{diagnostics::TracingSink, http::ReqwestFetcher};
#[cfg(feature = "lambda")]
use wechat_album::utils::logger;
#[cfg(feature = "lambda")]
use wechat_album::{AlbumHandler, GatewayRequest, GatewayResponse, LambdaConfig};

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: Arc<AlbumHandler<ReqwestFetcher, TracingSink>>,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    let request = event.payload.into_album_request();
    tracing::info!("Handling album request for {:?}", request.url);

    let response = handler.handle(request).await;
    let gateway_response = GatewayResponse::from_album_response(&response)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(gateway_response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // handler 與 reqwest 連線池在冷啟動時建立一次
    let lambda_config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let profile = lambda_config
        .profile()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let handler = Arc::new(
        AlbumHandler::from_profile(profile)
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?,
    );

    run(service_fn(move |event: LambdaEvent<GatewayRequest>| {
        let handler = Arc::clone(&handler);
        async move { function_handler(handler, event).await }
    }))
    .await
}
