use axum::{routing::get, Router};
use lambda_http::{run, Error};
use tracing::info;
use ebooks_by_author::catalog::factory::create_catalog_service;
use ebooks_by_author::core::controller::AppState;
use ebooks_by_author::core::domain::Configuration;
use ebooks_by_author::ebooks::controller::get_ebooks;
use ebooks_by_author::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

// Runs against a local runtime interface emulator instead of the Lambda service.
const DEV_MODE: bool = false;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.tracing_level());

    if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "128");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
    }

    let catalog = create_catalog_service(&config)?;
    info!("ebooks function starting with catalog {} page size {} max pages {}",
        config.api_url, config.page_size, config.max_pages);
    let state = AppState::new(config, catalog);

    let app = Router::new()
        .route("/", get(get_ebooks))
        .route("/ebooks", get(get_ebooks))
        .with_state(state);

    run(app).await
}
