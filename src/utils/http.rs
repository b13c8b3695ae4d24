use reqwest::Client;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// The client is built once per cold start and reused by every invocation of the function.
pub fn build_http_client(config: &Configuration) -> LibraryResult<Client> {
    let client = Client::builder()
        .timeout(config.request_timeout())
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::utils::http::build_http_client;

    #[tokio::test]
    async fn test_should_build_http_client() {
        let _ = build_http_client(&Configuration::new()).expect("should build client");
    }
}
