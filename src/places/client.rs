use reqwest::Client;
use thiserror::Error;

pub fn new_client() -> Result<Client, PlacesClientError> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum PlacesClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
