use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ApiError {
    #[error("invalid endpoint url: {0}")]
    #[diagnostic(code(holo_api::bad_endpoint))]
    Endpoint(#[from] url::ParseError),
    #[error("request to location service failed")]
    #[diagnostic(code(holo_api::transport))]
    Transport(#[from] Box<ureq::Error>),
    #[error("failed to decode response body")]
    #[diagnostic(code(holo_api::decode))]
    Decode(#[from] std::io::Error),
    #[error("location {0:?} not found")]
    #[diagnostic(code(holo_api::unknown_id))]
    UnknownId(String),
}
