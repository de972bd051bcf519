use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    ReqwestError(reqwest::Error),
    JsonError(serde_json::Error),
    InvalidApiUrl,
    ApiError { code: String, message: String },
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ReqwestError(e) => write!(f, "reqwest error: {}", e),
            Error::JsonError(e) => write!(f, "malformed response body: {}", e),
            Error::InvalidApiUrl => write!(f, "The API base URL is invalid"),
            Error::ApiError { code, message } => {
                write!(f, "API error {}: {}", code, message)
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::ReqwestError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::JsonError(e)
    }
}
