mod api_response;
mod client_api;
mod error;
mod talon_graphql;

pub use api_response::ApiResponse;
pub use client_api::ApiCaller;
pub use client_api::ClientApi;
pub use client_api::ClientApiBuilder;
pub use error::Error;
pub use talon_graphql::TalonGraphQl;
