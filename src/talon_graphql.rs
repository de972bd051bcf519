use crate::{api_response::ApiResponse, client_api::ApiCaller, error::Error};
use std::collections::HashMap;
use std::sync::Arc;

const COMPONENT: &str = "talon";
const CATEGORY: &str = "action";

/// Client bindings for the talon GraphQL add-on actions.
///
/// Each method assembles the endpoint's flat string payload and hands it to
/// the invocation layer unchanged; no validation happens on this side, and
/// any failure the invocation layer reports is returned as-is.
#[derive(Clone)]
pub struct TalonGraphQl {
    api: Arc<dyn ApiCaller + Send + Sync>,
}

impl TalonGraphQl {
    pub fn new(api: Arc<dyn ApiCaller + Send + Sync>) -> Self {
        Self { api }
    }

    /// Import a GraphQL schema from a file and spider the API it describes.
    /// The scan runs asynchronously on the remote side; the reply only
    /// acknowledges that it started.
    ///
    /// # Arguments
    /// `file` - absolute file path to the GraphQL schema.
    /// `uri` - target URI to spider using the file-based schema.
    /// `request_method` - http request verb, GET or POST are supported in GraphQL.
    /// `batch_queries` - deprecated, still required by the endpoint.
    /// `uri_max_length` - maximum URI length when using GET requests.
    /// `max_depth` - max recursion depth for query generation.
    /// `request_per_cycle` - number of requests per request interval.
    /// `request_delay` - delay time between subsequent spidering requests.
    /// `operation` - GraphQL operation type (e.g. Query/Mutation).
    #[allow(clippy::too_many_arguments)]
    pub fn scan_graphql_by_file(
        &self,
        file: Option<&str>,
        uri: Option<&str>,
        request_method: &str,
        batch_queries: &str,
        uri_max_length: &str,
        max_depth: &str,
        request_per_cycle: &str,
        request_delay: &str,
        operation: &str,
    ) -> Result<ApiResponse, Error> {
        let params = scan_params(
            file,
            uri,
            request_method,
            batch_queries,
            uri_max_length,
            max_depth,
            request_per_cycle,
            request_delay,
            operation,
        );
        self.api
            .call_api(COMPONENT, CATEGORY, "scanGraphQLByFile", &params)
    }

    /// Introspect the GraphQL endpoint at `uri` for its schema and spider
    /// it. Same contract as [`TalonGraphQl::scan_graphql_by_file`], minus
    /// the file parameter.
    #[allow(clippy::too_many_arguments)]
    pub fn scan_graphql_by_uri(
        &self,
        uri: Option<&str>,
        request_method: &str,
        batch_queries: &str,
        uri_max_length: &str,
        max_depth: &str,
        request_per_cycle: &str,
        request_delay: &str,
        operation: &str,
    ) -> Result<ApiResponse, Error> {
        let params = scan_params(
            None,
            uri,
            request_method,
            batch_queries,
            uri_max_length,
            max_depth,
            request_per_cycle,
            request_delay,
            operation,
        );
        self.api
            .call_api(COMPONENT, CATEGORY, "scanGraphQLByURI", &params)
    }
}

/// Builds the payload for both scan actions: the optional targeting fields
/// are inserted only when present, everything else is always sent verbatim,
/// empty strings included.
#[allow(clippy::too_many_arguments)]
fn scan_params(
    file: Option<&str>,
    uri: Option<&str>,
    request_method: &str,
    batch_queries: &str,
    uri_max_length: &str,
    max_depth: &str,
    request_per_cycle: &str,
    request_delay: &str,
    operation: &str,
) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if let Some(file) = file {
        params.insert(String::from("file"), String::from(file));
    }
    if let Some(uri) = uri {
        params.insert(String::from("uri"), String::from(uri));
    }
    params.insert(String::from("requestMethod"), String::from(request_method));
    params.insert(String::from("batchQueries"), String::from(batch_queries));
    params.insert(String::from("uriMaxLength"), String::from(uri_max_length));
    params.insert(String::from("maxDepth"), String::from(max_depth));
    params.insert(
        String::from("requestPerCycle"),
        String::from(request_per_cycle),
    );
    params.insert(String::from("requestDelay"), String::from(request_delay));
    params.insert(String::from("operation"), String::from(operation));
    params
}
