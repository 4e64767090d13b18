//! HTTP exchange types for the todos fetch.
//!
//! # Design
//! Requests and responses are described as plain data. `TodoClient` builds
//! the `HttpRequest` and parses the `HttpResponse`; only `Fetcher` touches
//! the network in between. Keeping the parse half free of I/O lets the
//! status, decode and schema rules be tested with literal responses.

/// An outbound GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// A fully-read HTTP response described as plain data.
///
/// The body is kept as raw bytes; it is only interpreted by
/// [`crate::fetch::decode_response`].
///
/// Produced by [`crate::fetch::Fetcher::execute`] or constructed by hand in
/// tests, then handed to [`crate::TodoClient::parse_list_todos`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
