//! Identity extraction from inbound HTTP headers.
//!
//! Header names are matched case-insensitively, so `BK_User` and `bk_user`
//! are the same header.

use http::{HeaderMap, HeaderName, header::AUTHORIZATION};

use crate::context::{SecurityContext, SecurityContextBuilder};

/// Principal name of the caller.
pub const USER: HeaderName = HeaderName::from_static("bk_user");
/// Owner/tenant account the caller acts in.
pub const SUPPLIER_ACCOUNT: HeaderName = HeaderName::from_static("http_blueking_supplier_id");
/// Request correlation id.
pub const REQUEST_ID: HeaderName = HeaderName::from_static("cc_request_id");

const BEARER_PREFIX: &str = "Bearer ";

impl SecurityContext {
    /// Build a context from the caller's headers.
    ///
    /// Missing or non-UTF-8 values fall back to the builder defaults: an empty
    /// principal, the default supplier account and a generated request id.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        from_headers_with(headers, SecurityContext::builder()).build()
    }
}

/// Like [`SecurityContext::from_headers`], starting from an existing builder
/// (e.g. one that already carries the caller's cancellation token).
#[must_use]
pub fn from_headers_with(
    headers: &HeaderMap,
    mut builder: SecurityContextBuilder,
) -> SecurityContextBuilder {
    if let Some(user) = header_str(headers, &USER) {
        builder = builder.user(user);
    }
    if let Some(account) = header_str(headers, &SUPPLIER_ACCOUNT) {
        builder = builder.supplier_account(account);
    }
    if let Some(rid) = header_str(headers, &REQUEST_ID) {
        builder = builder.request_id(rid);
    }
    if let Some(token) =
        header_str(headers, &AUTHORIZATION).and_then(|v| v.strip_prefix(BEARER_PREFIX))
    {
        builder = builder.bearer_token(token.to_owned());
    }
    builder
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
