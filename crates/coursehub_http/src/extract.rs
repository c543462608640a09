//! Request extractors whose rejections render as `ApiError`.

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;

/// JSON body; malformed or non-JSON bodies become 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Numeric path id; anything that does not parse becomes 404.
///
/// `via(Path)` deserializes the whole struct, so it must read as a bare `i64`.
#[derive(Debug, Deserialize, FromRequestParts)]
#[serde(transparent)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct IdPath(pub i64);
