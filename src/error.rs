// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::transport::BoxError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for the client.
///
/// Transport-level failures (connection refused, timeout) are carried
/// through from the transport capability untranslated; everything else is
/// produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The OAuth token endpoint answered with an `error` field. Never
    /// retried automatically: authorization codes are single use.
    #[error("token endpoint rejected the request: {0}")]
    OAuth(String),

    /// A resource call came back with a non-success HTTP status.
    #[error("api call failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Arithmetic between amounts denominated in different currencies.
    #[error("cannot combine amounts in {left} and {right}")]
    CurrencyMismatch { left: String, right: String },

    /// A timestamp field did not parse as RFC3339.
    #[error("malformed timestamp in `{field}`: {value:?}")]
    MalformedTimestamp { field: String, value: String },

    /// A required field was absent or null in a response payload.
    #[error("missing required field `{0}`")]
    MissingField(String),

    #[error("{0}")]
    Transport(BoxError),

    #[error("invalid json in response body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<BoxError> for Error {
    fn from(err: BoxError) -> Self {
        Error::Transport(err)
    }
}
