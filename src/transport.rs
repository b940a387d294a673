// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The HTTP capability the client consumes. The core never opens sockets
//! itself; it hands a fully-resolved request to an `HttpTransport` and
//! gets back a status plus the raw body text. Timeouts, TLS and redirects
//! live behind this seam.

use crate::error::Result;
use reqwest::{Method, Url};
use std::time::Duration;

const UA: &str = concat!(
    "mondoclip/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/mondoclip)"
);

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One outbound call, URL and query already encoded. `form` is sent
/// form-urlencoded as the request body when present.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub form: Option<Vec<(String, String)>>,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, BoxError>;
}

/// Default transport over a blocking reqwest client.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<ReqwestTransport> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(UA)
            .build()
            .map_err(|e| crate::error::Error::Transport(e.into()))?;
        Ok(ReqwestTransport { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> std::result::Result<HttpResponse, BoxError> {
        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(form) = &request.form {
            builder = builder.form(form);
        }
        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}
