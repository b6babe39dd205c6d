//! Bound HTTP resource handles.
//!
//! A [`ResourceFactory`] owns the `ureq` agent and hands out [`Resource`]s, each
//! bound to one absolute URL. Binding is pure construction: nothing touches the
//! network until a request method is called, and a malformed URL only shows up
//! then as a transport error.
//!
//! Resources log at `TRACE` only, the minimum verbosity, so wire chatter stays
//! out of the way under any ordinary filter.

use crate::error::{DirectoryError, DirectoryResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::xml::{Representation, XML_MEDIA_TYPE};
use std::time::Duration;

/// Builds resource handles that share one HTTP agent and one metrics collector.
#[derive(Clone)]
pub struct ResourceFactory {
    agent: ureq::Agent,
    metrics: Metrics,
}

impl ResourceFactory {
    /// Create a factory. With `timeout` unset the agent keeps `ureq`'s defaults.
    pub fn new(timeout: Option<Duration>, metrics: Metrics) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            metrics,
        }
    }

    /// Bind a handle to `url`. Never fails and performs no I/O.
    pub fn bind(&self, url: impl Into<String>) -> Resource {
        Resource {
            url: url.into(),
            agent: self.agent.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

/// A successful (2xx) response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Representation,
}

/// A handle bound to a single endpoint.
#[derive(Clone)]
pub struct Resource {
    url: String,
    agent: ureq::Agent,
    metrics: Metrics,
}

impl Resource {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn get(&self) -> DirectoryResult<Reply> {
        self.send("GET", None)
    }

    pub fn post(&self, body: &Representation) -> DirectoryResult<Reply> {
        self.send("POST", Some(body))
    }

    pub fn delete(&self) -> DirectoryResult<Reply> {
        self.send("DELETE", None)
    }

    /// Run one exchange; anything outside the 2xx class is an error.
    fn send(&self, method: &str, body: Option<&Representation>) -> DirectoryResult<Reply> {
        let timer = HttpTimer::new(self.metrics.clone());
        tracing::trace!(method = %method, url = %self.url, "Sending request");

        let request = self
            .agent
            .request(method, &self.url)
            .set("Accept", XML_MEDIA_TYPE);

        let response = match body {
            Some(representation) => request
                .set("Content-Type", representation.media_type())
                .send_string(representation.as_str()),
            None => request.call(),
        };

        let result = response.map_err(|e| self.map_error(e)).and_then(read_reply);

        match &result {
            Ok(reply) => {
                tracing::trace!(method = %method, url = %self.url, status = reply.status, "Request succeeded");
                timer.complete();
            }
            Err(e) => {
                tracing::trace!(method = %method, url = %self.url, error = %e, "Request failed");
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a DirectoryError.
    fn map_error(&self, error: ureq::Error) -> DirectoryError {
        match error {
            ureq::Error::Status(status, response) => DirectoryError::Protocol {
                status,
                message: response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string()),
            },
            ureq::Error::Transport(transport) => DirectoryError::Transport(transport.to_string()),
        }
    }
}

/// Read the body, rejecting statuses `ureq` let through (1xx, unfollowed 3xx).
fn read_reply(response: ureq::Response) -> DirectoryResult<Reply> {
    let status = response.status();
    let body = response
        .into_string()
        .map_err(|e| DirectoryError::Transport(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(DirectoryError::Protocol {
            status,
            message: body,
        });
    }

    Ok(Reply {
        status,
        body: Representation::new(body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_keeps_url_and_does_no_io() {
        let metrics = Metrics::new();
        let factory = ResourceFactory::new(None, metrics.clone());

        let resource = factory.bind("http://localhost:8888/agenda/contatos");
        assert_eq!(resource.url(), "http://localhost:8888/agenda/contatos");
        assert_eq!(metrics.http_requests_total(), 0);
    }

    #[test]
    fn test_malformed_url_fails_on_request() {
        let metrics = Metrics::new();
        let factory = ResourceFactory::new(Some(Duration::from_secs(1)), metrics.clone());

        let resource = factory.bind("not a url");
        match resource.get() {
            Err(DirectoryError::Transport(_)) => {}
            other => panic!("Expected Transport error, got: {:?}", other),
        }
        assert_eq!(metrics.http_errors_total(), 1);
    }
}
