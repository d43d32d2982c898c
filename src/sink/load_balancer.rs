use async_trait::async_trait;
use log::warn;

use super::NotificationSink;
use crate::BackendSet;

/// Pushes the backend set to one or more load balancers as a concatenated
/// `server <address>:<port>;` directive list, POSTed to
/// `http://<endpoint>/upstream/backend`.
pub struct LoadBalancerPoolSink {
    client: reqwest::Client,
    endpoints: Vec<String>,
}

impl LoadBalancerPoolSink {
    pub fn new(endpoints: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    /// `server 10.0.0.1:9000;server 10.0.0.2:9000;`. Trailing semicolons,
    /// no other delimiter.
    pub(crate) fn render_directives(backends: &BackendSet) -> String {
        let mut body = String::new();
        for instance in backends.iter() {
            body.push_str(&format!("server {};", instance));
        }
        body
    }
}

#[async_trait]
impl NotificationSink for LoadBalancerPoolSink {
    fn name(&self) -> &'static str {
        "load-balancer"
    }

    /// Attempts every configured endpoint even after a failure, so that
    /// reachable balancers stay current while one is down. Success per
    /// endpoint is an HTTP status below 300.
    async fn apply(
        &self,
        backends: &BackendSet,
    ) -> bool {
        let body = Self::render_directives(backends);
        let mut all_ok = true;
        for endpoint in &self.endpoints {
            let url = format!("http://{}/upstream/backend", endpoint);
            match self.client.post(&url).body(body.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.as_u16() >= 300 {
                        warn!(
                            "Failed to pass backend list to load balancer {}. Status code {}",
                            endpoint, status
                        );
                        all_ok = false;
                    }
                }
                Err(e) => {
                    warn!("Failed to reach load balancer {}: {}", endpoint, e);
                    all_ok = false;
                }
            }
        }
        all_ok
    }
}
