//! HTTP client for the external-part candidate proxy.

use std::time::Duration;

use log::warn;

use crate::data::interface::{CandidateSource, PartCandidate};

/// Queries a candidate proxy over blocking HTTP.
///
/// The proxy is consulted for upstream/downstream inserts only and is
/// strictly best-effort: any transport or decode failure degrades to an
/// empty candidate list.
pub struct HttpCandidateSource {
    client: reqwest::blocking::Client,
}

impl HttpCandidateSource {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        HttpCandidateSource { client }
    }
}

impl Default for HttpCandidateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSource for HttpCandidateSource {
    fn fetch_candidates(
        &self,
        url: &str,
        insert_name: &str,
        breed_code: &str,
    ) -> Vec<PartCandidate> {
        let request = self
            .client
            .get(url)
            .query(&[("name", insert_name), ("breed", breed_code)]);
        match request.send().and_then(|response| response.error_for_status()) {
            Ok(response) => match response.json::<Vec<PartCandidate>>() {
                Ok(candidates) => candidates,
                Err(e) => {
                    warn!("candidate proxy at {} returned undecodable body: {}", url, e);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("candidate lookup for {} against {} failed: {}", insert_name, url, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::HttpCandidateSource;
    use crate::data::interface::CandidateSource;

    #[test]
    fn malformed_url_degrades_to_empty() {
        let source = HttpCandidateSource::new();
        assert!(source
            .fetch_candidates("not a url", "US_ADH1", "US")
            .is_empty());
    }
}
