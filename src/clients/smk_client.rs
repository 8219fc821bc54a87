use gateway_framework::{ForwardError, ForwardRequest, ForwardResponse, Forwarder, QueryParams};
use tracing::{debug, instrument};

/// Client for the SMK (Statens Museum for Kunst) art search API.
#[derive(Clone)]
pub struct SmkClient {
    forwarder: Forwarder,
    base_url: String,
}

impl SmkClient {
    pub fn new(forwarder: Forwarder, smk_api_url: impl Into<String>) -> Self {
        let base_url: String = smk_api_url.into();
        Self {
            forwarder,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    #[instrument(skip(self))]
    pub async fn search(&self, params: QueryParams) -> Result<ForwardResponse, ForwardError> {
        debug!("Sending request");
        self.forwarder
            .forward(ForwardRequest::get(self.search_url()).with_params(params))
            .await
    }
}
