use crate::constant::log::*;
use crate::constant::util::get_snippet;
use crate::default_config;
use crate::jenkins::jenkins_endpoint::get_crumb::GetCrumb;
use crate::jenkins::jenkins_model::crumb::Crumb;
use crate::jenkins::query::{RawResponse, VerifierClient};
use base64::Engine;
use formatx::formatx;
use jenkins_sdk::client::AsyncClient;
use jenkins_sdk::{AsyncQuery, JenkinsError};
use reqwest::header::{HeaderValue, AUTHORIZATION, LOCATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

/// Asynchronous Jenkins API client authentic by username and api token.
pub struct VerifierJenkinsClient {
    url: String,
    username: String,
    api_token: String,
    client: Client,
    crumb: Option<Crumb>,
}

impl VerifierJenkinsClient {
    /// Creates a new asynchronous Jenkins API client.
    ///
    /// # Arguments
    ///
    /// * `url` - Base URL of the Jenkins server. A trailing `/` is dropped.
    /// * `username` - Username for authentication.
    /// * `api_token` - Api token for authentication.
    pub fn new(url: &str, username: &str, api_token: &str) -> Result<Self, JenkinsError> {
        let client = Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(true)
            .no_proxy()
            .connect_timeout(Duration::from_secs(default_config::HTTP_CONNECT_TIMEOUT))
            .timeout(Duration::from_secs(default_config::HTTP_REQUEST_TIMEOUT))
            .build()
            .map_err(|e| {
                JenkinsError::RequestError(
                    formatx!(ERR_JENKINS_CLIENT_BUILD_FAILED, e.to_string()).unwrap_or_default(),
                )
            })?;

        Ok(Self {
            url: url.trim_end_matches('/').into(),
            username: username.into(),
            api_token: api_token.into(),
            client,
            crumb: None,
        })
    }

    /// Fetch a CSRF crumb and send it with every following request.
    ///
    /// The crumb issuer is disabled on some servers, callers may ignore the error.
    pub async fn attach_crumb(&mut self) -> Result<(), JenkinsError> {
        self.crumb = Some(AsyncQuery::<Crumb>::query(&GetCrumb, self).await?);
        Ok(())
    }

    fn authorization(&self) -> String {
        format!(
            "Basic {}",
            base64::prelude::BASE64_STANDARD
                .encode(format!("{}:{}", self.username, self.api_token).as_bytes())
        )
    }

    fn build_request(&self, method: &str, url: &str) -> Result<RequestBuilder, JenkinsError> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|e| JenkinsError::RequestError(e.to_string()))?;

        let mut req = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, self.authorization())
            .header(USER_AGENT, "jenkins-sdk-rust");

        if let Some(ref crumb) = self.crumb {
            req = req.header(
                crumb.crumb_request_field.clone(),
                HeaderValue::from_str(&crumb.crumb)
                    .map_err(|e| JenkinsError::RequestError(e.to_string()))?,
            );
        }

        Ok(req)
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.url, endpoint.trim_start_matches('/'))
    }
}

fn http_status_error(status: u16, url: &str, body: &str) -> JenkinsError {
    JenkinsError::RequestError(
        formatx!(
            ERR_HTTP_STATUS,
            status,
            url,
            get_snippet(body, default_config::HTTP_ERROR_SNIPPET_LEN)
        )
        .unwrap_or_default(),
    )
}

#[async_trait::async_trait]
impl AsyncClient for VerifierJenkinsClient {
    /// Sends an asynchronous HTTP request to the Jenkins server.
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<String, JenkinsError> {
        let url = self.endpoint_url(endpoint);
        let req = self.build_request(method, &url)?;

        let resp = if let Some(p) = params {
            req.form(&p).send().await?
        } else {
            req.send().await?
        };

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(http_status_error(status.as_u16(), &url, &text));
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl VerifierClient for VerifierJenkinsClient {
    fn base_url(&self) -> &str {
        &self.url
    }

    async fn request_location(
        &self,
        method: &str,
        endpoint: &str,
    ) -> Result<Option<String>, JenkinsError> {
        let url = self.endpoint_url(endpoint);
        let resp = self.build_request(method, &url)?.send().await?;

        let status = resp.status();
        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(http_status_error(status.as_u16(), &url, &text));
        }

        Ok(location)
    }

    async fn download(&self, url: &str) -> Result<RawResponse, JenkinsError> {
        let resp = self.build_request("GET", url)?.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }
}
