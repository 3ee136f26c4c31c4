//! Request helpers shared by the commands of the [`files`](crate::files) module

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};

use crate::Error;

impl crate::Client {
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let uri = self.build_url(endpoint);
        tracing::debug!("calling {method} {uri}");
        self.inner
            .request(method, uri)
            .header(AUTHORIZATION, self.credentials.header_value())
    }

    #[tracing::instrument(name = "get", skip(self))]
    pub(crate) async fn get_request(
        &self,
        endpoint: &str,
        path: Option<&str>,
    ) -> Result<Response, Error> {
        let mut req = self.request(Method::GET, endpoint);
        if let Some(path) = path {
            req = req.query(&[("path", path)]);
        }
        Ok(req.send().await?)
    }

    #[tracing::instrument(name = "delete", skip(self))]
    pub(crate) async fn delete_request(
        &self,
        endpoint: &str,
        path: Option<&str>,
    ) -> Result<Response, Error> {
        let mut req = self.request(Method::DELETE, endpoint);
        if let Some(path) = path {
            req = req.query(&[("path", path)]);
        }
        Ok(req.send().await?)
    }

    #[tracing::instrument(name = "post", skip(self, form))]
    pub(crate) async fn post_request_multipart(
        &self,
        endpoint: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response, Error> {
        let res = self
            .request(Method::POST, endpoint)
            .multipart(form)
            .send()
            .await?;
        Ok(res)
    }

    #[tracing::instrument(name = "post", skip(self, payload))]
    pub(crate) async fn post_request_json<P: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &P,
    ) -> Result<Response, Error> {
        let res = self
            .request(Method::POST, endpoint)
            .json(payload)
            .send()
            .await?;
        Ok(res)
    }
}

/// Turns any non success response into an [`Error::Protocol`](crate::Error::Protocol).
pub(crate) async fn ensure_success(
    operation: &'static str,
    res: Response,
) -> Result<Response, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if status.is_success() {
        Ok(res)
    } else {
        let message = res.text().await.unwrap_or_default();
        Err(Error::Protocol {
            operation,
            status,
            message,
        })
    }
}

pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(res: Response) -> Result<T, Error> {
    let body = res.bytes().await?;
    serde_json::from_slice(&body).map_err(Error::from)
}
