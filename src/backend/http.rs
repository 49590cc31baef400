//! Fetch Transport
//!
//! Thin wrapper over the browser `fetch` API.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{TodoError, TodoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn json_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self.header("Content-Type", "application/json")
    }
}

fn js_error(e: JsValue) -> TodoError {
    TodoError::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Send a request; non-2xx responses become [`TodoError::Service`].
pub async fn send(request: HttpRequest) -> TodoResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let js_request = Request::new_with_str_and_init(&request.url, &opts).map_err(js_error)?;
    for (name, value) in &request.headers {
        js_request.headers().set(name, value).map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| TodoError::Transport("no window".into()))?;
    let value = JsFuture::from(window.fetch_with_request(&js_request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = read_text(&response).await.unwrap_or_default();
    let err = service_error(status, &body);
    log::warn!("[HTTP] {} {} failed: {}", request.method.as_str(), request.url, err);
    Err(err)
}

/// Decode a JSON body
pub async fn read_json<T: DeserializeOwned>(response: &Response) -> TodoResult<T> {
    let promise = response.json().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    Ok(serde_wasm_bindgen::from_value(value)?)
}

async fn read_text(response: &Response) -> TodoResult<String> {
    let promise = response.text().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    Ok(value.as_string().unwrap_or_default())
}

/// Error payload shapes of the data API (`message`) and the auth API
/// (`msg` or `error_description`)
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

pub fn service_error(status: u16, body: &str) -> TodoError {
    let payload: ErrorPayload = serde_json::from_str(body).unwrap_or_default();
    let message = payload
        .message
        .or(payload.msg)
        .or(payload.error_description)
        .or(payload.error)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "request failed".to_string()
            } else {
                trimmed.to_string()
            }
        });
    TodoError::Service { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_from_rest_payload() {
        let body = r#"{"code":"42501","details":null,"hint":null,"message":"permission denied for table todos"}"#;
        assert_eq!(
            service_error(403, body),
            TodoError::Service {
                status: 403,
                message: "permission denied for table todos".into()
            }
        );
    }

    #[test]
    fn test_service_error_from_auth_payload() {
        let body = r#"{"code":401,"msg":"invalid JWT"}"#;
        assert_eq!(
            service_error(401, body),
            TodoError::Service { status: 401, message: "invalid JWT".into() }
        );

        let body = r#"{"error":"invalid_grant","error_description":"Invalid Refresh Token"}"#;
        assert_eq!(
            service_error(400, body),
            TodoError::Service { status: 400, message: "Invalid Refresh Token".into() }
        );
    }

    #[test]
    fn test_service_error_from_plain_body() {
        assert_eq!(
            service_error(502, "Bad Gateway\n"),
            TodoError::Service { status: 502, message: "Bad Gateway".into() }
        );
        assert_eq!(
            service_error(500, ""),
            TodoError::Service { status: 500, message: "request failed".into() }
        );
    }

    #[test]
    fn test_request_builder() {
        let request = HttpRequest::new(Method::Patch, "https://x/rest/v1/todos".into())
            .header("apikey", "k")
            .json_body(r#"{"name":"a"}"#.into());
        assert_eq!(request.method.as_str(), "PATCH");
        assert_eq!(request.body.as_deref(), Some(r#"{"name":"a"}"#));
        assert_eq!(
            request.headers,
            vec![("apikey", "k".to_string()), ("Content-Type", "application/json".to_string())]
        );
    }
}
