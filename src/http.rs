//! Browser Transport
//!
//! `fetch`-backed implementation of the core [`Transport`].

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use tracker_core::{ApiError, HttpRequest, HttpResponse, Transport};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::request_failed("window not available"))?;

        let headers = Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", HttpRequest::CONTENT_TYPE)
            .map_err(js_error)?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_mode(RequestMode::Cors);
        init.set_headers(&headers);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let req = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
        let resp = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?;
        let resp: Response = resp.dyn_into().map_err(js_error)?;

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpResponse::new(resp.status(), text.as_string().unwrap_or_default()))
    }
}

/// Turn a rejected promise or thrown JS value into a request failure.
fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::request_failed(message)
}
