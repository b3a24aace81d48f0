use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};
use galeria_core::{LikeError, LikeRequest, LikeResponse};
use gloo::net::http::{Method, Request, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::RequestCredentials;

/// Sends a like request and yields the decoded payload.
pub type LikeTransport =
    Rc<dyn Fn(LikeRequest) -> LocalBoxFuture<'static, Result<LikeResponse, LikeError>>>;

pub fn fetch_transport() -> LikeTransport {
    Rc::new(|request: LikeRequest| send_like(request).boxed_local())
}

/// Turns a like request into a same-origin fetch with its headers applied.
pub fn build_request(request: &LikeRequest) -> Result<Request, LikeError> {
    let method = Method::from_bytes(request.method.as_bytes())
        .map_err(|err| LikeError::Transport(err.to_string()))?;
    let mut builder = RequestBuilder::new(&request.path)
        .method(method)
        .credentials(RequestCredentials::SameOrigin);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    builder
        .build()
        .map_err(|err| LikeError::Transport(err.to_string()))
}

/// The status code is not inspected; error answers still carry a json body.
pub async fn send_like(request: LikeRequest) -> Result<LikeResponse, LikeError> {
    let response = build_request(&request)?
        .send()
        .await
        .map_err(|err| LikeError::Transport(err.to_string()))?;
    let body = response
        .text()
        .await
        .map_err(|err| LikeError::Transport(err.to_string()))?;
    LikeResponse::from_json(&body)
}

pub fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
