use crate::core::constants::RELAY_ENDPOINT;
use crate::core::{RelayConfig, RelayError, RelayRequest, TemplateParams};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn transport(e: JsValue) -> RelayError {
    RelayError::Transport(format!("{:?}", e))
}

/// POST the template parameters to the email relay.
pub async fn send(config: &RelayConfig, params: TemplateParams) -> Result<(), RelayError> {
    let body = RelayRequest::new(config, params).to_json()?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_mode(web::RequestMode::Cors);
    init.set_body(&JsValue::from_str(&body));

    let request = web::Request::new_with_str_and_init(RELAY_ENDPOINT, &init).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let window = web::window().ok_or_else(|| RelayError::Transport("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: web::Response = response.dyn_into().map_err(transport)?;

    if !response.ok() {
        return Err(RelayError::Status {
            status: response.status(),
        });
    }
    Ok(())
}
