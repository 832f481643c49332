use gloo_net::http::Request;
use thiserror::Error;
use web_sys::FormData;

use super::{LeadPayload, RelayResponse};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("could not build multipart body")]
    FormBody,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable relay response: {0}")]
    Decode(String),
}

fn form_data(payload: &LeadPayload) -> Result<FormData, RelayError> {
    let form = FormData::new().map_err(|_| RelayError::FormBody)?;
    for (name, value) in payload.fields() {
        form.append_with_str(name, value)
            .map_err(|_| RelayError::FormBody)?;
    }
    Ok(form)
}

/// Posts one lead to the relay. The status code is not inspected: the relay
/// reports rejections in the JSON body.
pub async fn send_lead(endpoint: &str, payload: &LeadPayload) -> Result<RelayResponse, RelayError> {
    let body = form_data(payload)?;
    log::debug!("Posting lead to {}", endpoint);

    let response = Request::post(endpoint)
        .body(body)
        .send()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    response
        .json::<RelayResponse>()
        .await
        .map_err(|e| RelayError::Decode(e.to_string()))
}
