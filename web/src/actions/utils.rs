use base64::Engine;
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::AppError;

pub fn get_param<T: FromStr>(params: &HashMap<String, String>, key: &str) -> Result<T, AppError> {
    params
        .get(key)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing '{key}' parameter")))?
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid '{key}' parameter")))
}

/// The password from a POST body; blank counts as missing.
pub fn require_password(password: Option<String>) -> Result<String, AppError> {
    password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing 'password' in request body".into()))
}

pub fn decode_signed_tx(encoded: &str) -> Result<Vec<u8>, AppError> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
    if bytes.is_empty() {
        return Err(AppError::BadRequest("Signed transaction is empty".into()));
    }
    Ok(bytes)
}

/// Detail page a recipient opens to claim.
pub fn share_link(base_url: &str, id: u64) -> String {
    format!("{}/redpacket/{id}", base_url.trim_end_matches('/'))
}
