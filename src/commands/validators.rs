pub fn validate_variable_key(key: &str) -> Result<String, String> {
    if key.trim().is_empty() {
        return Err("Variable key must not be blank".to_string());
    }
    Ok(key.to_string())
}

pub fn validate_authority(url: &str) -> Result<String, String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(format!("Authority must start with http:// or https://: {url}"))
    }
}
