use crate::core::error::{PmTokenError, VariableSetName};
use crate::postman::{read_variable_set, VariableSet};
use std::path::Path;

/// Globals keys holding the Azure AD app registration details.
pub const TENANT_ID_KEY: &str = "AzureTenantId";
pub const CLIENT_ID_KEY: &str = "AzureClientId";
pub const CLIENT_SECRET_KEY: &str = "AzureSecret";

/// Everything needed for a client credentials token request.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSettings {
    pub resource_uri: String,
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Collects auth settings from the environment and globals variable sets.
///
/// The resource URI comes from the environment under the caller-chosen key;
/// tenant, client id and secret come from the globals file under fixed keys.
/// Resolution is fail-fast in that order, so a missing resource key is
/// reported before the globals file is even opened.
pub fn resolve_auth_settings(
    environment: &VariableSet,
    globals_path: &Path,
    resource_uri_variable_key: &str,
) -> Result<AuthSettings, PmTokenError> {
    let resource_uri = require_value(
        environment,
        VariableSetName::Environment,
        resource_uri_variable_key,
    )?;

    let globals = read_variable_set(globals_path)?;
    let tenant_id = require_value(&globals, VariableSetName::Globals, TENANT_ID_KEY)?;
    let client_id = require_value(&globals, VariableSetName::Globals, CLIENT_ID_KEY)?;
    let client_secret = require_value(&globals, VariableSetName::Globals, CLIENT_SECRET_KEY)?;

    Ok(AuthSettings {
        resource_uri,
        tenant_id,
        client_id,
        client_secret,
    })
}

fn require_value(
    set: &VariableSet,
    name: VariableSetName,
    key: &str,
) -> Result<String, PmTokenError> {
    set.get(key)
        .map(|v| v.value.clone())
        .ok_or_else(|| PmTokenError::MissingVariable(name, key.to_string()))
}
