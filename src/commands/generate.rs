use crate::auth;
use crate::commands::validators;
use crate::core::error::PmTokenError;
use crate::core::logger::Logger;
use crate::postman;
use clap::Args;
use std::path::{Path, PathBuf};

/// Where the merged environment lands, relative to the working directory.
pub const OUTPUT_PATH: &str = "scripts/generated/environment-with-token.json";

const DEFAULT_GLOBALS_FILENAME: &str = "workspace.postman_globals.json";

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(
        value_name = "ENVIRONMENT_FILE",
        help = "Path to the Postman environment JSON file"
    )]
    pub environment_file: PathBuf,

    #[arg(
        short = 'r',
        long = "resource-uri-variable-key",
        value_name = "KEY",
        help = "Environment variable key holding the resource URI to request a token for",
        value_parser = validators::validate_variable_key
    )]
    pub resource_uri_variable_key: String,

    #[arg(
        short = 'g',
        long = "globals",
        value_name = "FILE",
        default_value = DEFAULT_GLOBALS_FILENAME,
        help = "Path to the Postman globals JSON file holding the Azure AD settings"
    )]
    pub globals_file: PathBuf,

    #[arg(
        short = 'a',
        long = "authority",
        value_name = "URL",
        default_value = auth::DEFAULT_AUTHORITY,
        help = "Azure AD authority base URL",
        value_parser = validators::validate_authority
    )]
    pub authority: String,
}

pub async fn execute(args: &GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    Logger::debug(&format!(
        "environment file: {}",
        args.environment_file.display()
    ));
    Logger::debug(&format!("globals file: {}", args.globals_file.display()));
    Logger::debug(&format!(
        "resource uri variable key: {}",
        args.resource_uri_variable_key
    ));

    let mut environment = postman::read_variable_set(&args.environment_file)?;
    let settings = auth::resolve_auth_settings(
        &environment,
        &args.globals_file,
        &args.resource_uri_variable_key,
    )?;

    let token = auth::acquire_token(&args.authority, &settings)
        .await
        .map_err(PmTokenError::from)?;
    Logger::info(&format!(
        "Client credentials token generated via the OAuth endpoint. Token expires in {} minutes.",
        token.expires_in_minutes()
    ));

    let output_path = Path::new(OUTPUT_PATH);
    postman::merge_and_write(&mut environment, output_path, &token.access_token)?;
    Logger::info(&format!(
        "Created {} with the token variable set.",
        output_path.display()
    ));

    Ok(())
}
