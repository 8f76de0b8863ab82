//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ClientbookConfig;
use super::secret::secret_string;
use crate::domain::errors::ClientbookError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ClientbookConfig
/// 4. Applies environment variable overrides (CLIENTBOOK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use clientbook::config::loader::load_config;
///
/// let config = load_config("clientbook.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ClientbookConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ClientbookError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ClientbookError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML text
///
/// Same pipeline as [`load_config`], minus the file read.
pub fn load_config_from_str(contents: &str) -> Result<ClientbookConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: ClientbookConfig = toml::from_str(&contents)
        .map_err(|e| ClientbookError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ClientbookError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ClientbookError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ClientbookError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using CLIENTBOOK_* prefix
///
/// Environment variables follow the pattern: CLIENTBOOK_<SECTION>_<KEY>,
/// for example CLIENTBOOK_SERVER_PORT or CLIENTBOOK_POSTGRESQL_CONNECTION_STRING.
/// Unparseable numeric values are ignored.
fn apply_env_overrides(config: &mut ClientbookConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("CLIENTBOOK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Server overrides
    if let Ok(val) = std::env::var("CLIENTBOOK_SERVER_HOST") {
        config.server.host = val;
    }
    if let Ok(val) = std::env::var("CLIENTBOOK_SERVER_PORT") {
        if let Ok(port) = val.parse() {
            config.server.port = port;
        }
    }

    // PostgreSQL overrides
    if let Ok(val) = std::env::var("CLIENTBOOK_POSTGRESQL_CONNECTION_STRING") {
        config.postgresql.connection_string = secret_string(val);
    }
    if let Ok(val) = std::env::var("CLIENTBOOK_POSTGRESQL_MAX_CONNECTIONS") {
        if let Ok(max) = val.parse() {
            config.postgresql.max_connections = max;
        }
    }

    // Import overrides
    if let Ok(val) = std::env::var("CLIENTBOOK_IMPORT_SHEET_NAME") {
        config.import.sheet_name = val;
    }
    if let Ok(val) = std::env::var("CLIENTBOOK_IMPORT_MAX_FILE_SIZE_MB") {
        if let Ok(size) = val.parse() {
            config.import.max_file_size_mb = size;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CLIENTBOOK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CLIENTBOOK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
