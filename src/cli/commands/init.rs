//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "clientbook.toml")]
    pub output: String,

    /// Include comments explaining every setting
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Clientbook configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set CLIENTBOOK_DATABASE_URL in your environment or a .env file");
                println!("  3. Validate configuration: clientbook validate-config");
                println!("  4. Start the API: clientbook serve");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Clientbook Configuration File

[application]
log_level = "info"

[server]
host = "0.0.0.0"
port = 8000

[postgresql]
connection_string = "${CLIENTBOOK_DATABASE_URL}"
max_connections = 10

[import]
sheet_name = "Clientes"
max_file_size_mb = 10

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Clientbook Configuration File
#
# Every value below can be overridden with CLIENTBOOK_<SECTION>_<KEY>,
# for example CLIENTBOOK_SERVER_PORT=9000.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# HTTP Server
# ============================================================================
[server]
# Interface to bind
host = "0.0.0.0"

# TCP port
port = 8000

# ============================================================================
# PostgreSQL
# ============================================================================
[postgresql]
# Connection string format: postgresql://[user[:password]@][host][:port][/dbname]
# The clients table is created on startup if it does not exist.
connection_string = "${CLIENTBOOK_DATABASE_URL}"

# Maximum connections in pool (1-100)
max_connections = 10

# Timeout for acquiring a connection
connection_timeout_seconds = 30

# Timeout for SQL statement execution
statement_timeout_seconds = 60

# ============================================================================
# Spreadsheet Import
# ============================================================================
[import]
# Sheet holding the client rows (case-sensitive)
sheet_name = "Clientes"

# Largest accepted upload in megabytes (1-512)
max_file_size_mb = 10

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable JSON log files in addition to console output
local_enabled = false

# Log directory
local_path = "./logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}
