//! Subcommand handlers for generate and config actions.

use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::code::{normalize, CODE_LENGTH};
use crate::config::{default_path, Config, DEFAULT_CONFIG};
use crate::encoder::{CodeEncoder, EncodeError, RenderOptions};
use crate::export::{self, ExportError};
use crate::validation::{validate, FormError};

/// Errors reported by subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid code '{code}': {reason}")]
    InvalidCode { code: String, reason: FormError },

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("Failed to write config file '{}': {}", .path.display(), .source)]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Normalize, validate and encode `raw`, then write the PNG.
///
/// Writes to `output` when given, otherwise to `<CODE>.png` in `export_dir`.
/// Returns the path written.
pub async fn generate(
    raw: &str,
    output: Option<&Path>,
    export_dir: &Path,
    encoder: &dyn CodeEncoder,
) -> Result<PathBuf, CommandError> {
    let code = normalize(raw);
    if code != raw {
        log::info!("Normalized input {:?} to {:?}", raw, code);
    }

    let validation = validate(&code);
    if !validation.is_valid {
        // an empty code has no inline error, but is still not encodable
        let reason = validation.error.unwrap_or(FormError::IncompleteInput {
            current: 0,
            required: CODE_LENGTH,
        });
        return Err(CommandError::InvalidCode { code, reason });
    }

    let artifact = encoder.encode(code, RenderOptions::STANDARD).await?;
    let path = match output {
        Some(path) => export::write_png_to(&artifact, path)?,
        None => export::write_png(&artifact, export_dir)?,
    };
    Ok(path)
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
    config: &Config,
) -> Result<(), CommandError> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!(
                "  Status bar: {}",
                if config.ui.status_bar { "yes" } else { "no" }
            );
            println!("  Export directory: {}", config.export.directory().display());
            let options = RenderOptions::STANDARD;
            println!(
                "  Rendering: {}px, margin {} modules, black on white (fixed)",
                options.width, options.margin
            );
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(CommandError::ConfigExists(config_path));
            }

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| CommandError::ConfigWrite {
                    path: config_path.clone(),
                    source: e,
                })?;
            }

            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| CommandError::ConfigWrite {
                path: config_path.clone(),
                source: e,
            })?;

            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}
