use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use planar_core::encode::{encode_preview_png, PreviewError};
use planar_core::{convert_png, Artifacts, ConvertError};
use thiserror::Error;

use crate::args::Args;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to convert {}: {source}", path.display())]
    Convert { path: PathBuf, source: ConvertError },

    #[error(transparent)]
    Preview(#[from] PreviewError),
}

/// Paths of the files written by a run.
#[derive(Debug)]
pub struct Written {
    pub header: PathBuf,
    pub source: PathBuf,
    pub preview: Option<PathBuf>,
}

pub fn run(args: &Args) -> Result<Written, CliError> {
    log::info!("Reading {}", args.input.display());
    let bytes = fs::read(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;

    let artifacts = convert_png(&bytes, &args.convert_options()).map_err(|source| {
        CliError::Convert {
            path: args.input.clone(),
            source,
        }
    })?;

    log::info!(
        "{}x{}: {} tiles, {} bytes, {} colors",
        artifacts.tileset.width,
        artifacts.tileset.height,
        artifacts.tileset.tile_count(),
        artifacts.tileset.tiles.len() + artifacts.tileset.linear.len(),
        artifacts.tileset.palette.len()
    );

    let (header, source) = write_artifacts(&artifacts, &args.include_dir, &args.source_dir)?;

    let preview = match &args.preview {
        Some(path) => {
            let png = encode_preview_png(&artifacts.tileset)?;
            write_file(path, &png)?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(Written {
        header,
        source,
        preview,
    })
}

/// Write the declaration into `include_dir` and the definition into
/// `source_dir`, creating the directories if needed.
pub fn write_artifacts(
    artifacts: &Artifacts,
    include_dir: &Path,
    source_dir: &Path,
) -> Result<(PathBuf, PathBuf), CliError> {
    let header = include_dir.join(&artifacts.header_name);
    let source = source_dir.join(&artifacts.source_name);

    write_file(&header, artifacts.header.as_bytes())?;
    write_file(&source, artifacts.source.as_bytes())?;

    Ok((header, source))
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), CliError> {
    let to_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, contents).map_err(to_error)?;

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
