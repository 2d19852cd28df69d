use std::path::PathBuf;

use clap::Parser;
use planar_core::emit::{DEFAULT_PREFIX, DEFAULT_QUALIFIER};
use planar_core::{ConvertOptions, Validation};

/// Convert an indexed PNG into 4bpp planar tiles and a 12-bit palette as C source.
#[derive(Debug, Parser)]
#[command(name = "png2planar", version)]
pub struct Args {
    /// Input indexed PNG
    pub input: PathBuf,

    /// Name of the generated arrays and files
    #[arg(default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Directory for the generated header
    #[arg(long, default_value = "include")]
    pub include_dir: PathBuf,

    /// Directory for the generated definition file
    #[arg(long, default_value = "src")]
    pub source_dir: PathBuf,

    /// Storage qualifier written after the element type
    #[arg(long, default_value = DEFAULT_QUALIFIER, conflicts_with = "no_qualifier")]
    pub qualifier: String,

    /// Omit the storage qualifier
    #[arg(long, default_value_t = false)]
    pub no_qualifier: bool,

    /// Reject images that would be truncated instead of warning
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Also write a PNG preview of the encoded tiles
    #[arg(long, value_name = "PATH")]
    pub preview: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            prefix: self.prefix.clone(),
            qualifier: if self.no_qualifier {
                String::new()
            } else {
                self.qualifier.clone()
            },
            validation: if self.strict {
                Validation::Strict
            } else {
                Validation::Lenient
            },
        }
    }
}
