//! Venue catalog selection for the subcommands.

use std::borrow::Cow;
use std::io::BufReader;

use barhop_core::StaticCatalog;
use barhop_fs::open_utf8_file;
use camino::Utf8Path;
use log::debug;

use crate::CliError;

/// The catalog at `path`, or the built-in roster when no path is given.
pub(crate) fn load_catalog(
    path: Option<&Utf8Path>,
) -> Result<Cow<'static, StaticCatalog>, CliError> {
    let Some(catalog_path) = path else {
        return Ok(Cow::Borrowed(StaticCatalog::builtin()));
    };
    let file = open_utf8_file(catalog_path).map_err(|source| CliError::OpenInput {
        path: catalog_path.to_path_buf(),
        source,
    })?;
    let catalog = StaticCatalog::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::LoadCatalog {
            path: catalog_path.to_path_buf(),
            source,
        }
    })?;
    debug!("loaded {} venue(s) from {catalog_path}", catalog.len());
    Ok(Cow::Owned(catalog))
}

/// Check that an optional input path names a readable file.
pub(crate) fn require_existing(
    path: Option<&Utf8Path>,
    field: &'static str,
) -> Result<(), CliError> {
    let Some(input) = path else {
        return Ok(());
    };
    match barhop_fs::file_is_file(input) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: input.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: input.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: input.to_path_buf(),
            source,
        }),
    }
}
