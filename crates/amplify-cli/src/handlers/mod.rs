//! Command handlers.
//!
//! Each handler validates its CLI input, calls into `amplify-model` and returns
//! the text to print. Printing and exit codes stay in `main`.

use std::path::Path;

use crate::error::{CliError, CliResult};

pub mod describe;
pub mod inspect;
pub mod route;
pub mod shapes;
pub mod validate;

/// Read a JSON document from disk.
pub(crate) fn read_document(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path)
        .map_err(|err| CliError::Io(format!("{}: {err}", path.display())))
}

/// Fail with an invalid-input error unless `name` is a registered shape.
pub(crate) fn ensure_shape(name: &str) -> CliResult<()> {
    if amplify_model::registry::is_shape(name) {
        Ok(())
    } else {
        Err(amplify_model::ModelError::UnknownShape {
            name: name.to_string(),
        }
        .into())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;

    use tempfile::NamedTempFile;

    /// Write `json` to a temporary file that lives as long as the handle.
    pub fn document(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_ensure_shape() {
        assert!(ensure_shape("Webhook").is_ok());
        assert_eq!(ensure_shape("webhook").unwrap_err().exit_code(), 2);
    }
}
