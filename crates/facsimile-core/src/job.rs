//! Serialized printing input
//!
//! A [`PrintJob`] bundles everything a parser hands to the printer: the
//! located module tree, the annotation table and the comment list. Jobs are
//! exchanged as JSON so that any front end can drive the printer.

use crate::annotations::Anns;
use crate::comments::Comment;
use crate::error::FacsimileError;
use crate::result::Result;
use crate::syntax::{Located, Module};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    pub module: Located<Module>,
    #[serde(default)]
    pub annotations: Anns,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl PrintJob {
    pub fn new(module: Located<Module>, annotations: Anns, comments: Vec<Comment>) -> Self {
        Self {
            module,
            annotations,
            comments,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a job from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FacsimileError::io_error(path, e))?;
        Self::from_json(&content).map_err(|e| {
            FacsimileError::input_error(format!("Invalid print job '{}': {e}", path.display()))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"{
        "module": {
            "span": {"start": {"line": 1, "column": 1}, "end": {"line": 1, "column": 1}},
            "node": {"name": null}
        },
        "annotations": [
            {
                "span": {"start": {"line": 1, "column": 1}, "end": {"line": 1, "column": 1}},
                "annotations": [
                    {"kind": "module", "payload": {"module": {"module_kw": null, "where_kw": null}}}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_minimal_job() {
        let job = PrintJob::from_json(MINIMAL).unwrap();
        assert!(job.module.node.decls.is_empty());
        assert!(job.comments.is_empty());
        assert_eq!(job.annotations.len(), 1);
    }

    #[test]
    fn test_job_survives_json() {
        let job = PrintJob::from_json(MINIMAL).unwrap();
        let back = PrintJob::from_json(&job.to_json().unwrap()).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn test_from_file_reports_invalid_json_as_input_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = PrintJob::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn test_from_file_missing() {
        let err = PrintJob::from_file(Path::new("/nonexistent/job.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
