//! Test fixtures shared by unit tests.
//!
//! [`StubEngine`] stands in for the container engine: inspect results are
//! queued up front, every call is recorded, and builds write a configurable
//! identifier into the requested id file.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::StubEngine;
//!
//! let engine = StubEngine::new()
//!     .with_inspect(Err(not_found("alpine")))
//!     .with_inspect(Ok(ImageMetadata::new("sha256:abc")));
//! let meta = inspect_or_pull(&engine, &ImageId::new("alpine")).unwrap();
//! assert_eq!(engine.count("pull"), 1);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::engine::{BuildRequest, Engine, RunRequest};
use crate::error::EngineError;
use crate::error::engine::not_found;
use crate::image::{ImageId, ImageMetadata};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// A recorded run invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub args: Vec<String>,
    pub workdir: PathBuf,
}

/// In-memory engine with scripted responses
#[derive(Debug, Default)]
pub struct StubEngine {
    inspect_results: RefCell<VecDeque<Result<ImageMetadata, EngineError>>>,
    pull_error: Option<EngineError>,
    build_error: Option<EngineError>,
    built_id: Option<String>,
    run_exit: i32,
    run_error: Option<EngineError>,
    calls: RefCell<Vec<String>>,
    iidfiles: RefCell<Vec<PathBuf>>,
    runs: RefCell<Vec<RecordedRun>>,
}

impl StubEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next inspect. An exhausted queue reports not found.
    #[must_use]
    pub fn with_inspect(self, result: Result<ImageMetadata, EngineError>) -> Self {
        self.inspect_results.borrow_mut().push_back(result);
        self
    }

    #[must_use]
    pub fn with_pull_error(mut self, err: EngineError) -> Self {
        self.pull_error = Some(err);
        self
    }

    /// Content written into the id file by a successful build
    #[must_use]
    pub fn with_build_output(mut self, id: impl Into<String>) -> Self {
        self.built_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_build_error(mut self, err: EngineError) -> Self {
        self.build_error = Some(err);
        self
    }

    #[must_use]
    pub fn with_run_exit(mut self, code: i32) -> Self {
        self.run_exit = code;
        self
    }

    #[must_use]
    pub fn with_run_error(mut self, err: EngineError) -> Self {
        self.run_error = Some(err);
        self
    }

    /// Every call in order, e.g. `inspect alpine`, `pull alpine`, `run --rm -it ...`
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of calls of one operation (`inspect`, `pull`, `build`, `run`)
    pub fn count(&self, operation: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.split(' ').next() == Some(operation))
            .count()
    }

    /// Id files handed to build calls
    pub fn iidfiles(&self) -> Vec<PathBuf> {
        self.iidfiles.borrow().clone()
    }

    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl Engine for StubEngine {
    fn inspect(&self, image: &ImageId) -> Result<ImageMetadata, EngineError> {
        self.record(format!("inspect {image}"));
        self.inspect_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(not_found(image.as_str())))
    }

    fn pull(&self, image: &ImageId) -> Result<(), EngineError> {
        self.record(format!("pull {image}"));
        self.pull_error.clone().map_or(Ok(()), Err)
    }

    fn build(&self, request: &BuildRequest<'_>) -> Result<(), EngineError> {
        self.record(format!(
            "build {} {} {}",
            request.build_file.display(),
            request.target.unwrap_or("-"),
            request.context_dir.display()
        ));
        self.iidfiles
            .borrow_mut()
            .push(request.iidfile.to_path_buf());

        if let Some(err) = &self.build_error {
            return Err(err.clone());
        }
        if let Some(id) = &self.built_id {
            std::fs::write(request.iidfile, id).expect("Failed to write id file");
        }
        Ok(())
    }

    fn run(&self, request: &RunRequest<'_>) -> Result<i32, EngineError> {
        self.record(request.args.join(" "));
        self.runs.borrow_mut().push(RecordedRun {
            args: request.args.to_vec(),
            workdir: request.workdir.to_path_buf(),
        });
        self.run_error.clone().map_or(Ok(self.run_exit), Err)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_stub_inspect_queue_then_not_found() {
        let engine = StubEngine::new().with_inspect(Ok(ImageMetadata::new("sha256:abc")));
        let image = ImageId::new("alpine");

        assert!(engine.inspect(&image).is_ok());
        assert!(engine.inspect(&image).unwrap_err().is_not_found());
        assert_eq!(engine.count("inspect"), 2);
    }
}
