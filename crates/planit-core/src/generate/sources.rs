//! Concrete task generators.

use std::{fs, path::PathBuf};

use log::debug;

use super::{parse_response, GeneratedTasks, GenerationError, GenerationRequest, TaskGenerator};

/// Generator used when no model is configured; every request fails, so plans
/// are always built from the fallback template.
#[derive(Debug, Clone, Default)]
pub struct UnavailableGenerator;

impl TaskGenerator for UnavailableGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<GeneratedTasks, GenerationError> {
        Err(GenerationError::Unavailable(
            "no task generator configured".to_string(),
        ))
    }
}

/// Reads a captured model response from disk and parses it.
///
/// Pair with [`GenerationRequest::prompt`] to drive any external model: hand
/// it the prompt, save its reply, point this generator at the file.
#[derive(Debug, Clone)]
pub struct ResponseFileGenerator {
    path: PathBuf,
}

impl ResponseFileGenerator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskGenerator for ResponseFileGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedTasks, GenerationError> {
        debug!(
            "Reading generator response for '{}' from {}",
            request.goal(),
            self.path.display()
        );
        let text = fs::read_to_string(&self.path).map_err(|source| GenerationError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_response(&text)
    }
}

/// Returns a fixed task set, or fails when built with [`StaticGenerator::failing`].
#[derive(Debug, Clone)]
pub struct StaticGenerator {
    response: Option<GeneratedTasks>,
}

impl StaticGenerator {
    pub fn new(response: GeneratedTasks) -> Self {
        Self {
            response: Some(response),
        }
    }

    pub fn failing() -> Self {
        Self { response: None }
    }
}

impl TaskGenerator for StaticGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<GeneratedTasks, GenerationError> {
        self.response
            .clone()
            .ok_or_else(|| GenerationError::Unavailable("static generator has no response".into()))
    }
}
