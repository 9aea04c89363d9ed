//! Diagnostics sink for non-fatal classification outcomes

use log::warn;
use std::sync::Mutex;

/// Receives warnings raised while classifying properties.
///
/// Injected into [`crate::mapper::EntityMapper`] so tests can observe the
/// warning path without capturing the global logger.
pub trait Reporter: Send + Sync {
    fn unsupported_type(&self, property: &str, type_name: &str);
}

/// Forwards warnings to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn unsupported_type(&self, property: &str, type_name: &str) {
        warn!(
            "Cannot create fieldtype from {} (property '{}'). Type is not supported.",
            type_name, property
        );
    }
}

/// Keeps every warning in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    warnings: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        match self.warnings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Reporter for RecordingReporter {
    fn unsupported_type(&self, property: &str, type_name: &str) {
        let message = format!("{}: unsupported type {}", property, type_name);
        match self.warnings.lock() {
            Ok(mut guard) => guard.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
    }
}
