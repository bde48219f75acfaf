use std::path::PathBuf;

use hyforge_core::{HyforgeErrorExt, Level};

/// A source file loaded from disk.
#[derive(Debug, Clone)]
pub struct Script {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

impl Script {
    pub fn new(path: PathBuf) -> Result<Self, Box<dyn HyforgeErrorExt>> {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content = std::fs::read_to_string(&path).map_err(|_| -> Box<dyn HyforgeErrorExt> {
            Box::new(MissingScriptError { path: path.clone() })
        })?;
        Ok(Script { name, path, content })
    }

    /// Module name for the program unit: the file name without its extension.
    pub fn module_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }
}

#[derive(Debug, Clone)]
pub struct MissingScriptError {
    pub path: PathBuf,
}

impl std::fmt::Display for MissingScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing script at {:?}", self.path)
    }
}

impl std::error::Error for MissingScriptError {}

impl HyforgeErrorExt for MissingScriptError {
    fn level(&self) -> Level {
        Level::Error
    }

    fn message(&self) -> String {
        format!("Missing script at {:?}", self.path)
    }

    fn issuer(&self) -> String {
        "hyforge.script".to_string()
    }

    fn span(&self) -> Option<hyforge_core::Span> {
        None
    }

    fn location(&self) -> Option<hyforge_core::Location> {
        None
    }
}

/// Failure writing or serializing CLI output.
#[derive(Debug, Clone)]
pub struct OutputError {
    pub message: String,
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for OutputError {}

impl HyforgeErrorExt for OutputError {
    fn level(&self) -> Level {
        Level::Error
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        "hyforge.cli".to_string()
    }

    fn span(&self) -> Option<hyforge_core::Span> {
        None
    }

    fn location(&self) -> Option<hyforge_core::Location> {
        None
    }
}
