//! Data models for the cloud API.
//!
//! All entities are remote-owned; these types are transient immutable
//! snapshots decoded from response payloads. An "update" never mutates a
//! model in place — callers re-fetch to observe new state.
//!
//! Decoding is strict: a payload missing a required field fails to decode
//! and surfaces as a validation error rather than producing a model with
//! sentinel defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Project Types
// =============================================================================

/// Programming language of a cloud project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Python project.
    #[serde(rename = "Py")]
    Python,
    /// C# project.
    #[serde(rename = "C#")]
    CSharp,
}

impl Language {
    /// Returns the wire representation the service expects.
    #[must_use]
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Python => "Py",
            Self::CSharp => "C#",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "Python"),
            Self::CSharp => write!(f, "C#"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "csharp" | "c#" => Ok(Self::CSharp),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// A single project parameter (key unique within the project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter key.
    pub key: String,

    /// Parameter value (service keeps values as strings).
    pub value: String,
}

/// A cloud project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-assigned project id (> 0 once created).
    pub project_id: i64,

    /// Unique display name, mutable after creation.
    pub name: String,

    /// Project language.
    pub language: Language,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Parameter set, replaced wholesale on each parameter update.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Ids of projects this project references as libraries.
    #[serde(default)]
    pub libraries: Vec<i64>,

    /// Creation time.
    pub created: DateTime<Utc>,

    /// Last modification time.
    pub modified: DateTime<Utc>,
}

impl Project {
    /// Returns true if the given project id is referenced as a library.
    #[must_use]
    pub fn has_library(&self, library_id: i64) -> bool {
        self.libraries.contains(&library_id)
    }

    /// Returns the value of a parameter by key, if present.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

/// A source file inside a cloud project. Name + project id together form
/// the file's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    /// File name, unique within the project.
    pub name: String,

    /// Text content.
    pub content: String,

    /// Last modification time, absent on freshly created files.
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
}

// =============================================================================
// Compile Types
// =============================================================================

/// State of a remote compilation job. Transitions only move forward:
/// in-progress to exactly one of the terminal states, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompileState {
    /// Compilation is queued or running.
    InProgress,
    /// Compilation finished without errors.
    BuildSuccess,
    /// Compilation finished with errors.
    BuildError,
}

impl CompileState {
    /// Returns true once no further transition can occur.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::BuildSuccess | Self::BuildError)
    }
}

/// A compilation job snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compile {
    /// Server-assigned compile id.
    pub compile_id: String,

    /// Current state.
    pub state: CompileState,

    /// Compiler diagnostics, authoritative once the state is terminal.
    #[serde(default)]
    pub logs: Vec<String>,
}

// =============================================================================
// Backtest Types
// =============================================================================

/// A backtest job snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backtest {
    /// Server-assigned backtest id.
    pub backtest_id: String,

    /// Display name, mutable after completion.
    pub name: String,

    /// Free-form note, mutable after completion.
    #[serde(default)]
    pub note: Option<String>,

    /// Monotonic completion flag (false to true, never back).
    pub completed: bool,

    /// Progress fraction in [0, 1].
    #[serde(default)]
    pub progress: f64,

    /// Runtime error, if the backtest failed.
    #[serde(default)]
    pub error: Option<String>,

    /// Final metrics keyed by statistic name, service-formatted strings.
    #[serde(default)]
    pub statistics: HashMap<String, String>,
}

impl Backtest {
    /// Returns true once the backtest reached its terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.completed
    }

    /// Returns true if the backtest finished with a runtime error.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }
}

// =============================================================================
// Live / Node / Organization Types
// =============================================================================

/// A deployed live algorithm (read-only in this layer).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveAlgorithm {
    /// Server-assigned deployment id.
    pub deploy_id: String,

    /// Project the deployment belongs to.
    pub project_id: i64,

    /// Deployment status as reported by the service.
    pub status: String,

    /// Launch time, if the service reports one.
    #[serde(default)]
    pub launched: Option<DateTime<Utc>>,
}

/// A single compute node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Node id.
    pub id: String,

    /// Node display name.
    pub name: String,

    /// True while the node is running a job.
    #[serde(default)]
    pub busy: bool,
}

/// Compute nodes of an organization, grouped by purpose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeList {
    /// Nodes available for backtesting.
    #[serde(default)]
    pub backtest: Vec<Node>,

    /// Nodes available for research.
    #[serde(default)]
    pub research: Vec<Node>,

    /// Nodes available for live trading.
    #[serde(default)]
    pub live: Vec<Node>,
}

/// An organization (account scope). Fetched, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization id.
    pub organization_id: String,

    /// Organization display name.
    pub name: String,

    /// Seat count, if the service reports one.
    #[serde(default)]
    pub seats: Option<i64>,
}
