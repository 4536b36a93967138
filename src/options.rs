use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeightsError};

/// What to do when the header's declared count differs from the number of
/// origin ids actually read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// Keep the observed count, say nothing.
    Ignore,
    /// Keep the observed count, log a warning.
    #[default]
    Warn,
    /// Fail the read.
    Strict,
}

/// Reader configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GwtOptions {
    pub count_policy: CountPolicy,
}

impl GwtOptions {
    /// Load options from a JSON file, e.g. `{"count_policy": "strict"}`.
    /// Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn with_count_policy(mut self, count_policy: CountPolicy) -> Self {
        self.count_policy = count_policy;
        self
    }
}

/// File open mode, parsed from the usual `"r"`/`"w"`/`"a"` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
    Append,
}

impl OpenMode {
    pub fn parse(mode: &str) -> Result<Self> {
        match mode {
            "r" | "rt" => Ok(OpenMode::Read),
            "w" | "wt" => Ok(OpenMode::Write),
            "a" | "at" => Ok(OpenMode::Append),
            other => Err(WeightsError::Mode(other.to_string())),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            OpenMode::Read => "r",
            OpenMode::Write => "w",
            OpenMode::Append => "a",
        }
    }
}
