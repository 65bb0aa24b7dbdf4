//! Host scenario configuration
//!
//! A host scenario is "import `module`, call `function` with `args`". The
//! defaults reproduce the fixed demo scenarios; anything else can be loaded
//! from JSON.
//!
//! # Example
//! ```
//! use pybridge_core_rs::HostConfig;
//!
//! let config = HostConfig::from_json_str(r#"{"args": [1, 2, 3]}"#).unwrap();
//! assert_eq!(config.module, "sum");
//! assert_eq!(config.function, "py_list_sum");
//! assert_eq!(config.args, vec![1, 2, 3]);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Module the demo hosts import
pub const DEFAULT_MODULE: &str = "sum";
/// Callable the demo hosts fetch from [`DEFAULT_MODULE`]
pub const DEFAULT_FUNCTION: &str = "py_list_sum";

/// Source the snippet host executes after calling `math.sqrt`
pub const FORMAT_SNIPPET: &str = r#"kwargs = dict(name="World", number=42)
message = "Hello, {name}! The answer is {number}".format(**kwargs)
print(message)
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
}

/// Inputs of a "call a list-summing function" host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Module to import
    pub module: String,
    /// Attribute of `module` to call
    pub function: String,
    /// Directories appended to `sys.path` before the import
    pub search_paths: Vec<String>,
    /// The single positional argument, passed as a list
    pub args: Vec<i64>,
    /// Statements run in `__main__` right after start-up
    pub startup_source: Vec<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self::pyapi_demo()
    }
}

impl HostConfig {
    /// Raw-API host scenario: `py_list_sum([5, 6, 7])`
    pub fn pyapi_demo() -> Self {
        Self {
            module: DEFAULT_MODULE.to_string(),
            function: DEFAULT_FUNCTION.to_string(),
            search_paths: vec![".".to_string()],
            args: vec![5, 6, 7],
            startup_source: vec!["print('hello world')".to_string()],
        }
    }

    /// High-level host scenario: `py_list_sum([1, 2, 3, 4, 5])`
    pub fn scoped_demo() -> Self {
        Self {
            args: vec![1, 2, 3, 4, 5],
            startup_source: Vec::new(),
            ..Self::pyapi_demo()
        }
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_target(&self.module, &self.function)
    }
}

/// Both config types name a `module` and a `function` in it
fn require_target(module: &str, function: &str) -> Result<(), ConfigError> {
    if module.trim().is_empty() {
        return Err(ConfigError::MissingField("module"));
    }
    if function.trim().is_empty() {
        return Err(ConfigError::MissingField("function"));
    }
    Ok(())
}

/// Inputs of the "call a float function, then run a snippet" host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    pub module: String,
    pub function: String,
    pub input: f64,
    pub source: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            module: "math".to_string(),
            function: "sqrt".to_string(),
            input: 25.0,
            source: FORMAT_SNIPPET.to_string(),
        }
    }
}

impl SnippetConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_target(&self.module, &self.function)
    }
}
