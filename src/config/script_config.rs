use crate::domain::model::{DetailLevel, EmployeeKind};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_not_empty, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A runnable script. Every section is optional; omitted sections fall back
/// to the built-in demonstration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptConfig {
    pub script: ScriptInfo,
    pub adapter: AdapterConfig,
    pub presenters: Vec<PresenterConfig>,
    pub chain: ChainConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterConfig {
    pub employee: EmployeeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresenterConfig {
    pub level: DetailLevel,
    pub employee: EmployeeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    pub commands: Vec<String>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            script: ScriptInfo::default(),
            adapter: AdapterConfig::default(),
            presenters: vec![
                PresenterConfig {
                    level: DetailLevel::Basic,
                    employee: EmployeeKind::FullTime,
                },
                PresenterConfig {
                    level: DetailLevel::Advanced,
                    employee: EmployeeKind::PartTime,
                },
            ],
            chain: ChainConfig::default(),
        }
    }
}

impl Default for ScriptInfo {
    fn default() -> Self {
        Self {
            name: "employee-management-demo".to_string(),
            description: None,
        }
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            employee: EmployeeKind::FullTime,
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            commands: vec![
                "command1".to_string(),
                "command2".to_string(),
                "command3".to_string(),
            ],
        }
    }
}

impl ScriptConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            message: format!("Failed to read script file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScriptConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("script.name", &self.script.name)?;

        for (index, command) in self.chain.commands.iter().enumerate() {
            validate_not_empty(&format!("chain.commands[{}]", index), command)?;
        }

        Ok(())
    }
}
