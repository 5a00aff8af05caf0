//! Layered configuration loading.
//!
//! Precedence, lowest first: engine defaults, preset, config file, `.env`,
//! process environment. Guard rails run on the composed result.

pub mod error;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use vitrine_core::EngineConfig;

use self::error::ConfigLoadError;
use crate::env::{self, EnvSource, Layered, ProcessEnv, overlay_from_env};
use crate::models::CarouselFile;
use crate::presets::Preset;
use crate::validation::{self, ConfigWarnings};

const DEFAULT_CONFIG_LOCATIONS: &[&str] =
    &["vitrine.toml", "config/vitrine.toml"];
const DEFAULT_ENV_FILE: &str = ".env";

/// Where the config file came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// No file; defaults, preset and environment only.
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    Discovered(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Default => None,
            ConfigSource::Explicit(path)
            | ConfigSource::EnvPath(path)
            | ConfigSource::Discovered(path) => Some(path),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    pub preset: Option<Preset>,
    /// The `.env` file that was read, if any.
    pub env_file: Option<PathBuf>,
    /// `VITRINE_*` variables that were set.
    pub env_overrides: Vec<&'static str>,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: EngineConfig,
    pub warnings: ConfigWarnings,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Overrides any preset named by the file or environment.
    pub preset: Option<Preset>,
    /// Probe the working directory for `vitrine.toml` and `.env` when no
    /// explicit paths are given.
    pub discover: bool,
}

impl Default for ConfigLoaderOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            env_file: None,
            preset: None,
            discover: true,
        }
    }
}

#[derive(Debug)]
pub struct ConfigLoader<E = ProcessEnv> {
    options: ConfigLoaderOptions,
    env: E,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::with_options(ConfigLoaderOptions::default())
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self {
            options,
            env: ProcessEnv,
        }
    }
}

impl<E: EnvSource> ConfigLoader<E> {
    /// Read variables from `env` instead of the process environment.
    pub fn with_env_source<F: EnvSource>(self, env: F) -> ConfigLoader<F> {
        ConfigLoader {
            options: self.options,
            env,
        }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.options.preset = Some(preset);
        self
    }

    pub fn without_discovery(mut self) -> Self {
        self.options.discover = false;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (dotenv, env_file) = self.read_env_file()?;
        let env = Layered {
            primary: &self.env,
            fallback: dotenv,
        };

        let (file, source) = self.load_file(&env)?;
        let preset = match self.options.preset {
            Some(preset) => Some(preset),
            None => match env::raw(&env, env::PRESET) {
                Some(name) => Some(name.parse::<Preset>()?),
                None => file.as_ref().and_then(|f| f.preset),
            },
        };

        let mut config = preset.map(Preset::config).unwrap_or_default();
        if let Some(file) = &file {
            file.apply_to(&mut config)?;
        }
        overlay_from_env(&env)?.apply_to(&mut config)?;
        config.validate()?;
        let warnings = validation::apply_guard_rails(&config)?;

        let env_overrides: Vec<&'static str> = env::KEYS
            .into_iter()
            .filter(|key| env::raw(&env, key).is_some())
            .collect();
        tracing::debug!(
            ?source,
            ?preset,
            overrides = env_overrides.len(),
            warnings = warnings.len(),
            "carousel config loaded"
        );

        Ok(ConfigLoad {
            config,
            warnings,
            metadata: ConfigMetadata {
                source,
                preset,
                env_file,
                env_overrides,
            },
        })
    }

    /// `.env` pairs, without touching the process environment. A missing
    /// file is not an error.
    fn read_env_file(
        &self,
    ) -> Result<(HashMap<String, String>, Option<PathBuf>), ConfigLoadError>
    {
        let path = match &self.options.env_file {
            Some(path) => path.clone(),
            None if self.options.discover => PathBuf::from(DEFAULT_ENV_FILE),
            None => return Ok((HashMap::new(), None)),
        };
        let iter = match dotenvy::from_path_iter(&path) {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(_)) => return Ok((HashMap::new(), None)),
            Err(err) => return Err(err.into()),
        };
        let vars = iter.collect::<Result<HashMap<_, _>, _>>()?;
        Ok((vars, Some(path)))
    }

    fn load_file(
        &self,
        env: &impl EnvSource,
    ) -> Result<(Option<CarouselFile>, ConfigSource), ConfigLoadError> {
        let source = if let Some(explicit) = &self.options.config_path {
            ConfigSource::Explicit(explicit.clone())
        } else if let Some(from_env) = env::raw(env, env::CONFIG_PATH) {
            ConfigSource::EnvPath(PathBuf::from(from_env))
        } else if self.options.discover
            && let Some(found) = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(Path::new)
                .find(|candidate| candidate.exists())
        {
            ConfigSource::Discovered(found.to_path_buf())
        } else {
            return Ok((None, ConfigSource::Default));
        };

        let Some(path) = source.path() else {
            return Ok((None, ConfigSource::Default));
        };
        let file = read_document(path)?;
        Ok((Some(file), source))
    }
}

/// Read a TOML (or `.json`) config document.
pub fn read_document(path: &Path) -> Result<CarouselFile, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|source| {
            ConfigLoadError::Json {
                path: path.to_path_buf(),
                source,
            }
        }),
        _ => CarouselFile::from_toml(&contents).map_err(|source| {
            ConfigLoadError::Toml {
                path: path.to_path_buf(),
                source,
            }
        }),
    }
}
