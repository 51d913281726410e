use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const DEFAULT_CONFIG_PATH: &str = "config/crop-doctor.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub height: u32,
    pub width: u32,
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

impl FromStr for ImageSize {
    type Err = String;

    /// Accepts "224x224" (height x width) or a single "224" for square inputs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (h, w) = match s.split_once(['x', 'X']) {
            Some((h, w)) => (h.trim(), w.trim()),
            None => (s, s),
        };
        let height = h.parse::<u32>().map_err(|e| format!("{}: {}", s, e))?;
        let width = w.parse::<u32>().map_err(|e| format!("{}: {}", s, e))?;
        Ok(Self { height, width })
    }
}

/// Serialization format of the classifier artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    Tflite,
    Torch,
}

impl ModelFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("pt") | Some("pth") | Some("torchscript") => ModelFormat::Torch,
            _ => ModelFormat::Tflite,
        }
    }
}

impl FromStr for ModelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tflite" => Ok(ModelFormat::Tflite),
            "torch" | "torchscript" => Ok(ModelFormat::Torch),
            other => Err(format!("unknown model format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model_path: PathBuf,
    /// Inferred from the model file extension when absent.
    pub model_format: Option<ModelFormat>,
    pub labels_path: Option<PathBuf>,
    /// Used when the artifact does not declare a concrete input shape.
    pub image_size: ImageSize,
    /// Predictions scoring below this are reported as unrecognized.
    pub confidence_threshold: f32,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.tflite"),
            model_format: None,
            labels_path: Some(PathBuf::from("labels.txt")),
            image_size: ImageSize {
                height: 224,
                width: 224,
            },
            confidence_threshold: 0.30,
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// Defaults, then the YAML file (CONFIG_PATH or the default location if present),
    /// then environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var("CONFIG_PATH") {
            Ok(path) => Self::from_yaml_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_yaml_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&config_str).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("MODEL_PATH") {
            self.model_path = PathBuf::from(path);
        }
        if let Some(format) = lookup("MODEL_FORMAT") {
            self.model_format = Some(format.parse().map_err(|_| ConfigError::InvalidValue {
                key: "MODEL_FORMAT",
                value: format.clone(),
            })?);
        }
        if let Some(path) = lookup("LABELS_PATH") {
            // An empty value disables the labels file.
            self.labels_path = if path.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        if let Some(size) = lookup("IMAGE_SIZE") {
            self.image_size = size.parse().map_err(|_| ConfigError::InvalidValue {
                key: "IMAGE_SIZE",
                value: size.clone(),
            })?;
        }
        if let Some(threshold) = lookup("CONFIDENCE_THRESHOLD") {
            self.confidence_threshold =
                threshold
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: "CONFIDENCE_THRESHOLD",
                        value: threshold.clone(),
                    })?;
        }
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: port.clone(),
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ConfigError::InvalidValue {
                key: "confidence_threshold",
                value: self.confidence_threshold.to_string(),
            });
        }
        if self.image_size.height == 0 || self.image_size.width == 0 {
            return Err(ConfigError::InvalidValue {
                key: "image_size",
                value: self.image_size.to_string(),
            });
        }
        Ok(())
    }

    pub fn model_format(&self) -> ModelFormat {
        self.model_format
            .unwrap_or_else(|| ModelFormat::from_path(&self.model_path))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
