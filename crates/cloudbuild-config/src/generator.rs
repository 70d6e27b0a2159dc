//! Generator configuration parsing.

use crate::{ConfigError, ConfigResult};
use cloudbuild_core::{ExtraConfig, ExtraConfigs, SkipList};
use kdl::{KdlDocument, KdlNode};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Configuration compiled into the binary, used when no file is given.
pub const DEFAULT_CONFIG: &str = include_str!("../defaults/generator.kdl");

const DEFAULT_ROOT: &str = "k8s";
const DEFAULT_OUTPUT: &str = "cloudbuild.yaml";

// KEY=VALUE with a shell-style variable name. The value is rendered inside
// single quotes, so it may not contain one.
static ENV_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*=[^'\p{Cc}]*$").unwrap());

/// Everything the generator needs besides the directory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory whose immediate subdirectories are the solutions.
    pub root: PathBuf,
    /// Path of the generated file.
    pub output: PathBuf,
    /// Solutions left out of the generated file.
    pub skip_list: SkipList,
    /// Extra verification variants per solution.
    pub extra_configs: ExtraConfigs,
}

impl GeneratorConfig {
    /// The embedded default configuration.
    pub fn embedded() -> ConfigResult<Self> {
        parse_generator_config(DEFAULT_CONFIG)
    }

    /// Load a configuration file, replacing the embedded defaults entirely.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_generator_config(&content)
    }
}

/// Parse a generator configuration from KDL text.
pub fn parse_generator_config(kdl: &str) -> ConfigResult<GeneratorConfig> {
    let doc: KdlDocument = kdl.parse()?;

    let mut root = PathBuf::from(DEFAULT_ROOT);
    let mut output = PathBuf::from(DEFAULT_OUTPUT);
    let mut skip_list = SkipList::new();
    let mut extra_configs = ExtraConfigs::new();

    for node in doc.nodes() {
        match node.name().value() {
            "root" => {
                root = get_first_string_arg(node)
                    .map(PathBuf::from)
                    .ok_or_else(|| ConfigError::MissingField("root path".to_string()))?;
            }
            "output" => {
                output = get_first_string_arg(node)
                    .map(PathBuf::from)
                    .ok_or_else(|| ConfigError::MissingField("output path".to_string()))?;
            }
            "skip" => {
                let names = get_all_string_args(node);
                if names.is_empty() {
                    return Err(ConfigError::MissingField("skip solution name".to_string()));
                }
                for name in names {
                    skip_list.insert(name);
                }
            }
            "extra" => {
                let (solution, variants) = parse_extra(node)?;
                extra_configs.insert(solution, variants)?;
            }
            _ => {} // Ignore unknown nodes
        }
    }

    Ok(GeneratorConfig {
        root,
        output,
        skip_list,
        extra_configs,
    })
}

fn parse_extra(node: &KdlNode) -> ConfigResult<(String, Vec<ExtraConfig>)> {
    let solution = get_first_string_arg(node)
        .ok_or_else(|| ConfigError::MissingField("extra solution name".to_string()))?;

    let mut variants = Vec::new();
    if let Some(children) = node.children() {
        for child in children.nodes() {
            if child.name().value() == "variant" {
                variants.push(parse_variant(child, &solution)?);
            }
        }
    }

    Ok((solution, variants))
}

fn parse_variant(node: &KdlNode, solution: &str) -> ConfigResult<ExtraConfig> {
    let name = get_first_string_arg(node).ok_or_else(|| {
        ConfigError::MissingField(format!("variant name for '{}'", solution))
    })?;

    if name.trim().is_empty() || name.chars().any(char::is_control) {
        return Err(ConfigError::InvalidValue {
            field: format!("variant name for '{}'", solution),
            message: format!("{:?} is not a usable step name", name),
        });
    }

    let mut env_vars = Vec::new();
    if let Some(children) = node.children() {
        for child in children.nodes() {
            if child.name().value() == "env" {
                env_vars.extend(get_all_string_args(child));
            }
        }
    }

    if env_vars.is_empty() {
        return Err(ConfigError::MissingField(format!(
            "env for variant '{}' of '{}'",
            name, solution
        )));
    }

    if let Some(bad) = env_vars.iter().find(|v| !ENV_VAR_REGEX.is_match(v)) {
        return Err(ConfigError::InvalidValue {
            field: format!("env of variant '{}'", name),
            message: format!("expected KEY=VALUE, got {:?}", bad),
        });
    }

    Ok(ExtraConfig::new(name, env_vars))
}

// Helper functions for extracting values from KDL nodes

fn get_first_string_arg(node: &KdlNode) -> Option<String> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
        .map(|s| s.to_string())
}

fn get_all_string_args(node: &KdlNode) -> Vec<String> {
    node.entries()
        .iter()
        .filter(|e| e.name().is_none())
        .filter_map(|e| e.value().as_string())
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults() {
        let config = GeneratorConfig::embedded().unwrap();
        assert_eq!(config.root, PathBuf::from("k8s"));
        assert_eq!(config.output, PathBuf::from("cloudbuild.yaml"));
        assert_eq!(
            config.skip_list.iter().collect::<Vec<_>>(),
            vec!["elastic-gke-logging", "elasticsearch", "spark-operator"]
        );

        let wordpress = config.extra_configs.for_solution("wordpress");
        assert_eq!(wordpress.len(), 2);
        assert_eq!(wordpress[0].name, "Public service and ingress");
        assert_eq!(
            wordpress[0].env_vars,
            vec!["PUBLIC_SERVICE_AND_INGRESS_ENABLED=true"]
        );
        assert_eq!(wordpress[1].name, "Prometheus metrics");
        assert_eq!(wordpress[1].env_vars, vec!["METRICS_EXPORTER_ENABLED=true"]);
        assert_eq!(config.extra_configs.solutions().count(), 1);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = GeneratorConfig::embedded().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let restored: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
        assert_eq!(
            restored.extra_configs.for_solution("wordpress")[1].name,
            "Prometheus metrics"
        );
    }

    #[test]
    fn test_paths_default_when_omitted() {
        let config = parse_generator_config(r#"skip "redis""#).unwrap();
        assert_eq!(config.root, PathBuf::from("k8s"));
        assert_eq!(config.output, PathBuf::from("cloudbuild.yaml"));
        assert!(config.skip_list.contains("redis"));
        assert!(config.extra_configs.is_empty());
    }

    #[test]
    fn test_skip_accepts_multiple_args() {
        let kdl = r#"
            skip "a" "b"
            skip "c"
            skip "a"
        "#;
        let config = parse_generator_config(kdl).unwrap();
        assert_eq!(config.skip_list.len(), 3);
    }

    #[test]
    fn test_variant_env_accumulates_in_order() {
        let kdl = r#"
            extra "mysql" {
                variant "tls" {
                    env "TLS_ENABLED=true" "TLS_MODE=strict"
                    env "EMPTY_VALUE="
                }
            }
        "#;
        let config = parse_generator_config(kdl).unwrap();
        let mysql = config.extra_configs.for_solution("mysql");
        assert_eq!(
            mysql[0].env_vars,
            vec!["TLS_ENABLED=true", "TLS_MODE=strict", "EMPTY_VALUE="]
        );
    }

    #[test]
    fn test_duplicate_extra_block_rejected() {
        let kdl = r#"
            extra "wordpress" {
                variant "one" { env "A=1"; }
            }
            extra "wordpress" {
                variant "two" { env "B=2"; }
            }
        "#;
        let result = parse_generator_config(kdl);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Domain(cloudbuild_core::Error::Duplicate(_))
        ));
    }

    #[test]
    fn test_malformed_env_rejected() {
        for env in ["NO_EQUALS", "=value", "1ABC=x", "QUOTE='x'"] {
            let kdl = format!(
                "extra \"wordpress\" {{\n variant \"v\" {{\n env \"{}\"\n }}\n}}",
                env
            );
            let result = parse_generator_config(&kdl);
            assert!(
                matches!(result, Err(ConfigError::InvalidValue { .. })),
                "{} should be rejected",
                env
            );
        }
    }

    #[test]
    fn test_variant_without_env_rejected() {
        let kdl = r#"
            extra "wordpress" {
                variant "nothing"
            }
        "#;
        let result = parse_generator_config(kdl);
        assert!(matches!(result.unwrap_err(), ConfigError::MissingField(_)));
    }

    #[test]
    fn test_missing_names_rejected() {
        assert!(matches!(
            parse_generator_config("skip").unwrap_err(),
            ConfigError::MissingField(_)
        ));
        assert!(matches!(
            parse_generator_config("extra {\n variant \"v\" {\n env \"A=1\"\n }\n}").unwrap_err(),
            ConfigError::MissingField(_)
        ));
    }

    #[test]
    fn test_syntax_error_surfaces() {
        let result = parse_generator_config("extra \"wordpress\" {");
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("generator.kdl");
        std::fs::write(&path, "root \"solutions\"\noutput \"ci/cloudbuild.yaml\"\n").unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.root, PathBuf::from("solutions"));
        assert_eq!(config.output, PathBuf::from("ci/cloudbuild.yaml"));
        assert!(config.skip_list.is_empty());
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = GeneratorConfig::from_file(dir.path().join("absent.kdl"));
        assert!(matches!(result.unwrap_err(), ConfigError::Io { .. }));
    }
}
