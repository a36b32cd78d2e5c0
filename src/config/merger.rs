//! Deep merge algorithm for YAML configuration values.
//!
//! Configuration is layered: the user's global file, then the project file,
//! then local overrides. This module implements the merge semantics.
//!
//! # Merge Rules
//!
//! - Objects are merged recursively
//! - Arrays are replaced entirely (not merged)
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base
//! - A whole-document null (an empty file) changes nothing

use serde_yaml::Value;

/// Deep merge two YAML values.
///
/// Later values override earlier values at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge multiple configs in order (later overrides earlier).
///
/// Empty documents are skipped so an empty file cannot wipe earlier layers.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|config| !config.is_null())
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn deep_merge_replaces_at_conflict_point() {
        let base = yaml(
            r#"
tool:
  name: uv
  install_command: "curl -LsSf https://astral.sh/uv/install.sh | sh"
"#,
        );
        let overlay = yaml(
            r#"
tool:
  install_command: "brew install uv"
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["tool"]["install_command"], "brew install uv");
        assert_eq!(result["tool"]["name"], "uv");
    }

    #[test]
    fn arrays_are_replaced_not_merged() {
        let base = yaml("tool:\n  version_args: [--version, --verbose]");
        let overlay = yaml("tool:\n  version_args: [version]");

        let result = deep_merge(&base, &overlay);
        let args = result["tool"]["version_args"].as_sequence().unwrap();

        assert_eq!(args.len(), 1);
        assert_eq!(args[0], "version");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml("settings:\n  output: quiet\ngit:\n  check: true");
        let overlay = yaml("settings:\n  output: null");

        let result = deep_merge(&base, &overlay);

        assert!(result["settings"].get("output").is_none());
        assert_eq!(result["git"]["check"], true);
    }

    #[test]
    fn merge_configs_merges_multiple_in_order() {
        let configs = vec![yaml("a: 1\nb: 2"), yaml("b: 3\nc: 4"), yaml("c: 5")];

        let result = merge_configs(&configs);

        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], 3);
        assert_eq!(result["c"], 5);
    }

    #[test]
    fn merge_configs_skips_empty_documents() {
        let configs = vec![yaml("git:\n  check: true"), Value::Null];

        let result = merge_configs(&configs);

        assert_eq!(result["git"]["check"], true);
    }

    #[test]
    fn merge_configs_of_nothing_is_empty_mapping() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }
}
