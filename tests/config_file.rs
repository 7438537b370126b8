use std::io::Write;

use parafp::{ConfigLoadError, ParafpConfig};
use tempfile::NamedTempFile;

#[test]
fn load_config_from_file() {
    let yaml = r#"
version: "1.0"
name: "vth-n4"
canonical:
  version: 2
  long_prefix_len: 100
report:
  sample_cap: 50
  snippet_chars: 200
"#;
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(yaml.as_bytes()).unwrap();

    let config = ParafpConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(config.name.as_deref(), Some("vth-n4"));

    let verify = config.to_verify_config();
    assert_eq!(verify.canonical.version, 2);
    assert_eq!(verify.canonical.long_prefix_len, 100);
    // Omitted fields fall back to the defaults.
    assert_eq!(verify.canonical.long_prefix_min, 30);
    assert_eq!(verify.report.sample_cap, 50);
    assert_eq!(verify.report.snippet_chars, 200);
}

#[test]
fn missing_file_is_a_read_error() {
    let result = ParafpConfig::from_file("/nonexistent/parafp.yaml");
    assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let result = ParafpConfig::from_yaml("version: [not, a, string");
    assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
}
