use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Created .transmergerc.json"));

    let config: Value = serde_json::from_str(&test.read_file(".transmergerc.json")?)?;
    assert_eq!(config["ignoreErrors"], Value::Bool(false));
    assert_eq!(config["sort"], Value::Bool(true));
    assert_eq!(config["mergeContext"], Value::Bool(true));
    assert_eq!(config["md5Check"], Value::Bool(true));
    assert_eq!(config["language"], Value::String("EN".to_string()));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transmergerc.json", r#"{ "sort": false }"#)?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".transmergerc.json")?, r#"{ "sort": false }"#);
    Ok(())
}
