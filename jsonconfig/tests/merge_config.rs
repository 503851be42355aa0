//! Integration tests for merging two independently loaded configurations.

use anyhow::Result;
use jsonconfig::{load_string, load_string_no_collapse};

#[test]
fn merge_is_a_right_biased_default_fill() -> Result<()> {
    let mut config = load_string(r#"{"x": 1, "arr": ["one"]}"#, "")?;
    let other = load_string(r#"{"x": 2, "arr": ["two", "three"], "y": 2}"#, "")?;
    config.merge(other);

    assert_eq!(config["x"].integer(), 1);
    assert_eq!(config["arr"].array().len(), 1);
    assert_eq!(config["arr"].array()[0].string(), "one");
    assert_eq!(config["y"].integer(), 2);
    Ok(())
}

#[test]
fn object_collisions_merge_while_scalars_and_arrays_keep_the_receiver() -> Result<()> {
    let mut config = load_string(
        r#"
        {
          "from one": 1,
          "collision": "one",
          "object collision": {
            "from one": 1,
            "collision": "one"
          },
          "array collision": [
            "one"
          ]
        }
        "#,
        "",
    )?;
    let other = load_string(
        r#"
        {
          "from two": 2,
          "collision": "two",
          "object collision": {
            "from two": 2,
            "collision": "two"
          },
          "array collision": [
            "two",
            "three"
          ]
        }
        "#,
        "",
    )?;
    config.merge(other);

    assert_eq!(config["from one"].number(), 1.0);
    assert_eq!(config["from two"].number(), 2.0);
    assert_eq!(config["collision"].string(), "one");
    assert_eq!(config["object collision.from one"].number(), 1.0);
    assert_eq!(config["object collision.from two"].number(), 2.0);
    assert_eq!(config["object collision.collision"].string(), "one");
    assert_eq!(config["array collision"].array().len(), 1);
    assert_eq!(config["array collision.0"].string(), "one");
    Ok(())
}

#[test]
fn merged_subtrees_gain_flattened_paths() -> Result<()> {
    let mut config = load_string(r#"{"kept": true}"#, "")?;
    config.merge(load_string(r#"{"added": {"deep": {"leaf": 3}}}"#, "")?);
    assert_eq!(config["added.deep.leaf"].integer(), 3);
    assert_eq!(config.get("added.deep.leaf").integer(), 3);
    Ok(())
}

#[test]
fn unflattened_receivers_stay_unflattened() -> Result<()> {
    let mut config = load_string_no_collapse(r#"{"kept": true}"#, "")?;
    config.merge(load_string_no_collapse(r#"{"added": {"deep": 2}}"#, "")?);
    assert!(config["added.deep"].is_null());
    assert_eq!(config.get("added.deep").integer(), 2);
    Ok(())
}
