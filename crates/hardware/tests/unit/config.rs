//! Configuration Tests.

use mipsim_core::common::ConfigError;
use mipsim_core::config::Config;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn defaults_match_classic_layout() {
    let config = Config::default();
    assert_eq!(config.general.start_pc, 0x4000);
    assert_eq!(config.general.max_cycles, None);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.words, 0x4000);
    assert_eq!(config.memory.access_limit, 0xFFFF);
    assert_eq!(config.memory.load_addr, 0x4000);
    assert_eq!(config.registers.get(&28), Some(&0xC000));
    assert_eq!(config.registers.get(&29), Some(&0xFFFC));
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_gives_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.memory.access_limit, 0xFFFF);
    assert_eq!(config.registers.len(), 2);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json(r#"{ "memory": { "words": 32768 } }"#).unwrap();
    assert_eq!(config.memory.words, 0x8000);
    assert_eq!(config.memory.access_limit, 0xFFFF);
    assert_eq!(config.memory.load_addr, 0x4000);
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(
        Config::from_json("{ general: "),
        Err(ConfigError::Parse(_))
    ));
}

#[rstest]
#[case(r#"{ "memory": { "words": 0 } }"#)]
#[case(r#"{ "memory": { "words": 16 } }"#)]
#[case(r#"{ "memory": { "load_addr": 6 } }"#)]
#[case(r#"{ "general": { "start_pc": 16386 } }"#)]
#[case(r#"{ "registers": { "32": 1 } }"#)]
fn invalid_geometry_rejected(#[case] json: &str) {
    assert!(Config::from_json(json).is_err());
}

#[test]
fn misaligned_setting_is_named() {
    let err = Config::from_json(r#"{ "memory": { "load_addr": 6 } }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Misaligned {
            what: "load_addr",
            addr: 6
        }
    ));
    assert_eq!(err.to_string(), "load_addr 0x6 is not word-aligned");
}

#[test]
fn bad_register_is_reported() {
    let mut config = Config::default();
    let _ = config.registers.insert(40, 1);
    assert!(matches!(config.validate(), Err(ConfigError::BadRegister(40))));
}
