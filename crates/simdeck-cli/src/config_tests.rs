use simdeck_lib::Accumulator;

use crate::config::{
    BootConfiguration, BootOptions, Configuration, CreationConfiguration, ManagementOptions,
    OutputOptions, Scale,
};

#[test]
fn configuration_append_unions_flags() {
    let left = Configuration {
        output: OutputOptions::JSON,
        management: ManagementOptions::KILL_ALL,
        device_set_path: None,
    };
    let right = Configuration {
        output: OutputOptions::PRETTY,
        management: ManagementOptions::KILL_SPURIOUS,
        device_set_path: None,
    };

    let merged = left.append(right);
    assert_eq!(merged.output, OutputOptions::JSON | OutputOptions::PRETTY);
    assert_eq!(
        merged.management,
        ManagementOptions::KILL_ALL | ManagementOptions::KILL_SPURIOUS
    );
}

#[test]
fn configuration_append_keeps_the_later_device_set() {
    let left = Configuration {
        device_set_path: Some("/sets/old".to_string()),
        ..Configuration::default()
    };
    let right = Configuration {
        device_set_path: Some("/sets/new".to_string()),
        ..Configuration::default()
    };

    assert_eq!(
        left.clone().append(right).device_set_path.as_deref(),
        Some("/sets/new")
    );
    assert_eq!(
        left.clone().append(Configuration::default()).device_set_path.as_deref(),
        Some("/sets/old")
    );
    assert_eq!(Configuration::default().append(left).device_set_path.as_deref(), Some("/sets/old"));
}

#[test]
fn boot_configuration_append_prefers_later_fields() {
    let left = BootConfiguration {
        options: BootOptions::CONNECT_BRIDGE,
        scale: Some(Scale::Quarter),
        locale: Some("en_US".to_string()),
    };
    let right = BootConfiguration {
        options: BootOptions::DIRECT_LAUNCH,
        scale: Some(Scale::Full),
        locale: None,
    };

    let merged = left.append(right);
    assert_eq!(
        merged.options,
        BootOptions::CONNECT_BRIDGE | BootOptions::DIRECT_LAUNCH
    );
    assert_eq!(merged.scale, Some(Scale::Full));
    assert_eq!(merged.locale.as_deref(), Some("en_US"));
}

#[test]
fn creation_configuration_append_prefers_later_fields() {
    let left = CreationConfiguration {
        os: Some("os-12.0".to_string()),
        model: Some("phone-pro".to_string()),
        aux_directory: None,
    };
    let right = CreationConfiguration {
        os: Some("os-13.3".to_string()),
        model: None,
        aux_directory: Some("/aux".to_string()),
    };

    let merged = left.append(right);
    assert_eq!(merged.os.as_deref(), Some("os-13.3"));
    assert_eq!(merged.model.as_deref(), Some("phone-pro"));
    assert_eq!(merged.aux_directory.as_deref(), Some("/aux"));
}

#[test]
fn flag_sets_serialize_as_name_lists() {
    let configuration = Configuration {
        output: OutputOptions::JSON | OutputOptions::PRETTY,
        management: ManagementOptions::KILL_ALL,
        device_set_path: Some("/sets/primary".to_string()),
    };

    let json = serde_json::to_string_pretty(&configuration).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "output": [
        "JSON",
        "PRETTY"
      ],
      "management": [
        "KILL_ALL"
      ],
      "device_set_path": "/sets/primary"
    }
    "#);
}

#[test]
fn scale_serializes_as_its_percentage() {
    assert_eq!(serde_json::to_string(&Scale::Quarter).unwrap(), r#""25""#);
    assert_eq!(serde_json::to_string(&Scale::Full).unwrap(), r#""100""#);
}
