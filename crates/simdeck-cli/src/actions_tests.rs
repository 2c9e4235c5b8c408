use simdeck_lib::Accumulator;

use crate::actions::{Action, AppLaunch, CreationSpecification, ListenInterface, Record};
use crate::config::{BootConfiguration, OutputRedirection};

fn launch(bundle_id: &str) -> AppLaunch {
    AppLaunch {
        bundle_id: bundle_id.to_string(),
        arguments: Vec::new(),
        output: OutputRedirection::empty(),
        wait_for_debugger: false,
    }
}

#[test]
fn every_action_reports_its_keyword() {
    let cases = [
        (Action::Approve(vec!["com.a".to_string()]), "approve"),
        (Action::Boot(BootConfiguration::default()), "boot"),
        (
            Action::Create(CreationSpecification::AllMissingDefaults),
            "create",
        ),
        (Action::Delete, "delete"),
        (Action::Erase, "erase"),
        (Action::Focus, "focus"),
        (
            Action::Install {
                path: "app.ipa".to_string(),
                codesign: false,
            },
            "install",
        ),
        (Action::Launch(launch("com.a")), "launch"),
        (Action::List, "list"),
        (Action::ListApps, "list_apps"),
        (Action::ListDeviceSets, "list_device_sets"),
        (Action::Listen(ListenInterface::default()), "listen"),
        (Action::Open("https://example.com".to_string()), "open"),
        (Action::Record(Record::Stop), "record"),
        (Action::SetLocation(51.5, -0.12), "set_location"),
        (Action::Shutdown, "shutdown"),
        (Action::Terminate("com.a".to_string()), "terminate"),
        (Action::Uninstall("com.a".to_string()), "uninstall"),
        (
            Action::WatchdogOverride {
                bundle_ids: vec!["com.a".to_string()],
                timeout: 60.0,
            },
            "watchdog_override",
        ),
    ];

    for (action, keyword) in cases {
        assert_eq!(action.event_name().as_str(), keyword);
    }
}

#[test]
fn subjects_show_the_payload_worth_echoing() {
    let approve = Action::Approve(vec!["com.a".to_string(), "com.b".to_string()]);
    assert_eq!(approve.subject().as_deref(), Some("com.a com.b"));

    let install = Action::Install {
        path: "app.ipa".to_string(),
        codesign: true,
    };
    assert_eq!(install.subject().as_deref(), Some("app.ipa"));

    assert_eq!(
        Action::Launch(launch("com.app.demo")).subject().as_deref(),
        Some("com.app.demo")
    );
    assert_eq!(
        Action::SetLocation(51.5, -0.12).subject().as_deref(),
        Some("51.5, -0.12")
    );
    assert_eq!(
        Action::Record(Record::Start(Some("movie.mp4".to_string())))
            .subject()
            .as_deref(),
        Some("movie.mp4")
    );
}

#[test]
fn actions_without_payload_have_no_subject() {
    assert_eq!(Action::Boot(BootConfiguration::default()).subject(), None);
    assert_eq!(Action::Delete.subject(), None);
    assert_eq!(Action::Listen(ListenInterface::default()).subject(), None);
    assert_eq!(Action::Record(Record::Start(None)).subject(), None);
    assert_eq!(Action::Record(Record::Stop).subject(), None);
}

#[test]
fn listen_interfaces_merge_across_flags() {
    let stdin = ListenInterface {
        stdin: true,
        ..ListenInterface::default()
    };
    let http = ListenInterface {
        http: Some(8090),
        ..ListenInterface::default()
    };

    let merged = stdin.append(http);
    assert!(merged.stdin);
    assert_eq!(merged.http, Some(8090));
    assert_eq!(merged.socket, None);
}

#[test]
fn launch_actions_serialize_their_full_shape() {
    let action = Action::Launch(AppLaunch {
        bundle_id: "com.app.demo".to_string(),
        arguments: vec!["--flag".to_string(), "value".to_string()],
        output: OutputRedirection::STDOUT,
        wait_for_debugger: false,
    });

    let json = serde_json::to_string_pretty(&action).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "launch": {
        "bundle_id": "com.app.demo",
        "arguments": [
          "--flag",
          "value"
        ],
        "output": [
          "STDOUT"
        ],
        "wait_for_debugger": false
      }
    }
    "#);
}
