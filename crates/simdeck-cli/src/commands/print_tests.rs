use crate::actions::{Action, AppLaunch, Record};
use crate::commands::print;
use crate::config::{BootConfiguration, OutputRedirection};

#[test]
fn bare_events_render_alone() {
    assert_eq!(print::render(&Action::Shutdown), "shutdown");
    assert_eq!(
        print::render(&Action::Boot(BootConfiguration::default())),
        "boot"
    );
    assert_eq!(print::render(&Action::Record(Record::Start(None))), "record");
}

#[test]
fn subjects_follow_the_event_name() {
    let launch = Action::Launch(AppLaunch {
        bundle_id: "com.app.demo".to_string(),
        arguments: Vec::new(),
        output: OutputRedirection::empty(),
        wait_for_debugger: false,
    });
    assert_eq!(print::render(&launch), "launch com.app.demo");

    let install = Action::Install {
        path: "app.ipa".to_string(),
        codesign: true,
    };
    assert_eq!(print::render(&install), "install app.ipa");

    assert_eq!(
        print::render(&Action::SetLocation(51.5, -0.12)),
        "set_location 51.5, -0.12"
    );
}
