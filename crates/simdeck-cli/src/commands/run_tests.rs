use indoc::indoc;

use crate::command::{Cli, Command};
use crate::commands::run::{Dispatcher, PlanPrinter};

fn parse_command(words: &[&str]) -> Command {
    let tokens: Vec<String> = words.iter().map(|word| word.to_string()).collect();
    match Cli::parser("simdeck").parse(&tokens) {
        Ok((_, Cli::Run(command))) => command,
        other => panic!("expected a run command, got {other:?}"),
    }
}

fn plan_text(words: &[&str]) -> String {
    let command = parse_command(words);
    let mut printer = PlanPrinter::new(Vec::new());
    printer.dispatch(&command).unwrap();
    String::from_utf8(printer.into_inner()).unwrap()
}

#[test]
fn the_plan_names_targets_then_actions() {
    let text = plan_text(&[
        "0123456789abcdef0123456789abcdef01234567",
        "boot",
        "--",
        "shutdown",
    ]);
    let expected = indoc! {"
        targets: udid=0123456789abcdef0123456789abcdef01234567
        would boot
        would shutdown
    "};
    assert_eq!(text, expected);
}

#[test]
fn subjects_ride_along_in_the_plan() {
    let text = plan_text(&["terminate", "com.app.demo"]);
    let expected = indoc! {"
        targets: all
        would terminate com.app.demo
    "};
    assert_eq!(text, expected);
}

#[test]
fn pretty_without_json_stays_plain() {
    let text = plan_text(&["--pretty", "list"]);
    let expected = indoc! {"
        targets: all
        would list
    "};
    assert_eq!(text, expected);
}

#[test]
fn json_plans_are_one_machine_readable_line() {
    let text = plan_text(&["--json", "list"]);
    assert!(text.ends_with('\n'));
    assert_eq!(
        text.trim_end(),
        r#"{"targets":{"udids":[],"names":[],"states":[],"target_types":[],"archs":[],"os_versions":[],"models":[],"first":null},"actions":[{"event":"list"}]}"#
    );
}

#[test]
fn pretty_json_plans_indent_and_omit_missing_subjects() {
    let text = plan_text(&["--json", "--pretty", "phone-pro", "open", "https://example.com"]);
    let expected = indoc! {r#"
        {
          "targets": {
            "udids": [],
            "names": [],
            "states": [],
            "target_types": [],
            "archs": [],
            "os_versions": [],
            "models": [
              "phone-pro"
            ],
            "first": null
          },
          "actions": [
            {
              "event": "open",
              "subject": "https://example.com"
            }
          ]
        }
    "#};
    assert_eq!(text, expected);
}
