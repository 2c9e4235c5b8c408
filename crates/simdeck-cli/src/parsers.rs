//! The command-line grammar.
//!
//! Every model type wires its own parser here, composed from the engine's
//! combinators. The grammar and the usage text come from the same
//! definitions, so the two cannot drift apart.

use simdeck_core::Description;
use simdeck_lib::{Parsable, ParseError, Parser, primitives};

use crate::actions::{Action, AppLaunch, CreationSpecification, ListenInterface, Record};
use crate::command::{Cli, Command, Format, Help};
use crate::config::{
    BootConfiguration, BootOptions, Configuration, CreationConfiguration, ManagementOptions,
    OutputOptions, OutputRedirection, Scale,
};
use crate::events::EventName;
use crate::query::{Arch, MODELS, OS_VERSIONS, Query, TargetState, TargetType};

fn of_udid() -> Parser<String> {
    Parser::single(
        Description::primitive("udid", "Device or simulator Unique Device Identifier."),
        |token| {
            if is_udid(token) {
                Ok(token.to_string())
            } else {
                Err(ParseError::could_not_interpret("UDID", token))
            }
        },
    )
}

/// Simulators use hyphenated 8-4-4-4-12 identifiers, physical devices a
/// bare 40-digit one.
fn is_udid(token: &str) -> bool {
    let is_hex = |segment: &&str| segment.chars().all(|c| c.is_ascii_hexdigit());
    let segments: Vec<&str> = token.split('-').collect();
    match segments.as_slice() {
        [only] => only.len() == 40 && is_hex(only),
        [a, b, c, d, e] => {
            [a.len(), b.len(), c.len(), d.len(), e.len()] == [8, 4, 4, 4, 12]
                && segments.iter().all(is_hex)
        }
        _ => false,
    }
}

fn of_bundle_id() -> Parser<String> {
    Parser::single(Description::primitive("bundle-id", "Bundle ID."), |token| {
        if token.contains('.') {
            Ok(token.to_string())
        } else {
            Err(ParseError::custom("Bundle ID must contain a '.'"))
        }
    })
}

fn of_locale() -> Parser<String> {
    Parser::single(
        Description::primitive("locale", "Locale identifier."),
        |token| Ok(token.to_string()),
    )
}

fn of_port() -> Parser<u16> {
    Parser::single(
        Description::primitive("port", "Port number (16-bit unsigned integer)."),
        |token| {
            let number: i64 = token
                .parse()
                .map_err(|_| ParseError::could_not_interpret("Int", token))?;
            u16::try_from(number)
                .map_err(|_| ParseError::custom(format!("{number} is not a valid port number")))
        },
    )
}

fn of_count() -> Parser<usize> {
    Parser::single(
        Description::primitive("count", "Number of targets."),
        |token| {
            token
                .parse()
                .map_err(|_| ParseError::could_not_interpret("Int", token))
        },
    )
}

fn of_model() -> Parser<String> {
    Parser::single(Description::primitive("model", "Device model."), |token| {
        if MODELS.contains(&token) {
            Ok(token.to_string())
        } else {
            Err(ParseError::custom(format!(
                "{token} is not a valid device model"
            )))
        }
    })
}

fn of_os_version() -> Parser<String> {
    Parser::single(Description::primitive("os", "OS version."), |token| {
        if OS_VERSIONS.contains(&token) {
            Ok(token.to_string())
        } else {
            Err(ParseError::custom(format!(
                "{token} is not a valid OS version"
            )))
        }
    })
}

impl OutputOptions {
    pub(crate) fn single_parser() -> Parser<OutputOptions> {
        Parser::alternative(vec![
            Parser::of_flag(
                "debug-logging",
                OutputOptions::DEBUG_LOGGING,
                "Log every step of command handling.",
            ),
            Parser::of_flag("json", OutputOptions::JSON, "Machine-readable JSON output."),
            Parser::of_flag("pretty", OutputOptions::PRETTY, "Indented JSON output."),
        ])
        .sectionize("output", "Output Options", "")
    }
}

impl Parsable for OutputOptions {
    fn parser() -> Parser<OutputOptions> {
        Parser::union(0, vec![OutputOptions::single_parser()])
    }
}

impl ManagementOptions {
    pub(crate) fn single_parser() -> Parser<ManagementOptions> {
        Parser::alternative(vec![
            Parser::of_flag(
                "delete-all",
                ManagementOptions::DELETE_ALL,
                "Delete every simulator in the set before running.",
            ),
            Parser::of_flag(
                "kill-all",
                ManagementOptions::KILL_ALL,
                "Kill every running simulator in the set before running.",
            ),
            Parser::of_flag(
                "kill-spurious",
                ManagementOptions::KILL_SPURIOUS,
                "Kill simulator processes that do not belong to the set.",
            ),
            Parser::of_flag(
                "ignore-spurious-kill-fail",
                ManagementOptions::IGNORE_SPURIOUS_KILL_FAIL,
                "Carry on when killing spurious simulators fails.",
            ),
            Parser::of_flag(
                "kill-spurious-services",
                ManagementOptions::KILL_SPURIOUS_SERVICES,
                "Also kill lingering simulator background services.",
            ),
        ])
        .sectionize("management", "Simulator Management", "")
    }
}

impl Parsable for Configuration {
    fn parser() -> Parser<Configuration> {
        let output = OutputOptions::single_parser().map(|output| Configuration {
            output,
            ..Configuration::default()
        });
        let management = ManagementOptions::single_parser().map(|management| Configuration {
            management,
            ..Configuration::default()
        });
        let device_set = Parser::of_flag_with_arg(
            "set",
            primitives::of_existing_directory(),
            "Path to the device set to operate on.",
        )
        .map(|path| Configuration {
            device_set_path: Some(path),
            ..Configuration::default()
        });
        Parser::accumulate(0, vec![output, management, device_set])
    }
}

impl Parsable for Scale {
    fn parser() -> Parser<Scale> {
        Parser::alternative(vec![
            Parser::of_flag("scale=25", Scale::Quarter, "Scale the display to 25%."),
            Parser::of_flag("scale=50", Scale::Half, "Scale the display to 50%."),
            Parser::of_flag("scale=75", Scale::ThreeQuarters, "Scale the display to 75%."),
            Parser::of_flag("scale=100", Scale::Full, "Scale the display to 100%."),
        ])
    }
}

impl BootOptions {
    pub(crate) fn single_parser() -> Parser<BootOptions> {
        Parser::alternative(vec![
            Parser::of_flag(
                "connect-bridge",
                BootOptions::CONNECT_BRIDGE,
                "Connect the inter-process bridge after boot.",
            ),
            Parser::of_flag(
                "direct-launch",
                BootOptions::DIRECT_LAUNCH,
                "Launch the simulator process directly.",
            ),
            Parser::of_flag(
                "use-workspace",
                BootOptions::USE_WORKSPACE,
                "Attach the simulator to the current workspace.",
            ),
        ])
    }
}

impl Parsable for BootConfiguration {
    fn parser() -> Parser<BootConfiguration> {
        let options = BootOptions::single_parser().map(|options| BootConfiguration {
            options,
            ..BootConfiguration::default()
        });
        let scale = Scale::parser().map(|scale| BootConfiguration {
            scale: Some(scale),
            ..BootConfiguration::default()
        });
        let locale =
            Parser::of_flag_with_arg("locale", of_locale(), "Locale to boot the simulator with.")
                .map(|locale| BootConfiguration {
                    locale: Some(locale),
                    ..BootConfiguration::default()
                });
        Parser::accumulate(1, vec![options, scale, locale])
    }
}

impl Parsable for CreationConfiguration {
    fn parser() -> Parser<CreationConfiguration> {
        let os = of_os_version().map(|os| CreationConfiguration {
            os: Some(os),
            ..CreationConfiguration::default()
        });
        let model = of_model().map(|model| CreationConfiguration {
            model: Some(model),
            ..CreationConfiguration::default()
        });
        let aux = Parser::of_flag_with_arg(
            "aux",
            primitives::of_existing_directory(),
            "Directory of auxiliary files copied into new simulators.",
        )
        .map(|aux_directory| CreationConfiguration {
            aux_directory: Some(aux_directory),
            ..CreationConfiguration::default()
        });
        Parser::accumulate(0, vec![os, model, aux])
    }
}

impl Parsable for CreationSpecification {
    fn parser() -> Parser<CreationSpecification> {
        Parser::alternative(vec![
            Parser::of_flag(
                "all-missing-defaults",
                CreationSpecification::AllMissingDefaults,
                "Create one simulator for each default model the set lacks.",
            ),
            CreationConfiguration::parser().map(CreationSpecification::Individual),
        ])
    }
}

impl Parsable for ListenInterface {
    fn parser() -> Parser<ListenInterface> {
        let stdin = Parser::of_flag(
            "stdin",
            ListenInterface {
                stdin: true,
                ..ListenInterface::default()
            },
            "Listen for commands on stdin.",
        );
        let http = Parser::of_flag_with_arg("http", of_port(), "Serve an HTTP relay on this port.")
            .map(|port| ListenInterface {
                http: Some(port),
                ..ListenInterface::default()
            });
        let socket =
            Parser::of_flag_with_arg("socket", of_port(), "Serve a TCP relay on this port.").map(
                |port| ListenInterface {
                    socket: Some(port),
                    ..ListenInterface::default()
                },
            );
        Parser::accumulate(0, vec![stdin, http, socket])
    }
}

impl Parsable for Record {
    fn parser() -> Parser<Record> {
        Parser::alternative(vec![
            Parser::of_string("start", ())
                .ignore_then(primitives::of_file().optional())
                .map(Record::Start),
            Parser::of_string("stop", Record::Stop),
        ])
    }
}

impl OutputRedirection {
    pub(crate) fn single_parser() -> Parser<OutputRedirection> {
        Parser::alternative(vec![
            Parser::of_flag(
                "stdout",
                OutputRedirection::STDOUT,
                "Relay standard output of the launched app.",
            ),
            Parser::of_flag(
                "stderr",
                OutputRedirection::STDERR,
                "Relay standard error of the launched app.",
            ),
        ])
    }
}

impl Parsable for AppLaunch {
    fn parser() -> Parser<AppLaunch> {
        let output = Parser::union(0, vec![OutputRedirection::single_parser()]);
        let wait_for_debugger = Parser::alternative(vec![
            Parser::of_flag(
                "wait-for-debugger",
                true,
                "Halt the app at launch until a debugger attaches.",
            ),
            Parser::of_string("-w", true),
        ])
        .fallback(false);
        let arguments = Parser::many_till(primitives::of_dash_separator(), primitives::of_any());
        Parser::seq4(output, wait_for_debugger, of_bundle_id(), arguments).map(
            |(output, wait_for_debugger, bundle_id, arguments)| AppLaunch {
                bundle_id,
                arguments,
                output,
                wait_for_debugger,
            },
        )
    }
}

fn approve() -> Parser<Action> {
    Parser::of_command_with_arg(
        EventName::Approve.as_str(),
        Parser::many_count(1, of_bundle_id()),
    )
    .map(Action::Approve)
    .sectionize("action/approve", "Action: Approve", "")
}

fn boot() -> Parser<Action> {
    Parser::of_command_with_arg(
        EventName::Boot.as_str(),
        BootConfiguration::parser().fallback(BootConfiguration::default()),
    )
    .map(Action::Boot)
    .sectionize("action/boot", "Action: Boot", "")
}

fn create() -> Parser<Action> {
    Parser::of_command_with_arg(EventName::Create.as_str(), CreationSpecification::parser())
        .map(Action::Create)
        .sectionize("action/create", "Action: Create", "")
}

fn delete() -> Parser<Action> {
    Parser::of_string(EventName::Delete.as_str(), Action::Delete)
}

fn erase() -> Parser<Action> {
    Parser::of_string(EventName::Erase.as_str(), Action::Erase)
}

fn focus() -> Parser<Action> {
    Parser::of_string(EventName::Focus.as_str(), Action::Focus)
}

fn install() -> Parser<Action> {
    Parser::of_command_with_arg(EventName::Install.as_str(), primitives::of_file())
        .then(Parser::of_flag_bool(
            "codesign",
            "Sign the bundle and its frameworks before installing.",
        ))
        .map(|(path, codesign)| Action::Install { path, codesign })
}

fn launch() -> Parser<Action> {
    Parser::of_command_with_arg(EventName::Launch.as_str(), AppLaunch::parser())
        .map(Action::Launch)
        .sectionize("action/launch", "Action: Launch", "")
}

fn list() -> Parser<Action> {
    Parser::of_string(EventName::List.as_str(), Action::List)
}

fn list_apps() -> Parser<Action> {
    Parser::of_string(EventName::ListApps.as_str(), Action::ListApps)
}

fn list_device_sets() -> Parser<Action> {
    Parser::of_string(EventName::ListDeviceSets.as_str(), Action::ListDeviceSets)
}

fn listen() -> Parser<Action> {
    Parser::of_command_with_arg(EventName::Listen.as_str(), ListenInterface::parser())
        .map(Action::Listen)
        .sectionize("action/listen", "Action: Listen", "")
}

fn open() -> Parser<Action> {
    Parser::of_command_with_arg(EventName::Open.as_str(), primitives::of_url()).map(Action::Open)
}

fn record() -> Parser<Action> {
    Parser::of_command_with_arg(EventName::Record.as_str(), Record::parser()).map(Action::Record)
}

fn set_location() -> Parser<Action> {
    Parser::of_command_with_arg(
        EventName::SetLocation.as_str(),
        primitives::of_double().then(primitives::of_double()),
    )
    .map(|(latitude, longitude)| Action::SetLocation(latitude, longitude))
}

fn shutdown() -> Parser<Action> {
    Parser::of_string(EventName::Shutdown.as_str(), Action::Shutdown)
}

fn terminate() -> Parser<Action> {
    Parser::of_command_with_arg(EventName::Terminate.as_str(), of_bundle_id())
        .map(Action::Terminate)
}

fn uninstall() -> Parser<Action> {
    Parser::of_command_with_arg(EventName::Uninstall.as_str(), of_bundle_id())
        .map(Action::Uninstall)
}

fn watchdog_override() -> Parser<Action> {
    Parser::of_command_with_arg(
        EventName::WatchdogOverride.as_str(),
        primitives::of_double().then(Parser::many_count(1, of_bundle_id())),
    )
    .map(|(timeout, bundle_ids)| Action::WatchdogOverride {
        bundle_ids,
        timeout,
    })
    .sectionize("action/watchdog_override", "Action: Watchdog Override", "")
}

impl Parsable for Action {
    fn parser() -> Parser<Action> {
        Parser::alternative(vec![
            approve(),
            boot(),
            create(),
            delete(),
            erase(),
            focus(),
            install(),
            launch(),
            list(),
            list_apps(),
            list_device_sets(),
            listen(),
            open(),
            record(),
            set_location(),
            shutdown(),
            terminate(),
            uninstall(),
            watchdog_override(),
        ])
        .with_expanded_description()
        .sectionize("action", "Action", "")
    }
}

fn state_literals() -> Parser<TargetState> {
    Parser::alternative(
        [
            TargetState::Creating,
            TargetState::Shutdown,
            TargetState::Booting,
            TargetState::Booted,
            TargetState::ShuttingDown,
        ]
        .into_iter()
        .map(|state| Parser::of_string(state.as_str(), state))
        .collect(),
    )
}

fn query_single() -> Parser<Query> {
    Parser::alternative(vec![
        Parser::of_flag_with_arg("first", of_count(), "Keep only the first N matching targets.")
            .map(Query::of_count),
        of_udid().map(Query::udid),
        Parser::of_flag_with_arg("name", primitives::of_any(), "Match targets by display name.")
            .map(Query::named),
        Parser::of_flag_with_arg("state", state_literals(), "Match targets in this state.")
            .map(Query::state),
        Parser::of_flag(
            "simulators",
            Query::target_type(TargetType::Simulator),
            "Match simulators only.",
        ),
        Parser::of_flag(
            "devices",
            Query::target_type(TargetType::Device),
            "Match physical devices only.",
        ),
        Parser::of_flag("arch=arm64", Query::arch(Arch::Arm64), "Match arm64 targets."),
        Parser::of_flag(
            "arch=x86_64",
            Query::arch(Arch::X86_64),
            "Match x86_64 targets.",
        ),
        of_os_version().map(Query::os_version),
        of_model().map(Query::model),
    ])
    .sectionize("targets/query", "Target: Queries", "")
}

impl Parsable for Query {
    fn parser() -> Parser<Query> {
        Parser::alternative(vec![
            Parser::of_string("all", Query::all()),
            Parser::accumulate(1, vec![query_single()]),
        ])
        .sectionize("targets", "Targets", "")
    }
}

fn format() -> Parser<Format> {
    Parser::of_flag_with_arg(
        "format",
        Parser::single(
            Description::primitive("format", "Comma-separated field list."),
            Format::from_specifier,
        ),
        "Fields shown for each target: udid, name, model, os, state, arch.",
    )
}

impl Parsable for Command {
    fn parser() -> Parser<Command> {
        Parser::seq4(
            Configuration::parser(),
            Query::parser().optional(),
            format().optional(),
            Parser::many_sep_count(1, Action::parser(), primitives::of_dash_separator())
                .exhaustive(),
        )
        .map(|(configuration, query, format, actions)| Command {
            configuration,
            actions,
            query,
            format,
        })
    }
}

impl Parsable for Help {
    fn parser() -> Parser<Help> {
        OutputOptions::parser()
            .then_ignore(Parser::of_string("help", ()))
            .map(|output| Help { output })
    }
}

impl Cli {
    /// The whole grammar, prefixed with the program's own name.
    pub fn parser(program: &str) -> Parser<Cli> {
        let print = Parser::of_string("print", ())
            .ignore_then(Action::parser())
            .exhaustive()
            .map(Cli::Print)
            .top_level(program);
        let run = Command::parser().map(Cli::Run).top_level(program);
        let show = Help::parser().exhaustive().map(Cli::Show).top_level(program);
        Parser::alternative(vec![print, run, show])
            .with_expanded_description()
            .sectionize(
                "simdeck",
                "Help",
                "simdeck is a command-line tool for managing fleets of device simulators",
            )
    }
}
