//! Actions a command line can ask for.

use serde::Serialize;
use simdeck_lib::Accumulator;

use crate::config::{BootConfiguration, CreationConfiguration, OutputRedirection};
use crate::events::EventName;

/// What `create` should build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationSpecification {
    /// One simulator for every model in the catalog that the set lacks.
    AllMissingDefaults,
    Individual(CreationConfiguration),
}

/// Where `listen` accepts commands from. The default listens nowhere and
/// exits immediately.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ListenInterface {
    pub stdin: bool,
    pub http: Option<u16>,
    pub socket: Option<u16>,
}

impl Accumulator for ListenInterface {
    fn append(self, other: ListenInterface) -> ListenInterface {
        ListenInterface {
            stdin: self.stdin || other.stdin,
            http: other.http.or(self.http),
            socket: other.socket.or(self.socket),
        }
    }
}

/// Starting or stopping a video recording of a booted simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Record {
    /// Begin recording, optionally to an explicit file path.
    Start(Option<String>),
    Stop,
}

/// Everything needed to launch an app on a booted target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppLaunch {
    pub bundle_id: String,
    pub arguments: Vec<String>,
    #[serde(serialize_with = "crate::config::flag_names")]
    pub output: OutputRedirection,
    pub wait_for_debugger: bool,
}

/// One unit of work against the matched targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Approve(Vec<String>),
    Boot(BootConfiguration),
    Create(CreationSpecification),
    Delete,
    Erase,
    Focus,
    Install { path: String, codesign: bool },
    Launch(AppLaunch),
    List,
    ListApps,
    ListDeviceSets,
    Listen(ListenInterface),
    Open(String),
    Record(Record),
    SetLocation(f64, f64),
    Shutdown,
    Terminate(String),
    Uninstall(String),
    WatchdogOverride { bundle_ids: Vec<String>, timeout: f64 },
}

impl Action {
    /// The keyword this action was parsed from.
    pub fn event_name(&self) -> EventName {
        match self {
            Action::Approve(_) => EventName::Approve,
            Action::Boot(_) => EventName::Boot,
            Action::Create(_) => EventName::Create,
            Action::Delete => EventName::Delete,
            Action::Erase => EventName::Erase,
            Action::Focus => EventName::Focus,
            Action::Install { .. } => EventName::Install,
            Action::Launch(_) => EventName::Launch,
            Action::List => EventName::List,
            Action::ListApps => EventName::ListApps,
            Action::ListDeviceSets => EventName::ListDeviceSets,
            Action::Listen(_) => EventName::Listen,
            Action::Open(_) => EventName::Open,
            Action::Record(_) => EventName::Record,
            Action::SetLocation(_, _) => EventName::SetLocation,
            Action::Shutdown => EventName::Shutdown,
            Action::Terminate(_) => EventName::Terminate,
            Action::Uninstall(_) => EventName::Uninstall,
            Action::WatchdogOverride { .. } => EventName::WatchdogOverride,
        }
    }

    /// The payload worth showing next to the event name, if any.
    pub fn subject(&self) -> Option<String> {
        match self {
            Action::Approve(bundle_ids) => Some(bundle_ids.join(" ")),
            Action::Install { path, .. } => Some(path.clone()),
            Action::Launch(launch) => Some(launch.bundle_id.clone()),
            Action::Open(url) => Some(url.clone()),
            Action::Record(Record::Start(Some(path))) => Some(path.clone()),
            Action::SetLocation(latitude, longitude) => {
                Some(format!("{latitude}, {longitude}"))
            }
            Action::Terminate(bundle_id) | Action::Uninstall(bundle_id) => Some(bundle_id.clone()),
            Action::WatchdogOverride { bundle_ids, .. } => Some(bundle_ids.join(" ")),
            _ => None,
        }
    }
}
