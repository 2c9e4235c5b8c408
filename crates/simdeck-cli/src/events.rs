//! The closed set of action keywords.

use std::fmt;

use serde::Serialize;

/// Keyword for each action, used both as the grammar literal and as the
/// event label in reported output.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    Approve,
    Boot,
    Create,
    Delete,
    Erase,
    Focus,
    Install,
    Launch,
    List,
    ListApps,
    ListDeviceSets,
    Listen,
    Open,
    Record,
    SetLocation,
    Shutdown,
    Terminate,
    Uninstall,
    WatchdogOverride,
}

impl EventName {
    pub fn as_str(self) -> &'static str {
        match self {
            EventName::Approve => "approve",
            EventName::Boot => "boot",
            EventName::Create => "create",
            EventName::Delete => "delete",
            EventName::Erase => "erase",
            EventName::Focus => "focus",
            EventName::Install => "install",
            EventName::Launch => "launch",
            EventName::List => "list",
            EventName::ListApps => "list_apps",
            EventName::ListDeviceSets => "list_device_sets",
            EventName::Listen => "listen",
            EventName::Open => "open",
            EventName::Record => "record",
            EventName::SetLocation => "set_location",
            EventName::Shutdown => "shutdown",
            EventName::Terminate => "terminate",
            EventName::Uninstall => "uninstall",
            EventName::WatchdogOverride => "watchdog_override",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
