//! Session-wide configuration parsed ahead of any action.

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use simdeck_lib::Accumulator;

/// Serializes a flag set as the list of set flag names.
pub(crate) fn flag_names<F, S>(flags: &F, serializer: S) -> Result<S::Ok, S::Error>
where
    F: bitflags::Flags,
    S: Serializer,
{
    serializer.collect_seq(flags.iter_names().map(|(name, _)| name))
}

bitflags! {
    /// How results and diagnostics are written back to the caller.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct OutputOptions: u32 {
        /// Log every step of command handling.
        const DEBUG_LOGGING = 1 << 0;
        /// Machine-readable JSON output.
        const JSON = 1 << 1;
        /// Indented JSON output.
        const PRETTY = 1 << 2;
    }
}

bitflags! {
    /// Housekeeping applied to the simulator fleet around a command.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ManagementOptions: u32 {
        /// Delete every simulator in the set before running.
        const DELETE_ALL = 1 << 0;
        /// Kill every running simulator in the set before running.
        const KILL_ALL = 1 << 1;
        /// Kill simulator processes that do not belong to the set.
        const KILL_SPURIOUS = 1 << 2;
        /// Carry on when killing spurious simulators fails.
        const IGNORE_SPURIOUS_KILL_FAIL = 1 << 3;
        /// Also kill lingering simulator background services.
        const KILL_SPURIOUS_SERVICES = 1 << 4;
    }
}

bitflags! {
    /// Tweaks to how a simulator is brought up.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct BootOptions: u32 {
        /// Connect the inter-process bridge after boot.
        const CONNECT_BRIDGE = 1 << 0;
        /// Launch the simulator process directly instead of via the app.
        const DIRECT_LAUNCH = 1 << 1;
        /// Attach the simulator to the current workspace.
        const USE_WORKSPACE = 1 << 2;
    }
}

bitflags! {
    /// Streams of a launched app relayed back to the caller.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct OutputRedirection: u32 {
        /// Relay standard output.
        const STDOUT = 1 << 0;
        /// Relay standard error.
        const STDERR = 1 << 1;
    }
}

/// Options that apply to a whole invocation, before any action keyword.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Configuration {
    #[serde(serialize_with = "flag_names")]
    pub output: OutputOptions,
    #[serde(serialize_with = "flag_names")]
    pub management: ManagementOptions,
    pub device_set_path: Option<String>,
}

impl Accumulator for Configuration {
    fn append(self, other: Configuration) -> Configuration {
        Configuration {
            output: self.output | other.output,
            management: self.management | other.management,
            device_set_path: other.device_set_path.or(self.device_set_path),
        }
    }
}

/// Display scale applied to a booted simulator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Scale {
    #[serde(rename = "25")]
    Quarter,
    #[serde(rename = "50")]
    Half,
    #[serde(rename = "75")]
    ThreeQuarters,
    #[serde(rename = "100")]
    Full,
}

/// Everything `boot` accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BootConfiguration {
    #[serde(serialize_with = "flag_names")]
    pub options: BootOptions,
    pub scale: Option<Scale>,
    pub locale: Option<String>,
}

impl Accumulator for BootConfiguration {
    fn append(self, other: BootConfiguration) -> BootConfiguration {
        BootConfiguration {
            options: self.options | other.options,
            scale: other.scale.or(self.scale),
            locale: other.locale.or(self.locale),
        }
    }
}

/// Properties of simulators to create. Fields left `None` fall back to the
/// device set's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CreationConfiguration {
    pub os: Option<String>,
    pub model: Option<String>,
    pub aux_directory: Option<String>,
}

impl Accumulator for CreationConfiguration {
    fn append(self, other: CreationConfiguration) -> CreationConfiguration {
        CreationConfiguration {
            os: other.os.or(self.os),
            model: other.model.or(self.model),
            aux_directory: other.aux_directory.or(self.aux_directory),
        }
    }
}
