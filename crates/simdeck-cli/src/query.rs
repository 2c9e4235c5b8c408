//! Selection of the simulators and devices a command applies to.
//!
//! A query is a union of per-field criteria. Repeating a criterion adds to
//! its set; the sets deduplicate while preserving the order the command
//! line mentioned them in.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;
use simdeck_lib::Accumulator;

/// Lifecycle state a target can be matched against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetState {
    Creating,
    Shutdown,
    Booting,
    Booted,
    ShuttingDown,
}

impl TargetState {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetState::Creating => "creating",
            TargetState::Shutdown => "shutdown",
            TargetState::Booting => "booting",
            TargetState::Booted => "booted",
            TargetState::ShuttingDown => "shutting-down",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Simulator,
    Device,
}

impl TargetType {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::Simulator => "simulator",
            TargetType::Device => "device",
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Arch {
    #[serde(rename = "arm64")]
    Arm64,
    #[serde(rename = "x86_64")]
    X86_64,
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::X86_64 => "x86_64",
        }
    }
}

/// Device models the fleet knows how to create and match.
pub const MODELS: [&str; 6] = [
    "phone-mini",
    "phone-pro",
    "phone-standard",
    "tablet-pro",
    "tablet-standard",
    "watch-standard",
];

/// OS versions the fleet knows how to create and match.
pub const OS_VERSIONS: [&str; 5] = ["os-11.0", "os-12.0", "os-12.4", "os-13.0", "os-13.3"];

/// Which targets a command applies to. The default matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Query {
    pub udids: IndexSet<String>,
    pub names: IndexSet<String>,
    pub states: IndexSet<TargetState>,
    pub target_types: IndexSet<TargetType>,
    pub archs: IndexSet<Arch>,
    pub os_versions: IndexSet<String>,
    pub models: IndexSet<String>,
    pub first: Option<usize>,
}

impl Query {
    /// The unconstrained query.
    pub fn all() -> Query {
        Query::default()
    }

    pub fn is_all(&self) -> bool {
        *self == Query::all()
    }

    pub fn udid(udid: impl Into<String>) -> Query {
        Query {
            udids: IndexSet::from([udid.into()]),
            ..Query::default()
        }
    }

    pub fn named(name: impl Into<String>) -> Query {
        Query {
            names: IndexSet::from([name.into()]),
            ..Query::default()
        }
    }

    pub fn state(state: TargetState) -> Query {
        Query {
            states: IndexSet::from([state]),
            ..Query::default()
        }
    }

    pub fn target_type(target_type: TargetType) -> Query {
        Query {
            target_types: IndexSet::from([target_type]),
            ..Query::default()
        }
    }

    pub fn arch(arch: Arch) -> Query {
        Query {
            archs: IndexSet::from([arch]),
            ..Query::default()
        }
    }

    pub fn os_version(os_version: impl Into<String>) -> Query {
        Query {
            os_versions: IndexSet::from([os_version.into()]),
            ..Query::default()
        }
    }

    pub fn model(model: impl Into<String>) -> Query {
        Query {
            models: IndexSet::from([model.into()]),
            ..Query::default()
        }
    }

    /// Keep only the first `count` matches.
    pub fn of_count(count: usize) -> Query {
        Query {
            first: Some(count),
            ..Query::default()
        }
    }
}

impl Accumulator for Query {
    fn append(mut self, other: Query) -> Query {
        self.udids.extend(other.udids);
        self.names.extend(other.names);
        self.states.extend(other.states);
        self.target_types.extend(other.target_types);
        self.archs.extend(other.archs);
        self.os_versions.extend(other.os_versions);
        self.models.extend(other.models);
        self.first = other.first.or(self.first);
        self
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str("all");
        }
        let mut parts = Vec::new();
        parts.extend(self.udids.iter().map(|udid| format!("udid={udid}")));
        parts.extend(self.names.iter().map(|name| format!("name={name}")));
        parts.extend(
            self.states
                .iter()
                .map(|state| format!("state={}", state.as_str())),
        );
        parts.extend(
            self.target_types
                .iter()
                .map(|target_type| format!("type={}", target_type.as_str())),
        );
        parts.extend(self.archs.iter().map(|arch| format!("arch={}", arch.as_str())));
        parts.extend(self.os_versions.iter().map(|os| format!("os={os}")));
        parts.extend(self.models.iter().map(|model| format!("model={model}")));
        if let Some(first) = self.first {
            parts.push(format!("first={first}"));
        }
        f.write_str(&parts.join(" "))
    }
}
