use serde::{Deserialize, Serialize};

/// API plane a specification folder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Plane {
    /// Control plane (ARM-style `resource-manager` APIs)
    Management,

    /// Runtime service APIs
    Data,
}

impl Plane {
    /// Human readable label used in reason strings.
    pub fn label(&self) -> &'static str {
        match self {
            Plane::Management => "management plane",
            Plane::Data => "data plane",
        }
    }
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Plane::Management => write!(f, "Management"),
            Plane::Data => write!(f, "Data"),
        }
    }
}

/// A pair of counts split by plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneCounts {
    pub management: usize,
    pub data: usize,
}

impl PlaneCounts {
    pub fn add(&mut self, plane: Plane) {
        match plane {
            Plane::Management => self.management += 1,
            Plane::Data => self.data += 1,
        }
    }

    pub fn get(&self, plane: Plane) -> usize {
        match plane {
            Plane::Management => self.management,
            Plane::Data => self.data,
        }
    }

    pub fn total(&self) -> usize {
        self.management + self.data
    }
}
