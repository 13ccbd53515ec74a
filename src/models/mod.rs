pub mod plane;
pub mod record;
pub mod summary;
pub mod verdict;

pub use plane::{Plane, PlaneCounts};
pub use record::{NonCompliantFolder, OrganizationRecord};
pub use summary::{Summary, SummaryAccumulator};
pub use verdict::{Anchor, ComplianceVerdict, Violation};
