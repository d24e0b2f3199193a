//! Static data layer for the education dashboard
//!
//! Every table is a compiled-in `static` with no lifecycle: nothing here is
//! ever mutated. Lookups return `Option`; deciding what to render for a
//! missing key is left to the caller.

pub mod complaints;
pub mod education;
pub mod portfolio;
pub mod validation;

pub use complaints::{
    ambit_color, month_name, region_name, status_color, status_name, ComplaintsByAmbit,
    ComplaintsByMonth, ComplaintsByRegion, ComplaintsByStatus, ComplaintsByTopic,
    ComplaintsSummary,
};
pub use education::{institution, CareerDemand, EnrollmentTrend, Institution, InstitutionKind};
pub use portfolio::{featured_projects, project, Profile, Project, ProjectCategory, PROFILE};
pub use validation::{validate_datasets, DatasetValidationResult};
