pub mod eligibility;
pub mod model;
pub mod report;
pub mod repository;
