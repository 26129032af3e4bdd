/// League endpoints
pub mod league;
/// Project, material and line item endpoints
pub mod project;
/// Referral and wait list endpoints
pub mod referral;
/// User account endpoints
pub mod user;
