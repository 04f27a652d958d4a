//! Routed pages

pub mod contact;
pub mod hackathon;
pub mod home;
pub mod judges;
pub mod not_found;
pub mod problem_statements;
pub mod register;
pub mod sponsors;
