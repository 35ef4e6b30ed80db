//! JSON REST API for Skillbase.
//!
//! Exposes an axum [`Router`] backed by any [`skillbase_core::store::SkillStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", skillbase_api::api_router(store.clone()))
//! ```

pub mod employee_skill_grades;
pub mod employees;
pub mod error;
pub mod job_profiles;
pub mod requests;
pub mod skill_grades;
pub mod skill_profiles;
pub mod skills;
pub mod views;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use skillbase_core::store::SkillStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SkillStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Employees
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route(
      "/employees/{id}",
      get(employees::get_one::<S>)
        .put(employees::update::<S>)
        .delete(employees::delete_one::<S>),
    )
    .route(
      "/employees/{id}/job-profiles",
      get(employees::job_profiles::<S>),
    )
    .route(
      "/employees/{id}/job-profiles/{jpId}",
      post(employees::assign_job_profile::<S>)
        .delete(employees::remove_job_profile::<S>),
    )
    .route(
      "/employees/{id}/skill-profiles",
      get(employees::skill_profiles::<S>),
    )
    .route(
      "/employees/{id}/skill-profiles/{spId}",
      post(employees::assign_skill_profile::<S>)
        .delete(employees::remove_skill_profile::<S>),
    )
    // Skill profiles
    .route(
      "/skill-profiles",
      get(skill_profiles::list::<S>).post(skill_profiles::create::<S>),
    )
    .route(
      "/skill-profiles/{id}",
      get(skill_profiles::get_one::<S>)
        .put(skill_profiles::update::<S>)
        .delete(skill_profiles::delete_one::<S>),
    )
    // Skills
    .route("/skills", get(skills::list::<S>).post(skills::create::<S>))
    .route(
      "/skills/{id}",
      get(skills::get_one::<S>)
        .put(skills::update::<S>)
        .delete(skills::delete_one::<S>),
    )
    .route("/skills/{id}/job-profiles", get(skills::job_profiles::<S>))
    .route(
      "/skills/{id}/job-profiles/{jpId}",
      post(skills::link_job_profile::<S>).delete(skills::unlink_job_profile::<S>),
    )
    // Skill grades
    .route(
      "/skill-grades",
      get(skill_grades::list::<S>).post(skill_grades::create::<S>),
    )
    .route(
      "/skill-grades/{id}",
      get(skill_grades::get_one::<S>)
        .put(skill_grades::update::<S>)
        .delete(skill_grades::delete_one::<S>),
    )
    // Job profiles
    .route(
      "/job-profiles",
      get(job_profiles::list::<S>).post(job_profiles::create::<S>),
    )
    .route(
      "/job-profiles/{id}",
      get(job_profiles::get_one::<S>)
        .put(job_profiles::update::<S>)
        .delete(job_profiles::delete_one::<S>),
    )
    .route("/job-profiles/{id}/skills", get(job_profiles::skills::<S>))
    // Employee skill grades
    .route(
      "/employee-skill-grades",
      get(employee_skill_grades::list::<S>).post(employee_skill_grades::create::<S>),
    )
    .route(
      "/employee-skill-grades/{id}",
      get(employee_skill_grades::get_one::<S>)
        .put(employee_skill_grades::update::<S>)
        .delete(employee_skill_grades::delete_one::<S>),
    )
    .with_state(store)
}

#[cfg(test)]
mod tests;
