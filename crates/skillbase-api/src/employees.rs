//! Handlers for `/employees` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/employees` | Paged; `?search=`, `?department=`, `?position=` |
//! | `POST` | `/employees` | 201; 409 on duplicate email |
//! | `GET`/`PUT`/`DELETE` | `/employees/{id}` | DELETE responds 204 |
//! | `GET`  | `/employees/{id}/job-profiles` | |
//! | `POST`/`DELETE` | `/employees/{id}/job-profiles/{jpId}` | 204 |
//! | `GET`  | `/employees/{id}/skill-profiles` | |
//! | `POST`/`DELETE` | `/employees/{id}/skill-profiles/{spId}` | 204 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use skillbase_core::{
  Error as DomainError,
  employee::Employee,
  page::{Page, SortDir},
  profile::{JobProfile, SkillProfile},
  store::SkillStore,
};

use crate::{error::ApiError, requests::EmployeeBody, views::page_request};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub page:       Option<u32>,
  pub size:       Option<u32>,
  pub sort:       Option<SortDir>,
  pub search:     Option<String>,
  pub department: Option<String>,
  pub position:   Option<String>,
}

/// `GET /employees` — always paged. `search` wins over the field filters.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Page<Employee>>, ApiError>
where
  S: SkillStore,
{
  let page = page_request(params.page, params.size, params.sort);

  let result = if let Some(term) = &params.search {
    store.search_employees(term, page).await
  } else if let Some(department) = &params.department {
    store.employees_by_department(department, page).await
  } else if let Some(position) = &params.position {
    store.employees_by_position(position, page).await
  } else {
    store.list_employees(page).await
  };

  Ok(Json(result.map_err(ApiError::from_store)?))
}

/// `POST /employees`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<EmployeeBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: SkillStore,
{
  let input = body.validate()?;
  let employee = store
    .create_employee(input)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(employee)))
}

/// `GET /employees/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Employee>, ApiError>
where
  S: SkillStore,
{
  let employee = store
    .get_employee(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::from(DomainError::not_found("Employee", id)))?;
  Ok(Json(employee))
}

/// `PUT /employees/{id}` — full replace of mutable fields.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<EmployeeBody>,
) -> Result<Json<Employee>, ApiError>
where
  S: SkillStore,
{
  let input = body.validate()?;
  let employee = store
    .update_employee(id, input)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(employee))
}

/// `DELETE /employees/{id}` — 409 while dependents exist.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store.delete_employee(id).await.map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Job profile assignments ─────────────────────────────────────────────────

/// `GET /employees/{id}/job-profiles`
pub async fn job_profiles<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<JobProfile>>, ApiError>
where
  S: SkillStore,
{
  let profiles = store
    .job_profiles_for_employee(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(profiles))
}

/// `POST /employees/{id}/job-profiles/{jpId}`
pub async fn assign_job_profile<S>(
  State(store): State<Arc<S>>,
  Path((id, job_profile_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .assign_job_profile(id, job_profile_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /employees/{id}/job-profiles/{jpId}`
pub async fn remove_job_profile<S>(
  State(store): State<Arc<S>>,
  Path((id, job_profile_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .unassign_job_profile(id, job_profile_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Skill profile assignments ───────────────────────────────────────────────

/// `GET /employees/{id}/skill-profiles`
pub async fn skill_profiles<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<Vec<SkillProfile>>, ApiError>
where
  S: SkillStore,
{
  let profiles = store
    .skill_profiles_for_employee(id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(profiles))
}

/// `POST /employees/{id}/skill-profiles/{spId}`
pub async fn assign_skill_profile<S>(
  State(store): State<Arc<S>>,
  Path((id, skill_profile_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .assign_skill_profile(id, skill_profile_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /employees/{id}/skill-profiles/{spId}`
pub async fn remove_skill_profile<S>(
  State(store): State<Arc<S>>,
  Path((id, skill_profile_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
  S: SkillStore,
{
  store
    .unassign_skill_profile(id, skill_profile_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}
