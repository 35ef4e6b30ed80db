//! Read-time response projections.
//!
//! These shapes denormalize related names (employee, skill, grade code) at
//! read time; nothing here is stored. Each `assemble` performs the point
//! lookups it needs against the store.

use axum::{Json, response::{IntoResponse, Response}};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use skillbase_core::{
  Error as DomainError,
  assessment::EmployeeSkillGrade,
  grade::SkillGrade,
  page::{Page, PageRequest, SortDir},
  profile::JobProfile,
  skill::Skill,
  store::SkillStore,
};

use crate::error::ApiError;

// ─── Helpers shared by handlers ──────────────────────────────────────────────

pub(crate) fn page_request(
  page: Option<u32>,
  size: Option<u32>,
  sort: Option<SortDir>,
) -> PageRequest {
  PageRequest::new(
    page.unwrap_or(0),
    size.unwrap_or(PageRequest::DEFAULT_SIZE),
    sort.unwrap_or_default(),
  )
}

/// Either the full page envelope or just its content, per the caller's
/// `paginated` flag.
pub(crate) fn page_or_list<T: Serialize>(page: Page<T>, paginated: bool) -> Response {
  if paginated {
    Json(page).into_response()
  } else {
    Json(page.content).into_response()
  }
}

// ─── Skill ───────────────────────────────────────────────────────────────────

/// A skill together with the job profiles it belongs to and its grades.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
  pub id:           i64,
  pub name:         String,
  pub description:  Option<String>,
  pub job_profiles: Vec<JobProfile>,
  pub grades:       Vec<SkillGrade>,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   DateTime<Utc>,
}

impl SkillResponse {
  /// A freshly created skill has no links or grades yet; skip the fetches.
  /// An immediate re-read would produce the same empty lists.
  pub fn for_new(skill: Skill) -> Self {
    Self {
      id:           skill.id,
      name:         skill.name,
      description:  skill.description,
      job_profiles: Vec::new(),
      grades:       Vec::new(),
      created_at:   skill.created_at,
      updated_at:   skill.updated_at,
    }
  }

  pub async fn assemble<S: SkillStore>(store: &S, skill: Skill) -> Result<Self, ApiError> {
    let job_profiles = store
      .job_profiles_for_skill(skill.id)
      .await
      .map_err(ApiError::from_store)?;
    let grades = store
      .skill_grades_for_skill(skill.id)
      .await
      .map_err(ApiError::from_store)?;

    Ok(Self {
      id: skill.id,
      name: skill.name,
      description: skill.description,
      job_profiles,
      grades,
      created_at: skill.created_at,
      updated_at: skill.updated_at,
    })
  }
}

// ─── Skill grade ─────────────────────────────────────────────────────────────

/// A skill grade with its owning skill's name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGradeResponse {
  pub id:          i64,
  pub skill_id:    i64,
  pub skill_name:  String,
  pub code:        String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

impl SkillGradeResponse {
  pub async fn assemble<S: SkillStore>(
    store: &S,
    grade: SkillGrade,
  ) -> Result<Self, ApiError> {
    let skill = store
      .get_skill(grade.skill_id)
      .await
      .map_err(ApiError::from_store)?
      .ok_or_else(|| ApiError::from(DomainError::not_found("Skill", grade.skill_id)))?;

    Ok(Self {
      id:          grade.id,
      skill_id:    grade.skill_id,
      skill_name:  skill.name,
      code:        grade.code,
      description: grade.description,
      created_at:  grade.created_at,
      updated_at:  grade.updated_at,
    })
  }
}

// ─── Employee skill grade ────────────────────────────────────────────────────

/// An assessment with employee, reviewer, skill, and grade names attached.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSkillGradeResponse {
  pub id:                      i64,
  pub employee_id:             i64,
  pub employee_name:           String,
  pub skill_grade_id:          i64,
  pub grade_code:              String,
  pub skill_id:                i64,
  pub skill_name:              String,
  pub years_of_experience:     Option<i32>,
  pub last_used_date:          Option<NaiveDate>,
  pub certified:               bool,
  pub employee_comment:        Option<String>,
  pub reviewed_by_employee_id: Option<i64>,
  pub reviewer_name:           Option<String>,
  pub reviewer_comment:        Option<String>,
  pub created_at:              DateTime<Utc>,
  pub updated_at:              DateTime<Utc>,
}

impl EmployeeSkillGradeResponse {
  pub async fn assemble<S: SkillStore>(
    store: &S,
    esg: EmployeeSkillGrade,
  ) -> Result<Self, ApiError> {
    let employee = store
      .get_employee(esg.employee_id)
      .await
      .map_err(ApiError::from_store)?
      .ok_or_else(|| {
        ApiError::from(DomainError::not_found("Employee", esg.employee_id))
      })?;
    let grade = store
      .get_skill_grade(esg.skill_grade_id)
      .await
      .map_err(ApiError::from_store)?
      .ok_or_else(|| {
        ApiError::from(DomainError::not_found("Skill grade", esg.skill_grade_id))
      })?;
    let skill = store
      .get_skill(grade.skill_id)
      .await
      .map_err(ApiError::from_store)?
      .ok_or_else(|| ApiError::from(DomainError::not_found("Skill", grade.skill_id)))?;

    let reviewer_name = match esg.reviewed_by_employee_id {
      Some(reviewer_id) => store
        .get_employee(reviewer_id)
        .await
        .map_err(ApiError::from_store)?
        .map(|r| r.full_name()),
      None => None,
    };

    Ok(Self {
      id: esg.id,
      employee_id: esg.employee_id,
      employee_name: employee.full_name(),
      skill_grade_id: esg.skill_grade_id,
      grade_code: grade.code,
      skill_id: skill.id,
      skill_name: skill.name,
      years_of_experience: esg.years_of_experience,
      last_used_date: esg.last_used_date,
      certified: esg.certified,
      employee_comment: esg.employee_comment,
      reviewed_by_employee_id: esg.reviewed_by_employee_id,
      reviewer_name,
      reviewer_comment: esg.reviewer_comment,
      created_at: esg.created_at,
      updated_at: esg.updated_at,
    })
  }
}
