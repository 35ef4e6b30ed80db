//! Request payloads and their field validation.
//!
//! Every field arrives optional so missing and null inputs report as
//! validation failures instead of deserialization errors. A payload is
//! converted to its core input type only after every rule has run; all
//! violations are reported together.

use chrono::NaiveDate;
use serde::Deserialize;
use skillbase_core::{
  assessment::NewEmployeeSkillGrade,
  employee::NewEmployee,
  grade::NewSkillGrade,
  profile::{NewJobProfile, NewSkillProfile},
  skill::NewSkill,
  validate::{
    EMAIL_MAX, GRADE_CODE_MAX, GRADE_DESCRIPTION_MAX, NAME_MAX, Violations,
  },
};

use crate::error::ApiError;

// ─── Employee ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeBody {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
  pub department: Option<String>,
  pub position:   Option<String>,
}

impl EmployeeBody {
  pub fn validate(self) -> Result<NewEmployee, ApiError> {
    let mut v = Violations::new();
    v.required_string("firstName", self.first_name.as_deref(), "First name");
    v.max_len("firstName", self.first_name.as_deref(), NAME_MAX, "First name");
    v.required_string("lastName", self.last_name.as_deref(), "Last name");
    v.max_len("lastName", self.last_name.as_deref(), NAME_MAX, "Last name");
    if v.required_string("email", self.email.as_deref(), "Email") {
      v.email_shape("email", self.email.as_deref());
    }
    v.max_len("email", self.email.as_deref(), EMAIL_MAX, "Email");
    v.max_len("department", self.department.as_deref(), NAME_MAX, "Department");
    v.max_len("position", self.position.as_deref(), NAME_MAX, "Position");
    v.finish()?;

    Ok(NewEmployee {
      first_name: self.first_name.unwrap_or_default(),
      last_name:  self.last_name.unwrap_or_default(),
      email:      self.email.unwrap_or_default(),
      department: self.department,
      position:   self.position,
    })
  }
}

// ─── Name-keyed catalogs ─────────────────────────────────────────────────────

/// Shared payload for skills, skill profiles, and job profiles.
#[derive(Debug, Deserialize)]
pub struct CatalogBody {
  pub name:        Option<String>,
  pub description: Option<String>,
}

impl CatalogBody {
  fn checked(self) -> Result<(String, Option<String>), ApiError> {
    let mut v = Violations::new();
    v.required_string("name", self.name.as_deref(), "Name");
    v.max_len("name", self.name.as_deref(), NAME_MAX, "Name");
    v.finish()?;
    Ok((self.name.unwrap_or_default(), self.description))
  }

  pub fn into_skill(self) -> Result<NewSkill, ApiError> {
    let (name, description) = self.checked()?;
    Ok(NewSkill { name, description })
  }

  pub fn into_skill_profile(self) -> Result<NewSkillProfile, ApiError> {
    let (name, description) = self.checked()?;
    Ok(NewSkillProfile { name, description })
  }

  pub fn into_job_profile(self) -> Result<NewJobProfile, ApiError> {
    let (name, description) = self.checked()?;
    Ok(NewJobProfile { name, description })
  }
}

// ─── Skill grade ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeBody {
  pub skill_id:    Option<i64>,
  pub code:        Option<String>,
  pub description: Option<String>,
}

impl GradeBody {
  pub fn validate(self) -> Result<NewSkillGrade, ApiError> {
    let mut v = Violations::new();
    v.required_id("skillId", self.skill_id, "Skill id");
    v.required_string("code", self.code.as_deref(), "Code");
    v.max_len("code", self.code.as_deref(), GRADE_CODE_MAX, "Code");
    v.max_len(
      "description",
      self.description.as_deref(),
      GRADE_DESCRIPTION_MAX,
      "Description",
    );
    v.finish()?;

    Ok(NewSkillGrade {
      skill_id:    self.skill_id.unwrap_or_default(),
      code:        self.code.unwrap_or_default(),
      description: self.description,
    })
  }
}

// ─── Employee skill grade ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentBody {
  pub employee_id:             Option<i64>,
  pub skill_grade_id:          Option<i64>,
  pub years_of_experience:     Option<i32>,
  pub last_used_date:          Option<NaiveDate>,
  pub certified:               Option<bool>,
  pub employee_comment:        Option<String>,
  pub reviewed_by_employee_id: Option<i64>,
  pub reviewer_comment:        Option<String>,
}

impl AssessmentBody {
  pub fn validate(self) -> Result<NewEmployeeSkillGrade, ApiError> {
    let mut v = Violations::new();
    v.required_id("employeeId", self.employee_id, "Employee id");
    v.required_id("skillGradeId", self.skill_grade_id, "Skill grade id");
    v.non_negative(
      "yearsOfExperience",
      self.years_of_experience,
      "Years of experience",
    );
    v.finish()?;

    Ok(NewEmployeeSkillGrade {
      employee_id:             self.employee_id.unwrap_or_default(),
      skill_grade_id:          self.skill_grade_id.unwrap_or_default(),
      years_of_experience:     self.years_of_experience,
      last_used_date:          self.last_used_date,
      certified:               self.certified.unwrap_or(false),
      employee_comment:        self.employee_comment,
      reviewed_by_employee_id: self.reviewed_by_employee_id,
      reviewer_comment:        self.reviewer_comment,
    })
  }
}
