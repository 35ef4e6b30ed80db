//! The `SkillStore` trait — the persistence contract for every entity and
//! association in the system.
//!
//! The trait is implemented by storage backends (e.g.
//! `skillbase-store-sqlite`). The HTTP layer depends on this abstraction,
//! not on any concrete backend.
//!
//! Contract rules shared by every implementation:
//!
//! - `get_*` returns `Ok(None)` when no row matches; callers decide whether
//!   that is a NotFound condition.
//! - `create_*` pre-checks the relevant uniqueness predicate (Conflict) and
//!   validates the existence of every referenced entity (NotFound) before
//!   inserting, stamps both timestamps, and returns the full record.
//! - `update_*` re-resolves the target by id (NotFound), re-checks the
//!   uniqueness predicate only when the unique field actually changed
//!   (Conflict against a different row), replaces all mutable fields, and
//!   refreshes `updated_at`.
//! - `delete_*` fails NotFound if the row is absent and Conflict if
//!   dependent child rows or link rows still reference it.
//! - Mutations execute as a single atomic transaction against the backend.
//!
//! All methods return `Send` futures so the trait can be used from
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use crate::{
  assessment::{EmployeeSkillGrade, NewEmployeeSkillGrade},
  employee::{Employee, NewEmployee},
  error::StoreError,
  grade::{NewSkillGrade, SkillGrade},
  page::{Page, PageRequest},
  profile::{JobProfile, NewJobProfile, NewSkillProfile, SkillProfile},
  skill::{NewSkill, Skill},
};

pub trait SkillStore: Send + Sync {
  type Error: StoreError;

  // ── Employees ─────────────────────────────────────────────────────────

  fn create_employee(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  fn get_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  fn find_employee_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + 'a;

  fn list_employees(
    &self,
    page: PageRequest,
  ) -> impl Future<Output = Result<Page<Employee>, Self::Error>> + Send + '_;

  /// Case-insensitive substring match against first name, last name, or
  /// email, OR-unioned across the three fields.
  fn search_employees<'a>(
    &'a self,
    term: &'a str,
    page: PageRequest,
  ) -> impl Future<Output = Result<Page<Employee>, Self::Error>> + Send + 'a;

  fn employees_by_department<'a>(
    &'a self,
    department: &'a str,
    page: PageRequest,
  ) -> impl Future<Output = Result<Page<Employee>, Self::Error>> + Send + 'a;

  fn employees_by_position<'a>(
    &'a self,
    position: &'a str,
    page: PageRequest,
  ) -> impl Future<Output = Result<Page<Employee>, Self::Error>> + Send + 'a;

  fn update_employee(
    &self,
    id: i64,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  fn delete_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Skill profiles ────────────────────────────────────────────────────

  fn create_skill_profile(
    &self,
    input: NewSkillProfile,
  ) -> impl Future<Output = Result<SkillProfile, Self::Error>> + Send + '_;

  fn get_skill_profile(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<SkillProfile>, Self::Error>> + Send + '_;

  /// `None` returns every row as a single page.
  fn list_skill_profiles(
    &self,
    page: Option<PageRequest>,
  ) -> impl Future<Output = Result<Page<SkillProfile>, Self::Error>> + Send + '_;

  fn update_skill_profile(
    &self,
    id: i64,
    input: NewSkillProfile,
  ) -> impl Future<Output = Result<SkillProfile, Self::Error>> + Send + '_;

  fn delete_skill_profile(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Skills ────────────────────────────────────────────────────────────

  fn create_skill(
    &self,
    input: NewSkill,
  ) -> impl Future<Output = Result<Skill, Self::Error>> + Send + '_;

  fn get_skill(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Skill>, Self::Error>> + Send + '_;

  fn list_skills(
    &self,
    page: Option<PageRequest>,
  ) -> impl Future<Output = Result<Page<Skill>, Self::Error>> + Send + '_;

  fn update_skill(
    &self,
    id: i64,
    input: NewSkill,
  ) -> impl Future<Output = Result<Skill, Self::Error>> + Send + '_;

  fn delete_skill(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Skill grades ──────────────────────────────────────────────────────

  fn create_skill_grade(
    &self,
    input: NewSkillGrade,
  ) -> impl Future<Output = Result<SkillGrade, Self::Error>> + Send + '_;

  fn get_skill_grade(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<SkillGrade>, Self::Error>> + Send + '_;

  fn list_skill_grades(
    &self,
    page: Option<PageRequest>,
  ) -> impl Future<Output = Result<Page<SkillGrade>, Self::Error>> + Send + '_;

  /// NotFound if the skill itself is absent.
  fn skill_grades_for_skill(
    &self,
    skill_id: i64,
  ) -> impl Future<Output = Result<Vec<SkillGrade>, Self::Error>> + Send + '_;

  fn update_skill_grade(
    &self,
    id: i64,
    input: NewSkillGrade,
  ) -> impl Future<Output = Result<SkillGrade, Self::Error>> + Send + '_;

  fn delete_skill_grade(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Job profiles ──────────────────────────────────────────────────────

  fn create_job_profile(
    &self,
    input: NewJobProfile,
  ) -> impl Future<Output = Result<JobProfile, Self::Error>> + Send + '_;

  fn get_job_profile(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<JobProfile>, Self::Error>> + Send + '_;

  fn list_job_profiles(
    &self,
    page: Option<PageRequest>,
  ) -> impl Future<Output = Result<Page<JobProfile>, Self::Error>> + Send + '_;

  fn update_job_profile(
    &self,
    id: i64,
    input: NewJobProfile,
  ) -> impl Future<Output = Result<JobProfile, Self::Error>> + Send + '_;

  fn delete_job_profile(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Employee skill grades ─────────────────────────────────────────────

  fn create_employee_skill_grade(
    &self,
    input: NewEmployeeSkillGrade,
  ) -> impl Future<Output = Result<EmployeeSkillGrade, Self::Error>> + Send + '_;

  fn get_employee_skill_grade(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<EmployeeSkillGrade>, Self::Error>> + Send + '_;

  fn list_employee_skill_grades(
    &self,
    page: Option<PageRequest>,
  ) -> impl Future<Output = Result<Page<EmployeeSkillGrade>, Self::Error>> + Send + '_;

  /// NotFound if the employee is absent.
  fn employee_skill_grades_for_employee(
    &self,
    employee_id: i64,
  ) -> impl Future<Output = Result<Vec<EmployeeSkillGrade>, Self::Error>> + Send + '_;

  /// NotFound if the skill grade is absent.
  fn employee_skill_grades_for_skill_grade(
    &self,
    skill_grade_id: i64,
  ) -> impl Future<Output = Result<Vec<EmployeeSkillGrade>, Self::Error>> + Send + '_;

  fn update_employee_skill_grade(
    &self,
    id: i64,
    input: NewEmployeeSkillGrade,
  ) -> impl Future<Output = Result<EmployeeSkillGrade, Self::Error>> + Send + '_;

  fn delete_employee_skill_grade(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Associations: Employee × JobProfile ───────────────────────────────

  fn job_profiles_for_employee(
    &self,
    employee_id: i64,
  ) -> impl Future<Output = Result<Vec<JobProfile>, Self::Error>> + Send + '_;

  fn assign_job_profile(
    &self,
    employee_id: i64,
    job_profile_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn unassign_job_profile(
    &self,
    employee_id: i64,
    job_profile_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Associations: Employee × SkillProfile ─────────────────────────────

  fn skill_profiles_for_employee(
    &self,
    employee_id: i64,
  ) -> impl Future<Output = Result<Vec<SkillProfile>, Self::Error>> + Send + '_;

  fn assign_skill_profile(
    &self,
    employee_id: i64,
    skill_profile_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn unassign_skill_profile(
    &self,
    employee_id: i64,
    skill_profile_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Associations: JobProfile × Skill (queryable from both sides) ──────

  fn skills_for_job_profile(
    &self,
    job_profile_id: i64,
  ) -> impl Future<Output = Result<Vec<Skill>, Self::Error>> + Send + '_;

  fn job_profiles_for_skill(
    &self,
    skill_id: i64,
  ) -> impl Future<Output = Result<Vec<JobProfile>, Self::Error>> + Send + '_;

  fn link_job_profile_skill(
    &self,
    job_profile_id: i64,
    skill_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  fn unlink_job_profile_skill(
    &self,
    job_profile_id: i64,
    skill_id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
