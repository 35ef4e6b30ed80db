//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use skillbase_core::{
  Error as CoreError,
  assessment::NewEmployeeSkillGrade,
  employee::NewEmployee,
  grade::NewSkillGrade,
  page::{PageRequest, SortDir},
  profile::{NewJobProfile, NewSkillProfile},
  skill::NewSkill,
  store::SkillStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory().await.expect("in-memory store")
}

fn employee(first: &str, last: &str, email: &str) -> NewEmployee {
  NewEmployee {
    first_name: first.into(),
    last_name:  last.into(),
    email:      email.into(),
    department: Some("Engineering".into()),
    position:   Some("Developer".into()),
  }
}

fn skill(name: &str) -> NewSkill {
  NewSkill { name: name.into(), description: None }
}

fn grade(skill_id: i64, code: &str) -> NewSkillGrade {
  NewSkillGrade { skill_id, code: code.into(), description: None }
}

fn assessment(employee_id: i64, skill_grade_id: i64) -> NewEmployeeSkillGrade {
  NewEmployeeSkillGrade {
    employee_id,
    skill_grade_id,
    years_of_experience: Some(3),
    last_used_date: NaiveDate::from_ymd_opt(2025, 6, 1),
    certified: false,
    employee_comment: None,
    reviewed_by_employee_id: None,
    reviewer_comment: None,
  }
}

fn is_conflict(err: &Error) -> bool {
  matches!(err, Error::Domain(CoreError::Conflict(_)))
}

fn is_not_found(err: &Error) -> bool {
  matches!(err, Error::Domain(CoreError::NotFound(_)))
}

// ─── Employees ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_employee() {
  let s = store().await;

  let created = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  assert_eq!(created.first_name, "Ada");
  assert_eq!(created.email, "ada@example.com");
  assert_eq!(created.created_at, created.updated_at);

  let fetched = s.get_employee(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_employee_missing_returns_none() {
  let s = store().await;
  assert!(s.get_employee(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_conflicts() {
  let s = store().await;
  s.create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();

  let err = s
    .create_employee(employee("Augusta", "King", "ada@example.com"))
    .await
    .unwrap_err();
  assert!(is_conflict(&err));
  assert!(err.to_string().contains("ada@example.com"));
}

#[tokio::test]
async fn find_employee_by_email() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();

  let found = s.find_employee_by_email("ada@example.com").await.unwrap();
  assert_eq!(found.map(|e| e.id), Some(ada.id));
  assert!(s.find_employee_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn update_employee_keeps_own_email() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();

  // Same email on the same record is not a collision.
  let updated = s
    .update_employee(ada.id, employee("Ada", "King", "ada@example.com"))
    .await
    .unwrap();
  assert_eq!(updated.last_name, "King");
  assert_eq!(updated.created_at, ada.created_at);
  assert!(updated.updated_at >= ada.updated_at);
}

#[tokio::test]
async fn update_employee_to_taken_email_conflicts() {
  let s = store().await;
  s.create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let grace = s
    .create_employee(employee("Grace", "Hopper", "grace@example.com"))
    .await
    .unwrap();

  let err = s
    .update_employee(grace.id, employee("Grace", "Hopper", "ada@example.com"))
    .await
    .unwrap_err();
  assert!(is_conflict(&err));
}

#[tokio::test]
async fn update_missing_employee_not_found() {
  let s = store().await;
  let err = s
    .update_employee(404, employee("No", "Body", "nobody@example.com"))
    .await
    .unwrap_err();
  assert!(is_not_found(&err));
  assert_eq!(err.to_string(), "Employee not found with id: 404");
}

#[tokio::test]
async fn delete_employee_and_missing() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();

  s.delete_employee(ada.id).await.unwrap();
  assert!(s.get_employee(ada.id).await.unwrap().is_none());

  let err = s.delete_employee(ada.id).await.unwrap_err();
  assert!(is_not_found(&err));
}

#[tokio::test]
async fn delete_employee_with_assessments_blocked() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let l1 = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();
  s.create_employee_skill_grade(assessment(ada.id, l1.id)).await.unwrap();

  let err = s.delete_employee(ada.id).await.unwrap_err();
  assert!(is_conflict(&err));
}

// ─── Employee listing, search, filters ───────────────────────────────────────

async fn seed_employees(s: &SqliteStore) {
  s.create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  s.create_employee(NewEmployee {
    department: Some("Research".into()),
    ..employee("Grace", "Hopper", "grace@example.com")
  })
  .await
  .unwrap();
  s.create_employee(NewEmployee {
    position: Some("Manager".into()),
    ..employee("Alan", "Turing", "alan@example.com")
  })
  .await
  .unwrap();
}

#[tokio::test]
async fn list_employees_pages_and_counts() {
  let s = store().await;
  seed_employees(&s).await;

  let page = s
    .list_employees(PageRequest::new(0, 2, SortDir::Asc))
    .await
    .unwrap();
  assert_eq!(page.content.len(), 2);
  assert_eq!(page.total_elements, 3);
  assert_eq!(page.total_pages, 2);
  assert_eq!(page.content[0].first_name, "Ada");

  let last = s
    .list_employees(PageRequest::new(1, 2, SortDir::Asc))
    .await
    .unwrap();
  assert_eq!(last.content.len(), 1);
  assert_eq!(last.content[0].first_name, "Alan");
}

#[tokio::test]
async fn list_employees_desc_reverses_order() {
  let s = store().await;
  seed_employees(&s).await;

  let page = s
    .list_employees(PageRequest::new(0, 10, SortDir::Desc))
    .await
    .unwrap();
  assert_eq!(page.content[0].first_name, "Alan");
  assert_eq!(page.content[2].first_name, "Ada");
}

#[tokio::test]
async fn search_is_case_insensitive_across_fields() {
  let s = store().await;
  seed_employees(&s).await;

  // Matches "Lovelace" by last name, case-folded.
  let by_last = s
    .search_employees("LOVE", PageRequest::default())
    .await
    .unwrap();
  assert_eq!(by_last.content.len(), 1);
  assert_eq!(by_last.content[0].first_name, "Ada");

  // "a" appears in ada@, grace@, alan@ emails.
  let by_email = s
    .search_employees("example.com", PageRequest::default())
    .await
    .unwrap();
  assert_eq!(by_email.total_elements, 3);

  let none = s
    .search_employees("zzz", PageRequest::default())
    .await
    .unwrap();
  assert!(none.content.is_empty());
  assert_eq!(none.total_elements, 0);
}

#[tokio::test]
async fn search_treats_like_wildcards_literally() {
  let s = store().await;
  seed_employees(&s).await;
  s.create_employee(employee("Percy", "O'Percent", "100%legit@example.com"))
    .await
    .unwrap();

  // "%" must match the literal character, not every row.
  let percent = s
    .search_employees("100%", PageRequest::default())
    .await
    .unwrap();
  assert_eq!(percent.total_elements, 1);
  assert_eq!(percent.content[0].first_name, "Percy");

  // "_" must not act as a single-character wildcard.
  let underscore = s
    .search_employees("ad_", PageRequest::default())
    .await
    .unwrap();
  assert_eq!(underscore.total_elements, 0);
}

#[tokio::test]
async fn filter_by_department_and_position() {
  let s = store().await;
  seed_employees(&s).await;

  let eng = s
    .employees_by_department("Engineering", PageRequest::default())
    .await
    .unwrap();
  assert_eq!(eng.total_elements, 2);

  let managers = s
    .employees_by_position("Manager", PageRequest::default())
    .await
    .unwrap();
  assert_eq!(managers.total_elements, 1);
  assert_eq!(managers.content[0].first_name, "Alan");
}

// ─── Catalogs: skills, skill profiles, job profiles ──────────────────────────

#[tokio::test]
async fn skill_crud_roundtrip() {
  let s = store().await;

  let rust = s
    .create_skill(NewSkill {
      name:        "Rust".into(),
      description: Some("Systems programming".into()),
    })
    .await
    .unwrap();

  let fetched = s.get_skill(rust.id).await.unwrap().unwrap();
  assert_eq!(fetched.name, "Rust");
  assert_eq!(fetched.description.as_deref(), Some("Systems programming"));

  let updated = s
    .update_skill(rust.id, NewSkill { name: "Rust".into(), description: None })
    .await
    .unwrap();
  assert!(updated.description.is_none());

  s.delete_skill(rust.id).await.unwrap();
  assert!(s.get_skill(rust.id).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_skill_name_conflicts() {
  let s = store().await;
  s.create_skill(skill("Rust")).await.unwrap();

  let err = s.create_skill(skill("Rust")).await.unwrap_err();
  assert!(is_conflict(&err));
  assert_eq!(err.to_string(), "Skill with name Rust already exists");
}

#[tokio::test]
async fn rename_skill_onto_taken_name_conflicts() {
  let s = store().await;
  s.create_skill(skill("Rust")).await.unwrap();
  let go = s.create_skill(skill("Go")).await.unwrap();

  let err = s.update_skill(go.id, skill("Rust")).await.unwrap_err();
  assert!(is_conflict(&err));

  // Re-saving under its own name is fine.
  s.update_skill(go.id, skill("Go")).await.unwrap();
}

#[tokio::test]
async fn list_skills_paged_and_unpaged() {
  let s = store().await;
  for name in ["Rust", "Go", "Python"] {
    s.create_skill(skill(name)).await.unwrap();
  }

  let all = s.list_skills(None).await.unwrap();
  assert_eq!(all.content.len(), 3);
  assert_eq!(all.total_pages, 1);

  let paged = s
    .list_skills(Some(PageRequest::new(1, 2, SortDir::Asc)))
    .await
    .unwrap();
  assert_eq!(paged.content.len(), 1);
  assert_eq!(paged.total_elements, 3);
  assert_eq!(paged.content[0].name, "Python");
}

#[tokio::test]
async fn skill_profile_and_job_profile_uniqueness() {
  let s = store().await;

  s.create_skill_profile(NewSkillProfile {
    name:        "Backend".into(),
    description: None,
  })
  .await
  .unwrap();
  let err = s
    .create_skill_profile(NewSkillProfile {
      name:        "Backend".into(),
      description: None,
    })
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Skill profile with name Backend already exists");

  s.create_job_profile(NewJobProfile {
    name:        "Backend".into(),
    description: None,
  })
  .await
  .unwrap();
  let err = s
    .create_job_profile(NewJobProfile { name: "Backend".into(), description: None })
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Job profile with name Backend already exists");
}

// ─── Skill grades ────────────────────────────────────────────────────────────

#[tokio::test]
async fn grade_codes_unique_per_skill_only() {
  let s = store().await;
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let go = s.create_skill(skill("Go")).await.unwrap();

  s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();

  // Same code on a different skill is allowed.
  s.create_skill_grade(grade(go.id, "L1")).await.unwrap();

  let err = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap_err();
  assert!(is_conflict(&err));
  assert_eq!(
    err.to_string(),
    format!("Skill grade with code L1 already exists for skill id: {}", rust.id)
  );
}

#[tokio::test]
async fn grade_for_missing_skill_not_found() {
  let s = store().await;
  let err = s.create_skill_grade(grade(77, "L1")).await.unwrap_err();
  assert!(is_not_found(&err));
  assert_eq!(err.to_string(), "Skill not found with id: 77");
}

#[tokio::test]
async fn grades_for_skill_listing() {
  let s = store().await;
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();
  s.create_skill_grade(grade(rust.id, "L2")).await.unwrap();

  let grades = s.skill_grades_for_skill(rust.id).await.unwrap();
  assert_eq!(grades.len(), 2);
  assert_eq!(grades[0].code, "L1");

  let err = s.skill_grades_for_skill(404).await.unwrap_err();
  assert!(is_not_found(&err));
}

#[tokio::test]
async fn update_grade_code_within_skill() {
  let s = store().await;
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let l1 = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();
  s.create_skill_grade(grade(rust.id, "L2")).await.unwrap();

  // Renaming onto a sibling's code collides.
  let err = s.update_skill_grade(l1.id, grade(rust.id, "L2")).await.unwrap_err();
  assert!(is_conflict(&err));

  // Same code, changed description: no self-collision.
  let updated = s
    .update_skill_grade(l1.id, NewSkillGrade {
      skill_id:    rust.id,
      code:        "L1".into(),
      description: Some("Junior".into()),
    })
    .await
    .unwrap();
  assert_eq!(updated.description.as_deref(), Some("Junior"));
}

#[tokio::test]
async fn delete_grade_with_assessments_blocked() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let l1 = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();
  s.create_employee_skill_grade(assessment(ada.id, l1.id)).await.unwrap();

  let err = s.delete_skill_grade(l1.id).await.unwrap_err();
  assert!(is_conflict(&err));

  // Skill itself is also blocked, through its grades.
  let err = s.delete_skill(rust.id).await.unwrap_err();
  assert!(is_conflict(&err));
}

// ─── Employee skill grades ───────────────────────────────────────────────────

#[tokio::test]
async fn assessment_roundtrip_with_reviewer() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let grace = s
    .create_employee(employee("Grace", "Hopper", "grace@example.com"))
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let l1 = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();

  let input = NewEmployeeSkillGrade {
    certified: true,
    employee_comment: Some("Shipped two services".into()),
    reviewed_by_employee_id: Some(grace.id),
    reviewer_comment: Some("Confirmed".into()),
    ..assessment(ada.id, l1.id)
  };
  let esg = s.create_employee_skill_grade(input).await.unwrap();

  assert!(esg.certified);
  assert_eq!(esg.reviewed_by_employee_id, Some(grace.id));
  assert_eq!(esg.last_used_date, NaiveDate::from_ymd_opt(2025, 6, 1));

  let fetched = s.get_employee_skill_grade(esg.id).await.unwrap().unwrap();
  assert_eq!(fetched, esg);
}

#[tokio::test]
async fn duplicate_assessment_pair_conflicts() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let l1 = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();

  s.create_employee_skill_grade(assessment(ada.id, l1.id)).await.unwrap();
  let err = s
    .create_employee_skill_grade(assessment(ada.id, l1.id))
    .await
    .unwrap_err();
  assert!(is_conflict(&err));
}

#[tokio::test]
async fn assessment_referencing_missing_rows_not_found() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let l1 = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();

  let err = s
    .create_employee_skill_grade(assessment(999, l1.id))
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Employee not found with id: 999");

  let err = s
    .create_employee_skill_grade(assessment(ada.id, 999))
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Skill grade not found with id: 999");

  let err = s
    .create_employee_skill_grade(NewEmployeeSkillGrade {
      reviewed_by_employee_id: Some(999),
      ..assessment(ada.id, l1.id)
    })
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Reviewer employee not found with id: 999");
}

#[tokio::test]
async fn update_assessment_moves_pair() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let l1 = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();
  let l2 = s.create_skill_grade(grade(rust.id, "L2")).await.unwrap();

  let esg = s.create_employee_skill_grade(assessment(ada.id, l1.id)).await.unwrap();

  // Moving to a free pair works; updated_at refreshes.
  let moved = s
    .update_employee_skill_grade(esg.id, assessment(ada.id, l2.id))
    .await
    .unwrap();
  assert_eq!(moved.skill_grade_id, l2.id);

  // Moving back onto an occupied pair collides.
  let other = s.create_employee_skill_grade(assessment(ada.id, l1.id)).await.unwrap();
  let err = s
    .update_employee_skill_grade(other.id, assessment(ada.id, l2.id))
    .await
    .unwrap_err();
  assert!(is_conflict(&err));

  // Re-saving the same pair with new fields is not a collision.
  let resaved = s
    .update_employee_skill_grade(other.id, NewEmployeeSkillGrade {
      years_of_experience: Some(5),
      ..assessment(ada.id, l1.id)
    })
    .await
    .unwrap();
  assert_eq!(resaved.years_of_experience, Some(5));
}

#[tokio::test]
async fn assessments_filtered_by_owner() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let grace = s
    .create_employee(employee("Grace", "Hopper", "grace@example.com"))
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let l1 = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();
  let l2 = s.create_skill_grade(grade(rust.id, "L2")).await.unwrap();

  s.create_employee_skill_grade(assessment(ada.id, l1.id)).await.unwrap();
  s.create_employee_skill_grade(assessment(ada.id, l2.id)).await.unwrap();
  s.create_employee_skill_grade(assessment(grace.id, l1.id)).await.unwrap();

  let adas = s.employee_skill_grades_for_employee(ada.id).await.unwrap();
  assert_eq!(adas.len(), 2);

  let l1s = s.employee_skill_grades_for_skill_grade(l1.id).await.unwrap();
  assert_eq!(l1s.len(), 2);

  let err = s.employee_skill_grades_for_employee(404).await.unwrap_err();
  assert!(is_not_found(&err));
}

#[tokio::test]
async fn delete_assessment_is_leaf() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let l1 = s.create_skill_grade(grade(rust.id, "L1")).await.unwrap();
  let esg = s.create_employee_skill_grade(assessment(ada.id, l1.id)).await.unwrap();

  s.delete_employee_skill_grade(esg.id).await.unwrap();
  assert!(s.get_employee_skill_grade(esg.id).await.unwrap().is_none());

  // With the assessment gone, the employee delete unblocks.
  s.delete_employee(ada.id).await.unwrap();
}

// ─── Associations ────────────────────────────────────────────────────────────

#[tokio::test]
async fn assign_and_list_job_profiles() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let backend = s
    .create_job_profile(NewJobProfile { name: "Backend".into(), description: None })
    .await
    .unwrap();
  let sre = s
    .create_job_profile(NewJobProfile { name: "SRE".into(), description: None })
    .await
    .unwrap();

  s.assign_job_profile(ada.id, backend.id).await.unwrap();
  s.assign_job_profile(ada.id, sre.id).await.unwrap();

  let profiles = s.job_profiles_for_employee(ada.id).await.unwrap();
  assert_eq!(profiles.len(), 2);
  assert_eq!(profiles[0].name, "Backend");
}

#[tokio::test]
async fn duplicate_assignment_conflicts() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let backend = s
    .create_job_profile(NewJobProfile { name: "Backend".into(), description: None })
    .await
    .unwrap();

  s.assign_job_profile(ada.id, backend.id).await.unwrap();
  let err = s.assign_job_profile(ada.id, backend.id).await.unwrap_err();
  assert!(is_conflict(&err));
}

#[tokio::test]
async fn assign_with_missing_side_not_found() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();

  let err = s.assign_job_profile(ada.id, 404).await.unwrap_err();
  assert_eq!(err.to_string(), "Job profile not found with id: 404");

  let err = s.assign_job_profile(404, 1).await.unwrap_err();
  assert_eq!(err.to_string(), "Employee not found with id: 404");
}

#[tokio::test]
async fn unassign_removes_and_then_not_found() {
  let s = store().await;
  let ada = s
    .create_employee(employee("Ada", "Lovelace", "ada@example.com"))
    .await
    .unwrap();
  let backend = s
    .create_skill_profile(NewSkillProfile { name: "Backend".into(), description: None })
    .await
    .unwrap();

  s.assign_skill_profile(ada.id, backend.id).await.unwrap();
  s.unassign_skill_profile(ada.id, backend.id).await.unwrap();
  assert!(s.skill_profiles_for_employee(ada.id).await.unwrap().is_empty());

  let err = s.unassign_skill_profile(ada.id, backend.id).await.unwrap_err();
  assert!(is_not_found(&err));
}

#[tokio::test]
async fn job_profile_skill_links_query_both_sides() {
  let s = store().await;
  let backend = s
    .create_job_profile(NewJobProfile { name: "Backend".into(), description: None })
    .await
    .unwrap();
  let sre = s
    .create_job_profile(NewJobProfile { name: "SRE".into(), description: None })
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  let go = s.create_skill(skill("Go")).await.unwrap();

  s.link_job_profile_skill(backend.id, rust.id).await.unwrap();
  s.link_job_profile_skill(backend.id, go.id).await.unwrap();
  s.link_job_profile_skill(sre.id, go.id).await.unwrap();

  let backend_skills = s.skills_for_job_profile(backend.id).await.unwrap();
  assert_eq!(backend_skills.len(), 2);

  let go_profiles = s.job_profiles_for_skill(go.id).await.unwrap();
  assert_eq!(go_profiles.len(), 2);

  s.unlink_job_profile_skill(backend.id, go.id).await.unwrap();
  let go_profiles = s.job_profiles_for_skill(go.id).await.unwrap();
  assert_eq!(go_profiles.len(), 1);
  assert_eq!(go_profiles[0].name, "SRE");
}

#[tokio::test]
async fn linked_skill_blocks_both_sides_delete() {
  let s = store().await;
  let backend = s
    .create_job_profile(NewJobProfile { name: "Backend".into(), description: None })
    .await
    .unwrap();
  let rust = s.create_skill(skill("Rust")).await.unwrap();
  s.link_job_profile_skill(backend.id, rust.id).await.unwrap();

  assert!(is_conflict(&s.delete_skill(rust.id).await.unwrap_err()));
  assert!(is_conflict(&s.delete_job_profile(backend.id).await.unwrap_err()));

  s.unlink_job_profile_skill(backend.id, rust.id).await.unwrap();
  s.delete_skill(rust.id).await.unwrap();
  s.delete_job_profile(backend.id).await.unwrap();
}
