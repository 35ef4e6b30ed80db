//! Router-level tests driving the full API against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use serde_json::{Value, json};
use skillbase_store_sqlite::SqliteStore;
use tower::ServiceExt as _;

use crate::api_router;

async fn router() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  api_router(Arc::new(store))
}

async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header("content-type", "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

fn id_of(v: &Value) -> i64 {
  v["id"].as_i64().unwrap()
}

async fn create_employee(app: &Router, first: &str, last: &str, email: &str) -> i64 {
  let (status, body) = send(
    app,
    "POST",
    "/employees",
    Some(json!({ "firstName": first, "lastName": last, "email": email })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED, "body: {body}");
  id_of(&body)
}

async fn create_named(app: &Router, path: &str, name: &str) -> i64 {
  let (status, body) = send(app, "POST", path, Some(json!({ "name": name }))).await;
  assert_eq!(status, StatusCode::CREATED, "body: {body}");
  id_of(&body)
}

// ─── Employees ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_employee_and_fetch() {
  let app = router().await;

  let (status, body) = send(
    &app,
    "POST",
    "/employees",
    Some(json!({
      "firstName": "Ada",
      "lastName": "Lovelace",
      "email": "ada@example.com",
      "department": "Engineering"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["firstName"], "Ada");
  assert_eq!(body["department"], "Engineering");
  assert!(body["createdAt"].is_string());

  let (status, fetched) =
    send(&app, "GET", &format!("/employees/{}", id_of(&body)), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(fetched["email"], "ada@example.com");
}

#[tokio::test]
async fn duplicate_email_returns_409() {
  let app = router().await;
  create_employee(&app, "Ada", "Lovelace", "ada@example.com").await;

  let (status, body) = send(
    &app,
    "POST",
    "/employees",
    Some(json!({
      "firstName": "Augusta",
      "lastName": "King",
      "email": "ada@example.com"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(body["error"], "Employee with email ada@example.com already exists");
}

#[tokio::test]
async fn employee_validation_lists_every_field() {
  let app = router().await;

  let (status, body) = send(&app, "POST", "/employees", Some(json!({}))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let violations = body["violations"].as_array().unwrap();
  assert_eq!(violations.len(), 3);
  let fields: Vec<&str> =
    violations.iter().map(|v| v["field"].as_str().unwrap()).collect();
  assert_eq!(fields, ["firstName", "lastName", "email"]);
  assert_eq!(violations[0]["message"], "First name is required");

  let (status, body) = send(
    &app,
    "POST",
    "/employees",
    Some(json!({
      "firstName": "Ada",
      "lastName": "Lovelace",
      "email": "not-an-email"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["violations"][0]["message"], "Email must be valid");
}

#[tokio::test]
async fn search_is_case_insensitive() {
  let app = router().await;
  create_employee(&app, "Ada", "Lovelace", "ada@example.com").await;
  create_employee(&app, "Grace", "Hopper", "grace@example.com").await;

  let (status, body) = send(&app, "GET", "/employees?search=ADA", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["totalElements"], 1);
  assert_eq!(body["content"][0]["firstName"], "Ada");
}

#[tokio::test]
async fn get_missing_employee_returns_404() {
  let app = router().await;
  let (status, body) = send(&app, "GET", "/employees/42", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Employee not found with id: 42");
}

#[tokio::test]
async fn update_then_delete_employee() {
  let app = router().await;
  let id = create_employee(&app, "Ada", "Lovelace", "ada@example.com").await;

  let (status, body) = send(
    &app,
    "PUT",
    &format!("/employees/{id}"),
    Some(json!({
      "firstName": "Ada",
      "lastName": "King",
      "email": "ada@example.com"
    })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["lastName"], "King");

  let (status, _) = send(&app, "DELETE", &format!("/employees/{id}"), None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (status, _) = send(&app, "GET", &format!("/employees/{id}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─── Skills ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn new_skill_embeds_empty_relations() {
  let app = router().await;

  let (status, body) = send(
    &app,
    "POST",
    "/skills",
    Some(json!({ "name": "Rust", "description": "Systems programming" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["name"], "Rust");
  assert_eq!(body["jobProfiles"], json!([]));
  assert_eq!(body["grades"], json!([]));
}

#[tokio::test]
async fn skill_response_embeds_grades_and_profiles() {
  let app = router().await;
  let skill_id = create_named(&app, "/skills", "Rust").await;
  let jp_id = create_named(&app, "/job-profiles", "Backend").await;

  let (status, _) = send(
    &app,
    "POST",
    "/skill-grades",
    Some(json!({ "skillId": skill_id, "code": "L1" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);

  let (status, _) = send(
    &app,
    "POST",
    &format!("/skills/{skill_id}/job-profiles/{jp_id}"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (status, body) = send(&app, "GET", &format!("/skills/{skill_id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["grades"].as_array().unwrap().len(), 1);
  assert_eq!(body["grades"][0]["code"], "L1");
  assert_eq!(body["jobProfiles"][0]["name"], "Backend");

  // Reverse side: the job profile lists the skill.
  let (status, body) =
    send(&app, "GET", &format!("/job-profiles/{jp_id}/skills"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[0]["name"], "Rust");
}

#[tokio::test]
async fn skills_list_is_paged() {
  let app = router().await;
  create_named(&app, "/skills", "Rust").await;
  create_named(&app, "/skills", "Go").await;
  create_named(&app, "/skills", "Python").await;

  let (status, body) = send(&app, "GET", "/skills?page=0&size=2", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["content"].as_array().unwrap().len(), 2);
  assert_eq!(body["totalElements"], 3);
  assert_eq!(body["totalPages"], 2);
}

#[tokio::test]
async fn delete_skill_with_grades_returns_409() {
  let app = router().await;
  let skill_id = create_named(&app, "/skills", "Rust").await;
  send(
    &app,
    "POST",
    "/skill-grades",
    Some(json!({ "skillId": skill_id, "code": "L1" })),
  )
  .await;

  let (status, _) = send(&app, "DELETE", &format!("/skills/{skill_id}"), None).await;
  assert_eq!(status, StatusCode::CONFLICT);
}

// ─── Skill grades ────────────────────────────────────────────────────────────

#[tokio::test]
async fn skill_grade_denormalizes_skill_name() {
  let app = router().await;
  let skill_id = create_named(&app, "/skills", "Rust").await;

  let (status, body) = send(
    &app,
    "POST",
    "/skill-grades",
    Some(json!({ "skillId": skill_id, "code": "L2", "description": "Mid" })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["skillName"], "Rust");
  assert_eq!(body["code"], "L2");
}

#[tokio::test]
async fn grade_for_missing_skill_returns_404() {
  let app = router().await;
  let (status, body) = send(
    &app,
    "POST",
    "/skill-grades",
    Some(json!({ "skillId": 77, "code": "L1" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Skill not found with id: 77");
}

#[tokio::test]
async fn grade_validation_requires_skill_and_code() {
  let app = router().await;
  let (status, body) = send(&app, "POST", "/skill-grades", Some(json!({}))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  let fields: Vec<&str> = body["violations"]
    .as_array()
    .unwrap()
    .iter()
    .map(|v| v["field"].as_str().unwrap())
    .collect();
  assert_eq!(fields, ["skillId", "code"]);
}

#[tokio::test]
async fn grades_filtered_by_skill() {
  let app = router().await;
  let rust = create_named(&app, "/skills", "Rust").await;
  let go = create_named(&app, "/skills", "Go").await;
  for (skill, code) in [(rust, "L1"), (rust, "L2"), (go, "L1")] {
    send(
      &app,
      "POST",
      "/skill-grades",
      Some(json!({ "skillId": skill, "code": code })),
    )
    .await;
  }

  let (status, body) =
    send(&app, "GET", &format!("/skill-grades?skillId={rust}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 2);

  let (status, _) = send(&app, "GET", "/skill-grades?skillId=404", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─── Catalog listing modes ───────────────────────────────────────────────────

#[tokio::test]
async fn skill_profiles_plain_list_and_page_envelope() {
  let app = router().await;
  create_named(&app, "/skill-profiles", "Backend").await;
  create_named(&app, "/skill-profiles", "Frontend").await;

  let (status, body) = send(&app, "GET", "/skill-profiles", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body.as_array().unwrap().len(), 2);

  let (status, body) =
    send(&app, "GET", "/skill-profiles?paginated=true&size=1", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["content"].as_array().unwrap().len(), 1);
  assert_eq!(body["totalElements"], 2);
  assert_eq!(body["totalPages"], 2);
}

// ─── Associations ────────────────────────────────────────────────────────────

#[tokio::test]
async fn job_profile_assignment_flow() {
  let app = router().await;
  let emp = create_employee(&app, "Ada", "Lovelace", "ada@example.com").await;
  let jp = create_named(&app, "/job-profiles", "Backend").await;
  let path = format!("/employees/{emp}/job-profiles/{jp}");

  let (status, _) = send(&app, "POST", &path, None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (status, _) = send(&app, "POST", &path, None).await;
  assert_eq!(status, StatusCode::CONFLICT);

  let (status, body) =
    send(&app, "GET", &format!("/employees/{emp}/job-profiles"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[0]["name"], "Backend");

  let (status, _) = send(&app, "DELETE", &path, None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (status, _) = send(&app, "DELETE", &path, None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assigning_missing_profile_returns_404() {
  let app = router().await;
  let emp = create_employee(&app, "Ada", "Lovelace", "ada@example.com").await;

  let (status, body) = send(
    &app,
    "POST",
    &format!("/employees/{emp}/skill-profiles/404"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Skill profile not found with id: 404");
}

// ─── Employee skill grades ───────────────────────────────────────────────────

async fn seed_assessment(app: &Router) -> (i64, i64) {
  let emp = create_employee(app, "Ada", "Lovelace", "ada@example.com").await;
  let skill = create_named(app, "/skills", "Rust").await;
  let (_, grade) = send(
    app,
    "POST",
    "/skill-grades",
    Some(json!({ "skillId": skill, "code": "L3" })),
  )
  .await;
  (emp, id_of(&grade))
}

#[tokio::test]
async fn assessment_denormalizes_names_and_defaults_certified() {
  let app = router().await;
  let (emp, grade) = seed_assessment(&app).await;

  let (status, body) = send(
    &app,
    "POST",
    "/employee-skill-grades",
    Some(json!({
      "employeeId": emp,
      "skillGradeId": grade,
      "yearsOfExperience": 4
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["employeeName"], "Ada Lovelace");
  assert_eq!(body["skillName"], "Rust");
  assert_eq!(body["gradeCode"], "L3");
  assert_eq!(body["certified"], false);
  assert_eq!(body["reviewerName"], Value::Null);
}

#[tokio::test]
async fn assessment_rejects_negative_experience() {
  let app = router().await;
  let (emp, grade) = seed_assessment(&app).await;

  let (status, body) = send(
    &app,
    "POST",
    "/employee-skill-grades",
    Some(json!({
      "employeeId": emp,
      "skillGradeId": grade,
      "yearsOfExperience": -1
    })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(
    body["violations"][0]["message"],
    "Years of experience must be non-negative"
  );
}

#[tokio::test]
async fn assessments_filter_by_employee() {
  let app = router().await;
  let (emp, grade) = seed_assessment(&app).await;
  send(
    &app,
    "POST",
    "/employee-skill-grades",
    Some(json!({ "employeeId": emp, "skillGradeId": grade })),
  )
  .await;

  let (status, body) = send(
    &app,
    "GET",
    &format!("/employee-skill-grades?employeeId={emp}"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  let list = body.as_array().unwrap();
  assert_eq!(list.len(), 1);
  assert_eq!(list[0]["employeeId"], emp);

  let (status, _) = send(&app, "GET", "/employee-skill-grades?employeeId=404", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_assessment_pair_returns_409() {
  let app = router().await;
  let (emp, grade) = seed_assessment(&app).await;
  let payload = json!({ "employeeId": emp, "skillGradeId": grade });

  let (status, _) =
    send(&app, "POST", "/employee-skill-grades", Some(payload.clone())).await;
  assert_eq!(status, StatusCode::CREATED);

  let (status, _) = send(&app, "POST", "/employee-skill-grades", Some(payload)).await;
  assert_eq!(status, StatusCode::CONFLICT);
}
