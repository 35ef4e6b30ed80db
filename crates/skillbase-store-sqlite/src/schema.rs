//! SQL schema for the Skillbase SQLite store.
//!
//! Executed once at connection startup. The UNIQUE constraints double as
//! the authoritative backstop for the uniqueness pre-checks in `store.rs`:
//! if two identical writes race, the loser surfaces as Conflict.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS employee (
    id          INTEGER PRIMARY KEY,
    first_name  TEXT NOT NULL,
    last_name   TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    department  TEXT,
    position    TEXT,
    created_at  TEXT NOT NULL,    -- RFC 3339 UTC; server-assigned
    updated_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS skill_profile (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    description TEXT,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

-- Skills are standalone; profile/job-profile relationships live in the
-- link tables below.
CREATE TABLE IF NOT EXISTS skill (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    description TEXT,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS skill_grade (
    id          INTEGER PRIMARY KEY,
    skill_id    INTEGER NOT NULL REFERENCES skill(id),
    code        TEXT NOT NULL,
    description TEXT,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    UNIQUE (skill_id, code)      -- codes repeat across skills
);

CREATE TABLE IF NOT EXISTS job_profile (
    id          INTEGER PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    description TEXT,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS employee_skill_grade (
    id                      INTEGER PRIMARY KEY,
    employee_id             INTEGER NOT NULL REFERENCES employee(id),
    skill_grade_id          INTEGER NOT NULL REFERENCES skill_grade(id),
    years_of_experience     INTEGER,
    last_used_date          TEXT,    -- ISO date or NULL
    certified               INTEGER NOT NULL DEFAULT 0,
    employee_comment        TEXT,
    reviewed_by_employee_id INTEGER REFERENCES employee(id),
    reviewer_comment        TEXT,
    created_at              TEXT NOT NULL,
    updated_at              TEXT NOT NULL,
    UNIQUE (employee_id, skill_grade_id)
);

-- Pure link rows: identity is the pair, the rowid exists for storage
-- convenience only.
CREATE TABLE IF NOT EXISTS employee_job_profile (
    id             INTEGER PRIMARY KEY,
    employee_id    INTEGER NOT NULL REFERENCES employee(id),
    job_profile_id INTEGER NOT NULL REFERENCES job_profile(id),
    created_at     TEXT NOT NULL,
    UNIQUE (employee_id, job_profile_id)
);

CREATE TABLE IF NOT EXISTS employee_skill_profile (
    id               INTEGER PRIMARY KEY,
    employee_id      INTEGER NOT NULL REFERENCES employee(id),
    skill_profile_id INTEGER NOT NULL REFERENCES skill_profile(id),
    created_at       TEXT NOT NULL,
    UNIQUE (employee_id, skill_profile_id)
);

CREATE TABLE IF NOT EXISTS job_profile_skill (
    id             INTEGER PRIMARY KEY,
    job_profile_id INTEGER NOT NULL REFERENCES job_profile(id),
    skill_id       INTEGER NOT NULL REFERENCES skill(id),
    created_at     TEXT NOT NULL,
    UNIQUE (job_profile_id, skill_id)
);

CREATE INDEX IF NOT EXISTS skill_grade_skill_idx ON skill_grade(skill_id);
CREATE INDEX IF NOT EXISTS esg_employee_idx      ON employee_skill_grade(employee_id);
CREATE INDEX IF NOT EXISTS esg_grade_idx         ON employee_skill_grade(skill_grade_id);
CREATE INDEX IF NOT EXISTS employee_email_idx    ON employee(email);

PRAGMA user_version = 1;
";
