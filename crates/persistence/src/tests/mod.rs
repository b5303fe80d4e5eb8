// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod backend_validation_tests;

use crate::{EmployeeDraft, Persistence, ProjectDraft};
use crew_schedule_domain::ScheduleDate;

/// A seeded store: two unions, three employees and two active jobs.
pub struct TestSchedule {
    pub persistence: Persistence,
    pub carpenters: i64,
    pub electricians: i64,
    /// Carpenter.
    pub alice: i64,
    /// Carpenter.
    pub bob: i64,
    /// Electrician.
    pub carol: i64,
    pub tower: i64,
    pub bridge: i64,
}

pub fn date(value: &str) -> ScheduleDate {
    value.parse().expect("valid test date")
}

/// Business "today" used throughout the persistence tests.
pub fn create_test_today() -> ScheduleDate {
    date("2024-06-10")
}

pub fn employee_draft(first_name: &str, last_name: &str, union_id: Option<i64>) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        phone: None,
        union_id,
    }
}

pub fn project_draft(job_number: &str, job_name: &str) -> ProjectDraft {
    ProjectDraft {
        job_number: job_number.to_string(),
        job_name: job_name.to_string(),
        location: Some(String::from("Springfield")),
        start_date: Some(date("2024-06-01")),
        end_date: None,
        display_order: None,
    }
}

pub fn create_test_schedule() -> TestSchedule {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");

    let carpenters: i64 = persistence.create_union("Carpenters").unwrap();
    let electricians: i64 = persistence.create_union("Electricians").unwrap();

    let alice: i64 = persistence
        .create_employee(&employee_draft("Alice", "Adams", Some(carpenters)))
        .unwrap();
    let bob: i64 = persistence
        .create_employee(&employee_draft("Bob", "Baker", Some(carpenters)))
        .unwrap();
    let carol: i64 = persistence
        .create_employee(&employee_draft("Carol", "Cole", Some(electricians)))
        .unwrap();

    let tower: i64 = persistence
        .create_project(&project_draft("J-100", "Tower"))
        .unwrap();
    let bridge: i64 = persistence
        .create_project(&project_draft("J-200", "Bridge"))
        .unwrap();

    TestSchedule {
        persistence,
        carpenters,
        electricians,
        alice,
        bob,
        carol,
        tower,
        bridge,
    }
}
