// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crew_schedule_domain::ScheduleDate;
use crew_schedule_persistence::{EmployeeDraft, Persistence, ProjectDraft};

use crate::RequestActor;

/// A seeded store with two unions, three employees and two active jobs.
pub struct Fixture {
    pub persistence: Persistence,
    pub carpenters: i64,
    pub electricians: i64,
    pub alice: i64,
    pub bob: i64,
    pub carol: i64,
    pub tower: i64,
    pub bridge: i64,
}

pub fn date(value: &str) -> ScheduleDate {
    value.parse().expect("valid test date")
}

/// Returns June 10, 2024, the business date used by every API test.
pub fn create_test_today() -> ScheduleDate {
    date("2024-06-10")
}

pub fn create_test_actor() -> RequestActor {
    RequestActor::from_identity("dispatcher").expect("valid identity")
}

fn employee(first_name: &str, last_name: &str, union_id: Option<i64>) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        phone: None,
        union_id,
    }
}

fn project(job_number: &str, job_name: &str) -> ProjectDraft {
    ProjectDraft {
        job_number: job_number.to_string(),
        job_name: job_name.to_string(),
        location: None,
        start_date: None,
        end_date: None,
        display_order: None,
    }
}

pub fn create_fixture() -> Fixture {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");

    let carpenters: i64 = persistence.create_union("Carpenters").unwrap();
    let electricians: i64 = persistence.create_union("Electricians").unwrap();
    let alice: i64 = persistence
        .create_employee(&employee("Alice", "Adams", Some(carpenters)))
        .unwrap();
    let bob: i64 = persistence
        .create_employee(&employee("Bob", "Baker", Some(carpenters)))
        .unwrap();
    let carol: i64 = persistence
        .create_employee(&employee("Carol", "Cole", Some(electricians)))
        .unwrap();
    let tower: i64 = persistence.create_project(&project("J-100", "Tower")).unwrap();
    let bridge: i64 = persistence.create_project(&project("J-200", "Bridge")).unwrap();

    Fixture {
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
