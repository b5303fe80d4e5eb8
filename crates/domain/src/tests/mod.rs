// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod date_policy;

use crate::ScheduleDate;

/// Parses a `YYYY-MM-DD` literal for tests.
fn date(value: &str) -> ScheduleDate {
    value.parse().expect("valid test date")
}
