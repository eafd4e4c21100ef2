//! Tests for HTTP controller endpoints.
//!
//! Integration tests for the storefront API controllers, verifying response status codes
//! and bodies for found, missing and invalid requests against an in-memory database.

mod blog;
mod layout;
mod shop;
mod url;

use chrono::{NaiveDate, NaiveDateTime};
use shop_test_utils::prelude::*;

use crate::util::json_body;

fn published(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}
