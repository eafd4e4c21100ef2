mod blog_post;

use chrono::{NaiveDate, NaiveDateTime};
use shop_test_utils::prelude::*;

fn published(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 5, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}
