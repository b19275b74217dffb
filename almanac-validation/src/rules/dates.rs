//! Date ordering rules. Equal dates are rejected as well.

use chrono::NaiveDate;

use almanac_core::errors::ValidationError;

use super::fields::{LAST_REVISED_DATE, NEXT_RELEASE_DATE};

pub fn check_methodology_dates(
    publication_date: NaiveDate,
    last_revised_date: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match last_revised_date {
        Some(revised) if revised <= publication_date => Err(ValidationError::field(
            LAST_REVISED_DATE,
            "The last revised date must be after the published date.",
        )),
        _ => Ok(()),
    }
}

pub fn check_article_dates(
    release_date: NaiveDate,
    next_release_date: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match next_release_date {
        Some(next) if next <= release_date => Err(ValidationError::field(
            NEXT_RELEASE_DATE,
            "The next release date must be after the release date.",
        )),
        _ => Ok(()),
    }
}
