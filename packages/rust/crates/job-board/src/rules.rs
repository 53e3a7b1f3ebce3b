//! Field-format rules for job records.
//!
//! Patterns are compiled once on first use. Classes are ASCII-only (`(?-u:..)`,
//! `[0-9]`) so a Unicode digit or letter never satisfies a rule.

#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{ExperienceLevel, JobRecord};

static JOB_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+_$").expect("job number pattern compiles"));

static POSTED_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("posted date pattern compiles")
});

// The filler excludes every line terminator, not only '\n', so a multi-line
// address only passes if the break is the `\s` after the comma.
static POSTER_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[^\n\r\x{85}\x{2028}\x{2029}]*(?-u:\w)+,(?-u:\s)[^\n\r\x{85}\x{2028}\x{2029}]*$",
    )
    .expect("poster address pattern compiles")
});

static SKILL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?-u:[A-Za-z0-9\s,])+$").expect("skill pattern compiles"));

/// Alphanumerics followed by a single trailing underscore.
#[must_use]
pub fn is_job_number_valid(job_number: &str) -> bool {
    JOB_NUMBER.is_match(job_number)
}

/// `YYYY-MM-DD` shape only; month 13 passes.
#[must_use]
pub fn is_date_valid(date: &str) -> bool {
    POSTED_DATE.is_match(date)
}

/// Somewhere in the address a word is followed by a comma and whitespace.
#[must_use]
pub fn is_address_valid(address: &str) -> bool {
    POSTER_ADDRESS.is_match(address)
}

/// Level and floor the salary falls short of, if any. Unknown levels and
/// `Executive` have no floor.
#[must_use]
pub fn salary_shortfall(record: &JobRecord) -> Option<(ExperienceLevel, i64)> {
    let level = record.experience_level()?;
    let floor = level.salary_floor()?;
    (record.job_salary < floor).then_some((level, floor))
}

/// Salary meets the floor of the record's level.
#[must_use]
pub fn is_salary_valid_for_level(record: &JobRecord) -> bool {
    salary_shortfall(record).is_none()
}

/// Junior and Mid-level accept only Full-time or Part-time.
#[must_use]
pub fn is_job_type_valid_for_level(record: &JobRecord) -> bool {
    record
        .experience_level()
        .and_then(ExperienceLevel::allowed_job_types)
        .is_none_or(|allowed| allowed.contains(&record.job_type.as_str()))
}

/// Non-empty list; each entry is letters, digits, whitespace or commas.
#[must_use]
pub fn are_skills_valid(skills: &[String]) -> bool {
    !skills.is_empty() && skills.iter().all(|skill| SKILL.is_match(skill))
}

/// Name of the first empty required field, in record order.
///
/// Salary is numeric and is judged by the salary rules instead.
#[must_use]
pub fn first_missing_field(record: &JobRecord) -> Option<&'static str> {
    let text_fields = [
        ("jobNumber", &record.job_number),
        ("jobTitle", &record.job_title),
        ("jobPosterName", &record.job_poster_name),
        ("jobPosterAddress", &record.job_poster_address),
        ("jobPostedDate", &record.job_posted_date),
        ("jobExperienceLevel", &record.job_experience_level),
        ("jobType", &record.job_type),
    ];
    text_fields
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .or_else(|| {
            record
                .job_required_skills
                .is_empty()
                .then_some("jobRequiredSkills")
        })
        .or_else(|| record.job_description.is_empty().then_some("jobDescription"))
}
