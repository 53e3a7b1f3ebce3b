//! The job listing record and its line format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Field separator within a store line.
pub const FIELD_DELIMITER: &str = ",";
/// Separator between entries of the skills field.
pub const SKILL_DELIMITER: &str = ";";

/// One job listing.
///
/// Field names serialize in camelCase (`jobNumber`, `jobRequiredSkills`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Unique key, e.g. `12345MMM_`.
    pub job_number: String,
    /// Listing title.
    pub job_title: String,
    /// Who posted the listing.
    pub job_poster_name: String,
    /// Poster address; must contain a word followed by ", ".
    pub job_poster_address: String,
    /// `YYYY-MM-DD`.
    pub job_posted_date: String,
    /// Junior, Mid-level, Senior or Executive.
    pub job_experience_level: String,
    /// Full-time, Part-time, Contract, ...
    pub job_type: String,
    /// At least one skill.
    pub job_required_skills: Vec<String>,
    /// Yearly salary.
    pub job_salary: i64,
    /// Free text.
    pub job_description: String,
}

impl JobRecord {
    /// Parsed experience level, if the stored string names a known one.
    #[must_use]
    pub fn experience_level(&self) -> Option<ExperienceLevel> {
        ExperienceLevel::parse(&self.job_experience_level)
    }

    /// Serialize to one store line, newline included.
    ///
    /// Values are written verbatim; commas or semicolons inside a value are not
    /// escaped, so only the leading job number is reliably recoverable.
    #[must_use]
    pub fn to_line(&self) -> String {
        let skills = self.job_required_skills.join(SKILL_DELIMITER);
        let salary = self.job_salary.to_string();
        let fields = [
            self.job_number.as_str(),
            self.job_title.as_str(),
            self.job_poster_name.as_str(),
            self.job_poster_address.as_str(),
            self.job_posted_date.as_str(),
            self.job_experience_level.as_str(),
            self.job_type.as_str(),
            skills.as_str(),
            salary.as_str(),
            self.job_description.as_str(),
        ];
        let mut line = fields.join(FIELD_DELIMITER);
        line.push('\n');
        line
    }
}

/// The job number of a store line: everything before the first comma.
///
/// A line without a comma is not a record and has no key.
#[must_use]
pub fn leading_field(line: &str) -> Option<&str> {
    line.split_once(FIELD_DELIMITER).map(|(key, _)| key)
}

/// Experience levels that drive the salary and job-type rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceLevel {
    /// Entry level.
    Junior,
    /// Written `Mid-level`.
    MidLevel,
    /// Senior individual contributor.
    Senior,
    /// Leadership roles.
    Executive,
}

const EMPLOYMENT_TYPES: &[&str] = &["Full-time", "Part-time"];

impl ExperienceLevel {
    /// Exact, case-sensitive match against the canonical spelling.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Junior" => Some(Self::Junior),
            "Mid-level" => Some(Self::MidLevel),
            "Senior" => Some(Self::Senior),
            "Executive" => Some(Self::Executive),
            _ => None,
        }
    }

    /// Canonical spelling, as stored.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::MidLevel => "Mid-level",
            Self::Senior => "Senior",
            Self::Executive => "Executive",
        }
    }

    /// Minimum salary, or `None` when the level has no floor.
    #[must_use]
    pub const fn salary_floor(self) -> Option<i64> {
        match self {
            Self::Junior => Some(30_000),
            Self::MidLevel => Some(50_000),
            Self::Senior => Some(80_000),
            Self::Executive => None,
        }
    }

    /// Permitted job types, or `None` when any type is accepted.
    #[must_use]
    pub const fn allowed_job_types(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Junior | Self::MidLevel => Some(EMPLOYMENT_TYPES),
            Self::Senior | Self::Executive => None,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
