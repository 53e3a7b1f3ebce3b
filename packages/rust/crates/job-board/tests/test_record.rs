#![allow(missing_docs)]

mod common;

use job_board::{ExperienceLevel, JobRecord, leading_field};

use common::sample_record;

#[test]
fn reference_record_serializes_to_one_line() {
    assert_eq!(
        sample_record().to_line(),
        "A1_,X,Y,1 St, Town,2024-01-01,Junior,Full-time,Go,31000,d\n"
    );
}

#[test]
fn skills_are_joined_with_semicolons() {
    let record = JobRecord {
        job_required_skills: vec!["Java".into(), "Python".into(), "Rust, Go".into()],
        ..sample_record()
    };
    assert_eq!(
        record.to_line(),
        "A1_,X,Y,1 St, Town,2024-01-01,Junior,Full-time,Java;Python;Rust, Go,31000,d\n"
    );
}

#[test]
fn leading_field_recovers_job_number_from_serialized_line() {
    for number in ["A1_", "12345MMM_", "z_"] {
        let record = JobRecord {
            job_number: number.to_string(),
            ..sample_record()
        };
        assert_eq!(leading_field(&record.to_line()), Some(number));
    }
}

#[test]
fn record_deserializes_from_camel_case_json() {
    let record: JobRecord = serde_json::from_value(serde_json::json!({
        "jobNumber": "A1_",
        "jobTitle": "X",
        "jobPosterName": "Y",
        "jobPosterAddress": "1 St, Town",
        "jobPostedDate": "2024-01-01",
        "jobExperienceLevel": "Junior",
        "jobType": "Full-time",
        "jobRequiredSkills": ["Go"],
        "jobSalary": 31000,
        "jobDescription": "d"
    }))
    .unwrap();
    assert_eq!(record, sample_record());
    assert_eq!(record.experience_level(), Some(ExperienceLevel::Junior));
}

#[test]
fn level_policies() {
    assert_eq!(ExperienceLevel::Junior.salary_floor(), Some(30_000));
    assert_eq!(ExperienceLevel::MidLevel.salary_floor(), Some(50_000));
    assert_eq!(ExperienceLevel::Senior.salary_floor(), Some(80_000));
    assert_eq!(ExperienceLevel::Executive.salary_floor(), None);
    assert_eq!(
        ExperienceLevel::MidLevel.allowed_job_types(),
        Some(&["Full-time", "Part-time"][..])
    );
    assert_eq!(ExperienceLevel::Senior.allowed_job_types(), None);
    assert_eq!(ExperienceLevel::MidLevel.to_string(), "Mid-level");
}
