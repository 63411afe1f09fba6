//! CSV ingestion for the five input collections.
//!
//! Each upload must carry a header row with at least the expected columns for its
//! collection; extra columns are ignored and cells are trimmed.

use crate::data::{Classroom, Course, Instructor, ScheduleEntry, Timeslot};
use csv::{ReaderBuilder, Trim};
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unknown collection '{0}'")]
    UnknownCollection(String),
    #[error("Missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
    #[error("Error parsing CSV file: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Courses,
    Classrooms,
    Instructors,
    Timeslots,
    Schedule,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Courses => "courses",
            Collection::Classrooms => "classrooms",
            Collection::Instructors => "instructors",
            Collection::Timeslots => "timeslots",
            Collection::Schedule => "schedule",
        }
    }

    pub fn expected_columns(self) -> &'static [&'static str] {
        match self {
            Collection::Courses => &["course_id", "course_name", "department"],
            Collection::Classrooms => &["classroom_id", "building_name", "room_number", "capacity"],
            Collection::Instructors => &["instructor_id", "first_name", "last_name", "department"],
            Collection::Timeslots => &["timeslot_id", "day", "start_time", "end_time"],
            Collection::Schedule => &[
                "student_id",
                "course_id",
                "instructor_id",
                "classroom_id",
                "timeslot_id",
            ],
        }
    }
}

impl FromStr for Collection {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "courses" => Ok(Collection::Courses),
            "classrooms" => Ok(Collection::Classrooms),
            "instructors" => Ok(Collection::Instructors),
            "timeslots" => Ok(Collection::Timeslots),
            "schedule" => Ok(Collection::Schedule),
            other => Err(IngestError::UnknownCollection(other.to_string())),
        }
    }
}

/// Records parsed from one upload, serialized as a plain JSON array.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Records {
    Courses(Vec<Course>),
    Classrooms(Vec<Classroom>),
    Instructors(Vec<Instructor>),
    Timeslots(Vec<Timeslot>),
    Schedule(Vec<ScheduleEntry>),
}

impl Records {
    pub fn count(&self) -> usize {
        match self {
            Records::Courses(r) => r.len(),
            Records::Classrooms(r) => r.len(),
            Records::Instructors(r) => r.len(),
            Records::Timeslots(r) => r.len(),
            Records::Schedule(r) => r.len(),
        }
    }
}

pub fn parse_collection(collection: Collection, text: &str) -> Result<Records, IngestError> {
    let columns = collection.expected_columns();
    let records = match collection {
        Collection::Courses => Records::Courses(parse_records(text, columns)?),
        Collection::Classrooms => Records::Classrooms(parse_records(text, columns)?),
        Collection::Instructors => Records::Instructors(parse_records(text, columns)?),
        Collection::Timeslots => Records::Timeslots(parse_records(text, columns)?),
        Collection::Schedule => Records::Schedule(parse_records(text, columns)?),
    };
    info!("Parsed {} {} records", records.count(), collection.name());
    Ok(records)
}

/// Deserializes every row of `text`, after checking the header row holds `expected`.
///
/// An empty file has no header row, so every expected column is reported missing.
pub fn parse_records<T: DeserializeOwned>(
    text: &str,
    expected: &[&'static str],
) -> Result<Vec<T>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let missing: Vec<&'static str> = expected
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns(missing));
    }

    Ok(reader.deserialize().collect::<Result<Vec<T>, _>>()?)
}
