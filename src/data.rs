use serde::{Deserialize, Serialize};
use std::fmt;

// Type aliases for clarity
pub type StudentId = String;
pub type CourseId = String;
pub type InstructorId = String;
pub type ClassroomId = String;
pub type TimeslotId = String;

/// Seats assumed for a classroom whose capacity is unknown.
pub const DEFAULT_CAPACITY: u32 = 30;

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub course_id: CourseId,
    pub course_name: String,
    #[serde(default)]
    pub department: String,
}

/// Represents a physical exam room with a given capacity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Classroom {
    pub classroom_id: ClassroomId,
    pub building_name: String,
    pub room_number: String,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Instructor {
    pub instructor_id: InstructorId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub department: String,
}

/// An exam sitting. Opaque to the engine: no ordering or overlap is derived from the times.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Timeslot {
    pub timeslot_id: TimeslotId,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start_time, self.end_time)
    }
}

/// One student sitting one course's exam, under an instructor, in a room, at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ScheduleEntry {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub instructor_id: InstructorId,
    pub classroom_id: ClassroomId,
    pub timeslot_id: TimeslotId,
}

/// A schedule entry with its seat number and whatever display labels could be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssignedSeat {
    #[serde(flatten)]
    pub entry: ScheduleEntry,
    pub seat_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeslot_info: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Student,
    Instructor,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::Student => write!(f, "student"),
            ConflictKind::Instructor => write!(f, "instructor"),
        }
    }
}

/// Two or more entries sharing a student (or instructor) and a timeslot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Conflict {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub id: String,
    pub timeslot_id: TimeslotId,
    pub entries: Vec<ScheduleEntry>,
    pub details: String,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.details)
    }
}

/// The complete input for one generation request.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExamData {
    pub courses: Vec<Course>,
    pub classrooms: Vec<Classroom>,
    pub instructors: Vec<Instructor>,
    pub timeslots: Vec<Timeslot>,
    pub schedule: Vec<ScheduleEntry>,
}

/// Result of seat assignment. Warnings are advisory; no entry is ever dropped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeatAssignment {
    pub assigned_seats: Vec<AssignedSeat>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub total_students: usize,
    pub total_courses: usize,
    pub total_classrooms: usize,
    pub total_instructors: usize,
    pub total_timeslots: usize,
    pub classrooms_used: usize,
    pub timeslots_used: usize,
    pub total_conflicts: usize,
    pub student_conflicts: usize,
    pub instructor_conflicts: usize,
}

/// The final output of a generation request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutput {
    pub assigned_seats: Vec<AssignedSeat>,
    pub warnings: Vec<String>,
    pub conflicts: Vec<Conflict>,
    pub summary: GenerationSummary,
}
