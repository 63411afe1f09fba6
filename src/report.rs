use crate::conflicts::detect_conflicts;
use crate::data::{
    AssignedSeat, Conflict, ConflictKind, ExamData, GenerationOutput, GenerationSummary,
};
use crate::seating::assign_seats;
use itertools::Itertools;
use log::{debug, info, warn};
use std::time::Instant;

/// Names of the input collections that are still empty.
pub fn missing_collections(data: &ExamData) -> Vec<&'static str> {
    [
        ("courses", data.courses.is_empty()),
        ("classrooms", data.classrooms.is_empty()),
        ("instructors", data.instructors.is_empty()),
        ("timeslots", data.timeslots.is_empty()),
        ("schedule", data.schedule.is_empty()),
    ]
    .into_iter()
    .filter_map(|(name, empty)| empty.then_some(name))
    .collect()
}

/// Runs seat assignment and conflict detection over one request and summarizes both.
pub fn generate(data: &ExamData) -> GenerationOutput {
    let start_time = Instant::now();
    info!(
        "Generating exam seating for {} schedule entries, {} classrooms and {} timeslots...",
        data.schedule.len(),
        data.classrooms.len(),
        data.timeslots.len()
    );

    let seating = assign_seats(
        &data.schedule,
        &data.classrooms,
        &data.courses,
        &data.instructors,
        &data.timeslots,
    );
    let conflicts = detect_conflicts(&data.schedule, &data.timeslots);
    let summary = summarize(data, &seating.assigned_seats, &conflicts);

    if conflicts.is_empty() {
        info!("No conflicts detected.");
    } else {
        warn!("Found {} conflicts.", conflicts.len());
        for conflict in &conflicts {
            debug!("{}", conflict);
        }
    }
    info!(
        "Assigned {} seats in {:.2?}",
        seating.assigned_seats.len(),
        start_time.elapsed()
    );

    GenerationOutput {
        assigned_seats: seating.assigned_seats,
        warnings: seating.warnings,
        conflicts,
        summary,
    }
}

fn summarize(data: &ExamData, seats: &[AssignedSeat], conflicts: &[Conflict]) -> GenerationSummary {
    let student_conflicts = conflicts
        .iter()
        .filter(|c| c.kind == ConflictKind::Student)
        .count();

    GenerationSummary {
        total_students: seats.iter().map(|s| &s.entry.student_id).unique().count(),
        total_courses: data.courses.len(),
        total_classrooms: data.classrooms.len(),
        total_instructors: data.instructors.len(),
        total_timeslots: data.timeslots.len(),
        classrooms_used: seats.iter().map(|s| &s.entry.classroom_id).unique().count(),
        timeslots_used: seats.iter().map(|s| &s.entry.timeslot_id).unique().count(),
        total_conflicts: conflicts.len(),
        student_conflicts,
        instructor_conflicts: conflicts.len() - student_conflicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Classroom, Course, Instructor, ScheduleEntry, Timeslot};

    fn entry(student: &str, instructor: &str, classroom: &str, timeslot: &str) -> ScheduleEntry {
        ScheduleEntry {
            student_id: student.into(),
            course_id: "CS101".into(),
            instructor_id: instructor.into(),
            classroom_id: classroom.into(),
            timeslot_id: timeslot.into(),
        }
    }

    fn sample() -> ExamData {
        ExamData {
            courses: vec![Course {
                course_id: "CS101".into(),
                course_name: "Intro".into(),
                department: "CS".into(),
            }],
            classrooms: vec![Classroom {
                classroom_id: "C1".into(),
                building_name: "Main".into(),
                room_number: "1".into(),
                capacity: 2,
            }],
            instructors: vec![Instructor {
                instructor_id: "I1".into(),
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
                department: "CS".into(),
            }],
            timeslots: vec![Timeslot {
                timeslot_id: "T1".into(),
                day: "Monday".into(),
                start_time: "09:00".into(),
                end_time: "11:00".into(),
            }],
            schedule: vec![
                entry("S1", "I1", "C1", "T1"),
                entry("S2", "I1", "C1", "T1"),
                entry("S1", "I2", "C1", "T1"),
                entry("S3", "I3", "C2", "T2"),
            ],
        }
    }

    #[test]
    fn complete_data_has_no_missing_collections() {
        assert!(missing_collections(&sample()).is_empty());
    }

    #[test]
    fn reports_each_empty_collection() {
        let data = ExamData {
            classrooms: sample().classrooms,
            ..ExamData::default()
        };
        assert_eq!(
            missing_collections(&data),
            vec!["courses", "instructors", "timeslots", "schedule"]
        );
    }

    #[test]
    fn generate_combines_seats_warnings_and_conflicts() {
        let output = generate(&sample());

        assert_eq!(output.assigned_seats.len(), 4);
        assert_eq!(output.warnings.len(), 1);
        // S1 twice at T1, I1 twice at T1
        assert_eq!(output.conflicts.len(), 2);

        let summary = &output.summary;
        assert_eq!(summary.total_students, 3);
        assert_eq!(summary.total_classrooms, 1);
        assert_eq!(summary.classrooms_used, 2);
        assert_eq!(summary.timeslots_used, 2);
        assert_eq!(summary.student_conflicts, 1);
        assert_eq!(summary.instructor_conflicts, 1);
    }

    #[test]
    fn generate_tolerates_empty_reference_tables() {
        let data = ExamData {
            schedule: sample().schedule,
            ..ExamData::default()
        };
        let output = generate(&data);

        assert_eq!(output.assigned_seats.len(), 4);
        assert!(output.assigned_seats.iter().all(|s| s.course_name.is_none()
            && s.instructor_name.is_none()
            && s.classroom_info.is_none()
            && s.timeslot_info.is_none()));
    }
}
