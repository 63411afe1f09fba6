use crate::data::{
    AssignedSeat, Classroom, Course, DEFAULT_CAPACITY, Instructor, ScheduleEntry, SeatAssignment,
    Timeslot,
};
use crate::grouping::group_in_order;
use log::{trace, warn};

/// Assigns seat numbers per (classroom, timeslot) group and attaches display labels.
///
/// Every entry yields exactly one seat. A group larger than its room only produces a
/// warning; numbering wraps modulo capacity, so overflowing groups reuse seat numbers.
pub fn assign_seats(
    schedule: &[ScheduleEntry],
    classrooms: &[Classroom],
    courses: &[Course],
    instructors: &[Instructor],
    timeslots: &[Timeslot],
) -> SeatAssignment {
    let groups = group_in_order(schedule, |e| (e.classroom_id.clone(), e.timeslot_id.clone()));
    trace!(
        "Seating {} entries across {} classroom/timeslot groups.",
        schedule.len(),
        groups.len()
    );

    let mut assigned_seats = Vec::with_capacity(schedule.len());
    let mut warnings = Vec::new();

    for ((classroom_id, _), entries) in groups {
        let classroom = find_classroom(classrooms, &classroom_id);
        let capacity = classroom
            .map(|c| c.capacity)
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_CAPACITY);

        if entries.len() > capacity as usize {
            let message = format!(
                "Classroom {} exceeded capacity: {} students assigned, but only {} seats available",
                classroom_id,
                entries.len(),
                capacity
            );
            warn!("{}", message);
            warnings.push(message);
        }

        for (index, entry) in entries.into_iter().enumerate() {
            let seat_number = (index % capacity as usize) as u32 + 1;
            assigned_seats.push(enrich(
                entry,
                seat_number,
                classroom,
                courses,
                instructors,
                timeslots,
            ));
        }
    }

    SeatAssignment {
        assigned_seats,
        warnings,
    }
}

fn enrich(
    entry: &ScheduleEntry,
    seat_number: u32,
    classroom: Option<&Classroom>,
    courses: &[Course],
    instructors: &[Instructor],
    timeslots: &[Timeslot],
) -> AssignedSeat {
    AssignedSeat {
        entry: entry.clone(),
        seat_number,
        course_name: find_course(courses, &entry.course_id).map(|c| c.course_name.clone()),
        instructor_name: find_instructor(instructors, &entry.instructor_id).map(instructor_name),
        classroom_info: classroom.map(classroom_info),
        timeslot_info: find_timeslot(timeslots, &entry.timeslot_id).map(|t| t.to_string()),
    }
}

// lookups: first match wins if a reference table repeats a key

pub fn find_course<'a>(courses: &'a [Course], id: &str) -> Option<&'a Course> {
    courses.iter().find(|c| c.course_id == id)
}

pub fn find_classroom<'a>(classrooms: &'a [Classroom], id: &str) -> Option<&'a Classroom> {
    classrooms.iter().find(|c| c.classroom_id == id)
}

pub fn find_instructor<'a>(instructors: &'a [Instructor], id: &str) -> Option<&'a Instructor> {
    instructors.iter().find(|i| i.instructor_id == id)
}

pub fn find_timeslot<'a>(timeslots: &'a [Timeslot], id: &str) -> Option<&'a Timeslot> {
    timeslots.iter().find(|t| t.timeslot_id == id)
}

fn instructor_name(instructor: &Instructor) -> String {
    format!("{} {}", instructor.first_name, instructor.last_name)
}

fn classroom_info(classroom: &Classroom) -> String {
    format!("{} - Room {}", classroom.building_name, classroom.room_number)
}
