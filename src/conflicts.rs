use crate::data::{Conflict, ConflictKind, ScheduleEntry, Timeslot};
use crate::grouping::group_in_order;
use crate::seating::find_timeslot;

/// Finds every student and instructor booked more than once in the same timeslot.
///
/// Both passes run over the full schedule and are reported independently; student
/// conflicts come first, each pass in first-seen order of the person and then the slot.
pub fn detect_conflicts(schedule: &[ScheduleEntry], timeslots: &[Timeslot]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for kind in [ConflictKind::Student, ConflictKind::Instructor] {
        let by_person = group_in_order(schedule, |e| person_id(kind, e).to_string());

        for (id, entries) in by_person {
            for (timeslot_id, colliding) in group_in_order(&entries, |e| e.timeslot_id.clone()) {
                if colliding.len() < 2 {
                    continue;
                }

                let timeslot = find_timeslot(timeslots, &timeslot_id);
                let details = describe(kind, &id, colliding.len(), timeslot);
                conflicts.push(Conflict {
                    kind,
                    id: id.clone(),
                    timeslot_id,
                    entries: colliding.into_iter().map(|e| (*e).clone()).collect(),
                    details,
                });
            }
        }
    }

    conflicts
}

fn person_id(kind: ConflictKind, entry: &ScheduleEntry) -> &str {
    match kind {
        ConflictKind::Student => &entry.student_id,
        ConflictKind::Instructor => &entry.instructor_id,
    }
}

fn describe(kind: ConflictKind, id: &str, count: usize, timeslot: Option<&Timeslot>) -> String {
    let when = timeslot.map(|t| format!(" ({})", t)).unwrap_or_default();
    match kind {
        ConflictKind::Student => {
            format!("Student {} has {} exams scheduled at the same time{}", id, count, when)
        }
        ConflictKind::Instructor => {
            format!("Instructor {} is assigned to {} classes at the same time{}", id, count, when)
        }
    }
}
