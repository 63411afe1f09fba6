use crate::data::AssignedSeat;

/// All seats of one student, in assignment order.
pub fn student_schedule(student_id: &str, seats: &[AssignedSeat]) -> Vec<AssignedSeat> {
    seats
        .iter()
        .filter(|s| s.entry.student_id == student_id)
        .cloned()
        .collect()
}

/// All seats supervised by one instructor, in assignment order.
pub fn instructor_schedule(instructor_id: &str, seats: &[AssignedSeat]) -> Vec<AssignedSeat> {
    seats
        .iter()
        .filter(|s| s.entry.instructor_id == instructor_id)
        .cloned()
        .collect()
}

/// All seats in one classroom ordered by seat number.
///
/// The sort is stable, so seats that share a number (wrapped overflow groups, or the same
/// seat in different timeslots) keep their assignment order.
pub fn room_schedule(classroom_id: &str, seats: &[AssignedSeat]) -> Vec<AssignedSeat> {
    let mut room: Vec<AssignedSeat> = seats
        .iter()
        .filter(|s| s.entry.classroom_id == classroom_id)
        .cloned()
        .collect();
    room.sort_by_key(|s| s.seat_number);
    room
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScheduleEntry;

    fn seat(
        student: &str,
        instructor: &str,
        classroom: &str,
        timeslot: &str,
        number: u32,
    ) -> AssignedSeat {
        AssignedSeat {
            entry: ScheduleEntry {
                student_id: student.into(),
                course_id: "CS101".into(),
                instructor_id: instructor.into(),
                classroom_id: classroom.into(),
                timeslot_id: timeslot.into(),
            },
            seat_number: number,
            course_name: None,
            instructor_name: None,
            classroom_info: None,
            timeslot_info: None,
        }
    }

    fn students(seats: &[AssignedSeat]) -> Vec<&str> {
        seats.iter().map(|s| s.entry.student_id.as_str()).collect()
    }

    #[test]
    fn student_view_keeps_order() {
        let seats = vec![
            seat("S1", "I1", "C1", "T2", 3),
            seat("S2", "I1", "C1", "T1", 1),
            seat("S1", "I2", "C2", "T1", 1),
        ];
        let mine = student_schedule("S1", &seats);
        let slots: Vec<&str> = mine.iter().map(|s| s.entry.timeslot_id.as_str()).collect();
        assert_eq!(slots, vec!["T2", "T1"]);
        assert!(student_schedule("S9", &seats).is_empty());
    }

    #[test]
    fn instructor_view_keeps_order() {
        let seats = vec![
            seat("S3", "I1", "C1", "T1", 2),
            seat("S2", "I2", "C1", "T1", 1),
            seat("S1", "I1", "C2", "T2", 1),
        ];
        assert_eq!(students(&instructor_schedule("I1", &seats)), vec!["S3", "S1"]);
    }

    #[test]
    fn room_view_sorts_stably_by_seat_number() {
        let seats = vec![
            seat("A", "I1", "C1", "T1", 2),
            seat("B", "I1", "C1", "T1", 1),
            seat("X", "I1", "C2", "T1", 1),
            seat("C", "I1", "C1", "T1", 1),
            seat("D", "I1", "C1", "T2", 2),
        ];
        let room = room_schedule("C1", &seats);

        assert_eq!(students(&room), vec!["B", "C", "A", "D"]);
        assert!(room.windows(2).all(|w| w[0].seat_number <= w[1].seat_number));
    }
}
