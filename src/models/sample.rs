//! Built-in demo dataset.
//!
//! A small fictional school ("Crestwood"): five lecturers, five rooms, eight
//! courses, and eight student requests over periods A through D.

use super::{Course, Dataset, Lecturer, Room, StudentRequest};

/// Returns the Crestwood demo dataset.
pub fn crestwood() -> Dataset {
    Dataset {
        lecturers: lecturers(),
        rooms: rooms(),
        courses: courses(),
        requests: requests(),
    }
}

fn lecturers() -> Vec<Lecturer> {
    vec![
        Lecturer::new("L1")
            .with_name("Dr. Sarah Johnson")
            .with_max_courses(2)
            .with_periods(["A", "B", "C", "D"]),
        Lecturer::new("L2")
            .with_name("Prof. Michael Chen")
            .with_max_courses(1)
            .with_periods(["A", "C", "E"]),
        Lecturer::new("L3")
            .with_name("Dr. Emily Rodriguez")
            .with_max_courses(2)
            .with_periods(["B", "D", "F"]),
        Lecturer::new("L4")
            .with_name("Prof. James Wilson")
            .with_max_courses(1)
            .with_periods(["A", "B", "E", "F"]),
        Lecturer::new("L5")
            .with_name("Dr. Lisa Thompson")
            .with_max_courses(2)
            .with_periods(["C", "D", "E"]),
    ]
}

fn rooms() -> Vec<Room> {
    const ALL: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
    vec![
        Room::new("R1", 200).with_name("Main Hall").with_periods(ALL),
        Room::new("R2", 30).with_name("Room 101").with_periods(ALL),
        Room::new("R3", 30).with_name("Room 102").with_periods(ALL),
        Room::new("R4", 40)
            .with_name("Science Lab")
            .with_periods(["B", "D", "F"]),
        Room::new("R5", 25)
            .with_name("Computer Lab")
            .with_periods(["A", "C", "E"]),
    ]
}

fn courses() -> Vec<Course> {
    let course = |id: &str, code: &str, name: &str, lecturer: &str, capacity: u32| {
        Course::new(id, lecturer)
            .with_code(code)
            .with_name(name)
            .with_required_capacity(capacity)
    };
    vec![
        course("C1", "MATH101", "Introduction to Calculus", "L1", 120),
        course("C2", "PHYS200", "Classical Mechanics", "L2", 80),
        course("C3", "CS150", "Programming Fundamentals", "L3", 25),
        course("C4", "ENG220", "Creative Writing", "L4", 30),
        course("C5", "HIST110", "World History", "L1", 150),
        course("C6", "BIO240", "Human Anatomy", "L5", 40),
        course("C7", "CHEM180", "Organic Chemistry", "L2", 30),
        course("C8", "PSYCH101", "Introduction to Psychology", "L3", 200),
    ]
}

fn requests() -> Vec<StudentRequest> {
    let request = |n: u32, name: &str, period: &str, choices: [&str; 3]| {
        StudentRequest::new(format!("SR{n}"), format!("S{n}"), period)
            .with_student_name(name)
            .with_choices(choices)
    };
    vec![
        request(1, "Alex Smith", "A", ["C1", "C2", "C5"]),
        request(2, "Jamie Taylor", "A", ["C2", "C5", "C7"]),
        request(3, "Morgan Wright", "B", ["C1", "C3", "C8"]),
        request(4, "Casey Jones", "B", ["C3", "C8", "C4"]),
        request(5, "Jordan Lee", "C", ["C2", "C6", "C7"]),
        request(6, "Riley Garcia", "C", ["C6", "C7", "C2"]),
        request(7, "Quinn Peterson", "D", ["C1", "C6", "C8"]),
        request(8, "Avery Martinez", "D", ["C8", "C1", "C3"]),
    ]
}
