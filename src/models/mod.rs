//! Matching domain models.
//!
//! The entity store and its four record types. All records are plain data:
//! the matcher, validator, and analyzer read them and never mutate them.
//!
//! | Record | Role |
//! |--------|------|
//! | `Lecturer` | Teaches courses; bounded per-period load |
//! | `Room` | Hosts a course; seat capacity |
//! | `Course` | Offered by one lecturer; minimum room size |
//! | `StudentRequest` | Ranked course choices for one period |

mod course;
mod dataset;
mod lecturer;
mod request;
mod room;
pub mod sample;

pub use course::Course;
pub use dataset::Dataset;
pub use lecturer::Lecturer;
pub use request::StudentRequest;
pub use room::Room;
