//! Synthetic dataset generation.
//!
//! Builds random but well-formed datasets: every course names an existing
//! lecturer and fits at least one room, and every request lists distinct,
//! existing courses. Output is fully determined by the seed.

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{CourseMatchError, Result};
use crate::models::{Course, Dataset, Lecturer, Room, StudentRequest};

/// Sizes and seed for a generated dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub lecturers: usize,
    pub rooms: usize,
    pub courses: usize,
    pub requests: usize,
    pub periods: Vec<String>,
    /// Choices per request, capped at the number of courses.
    pub choices_per_request: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lecturers: 10,
            rooms: 8,
            courses: 20,
            requests: 200,
            periods: ["A", "B", "C", "D", "E", "F"].map(String::from).to_vec(),
            choices_per_request: 3,
            seed: 42,
        }
    }
}

/// Seeded random dataset builder.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    config: GeneratorConfig,
}

impl DatasetGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates a dataset.
    ///
    /// # Errors
    /// `Config` if there are courses but no lecturers or rooms to host them,
    /// or requests but no periods.
    pub fn generate(&self) -> Result<Dataset> {
        let cfg = &self.config;
        if cfg.courses > 0 && (cfg.lecturers == 0 || cfg.rooms == 0) {
            return Err(CourseMatchError::Config(
                "courses need at least one lecturer and one room".into(),
            ));
        }
        if cfg.periods.is_empty() && (cfg.requests > 0 || cfg.lecturers > 0 || cfg.rooms > 0) {
            return Err(CourseMatchError::Config("at least one period is required".into()));
        }

        let mut rng = SmallRng::seed_from_u64(cfg.seed);

        let lecturers: Vec<Lecturer> = (1..=cfg.lecturers)
            .map(|i| {
                Lecturer::new(format!("L{i}"))
                    .with_name(format!("Lecturer {i}"))
                    .with_max_courses(rng.random_range(1..=3))
                    .with_periods(self.period_subset(&mut rng))
            })
            .collect();

        let rooms: Vec<Room> = (1..=cfg.rooms)
            .map(|i| {
                Room::new(format!("R{i}"), rng.random_range(20..=200))
                    .with_name(format!("Room {i}"))
                    .with_periods(self.period_subset(&mut rng))
            })
            .collect();

        let largest_room = rooms.iter().map(|r| r.capacity).max().unwrap_or(0);
        let courses: Vec<Course> = (1..=cfg.courses)
            .map(|i| {
                let lecturer = &lecturers[rng.random_range(0..lecturers.len())];
                Course::new(format!("C{i}"), lecturer.id.clone())
                    .with_code(format!("CRS{i:03}"))
                    .with_name(format!("Course {i}"))
                    .with_required_capacity(rng.random_range(10..=largest_room.max(10)))
            })
            .collect();

        let choices = cfg.choices_per_request.min(courses.len());
        let requests: Vec<StudentRequest> = (1..=cfg.requests)
            .map(|i| {
                let period = cfg.periods[rng.random_range(0..cfg.periods.len())].clone();
                let picked: Vec<String> = courses
                    .choose_multiple(&mut rng, choices)
                    .map(|c| c.id.clone())
                    .collect();
                StudentRequest::new(format!("SR{i}"), format!("S{i}"), period)
                    .with_student_name(format!("Student {i}"))
                    .with_choices(picked)
            })
            .collect();

        tracing::debug!(
            seed = cfg.seed,
            lecturers = lecturers.len(),
            rooms = rooms.len(),
            courses = courses.len(),
            requests = requests.len(),
            "dataset generated"
        );

        Ok(Dataset {
            lecturers,
            rooms,
            courses,
            requests,
        })
    }

    /// A non-empty random subset of the configured periods, in config order.
    fn period_subset(&self, rng: &mut SmallRng) -> Vec<String> {
        let periods = &self.config.periods;
        let mut subset: Vec<String> = periods
            .iter()
            .filter(|_| rng.random_bool(0.6))
            .cloned()
            .collect();
        if subset.is_empty() {
            if let Some(p) = periods.choose(rng) {
                subset.push(p.clone());
            }
        }
        subset
    }
}
