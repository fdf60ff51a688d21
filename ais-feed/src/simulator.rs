use ais_core::VesselRecord;
use rand::{Rng, SeedableRng, rngs::StdRng};

const POSITION_JITTER_DEGREES: f64 = 0.001;
const SPEED_JITTER_KNOTS: f64 = 0.5;
const COURSE_JITTER_DEGREES: f64 = 2.0;

/// Advances vessel records by one simulated time step per call.
///
/// Jitter is range bounded so stepped records always satisfy the wire
/// invariants: non-negative speed, course within `[0, 360)` and
/// heading equal to the integer part of the course. Position and
/// course drift is unbounded over the feed's lifetime.
pub struct VesselSimulator {
    rng: StdRng,
}

impl VesselSimulator {
    /// A seeded simulator replays the identical trajectory every run.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn step(&mut self, vessel: &mut VesselRecord) {
        vessel.latitude += self
            .rng
            .random_range(-POSITION_JITTER_DEGREES..=POSITION_JITTER_DEGREES);
        vessel.longitude += self
            .rng
            .random_range(-POSITION_JITTER_DEGREES..=POSITION_JITTER_DEGREES);

        vessel.speed = (vessel.speed
            + self.rng.random_range(-SPEED_JITTER_KNOTS..=SPEED_JITTER_KNOTS))
        .max(0.0);

        let mut course = (vessel.course
            + self
                .rng
                .random_range(-COURSE_JITTER_DEGREES..=COURSE_JITTER_DEGREES))
        .rem_euclid(360.0);
        // rem_euclid rounds up to exactly 360.0 for tiny negative inputs.
        if course >= 360.0 {
            course = 0.0;
        }
        vessel.course = course;
        vessel.heading = vessel.course as i32 % 360;
    }
}
