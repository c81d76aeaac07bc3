//! Fixed workout templates. These are configuration, not user data: the
//! editor never adds or removes rows beyond what the template defines.

pub const REST: &str = "Rest";

pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_REPS: u32 = 10;
pub const DEFAULT_WEIGHT: f64 = 10.0;

pub const TEMPLATES: [(&str, &[&str]); 4] = [
    (
        "Anterior A",
        &[
            "Incline Chest Press (DB)",
            "Butterfly",
            "Lateral Raises (Cable)",
            "Overhead Extension",
            "Rope Pushdown",
            "Hack Squat",
            "Leg Extension",
            "Crunches",
        ],
    ),
    (
        "Anterior B",
        &[
            "Flat Chest Press",
            "Incline Chest Press (Mach)",
            "Lateral Raises (Cable)",
            "Overhead Extension",
            "Rope Pushdown",
            "Hack Squat",
            "Leg Extension",
            "Crunches",
        ],
    ),
    (
        "Posterior A",
        &[
            "Lat Pulldown",
            "Seated Row",
            "T-Bar Row",
            "Preacher Curl",
            "Hammer Curl",
            "Wrist Curl",
            "Back Delts",
            "RDL",
            "Leg Curls",
        ],
    ),
    (
        "Posterior B",
        &[
            "Lat Pulldown",
            "Seated Row",
            "T-Bar Row",
            "Incline Bi Curl",
            "Hammer Curl",
            "Reverse Curls",
            "Back Delts",
            "RDL",
            "Leg Curls",
        ],
    ),
];

pub fn exercise_names(template: &str) -> Option<&'static [&'static str]> {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == template)
        .map(|(_, names)| *names)
}

pub fn is_template(name: &str) -> bool {
    exercise_names(name).is_some()
}
