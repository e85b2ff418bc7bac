//! Built-in vocabularies
//!
//! The subject and trial taxonomies are process-wide constants, built once
//! on first access.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;
use crate::option::{NumericSpec, TagOption};

/// Identifier of a built-in vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyKind {
    /// Experimental subjects: demographics and phenotypes
    Subject,

    /// Trials: movement types, conditions and terrain
    Trial,
}

impl TaxonomyKind {
    /// All built-in vocabularies
    pub const ALL: [TaxonomyKind; 2] = [TaxonomyKind::Subject, TaxonomyKind::Trial];

    /// The vocabulary forest
    #[inline]
    #[must_use]
    pub fn options(self) -> &'static [TagOption] {
        match self {
            Self::Subject => subject_options(),
            Self::Trial => trial_options(),
        }
    }

    /// Stable name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Trial => "trial",
        }
    }
}

impl Display for TaxonomyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxonomyKind {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subject" => Ok(Self::Subject),
            "trial" => Ok(Self::Trial),
            other => Err(TaxonomyError::UnknownTaxonomy(other.to_string())),
        }
    }
}

/// Subject vocabulary
#[must_use]
pub fn subject_options() -> &'static [TagOption] {
    &SUBJECT_OPTIONS
}

/// Trial vocabulary
#[must_use]
pub fn trial_options() -> &'static [TagOption] {
    &TRIAL_OPTIONS
}

fn leaf(id: &str, label: &str) -> TagOption {
    TagOption::leaf(id, label)
}

fn measured(id: &str, label: &str, units: &str) -> TagOption {
    TagOption::leaf(id, label).with_numeric(NumericSpec::new(units))
}

static SUBJECT_OPTIONS: Lazy<Vec<TagOption>> = Lazy::new(|| {
    vec![
        TagOption::group(
            "demographics",
            "Demographics",
            vec![leaf("age", "Age")
                .with_numeric(NumericSpec::new("years").with_bounds(10.0, 90.0).integer())],
        ),
        TagOption::group(
            "phenotypes",
            "Phenotypes",
            vec![
                leaf("healthy", "Unimpaired"),
                TagOption::header(
                    "parkinsons",
                    "Parkinsons",
                    vec![
                        leaf("freezing_of_gait", "Freezing of Gait"),
                        leaf("tremor", "Tremor"),
                        leaf("rigidity", "Rigidity"),
                        leaf("bradykinesia", "Bradykinesia"),
                    ],
                ),
                leaf("muscular_distrophy", "Muscular Dystrophy"),
                leaf("cerebral_palsy", "Cerebral Palsy"),
                leaf("spina_bifida", "Spina Bifida"),
                TagOption::header(
                    "stroke",
                    "Stroke",
                    vec![
                        leaf("stroke_left_hemiparesis", "Stroke Left Hemiparesis"),
                        leaf("stroke_right_hemiparesis", "Stroke Right Hemiparesis"),
                    ],
                ),
                leaf("multiple_sclerosis", "multiple sclerosis"),
                leaf("dystonia", "Dystonia"),
                leaf("alzheimers", "Alzheimers"),
                leaf("chronic_pain", "chronic pain"),
                leaf("traumatic_brain_injury", "traumatic brain injury"),
                leaf("ptsd", "ptsd"),
                leaf("tbi", "Traumatic Brain Injury (TBI)"),
                leaf("concussion", "Concussion"),
                leaf("cognitive_impairment", "Cognitive Impairment"),
                leaf("dementia", "Dementia"),
                TagOption::header(
                    "osteoarthritis",
                    "Osteoarthritis",
                    vec![
                        leaf("knee_osteoarthritis_right", "Knee Osteoarthritis - Right"),
                        leaf("knee_osteoarthritis_left", "Knee Osteoarthritis - Left"),
                    ],
                ),
                leaf("pregnant", "Pregnant"),
                leaf("post_partum", "Postpartum"),
                leaf("blind", "Blind"),
                leaf("visually_impaired", "Visually Impaired"),
                TagOption::header(
                    "limb_loss_amputation",
                    "Limb Loss/Amputation",
                    vec![
                        leaf("trans_femoral_amputation_left", "Trans-femoral Amputation - Left"),
                        leaf("trans_femoral_amputation_right", "Trans-femoral Amputation - Right"),
                        leaf("trans_tibial_amputation_left", "Trans-tibial Amputation - Left"),
                        leaf("trans_tibial_amputation_right", "Trans-tibial Amputation - Right"),
                        leaf("trans_radial_amputation_left", "Trans-radial Amputation - Left"),
                        leaf("trans_radial_amputation_right", "Trans-radial Amputation - Right"),
                        leaf("trans_humeral_amputation_left", "Trans-humeral Amputation - Left"),
                        leaf("trans_humeral_amputation_right", "Trans-humeral Amputation - Right"),
                    ],
                ),
                leaf("athlete", "Athlete"),
            ],
        ),
    ]
});

static TRIAL_OPTIONS: Lazy<Vec<TagOption>> = Lazy::new(|| {
    vec![
        TagOption::group(
            "movement_types",
            "Movement Types",
            vec![
                leaf("running", "Running"),
                leaf("walking", "Walking"),
                leaf("sit_to_stand", "Sit to Stand"),
                leaf("jump", "Jumping"),
                leaf("stair_climbing", "Stairs - Climbing"),
                leaf("stair_descending", "Stairs - Descending"),
                leaf("biking", "Biking"),
                leaf("dance", "Dancing"),
                measured("loaded_walking", "Loaded Walking", "kg"),
                leaf("crawling", "Crawling"),
                leaf("climbing", "Climbing"),
                leaf("squatting", "Squatting"),
                leaf("kneeling", "Kneeling"),
                leaf("sitting", "Sitting"),
                leaf("standing", "Standing"),
                leaf("cutting", "Cutting"),
                leaf("lifting", "Lifting"),
                leaf("swimming", "Swimming"),
                leaf("carrying_in_the_hands", "Carrying in the hands"),
                leaf("carrying_in_the_arms", "Carrying in the arms"),
                leaf("carrying_on_shoulders_hip_back", "Carrying on Shoulders, Hips, and Back"),
                leaf("putting_down_objects", "Putting Down Objects"),
                leaf("gait_initiation", "Gait Initiation"),
                leaf("reaching", "Reaching"),
                leaf("upper_extremity_movement", "Upper Extremity Movement"),
                leaf("pitching", "Pitching"),
                leaf("volleyball_hitting", "Volleyball Hitting"),
                leaf("sprinting", "Sprinting"),
                leaf("wheelchair_propulsion", "Wheelchair Propulsion"),
            ],
        ),
        TagOption::group(
            "conditions_devices",
            "Conditions - Devices",
            vec![
                leaf("exo_powered", "Exo - Powered"),
                leaf("exo_unpowered", "Exo - Unpowered"),
                leaf("exo_passive", "Exo - Passive"),
                leaf("prosthetic_powered", "Prosthetic - Powered"),
                leaf("prosthetic_passive", "Prosthetic - Passive"),
                leaf("rigid_brace_left_ankle", "Brace (Rigid) - Left Ankle"),
                leaf("rigid_brace_right_ankle", "Brace (Rigid) - Right Ankle"),
                leaf("rigid_brace_left_knee", "Brace (Rigid) - Left Knee"),
                leaf("rigid_brace_right_knee", "Brace (Rigid) - Right Knee"),
                leaf("rigid_brace_left_hip", "Brace (Rigid) - Left Hip"),
                leaf("rigid_brace_right_hip", "Brace (Rigid) - Right Hip"),
                leaf("pneumatic_jets_shoes", "Pneumatic Jets (Shoes)"),
            ],
        ),
        TagOption::group(
            "conditions_experimental_conditions",
            "Conditions - Experimental conditions",
            vec![
                measured("movement_speed", "Movement Speed", "m/s"),
                measured("treadmill_speed", "Treadmill Speed", "m/s"),
                measured("treadmill_angle", "Treadmill Angle", "deg"),
                leaf("blindfolded", "Blindfolded"),
                measured("balance_perturbation_impulse", "Balance Perturbation Impulse", "N*s"),
                measured("balance_perturbation_angle", "Balance Perturbation Angle", "deg"),
                leaf("dual_task", "Dual Task"),
                leaf("biofeedback", "Biofeedback"),
                leaf("calibration", "Calibration"),
                leaf("arms_crossed", "Arms Crossed"),
                leaf("timed_up_and_go", "Timed Up and Go (TUG)"),
                leaf("six_minute_walk", "6MWT"),
                leaf("walking_with_turns", "Walking with Turns"),
            ],
        ),
        TagOption::group(
            "terrain",
            "Terrain",
            vec![
                leaf("split_belt", "Split-belt Treadmill"),
                leaf("out_of_lab", "Out of Lab"),
                leaf("overground", "Overground"),
                leaf("treadmill", "Treadmill"),
                leaf("pitching_mound", "Pitching Mound"),
                leaf("sports_field", "Sports Field"),
                leaf("sports_track", "Sports Track"),
                leaf("sports_court", "Sports Court"),
            ],
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{count_nodes, validate_forest};

    #[test]
    fn builtin_vocabularies_validate() {
        for kind in TaxonomyKind::ALL {
            assert!(validate_forest(kind.options()).is_ok(), "{kind} failed validation");
        }
    }

    #[test]
    fn subject_vocabulary_shape() {
        let options = subject_options();

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].id, "demographics");
        assert!(options[0].is_non_selectable);

        let age = &options[0].children[0];
        let spec = age.numeric.as_ref().unwrap();
        assert_eq!(spec.units, "years");
        assert_eq!((spec.min, spec.max, spec.integer), (Some(10.0), Some(90.0), true));

        let parkinsons = options[1].children.iter().find(|o| o.id == "parkinsons").unwrap();
        assert!(parkinsons.is_selectable());
        assert_eq!(parkinsons.children.len(), 4);
    }

    #[test]
    fn trial_vocabulary_shape() {
        let options = trial_options();
        let roots: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();

        assert_eq!(
            roots,
            ["movement_types", "conditions_devices", "conditions_experimental_conditions", "terrain"]
        );
        assert!(options.iter().all(|o| o.is_non_selectable));
        assert_eq!(count_nodes(options), 4 + 29 + 12 + 13 + 8);
    }

    #[test]
    fn taxonomy_kind_round_trips_names() {
        for kind in TaxonomyKind::ALL {
            assert_eq!(kind.as_str().parse::<TaxonomyKind>().unwrap(), kind);
        }
        assert!(matches!(
            "session".parse::<TaxonomyKind>(),
            Err(TaxonomyError::UnknownTaxonomy(name)) if name == "session"
        ));
    }
}
