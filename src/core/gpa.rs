//! GPA computation, classification, and target back-solving
//!
//! Only records that satisfy [`CourseRecord::counts_toward_gpa`] contribute.
//! Degenerate inputs are encoded in return values rather than errors: no
//! valid credits yields [`GpaSummary::empty`], and a completed program
//! yields [`TargetRequirement::AlreadyComplete`].

use crate::core::models::CourseRecord;
use crate::core::rounding::{round1, round2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grading scale a GPA value is expressed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeScale {
    /// 0–10
    Ten,
    /// 0–4.0
    Four,
}

impl GradeScale {
    /// Highest attainable value on this scale
    #[must_use]
    pub const fn max(self) -> f64 {
        match self {
            Self::Ten => 10.0,
            Self::Four => 4.0,
        }
    }

    /// The summary's GPA on this scale
    #[must_use]
    pub const fn pick(self, summary: &GpaSummary) -> f64 {
        match self {
            Self::Ten => summary.gpa10,
            Self::Four => summary.gpa4,
        }
    }
}

impl FromStr for GradeScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "10" | "ten" => Ok(Self::Ten),
            "4" | "four" => Ok(Self::Four),
            _ => Err(format!("Unknown grade scale: '{s}' (use 'ten' or 'four')")),
        }
    }
}

impl fmt::Display for GradeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ten => write!(f, "ten"),
            Self::Four => write!(f, "four"),
        }
    }
}

/// Academic standing derived from the 4-point GPA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// ≥ 3.6
    Excellent,
    /// ≥ 3.2
    Good,
    /// ≥ 2.5
    Fair,
    /// ≥ 2.0
    Average,
    /// ≥ 1.0
    WeakAverage,
    /// below 1.0
    Poor,
    /// No valid graded course
    NotAvailable,
}

impl Classification {
    /// Classify a 4-point GPA. Thresholds are inclusive lower bounds checked
    /// from the top.
    #[must_use]
    pub fn from_gpa4(gpa4: f64) -> Self {
        const LADDER: [(f64, Classification); 5] = [
            (3.6, Classification::Excellent),
            (3.2, Classification::Good),
            (2.5, Classification::Fair),
            (2.0, Classification::Average),
            (1.0, Classification::WeakAverage),
        ];
        LADDER
            .iter()
            .find(|(threshold, _)| gpa4 >= *threshold)
            .map_or(Self::Poor, |(_, class)| *class)
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Average => "Average",
            Self::WeakAverage => "Weak Average",
            Self::Poor => "Poor",
            Self::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Credit-weighted GPA on both scales
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpaSummary {
    /// 10-point GPA, two decimals
    pub gpa10: f64,
    /// 4-point GPA, two decimals
    pub gpa4: f64,
    /// Standing from `gpa4`
    pub classification: Classification,
    /// Credits of the courses that counted
    pub total_credits: f64,
}

impl GpaSummary {
    /// The "no data" sentinel: `(0, 0, N/A, 0)`
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            gpa10: 0.0,
            gpa4: 0.0,
            classification: Classification::NotAvailable,
            total_credits: 0.0,
        }
    }

    /// Whether this is the sentinel
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classification == Classification::NotAvailable
    }
}

/// GPA for a single term label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermGpa {
    /// Term label as it appears in the records
    pub term: String,
    /// Summary over that term's records
    pub summary: GpaSummary,
}

/// Compute the credit-weighted GPA summary over valid records
#[must_use]
pub fn compute_gpa(records: &[CourseRecord]) -> GpaSummary {
    compute_gpa_iter(records.iter())
}

fn compute_gpa_iter<'a>(records: impl Iterator<Item = &'a CourseRecord>) -> GpaSummary {
    let mut credits = 0.0;
    let mut weighted10 = 0.0;
    let mut weighted4 = 0.0;

    for record in records.filter(|r| r.counts_toward_gpa()) {
        credits += record.credits;
        weighted10 = record
            .score10
            .unwrap_or_default()
            .mul_add(record.credits, weighted10);
        weighted4 = record
            .grade_points()
            .unwrap_or_default()
            .mul_add(record.credits, weighted4);
    }

    if credits <= 0.0 {
        return GpaSummary::empty();
    }

    let gpa4 = round2(weighted4 / credits);
    GpaSummary {
        gpa10: round2(weighted10 / credits),
        gpa4,
        classification: Classification::from_gpa4(gpa4),
        total_credits: round1(credits),
    }
}

/// GPA per term, in order of first appearance of each term label
#[must_use]
pub fn compute_term_gpas(records: &[CourseRecord]) -> Vec<TermGpa> {
    let mut terms: Vec<&str> = Vec::new();
    for record in records {
        if !terms.contains(&record.term.as_str()) {
            terms.push(&record.term);
        }
    }

    terms
        .into_iter()
        .map(|term| TermGpa {
            term: term.to_string(),
            summary: compute_gpa_iter(records.iter().filter(|r| r.term == term)),
        })
        .collect()
}

/// What the remaining credits must average to reach a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetRequirement {
    /// Current credits already meet the program total; nothing left to plan
    AlreadyComplete,
    /// Required average over the remaining credits (raw, not clamped)
    Required {
        /// Required GPA, two decimals; may exceed the scale maximum or be negative
        gpa: f64,
        /// Credits still to be taken
        remaining_credits: f64,
    },
}

/// Caller-facing reading of a [`TargetRequirement`] on a given scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    /// The program is finished
    Complete,
    /// Reachable with the remaining credits
    Achievable,
    /// Target is met even with zero points on the remaining credits
    AlreadySecured,
    /// Required value is above the scale maximum
    Infeasible,
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "program complete"),
            Self::Achievable => write!(f, "achievable"),
            Self::AlreadySecured => write!(f, "already secured"),
            Self::Infeasible => write!(f, "not reachable"),
        }
    }
}

impl TargetRequirement {
    /// Remaining credits (0 when complete)
    #[must_use]
    pub const fn remaining_credits(&self) -> f64 {
        match self {
            Self::AlreadyComplete => 0.0,
            Self::Required {
                remaining_credits, ..
            } => *remaining_credits,
        }
    }

    /// Required GPA, if any
    #[must_use]
    pub const fn required_gpa(&self) -> Option<f64> {
        match self {
            Self::AlreadyComplete => None,
            Self::Required { gpa, .. } => Some(*gpa),
        }
    }

    /// Interpret the raw value against `scale`
    #[must_use]
    pub fn feasibility(&self, scale: GradeScale) -> Feasibility {
        match self {
            Self::AlreadyComplete => Feasibility::Complete,
            Self::Required { gpa, .. } if *gpa > scale.max() => Feasibility::Infeasible,
            Self::Required { gpa, .. } if *gpa <= 0.0 => Feasibility::AlreadySecured,
            Self::Required { .. } => Feasibility::Achievable,
        }
    }
}

/// Back-solve the average needed over the remaining credits to finish the
/// program at `target_gpa`.
///
/// `(target · total − current · credits) / remaining`, rounded to two
/// decimals and returned without clamping to the scale.
#[must_use]
pub fn required_future_gpa(
    current_gpa: f64,
    current_credits: f64,
    total_program_credits: f64,
    target_gpa: f64,
) -> TargetRequirement {
    if current_credits >= total_program_credits {
        return TargetRequirement::AlreadyComplete;
    }

    let remaining_credits = total_program_credits - current_credits;
    let needed = target_gpa.mul_add(total_program_credits, -(current_gpa * current_credits));
    TargetRequirement::Required {
        gpa: round2(needed / remaining_credits),
        remaining_credits,
    }
}
