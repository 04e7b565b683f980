//! Weighted sustainability scoring against a certification catalog

use std::collections::BTreeSet;

use ecometric_types::{CatalogError, WeightProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Certification;

/// Points accumulated per aspect/area plus the checked credits
///
/// Aspects and areas keep catalog order so reports read in the same order
/// as the evaluation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationState {
    aspects: Vec<AspectPoints>,
    checked: BTreeSet<(String, String, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AspectPoints {
    name: String,
    areas: Vec<(String, f64)>,
}

/// Raw and maximum points for one aspect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectScore {
    pub aspect: String,
    pub points: f64,
    pub max_points: f64,
    pub weight: f64,
}

/// Everything the score display shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub certification: String,
    pub score: f64,
    pub max_score: f64,
    pub score_unit: String,
    pub progress_percent: f64,
    pub level: String,
    pub aspects: Vec<AspectScore>,
}

impl EvaluationState {
    /// Zero points for every area of the certification
    pub fn new(cert: &Certification) -> Self {
        let aspects = cert
            .aspects
            .iter()
            .map(|aspect| AspectPoints {
                name: aspect.name.clone(),
                areas: aspect.areas.iter().map(|a| (a.name.clone(), 0.0)).collect(),
            })
            .collect();
        Self {
            aspects,
            checked: BTreeSet::new(),
        }
    }

    /// Check or uncheck a credit, updating the area total
    ///
    /// Repeating the current state of a credit leaves the totals untouched.
    pub fn toggle_credit(
        &mut self,
        cert: &Certification,
        aspect: &str,
        area: &str,
        credit: &str,
        checked: bool,
    ) -> Result<(), CatalogError> {
        let value = cert.credit_points(aspect, area, credit)?;
        let key = (aspect.to_string(), area.to_string(), credit.to_string());

        let changed = if checked {
            self.checked.insert(key)
        } else {
            self.checked.remove(&key)
        };
        if !changed {
            return Ok(());
        }

        let slot = self
            .aspects
            .iter_mut()
            .find(|a| a.name == aspect)
            .and_then(|a| a.areas.iter_mut().find(|(name, _)| name == area))
            .ok_or_else(|| CatalogError::UnknownArea {
                aspect: aspect.to_string(),
                area: area.to_string(),
            })?;
        slot.1 += if checked { value } else { -value };
        debug!(aspect, area, credit, checked, total = slot.1, "credit toggled");
        Ok(())
    }

    /// Clear every selection
    pub fn reset(&mut self, cert: &Certification) {
        *self = Self::new(cert);
    }

    pub fn area_points(&self, aspect: &str, area: &str) -> f64 {
        self.aspects
            .iter()
            .find(|a| a.name == aspect)
            .and_then(|a| a.areas.iter().find(|(name, _)| name == area))
            .map(|(_, pts)| *pts)
            .unwrap_or(0.0)
    }

    pub fn aspect_points(&self, aspect: &str) -> f64 {
        self.aspects
            .iter()
            .find(|a| a.name == aspect)
            .map(|a| a.areas.iter().map(|(_, pts)| pts).sum())
            .unwrap_or(0.0)
    }

    pub fn is_checked(&self, aspect: &str, area: &str, credit: &str) -> bool {
        self.checked
            .contains(&(aspect.to_string(), area.to_string(), credit.to_string()))
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Checked (aspect, area) pairs in catalog order, each pair once
    pub fn checked_areas(&self, cert: &Certification) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for aspect in &cert.aspects {
            for area in &aspect.areas {
                let any = area
                    .credits
                    .iter()
                    .any(|c| self.is_checked(&aspect.name, &area.name, &c.name));
                if any {
                    out.push((aspect.name.clone(), area.name.clone()));
                }
            }
        }
        out
    }

    /// Per-aspect raw points against the catalog maxima
    pub fn aspect_scores(&self, cert: &Certification, profile: WeightProfile) -> Vec<AspectScore> {
        self.aspects
            .iter()
            .map(|a| AspectScore {
                aspect: a.name.clone(),
                points: self.aspect_points(&a.name),
                max_points: cert.max_aspect_points(&a.name),
                weight: cert.weight(profile, &a.name),
            })
            .collect()
    }

    /// Weighted score normalized to the certification's maximum
    pub fn calculate_score(&self, cert: &Certification, profile: WeightProfile) -> f64 {
        if !cert.has_criteria() {
            return 0.0;
        }
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for aspect in self.aspect_scores(cert, profile) {
            total_weight += aspect.weight;
            if aspect.max_points > 0.0 {
                weighted_sum += (aspect.points / aspect.max_points) * aspect.weight;
            }
        }
        if total_weight > 0.0 {
            (weighted_sum / total_weight) * cert.max_score
        } else {
            0.0
        }
    }

    pub fn summary(&self, cert: &Certification, profile: WeightProfile) -> ScoreSummary {
        let score = self.calculate_score(cert, profile);
        ScoreSummary {
            certification: cert.name.clone(),
            score,
            max_score: cert.max_score,
            score_unit: cert.score_unit.clone(),
            progress_percent: progress_percent(cert, score),
            level: level_for(cert, score).to_string(),
            aspects: self.aspect_scores(cert, profile),
        }
    }
}

/// Highest level whose threshold the score reaches
pub fn level_for(cert: &Certification, score: f64) -> &str {
    let mut levels: Vec<_> = cert.levels.iter().collect();
    levels.sort_by(|a, b| b.min_score.total_cmp(&a.min_score));
    levels
        .into_iter()
        .find(|level| score >= level.min_score)
        .map(|level| level.label.as_str())
        .unwrap_or("N/A")
}

pub fn progress_percent(cert: &Certification, score: f64) -> f64 {
    if cert.max_score > 0.0 {
        (score / cert.max_score) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Area, Aspect, Credit, Level, WeightTables};
    use std::collections::HashMap;

    fn area(name: &str, credits: &[(&str, f64)]) -> Area {
        Area {
            name: name.to_string(),
            info: None,
            solutions: vec![],
            credits: credits
                .iter()
                .map(|(n, p)| Credit {
                    name: n.to_string(),
                    points: *p,
                })
                .collect(),
        }
    }

    fn cert() -> Certification {
        let mut building = HashMap::new();
        building.insert("Resources".to_string(), 1.5);
        Certification {
            id: "lidera".to_string(),
            name: "LiderA".to_string(),
            max_score: 20.0,
            score_unit: "Points".to_string(),
            levels: vec![
                Level { min_score: 0.0, label: "G".to_string() },
                Level { min_score: 11.0, label: "A++".to_string() },
                Level { min_score: 5.0, label: "C".to_string() },
            ],
            weights: Some(WeightTables {
                building,
                urban: HashMap::new(),
            }),
            aspects: vec![
                Aspect {
                    name: "Local Integration".to_string(),
                    areas: vec![area("Bio-climate", &[("Solar", 0.4), ("Wind", 0.2), ("Shadow", 0.2)])],
                },
                Aspect {
                    name: "Resources".to_string(),
                    areas: vec![
                        area("Insulation", &[("Cork", 0.6), ("Wool", 0.4)]),
                        area("Structure", &[("CLT", 0.7)]),
                    ],
                },
                Aspect {
                    name: "Empty".to_string(),
                    areas: vec![area("Nothing", &[])],
                },
            ],
        }
    }

    #[test]
    fn test_empty_selection_scores_zero() {
        let c = cert();
        let state = EvaluationState::new(&c);
        assert_eq!(state.calculate_score(&c, WeightProfile::Building), 0.0);
        assert_eq!(level_for(&c, 0.0), "G");
    }

    #[test]
    fn test_weighted_score() {
        let c = cert();
        let mut state = EvaluationState::new(&c);
        state.toggle_credit(&c, "Local Integration", "Bio-climate", "Solar", true).unwrap();
        state.toggle_credit(&c, "Resources", "Insulation", "Cork", true).unwrap();
        // Local Integration: 0.4/0.8 * 1.0 = 0.5
        // Resources: 0.6/1.7 * 1.5
        // Empty: no credits, weight 1 still counted
        let expected = (0.5 + (0.6 / 1.7) * 1.5) / 3.5 * 20.0;
        let score = state.calculate_score(&c, WeightProfile::Building);
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_toggle_off_restores_total() {
        let c = cert();
        let mut state = EvaluationState::new(&c);
        state.toggle_credit(&c, "Resources", "Insulation", "Cork", true).unwrap();
        state.toggle_credit(&c, "Resources", "Insulation", "Cork", false).unwrap();
        assert_eq!(state.area_points("Resources", "Insulation"), 0.0);
        assert_eq!(state.checked_count(), 0);
    }

    #[test]
    fn test_repeated_check_is_idempotent() {
        let c = cert();
        let mut state = EvaluationState::new(&c);
        state.toggle_credit(&c, "Resources", "Insulation", "Cork", true).unwrap();
        state.toggle_credit(&c, "Resources", "Insulation", "Cork", true).unwrap();
        assert!((state.area_points("Resources", "Insulation") - 0.6).abs() < 1e-9);
        state.toggle_credit(&c, "Resources", "Structure", "CLT", false).unwrap();
        assert_eq!(state.area_points("Resources", "Structure"), 0.0);
    }

    #[test]
    fn test_aspect_points_never_exceed_credit_sum() {
        let c = cert();
        let all: Vec<(String, String, String)> = c
            .aspects
            .iter()
            .flat_map(|a| {
                a.areas.iter().flat_map(move |ar| {
                    ar.credits
                        .iter()
                        .map(move |cr| (a.name.clone(), ar.name.clone(), cr.name.clone()))
                })
            })
            .collect();
        // every subset of the six credits
        for mask in 0u32..(1 << all.len()) {
            let mut state = EvaluationState::new(&c);
            for (i, (aspect, area, credit)) in all.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    state.toggle_credit(&c, aspect, area, credit, true).unwrap();
                }
            }
            for score in state.aspect_scores(&c, WeightProfile::Building) {
                assert!(score.points <= score.max_points + 1e-9);
            }
            assert!(state.calculate_score(&c, WeightProfile::Building) <= c.max_score + 1e-9);
        }
    }

    #[test]
    fn test_level_thresholds_descending() {
        let c = cert();
        assert_eq!(level_for(&c, 11.0), "A++");
        assert_eq!(level_for(&c, 10.99), "C");
        assert_eq!(level_for(&c, 5.0), "C");
        assert_eq!(level_for(&c, 4.9), "G");
        assert_eq!(level_for(&c, -1.0), "N/A");
    }

    #[test]
    fn test_no_criteria_scores_zero() {
        let mut c = cert();
        c.aspects.clear();
        let state = EvaluationState::new(&c);
        assert_eq!(state.calculate_score(&c, WeightProfile::Urban), 0.0);
    }

    #[test]
    fn test_unknown_credit_rejected() {
        let c = cert();
        let mut state = EvaluationState::new(&c);
        assert!(state.toggle_credit(&c, "Resources", "Insulation", "Gold", true).is_err());
        assert_eq!(state.checked_count(), 0);
    }

    #[test]
    fn test_checked_areas_in_catalog_order() {
        let c = cert();
        let mut state = EvaluationState::new(&c);
        state.toggle_credit(&c, "Resources", "Structure", "CLT", true).unwrap();
        state.toggle_credit(&c, "Local Integration", "Bio-climate", "Wind", true).unwrap();
        state.toggle_credit(&c, "Local Integration", "Bio-climate", "Solar", true).unwrap();
        let areas = state.checked_areas(&c);
        assert_eq!(
            areas,
            vec![
                ("Local Integration".to_string(), "Bio-climate".to_string()),
                ("Resources".to_string(), "Structure".to_string()),
            ]
        );
    }

    #[test]
    fn test_summary_progress() {
        let c = cert();
        let mut state = EvaluationState::new(&c);
        for credit in ["Solar", "Wind", "Shadow"] {
            state.toggle_credit(&c, "Local Integration", "Bio-climate", credit, true).unwrap();
        }
        let summary = state.summary(&c, WeightProfile::Building);
        assert!((summary.progress_percent - summary.score / 20.0 * 100.0).abs() < 1e-9);
        assert_eq!(summary.aspects.len(), 3);
    }
}
