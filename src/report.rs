//! Pairwise classification of a configured scene.

use crate::bounds::{Classify, Containment};
use crate::config::SceneConfig;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PairResult {
    pub subject: String,
    pub operand: String,
    pub result: Containment,
}

/// Every ordered pair of distinct volumes, and every volume against every
/// point, in scene order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub volumes: Vec<PairResult>,
    pub points: Vec<PairResult>,
}

impl ClassificationReport {
    pub fn from_scene(scene: &SceneConfig) -> Self {
        let mut report = Self::default();
        for (i, a) in scene.volumes.iter().enumerate() {
            for (j, b) in scene.volumes.iter().enumerate() {
                if i == j {
                    continue;
                }
                report.volumes.push(PairResult {
                    subject: a.name.clone(),
                    operand: b.name.clone(),
                    result: a.volume.classify(&b.volume),
                });
            }
            for p in &scene.points {
                report.points.push(PairResult {
                    subject: a.name.clone(),
                    operand: p.name.clone(),
                    result: a.volume.classify(&p.point),
                });
            }
        }
        report
    }

    /// Number of volume and point results equal to `kind`.
    pub fn count(&self, kind: Containment) -> usize {
        self.volumes
            .iter()
            .chain(&self.points)
            .filter(|r| r.result == kind)
            .count()
    }

    /// Looks up the result for `subject` against `operand`.
    pub fn lookup(&self, subject: &str, operand: &str) -> Option<Containment> {
        self.volumes
            .iter()
            .chain(&self.points)
            .find(|r| r.subject == subject && r.operand == operand)
            .map(|r| r.result)
    }
}
