use crate::domain::model::MacroFeatures;
use crate::domain::ports::CalorieModel;
use crate::utils::error::{NutriError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk classifier, a JSON document tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    RandomForest { trees: Vec<DecisionTree> },
    Logistic { weights: [f64; 3], bias: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        p_high: f64,
    },
}

impl ModelArtifact {
    /// 從 JSON 檔案載入模型；檔案不存在視為啟動失敗
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => NutriError::MissingArtifact {
                kind: "Model".to_string(),
                path: path.display().to_string(),
            },
            _ => NutriError::IoError(e),
        })?;
        let artifact = Self::from_json_str(&content)?;
        tracing::debug!("Loaded {} from {}", artifact.describe(), path.display());
        Ok(artifact)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(content).map_err(|e| NutriError::ModelError {
                message: format!("unreadable model document: {}", e),
            })?;
        artifact.check()?;
        Ok(artifact)
    }

    pub fn describe(&self) -> String {
        match self {
            ModelArtifact::RandomForest { trees } => format!("random forest ({} trees)", trees.len()),
            ModelArtifact::Logistic { .. } => "logistic model".to_string(),
        }
    }

    fn check(&self) -> Result<()> {
        match self {
            ModelArtifact::RandomForest { trees } => {
                if trees.is_empty() {
                    return Err(model_error("random forest has no trees"));
                }
                for (i, tree) in trees.iter().enumerate() {
                    tree.check().map_err(|e| match e {
                        NutriError::ModelError { message } => NutriError::ModelError {
                            message: format!("tree {}: {}", i, message),
                        },
                        other => other,
                    })?;
                }
                Ok(())
            }
            ModelArtifact::Logistic { weights, bias } => {
                if weights.iter().chain(std::iter::once(bias)).all(|w| w.is_finite()) {
                    Ok(())
                } else {
                    Err(model_error("logistic coefficients must be finite"))
                }
            }
        }
    }
}

impl DecisionTree {
    fn check(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(model_error("tree has no nodes"));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= MacroFeatures::LEN {
                        return Err(model_error(&format!(
                            "node {} splits on feature {}, only {} features exist",
                            idx,
                            feature,
                            MacroFeatures::LEN
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(model_error(&format!("node {} has a non-finite threshold", idx)));
                    }
                    // children must point forward so traversal always reaches a leaf
                    for child in [left, right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(model_error(&format!(
                                "node {} has invalid child index {}",
                                idx, child
                            )));
                        }
                    }
                }
                TreeNode::Leaf { p_high } => {
                    if !(0.0..=1.0).contains(&p_high) {
                        return Err(model_error(&format!(
                            "leaf {} has probability {} outside [0, 1]",
                            idx, p_high
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn p_high(&self, x: &[f64; 3]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if x[feature] <= threshold { left } else { right };
                }
                TreeNode::Leaf { p_high } => return p_high,
            }
        }
    }
}

impl CalorieModel for ModelArtifact {
    fn predict(&self, features: &MacroFeatures) -> u8 {
        let x = features.as_array();
        match self {
            ModelArtifact::RandomForest { trees } => {
                let mean = trees.iter().map(|t| t.p_high(&x)).sum::<f64>() / trees.len() as f64;
                u8::from(mean > 0.5)
            }
            ModelArtifact::Logistic { weights, bias } => {
                let z: f64 = weights.iter().zip(x.iter()).map(|(w, v)| w * v).sum::<f64>() + bias;
                u8::from(z > 0.0)
            }
        }
    }
}

fn model_error(message: &str) -> NutriError {
    NutriError::ModelError {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STUMP_FOREST: &str = r#"{
        "kind": "random_forest",
        "trees": [
            {"nodes": [
                {"feature": 2, "threshold": 20.0, "left": 1, "right": 2},
                {"p_high": 0.1},
                {"p_high": 0.9}
            ]},
            {"nodes": [
                {"feature": 1, "threshold": 60.0, "left": 1, "right": 2},
                {"p_high": 0.2},
                {"p_high": 0.8}
            ]}
        ]
    }"#;

    #[test]
    fn test_random_forest_majority() {
        let model = ModelArtifact::from_json_str(STUMP_FOREST).unwrap();
        assert_eq!(model.predict(&MacroFeatures::new(50.0, 100.0, 30.0)), 1);
        assert_eq!(model.predict(&MacroFeatures::new(5.0, 10.0, 2.0)), 0);
    }

    #[test]
    fn test_random_forest_averages_probabilities() {
        let model = ModelArtifact::from_json_str(STUMP_FOREST).unwrap();
        let mixed = MacroFeatures::new(0.0, 10.0, 30.0);
        // 0.9 and 0.2 average to 0.55
        assert_eq!(model.predict(&mixed), 1);
    }

    #[test]
    fn test_random_forest_tie_is_low() {
        let mixed = MacroFeatures::new(0.0, 10.0, 30.0);
        let tie = r#"{"kind": "random_forest", "trees": [
            {"nodes": [{"p_high": 1.0}]},
            {"nodes": [{"p_high": 0.0}]}
        ]}"#;
        let model = ModelArtifact::from_json_str(tie).unwrap();
        assert_eq!(model.predict(&mixed), 0);
    }

    #[test]
    fn test_logistic_model() {
        let json = r#"{"kind": "logistic", "weights": [0.04, 0.04, 0.09], "bias": -6.0}"#;
        let model = ModelArtifact::from_json_str(json).unwrap();
        assert_eq!(model.predict(&MacroFeatures::new(50.0, 100.0, 30.0)), 1);
        assert_eq!(model.predict(&MacroFeatures::new(0.0, 0.0, 0.0)), 0);
    }

    #[test]
    fn test_rejects_bad_feature_index() {
        let json = r#"{"kind": "random_forest", "trees": [{"nodes": [
            {"feature": 3, "threshold": 1.0, "left": 1, "right": 2},
            {"p_high": 0.0},
            {"p_high": 1.0}
        ]}]}"#;
        assert!(matches!(
            ModelArtifact::from_json_str(json),
            Err(NutriError::ModelError { .. })
        ));
    }

    #[test]
    fn test_rejects_cyclic_tree() {
        let json = r#"{"kind": "random_forest", "trees": [{"nodes": [
            {"feature": 0, "threshold": 1.0, "left": 0, "right": 1},
            {"p_high": 1.0}
        ]}]}"#;
        assert!(ModelArtifact::from_json_str(json).is_err());
    }

    #[test]
    fn test_rejects_empty_forest_and_bad_probability() {
        assert!(ModelArtifact::from_json_str(r#"{"kind": "random_forest", "trees": []}"#).is_err());
        assert!(ModelArtifact::from_json_str(
            r#"{"kind": "random_forest", "trees": [{"nodes": [{"p_high": 1.5}]}]}"#
        )
        .is_err());
        assert!(ModelArtifact::from_json_str(r#"{"kind": "svm"}"#).is_err());
    }

    #[test]
    fn test_missing_file_is_missing_artifact() {
        let err = ModelArtifact::from_file("/definitely/not/here/nutrition_model.json").unwrap_err();
        assert!(matches!(err, NutriError::MissingArtifact { .. }));
    }
}
