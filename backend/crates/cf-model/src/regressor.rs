use crate::{ModelError, Result};

use serde::{Deserialize, Serialize};

/// Fitted regression model over a dense feature row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Regressor {
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    TreeEnsemble(TreeEnsemble),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    #[default]
    Mean,
    Sum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub n_features: usize,
    pub trees: Vec<Tree>,
    #[serde(default)]
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

/// One decision tree in parallel-array form. Node 0 is the root; a node whose
/// left child is `-1` is a leaf and `value` holds its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

const LEAF: i64 = -1;

impl Tree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Children must point forward so traversal always terminates.
    pub fn validate(&self, n_features: usize) -> Result<()> {
        match self.check(n_features) {
            Ok(()) => Ok(()),
            Err(message) => Err(ModelError::invalid(message)),
        }
    }

    fn check(&self, n_features: usize) -> std::result::Result<(), String> {
        let nodes = self.node_count();
        if nodes == 0 {
            return Err("tree has no nodes".to_string());
        }
        let lengths = [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ];
        if lengths.iter().any(|len| *len != nodes) {
            return Err("tree node arrays differ in length".to_string());
        }

        for node in 0..nodes {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == LEAF {
                if right != LEAF {
                    return Err(format!("node {} has a right child but no left child", node));
                }
                continue;
            }

            for child in [left, right] {
                if child <= node as i64 || child >= nodes as i64 {
                    return Err(format!("node {} has out-of-range child {}", node, child));
                }
            }

            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!(
                    "node {} splits on feature {} of {}",
                    node, feature, n_features
                ));
            }
        }

        Ok(())
    }

    /// Caller guarantees the tree is validated and `row` is wide enough
    pub fn predict(&self, row: &[f64]) -> f64 {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let x = row[self.feature[node] as usize];
            node = if x <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        self.value[node]
    }
}

impl Regressor {
    /// Width of the feature row the model was fitted on
    pub fn input_width(&self) -> usize {
        match self {
            Self::Linear { coefficients, .. } => coefficients.len(),
            Self::TreeEnsemble(ensemble) => ensemble.n_features,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Linear { coefficients, intercept } => {
                if coefficients.is_empty() {
                    return Err(ModelError::invalid("linear model has no coefficients"));
                }
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(ModelError::invalid("linear model has non-finite parameters"));
                }
            }
            Self::TreeEnsemble(ensemble) => {
                if ensemble.trees.is_empty() {
                    return Err(ModelError::invalid("tree ensemble has no trees"));
                }
                for (index, tree) in ensemble.trees.iter().enumerate() {
                    if let Err(message) = tree.check(ensemble.n_features) {
                        return Err(ModelError::invalid(format!("tree {}: {}", index, message)));
                    }
                }
            }
        }
        Ok(())
    }

    /// Single output for one validated row of [`Self::input_width`] values
    pub fn predict(&self, row: &[f64]) -> f64 {
        match self {
            Self::Linear { coefficients, intercept } => {
                intercept + coefficients.iter().zip(row).map(|(c, x)| c * x).sum::<f64>()
            }
            Self::TreeEnsemble(ensemble) => {
                let total: f64 = ensemble.trees.iter().map(|tree| tree.predict(row)).sum();
                let aggregate = match ensemble.aggregation {
                    Aggregation::Sum => total,
                    Aggregation::Mean => total / ensemble.trees.len() as f64,
                };
                ensemble.base_score + ensemble.scale * aggregate
            }
        }
    }
}
