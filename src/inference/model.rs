//! Reference scaler and classifier implementations
//!
//! Inference-only stand-ins for the trained artifacts: an affine
//! min/max scaler and a dense softmax network, both deserialized from
//! JSON files produced at training time. Loaded once at process startup
//! and shared read-only across requests; nothing here mutates after
//! construction, so concurrent calls are safe.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::extraction::errors::{ChartError, ChartResult};
use crate::inference::traits::{Classifier, Scaler, N_CLASSES, WINDOW_SIZE};

/// Min/max feature scaler with parameters fixed at training time
///
/// Maps `x` to `(x - data_min) / (data_max - data_min)`, the same
/// transform the classifier saw during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub data_min: f64,
    pub data_max: f64,
}

impl MinMaxScaler {
    /// Load scaler parameters from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the scaler parameter file
    ///
    /// # Returns
    /// The scaler, or `ModelError` when the file is missing or malformed
    pub fn load_json<P: AsRef<Path>>(path: P) -> ChartResult<MinMaxScaler> {
        let file = File::open(path.as_ref())
            .map_err(|e| ChartError::ModelError(format!("scaler file: {}", e)))?;
        let scaler: MinMaxScaler = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ChartError::ModelError(format!("scaler file: {}", e)))?;

        if scaler.data_max <= scaler.data_min {
            return Err(ChartError::ModelError(format!(
                "scaler range is empty: data_min={}, data_max={}",
                scaler.data_min, scaler.data_max
            )));
        }

        info!(
            "Loaded scaler: data_min={}, data_max={}",
            scaler.data_min, scaler.data_max
        );
        Ok(scaler)
    }
}

impl Scaler for MinMaxScaler {
    fn transform(&self, window: &[f64]) -> ChartResult<Vec<f64>> {
        let span = self.data_max - self.data_min;
        if span <= 0.0 {
            return Err(ChartError::CollaboratorFailure(
                "scaler has an empty value range".to_string(),
            ));
        }
        Ok(window.iter().map(|&x| (x - self.data_min) / span).collect())
    }
}

/// Element-wise activation for a dense layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    ReLU,
    Identity,
    /// Vector-valued; applied over the whole layer output
    Softmax,
}

/// One fully connected layer: `output = activation(W * input + b)`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    /// Row-major weight matrix, one row per output unit
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
    pub activation: Activation,
}

impl DenseLayer {
    fn forward(&self, input: &[f64]) -> ChartResult<Vec<f64>> {
        let mut output = Vec::with_capacity(self.weights.len());
        for (row, bias) in self.weights.iter().zip(self.biases.iter()) {
            if row.len() != input.len() {
                return Err(ChartError::CollaboratorFailure(format!(
                    "layer expects {} inputs, got {}",
                    row.len(),
                    input.len()
                )));
            }
            let z: f64 = row.iter().zip(input.iter()).map(|(w, x)| w * x).sum::<f64>() + bias;
            output.push(z);
        }

        match self.activation {
            Activation::ReLU => {
                for v in output.iter_mut() {
                    if *v < 0.0 {
                        *v = 0.0;
                    }
                }
            }
            Activation::Identity => {}
            Activation::Softmax => softmax_in_place(&mut output),
        }

        Ok(output)
    }
}

/// Numerically stable full-vector softmax
fn softmax_in_place(values: &mut [f64]) {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for v in values.iter_mut() {
        *v = (*v - max).exp();
        sum += *v;
    }
    for v in values.iter_mut() {
        *v /= sum;
    }
}

/// Dense softmax network consuming the scaled window as a flat vector
///
/// The single-sequence batch of shape (1, WINDOW_SIZE, 1) that the
/// trained model expects collapses to a plain WINDOW_SIZE vector here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseClassifier {
    pub layers: Vec<DenseLayer>,
}

impl DenseClassifier {
    /// Load network weights from a JSON file
    ///
    /// Validates the layer chain: the first layer must accept
    /// `WINDOW_SIZE` inputs and the last must emit `N_CLASSES` outputs.
    ///
    /// # Arguments
    /// * `path` - Path to the model weight file
    ///
    /// # Returns
    /// The classifier, or `ModelError` when the file is missing,
    /// malformed or shaped wrong
    pub fn load_json<P: AsRef<Path>>(path: P) -> ChartResult<DenseClassifier> {
        let file = File::open(path.as_ref())
            .map_err(|e| ChartError::ModelError(format!("model file: {}", e)))?;
        let model: DenseClassifier = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ChartError::ModelError(format!("model file: {}", e)))?;

        model.validate()?;
        info!("Loaded classifier with {} layers", model.layers.len());
        Ok(model)
    }

    fn validate(&self) -> ChartResult<()> {
        let first = self
            .layers
            .first()
            .ok_or_else(|| ChartError::ModelError("model has no layers".to_string()))?;
        let last = self.layers.last().unwrap_or(first);

        for (i, layer) in self.layers.iter().enumerate() {
            if layer.biases.len() != layer.weights.len() {
                return Err(ChartError::ModelError(format!(
                    "layer {}: {} bias values for {} output units",
                    i,
                    layer.biases.len(),
                    layer.weights.len()
                )));
            }
        }

        let input_size = first.weights.first().map(|row| row.len()).unwrap_or(0);
        if input_size != WINDOW_SIZE {
            return Err(ChartError::ModelError(format!(
                "model expects {} inputs, window size is {}",
                input_size, WINDOW_SIZE
            )));
        }
        if last.weights.len() != N_CLASSES {
            return Err(ChartError::ModelError(format!(
                "model emits {} outputs, expected {} classes",
                last.weights.len(),
                N_CLASSES
            )));
        }
        Ok(())
    }
}

impl Classifier for DenseClassifier {
    fn classify(&self, window: &[f64]) -> ChartResult<[f64; N_CLASSES]> {
        let mut current = window.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }

        if current.len() != N_CLASSES {
            return Err(ChartError::CollaboratorFailure(format!(
                "network produced {} outputs, expected {}",
                current.len(),
                N_CLASSES
            )));
        }
        Ok([current[0], current[1], current[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaler_maps_training_range_to_unit() {
        let scaler = MinMaxScaler { data_min: 100.0, data_max: 200.0 };
        let out = scaler.transform(&[100.0, 150.0, 200.0]).unwrap();
        assert_eq!(out, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let mut values = vec![1.0, 2.0, 3.0];
        softmax_in_place(&mut values);
        let sum: f64 = values.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(values[2] > values[1] && values[1] > values[0]);
    }

    #[test]
    fn test_single_layer_network_classifies() {
        // One unit per class, each summing the whole window
        let layer = DenseLayer {
            weights: vec![vec![0.0; WINDOW_SIZE], vec![0.01; WINDOW_SIZE], vec![0.02; WINDOW_SIZE]],
            biases: vec![0.0; 3],
            activation: Activation::Softmax,
        };
        let model = DenseClassifier { layers: vec![layer] };

        let probs = model.classify(&vec![1.0; WINDOW_SIZE]).unwrap();
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(
            crate::inference::prediction::argmax(&probs),
            2
        );
    }

    #[test]
    fn test_short_bias_vector_is_rejected_at_load() {
        // Two bias values for three output units: the zip in forward()
        // would silently truncate the layer, so loading must refuse it
        let model = DenseClassifier {
            layers: vec![DenseLayer {
                weights: vec![vec![0.0; WINDOW_SIZE]; 3],
                biases: vec![0.0; 2],
                activation: Activation::Softmax,
            }],
        };

        let path = std::env::temp_dir().join("trendkit_bad_biases.json");
        std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();

        match DenseClassifier::load_json(&path) {
            Err(ChartError::ModelError(msg)) => assert!(msg.contains("bias")),
            other => panic!("Expected ModelError, got {:?}", other.map(|m| m.layers.len())),
        }
    }

    #[test]
    fn test_mismatched_input_is_collaborator_failure() {
        let layer = DenseLayer {
            weights: vec![vec![1.0; 10]; 3],
            biases: vec![0.0; 3],
            activation: Activation::Softmax,
        };
        let model = DenseClassifier { layers: vec![layer] };

        match model.classify(&vec![0.0; WINDOW_SIZE]) {
            Err(crate::extraction::errors::ChartError::CollaboratorFailure(_)) => {}
            other => panic!("Expected CollaboratorFailure, got {:?}", other),
        }
    }
}
