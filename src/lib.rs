//! # Kinemap - Cross-Modal Self-Organizing Maps
//!
//! Kinemap learns a low-dimensional topological map of two correlated
//! sensory streams (e.g. hand positions and joint angles recorded during
//! exploratory robot motion) and links the two maps with a Hebbian
//! association tensor, so an observation in one modality predicts the
//! corresponding configuration in the other.
//!
//! ## Overview
//!
//! Two [`Som`] instances are trained independently, one per modality,
//! by online competitive learning with decaying learning-rate and
//! neighborhood schedules. A single pass over the time-aligned sample
//! pairs then correlates the winning nodes of the two maps into an
//! [`AssociationTensor`], and a [`CrossModalPredictor`] reads the
//! tensor to map new observations across modalities.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kinemap::{
//!     hebbian_learning, Config, CrossModalPredictor, Som, SomTrainer,
//! };
//!
//! let config = Config::default();
//!
//! // Train one map per modality, independently.
//! let mut som_hands = Som::new(&config.som_a, hand_samples)?;
//! SomTrainer::new(config.som_a.clone()).train(&mut som_hands, 1000)?;
//!
//! let mut som_joints = Som::new(&config.som_b, joint_samples)?;
//! SomTrainer::new(config.som_b.clone()).train(&mut som_joints, 1000)?;
//!
//! // Correlate co-occurring winners, then predict across modalities.
//! let tensor = hebbian_learning(&som_hands, &som_joints, &config.hebbian)?;
//! let predictor = CrossModalPredictor::new(&tensor, &som_hands, &som_joints)?;
//! let predicted_joints = predictor.predict(&observed_hand)?;
//! ```
//!
//! ## Architecture
//!
//! - [`som`] - self-organizing map engine (one instance per modality)
//! - [`hebbian`] - association tensor built from paired winners
//! - [`predict`] - cross-modal lookup and evaluation
//!
//! Sample acquisition, column selection, and visualization are left to
//! callers; the crate consumes in-memory vector sequences and exposes
//! initial/final weights, win counts, and predictions for reporting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod hebbian;
pub mod predict;
pub mod som;

// Re-export commonly used types
pub use config::{Config, HebbianConfig, SampleOrder, SomConfig, WeightInit};
pub use error::{KinemapError, Result};
pub use hebbian::{hebbian_learning, AssociationTensor};
pub use predict::CrossModalPredictor;
pub use som::{Node, Som, SomTrainer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of grid rows per map.
pub const DEFAULT_GRID_ROWS: usize = 10;

/// Default number of grid columns per map.
pub const DEFAULT_GRID_COLS: usize = 10;
