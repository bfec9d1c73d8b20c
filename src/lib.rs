//! Support utilities for quantum time-series regression workshops
//!
//! This crate provides the data-preparation side of a quantum machine
//! learning regression experiment: a family of one-dimensional target
//! signals to learn from, sliding-window helpers that reshape a flat series
//! into supervised (X, y) examples with a temporal train/validation split,
//! a half-mean-squared-error loss, and a callback that records objective
//! values during training. Plotting and circuit construction live outside
//! this crate; every component here only produces or transforms data.

pub mod callback;
pub mod loss;
pub mod target;
pub mod windowing;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::callback::RegressionCallback;
    pub use crate::loss::{square_loss, LossFunction, SquareLoss};
    pub use crate::target::Target;
    pub use crate::windowing::{
        make_windows, make_xy, split_train_val, TrainValSplit, WindowError,
    };
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
