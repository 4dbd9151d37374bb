//! The two statistical primitives that parameterise most indicators.
//!
//! - [`central_tendency`]: reduces a window to one value ([`ConstantModelType`])
//! - [`deviation`]: measures the spread of a window ([`DeviationModel`])

pub mod central_tendency;
pub mod deviation;

pub use central_tendency::{
    central_tendency, exponential_moving_average, mean, median, mode, personalised_moving_average,
    smoothed_moving_average, ConstantModelType,
};
pub use deviation::{deviation, deviation_about, standard_deviation, ulcer_index, DeviationModel};
