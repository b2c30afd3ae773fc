pub mod decay;
pub mod lorenz;

pub use decay::ExponentialDecay;
pub use lorenz::{presets, LorenzParams, LorenzSystem};
