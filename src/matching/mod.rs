pub mod criteria;
pub mod pipeline;
pub mod scoring;
pub mod weights;
