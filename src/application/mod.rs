// Application layer - Loading, grouping and view state
pub mod dataset_source;
pub mod transformer;
pub mod view_controller;
