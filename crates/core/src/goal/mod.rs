//! Goal module - the savings target, services, and traits.

mod goal_errors;
mod goal_model;
mod goal_service;
mod goal_traits;


#[cfg(test)]
mod goal_service_tests;

pub use goal_errors::GoalError;
pub use goal_model::Goal;
pub use goal_service::GoalService;
pub use goal_traits::{GoalRepositoryTrait, GoalServiceTrait};
