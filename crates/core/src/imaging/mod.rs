//! Imaging module - contract for the external image studio service.

mod imaging_errors;
mod imaging_traits;

pub use imaging_errors::ImageStudioError;
pub use imaging_traits::ImageStudioProvider;
