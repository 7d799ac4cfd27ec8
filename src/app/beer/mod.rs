//! 啤酒资源

pub mod handler;
pub mod model;
pub mod service;

pub use handler::{routes, AppState, DEFAULT_BASE_PATH};
pub use model::{BeerDto, BeerId, BeerStyle};
pub use service::{BeerService, InMemoryBeerService};
