//! File-system storage for team pictures

mod store;

pub use store::PictureStore;
