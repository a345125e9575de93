pub mod thumbnail;

pub use thumbnail::{ResizeConfig, StoredThumbnail, ThumbnailProcessor, ThumbnailService};
