mod client;

pub use client::{PageFetcher, PageSource};
