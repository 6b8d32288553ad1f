mod error;
mod extractors;
