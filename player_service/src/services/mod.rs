//! Real dependency implementations backed by reqwest

pub mod game_client;
pub mod random_source;
pub mod score_client;

pub use game_client::HttpGameClient;
pub use random_source::HttpRandomSource;
pub use score_client::HttpScoreClient;

#[cfg(test)]
mod tests;
