//! Shared test helpers: JSON-backed fixtures and a hand-rolled mock of
//! the Lens port.

mod fixtures;
mod mocks;

pub use fixtures::{
    article_metadata, audio_metadata, image_metadata, malformed_item, raw_item, repost_of_text,
    test_account, test_author, test_stats, text_post, video_metadata,
};
pub use mocks::MockLensApi;
