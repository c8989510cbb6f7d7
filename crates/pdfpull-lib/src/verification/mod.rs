pub mod content_digest_hasher;
mod integrity;

pub use content_digest_hasher::{CHUNK_SIZE, ContentDigestHasher, sha256_file};
pub use integrity::verify_outcomes;
