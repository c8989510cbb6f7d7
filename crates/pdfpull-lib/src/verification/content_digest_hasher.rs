use digest::Digest;
use sha2::Sha256;
use std::io::Read;
use std::path::Path;

/// Size of the chunks fed to the hasher and written to disk.
pub const CHUNK_SIZE: usize = 4096;

/// Incremental SHA-256 over streamed document content.
#[derive(Default)]
pub struct ContentDigestHasher {
    hasher: Sha256,
}

impl ContentDigestHasher {
    #[inline]
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    #[inline]
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        Digest::update(&mut self.hasher, data.as_ref());
    }

    /// Lowercase hex digest.
    pub fn finalize_hex(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

/// Hashes a file on disk without loading it into memory.
pub fn sha256_file(path: &Path) -> std::io::Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = ContentDigestHasher::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            ContentDigestHasher::new().finalize_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_chunked_update_matches_single_update() {
        let data = vec![7u8; CHUNK_SIZE * 3 + 17];

        let mut whole = ContentDigestHasher::new();
        whole.update(&data);

        let mut chunked = ContentDigestHasher::new();
        for chunk in data.chunks(CHUNK_SIZE) {
            chunked.update(chunk);
        }

        assert_eq!(whole.finalize_hex(), chunked.finalize_hex());
    }

    #[test]
    fn test_sha256_file_known_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello\n").unwrap();
        file.flush().unwrap();

        assert_eq!(
            sha256_file(file.path()).unwrap(),
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
    }
}
