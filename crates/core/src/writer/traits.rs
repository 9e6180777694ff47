//! Trait definitions for the writer module.

use async_trait::async_trait;

use super::error::WriteError;

/// A writer that persists artwork bytes for one artist.
#[async_trait]
pub trait Writer: Send + Sync {
    /// Returns the name of this writer implementation.
    fn name(&self) -> &str;

    /// Writes the artwork bytes for the given artist, overwriting any
    /// existing file at the destination path.
    async fn write(&self, artist: &str, data: &[u8]) -> Result<(), WriteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullWriter;

    #[async_trait]
    impl Writer for NullWriter {
        fn name(&self) -> &str {
            "null"
        }

        async fn write(&self, _artist: &str, _data: &[u8]) -> Result<(), WriteError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_writer_as_trait_object() {
        let writer: Box<dyn Writer> = Box::new(NullWriter);
        assert_eq!(writer.name(), "null");
        assert!(writer.write("Queen", b"jpeg bytes").await.is_ok());
    }
}
