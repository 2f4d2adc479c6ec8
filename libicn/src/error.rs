use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libicn` errors
pub enum Error {
    /// Error returned if the source ends before the fixed-offset raster
    /// header could be read in full
    #[error("malformed raster header")]
    MalformedHeader(#[source] std::io::Error),
    /// Error returned if a seek or read during pixel traversal runs past
    /// the end of the source
    #[error("raster data truncated at display row {row}")]
    TruncatedData {
        /// Display row being read when the source ran out
        row: u32,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },
    /// Error returned if the destination rejects a write
    #[error("destination rejected write")]
    WriteFailure(#[source] std::io::Error),
}
