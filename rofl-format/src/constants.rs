//! Constants for the ROFL metadata region

/// Literal opening fragment of the embedded metadata JSON object.
///
/// The container carries no length prefix or offset table for this region,
/// so the object is found by searching for its first key byte-for-byte.
pub const METADATA_MARKER: &[u8] = b"{\"gameLength\"";

/// Envelope key holding the replay duration.
pub const KEY_GAME_LENGTH: &str = "gameLength";
/// Envelope key holding the id of the last payload chunk.
pub const KEY_LAST_GAME_CHUNK_ID: &str = "lastGameChunkId";
/// Envelope key holding the id of the last keyframe.
pub const KEY_LAST_KEY_FRAME_ID: &str = "lastKeyFrameId";
/// Envelope key holding the string-encoded per-player stats array.
pub const KEY_STATS_JSON: &str = "statsJson";
