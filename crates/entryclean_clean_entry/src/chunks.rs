use entryclean_core::Compilation;
use log::{trace, warn};

use crate::{config::Settings, constants::LOG_PREFIX};

/// Removes the first occurrence of `file_name` from the compilation's chunk
/// file lists.
///
/// Chunks are scanned in order, skipping empty slots, and each chunk's files
/// in order. Scanning stops at the first match, so later chunks keep their
/// copy. Returns whether a file was removed.
pub fn unlink_chunk_file(
    settings: &Settings,
    compilation: &mut Compilation,
    file_name: &str,
) -> bool {
    if settings.verbose() {
        warn!("{}: removed {} from webpack stats", LOG_PREFIX, file_name);
    }

    if settings.dry_run() {
        return false;
    }

    for (idx, chunk) in compilation.chunks_mut().iter_mut().enumerate() {
        let Some(chunk) = chunk else {
            trace!("Skipping empty chunk slot {}", idx);
            continue;
        };
        if let Some(pos) = chunk.files.iter().position(|f| f == file_name) {
            trace!("Unlinking {} from chunk {}", file_name, idx);
            chunk.files.remove(pos);
            return true;
        }
    }

    trace!("{} not referenced by any chunk", file_name);
    false
}
