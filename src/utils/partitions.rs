use log::debug;

use crate::utils::errors::UtilsError;

/// Split `0..len` into exactly `chunks` contiguous, ordered ranges whose
/// lengths differ by at most one. The longer ranges come first; when
/// `len < chunks` the trailing ranges are empty.
///
/// # Errors
///
/// Returns an error if `chunks` is zero.
pub fn split_ranges(len: usize, chunks: usize) -> Result<Vec<(usize, usize)>, UtilsError> {
    if chunks == 0 {
        return Err(UtilsError::ZeroChunks);
    }

    let base = len / chunks;
    let longer = len % chunks;

    let mut ranges = Vec::with_capacity(chunks);
    let mut start = 0;
    for idx in 0..chunks {
        let size = if idx < longer { base + 1 } else { base };
        ranges.push((start, start + size));
        start += size;
    }

    debug!(
        "Split {} items into {} ranges of {}..={} items",
        len,
        chunks,
        base,
        if longer > 0 { base + 1 } else { base }
    );
    Ok(ranges)
}

/// Copy `items` into [`split_ranges`] chunks
///
/// # Errors
///
/// Returns an error if `chunks` is zero.
pub fn split_into_chunks<T: Clone>(items: &[T], chunks: usize) -> Result<Vec<Vec<T>>, UtilsError> {
    Ok(split_ranges(items.len(), chunks)?
        .into_iter()
        .map(|(start, end)| items.get(start..end).map(<[T]>::to_vec).unwrap_or_default())
        .collect())
}
