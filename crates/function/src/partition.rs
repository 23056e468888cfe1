//! Splitting an ordered sequence of samples into contiguous segments.
//!
//! Adjacent segments share their boundary sample: the last sample of a
//! segment is the first sample of the next one. Segment sizes are computed
//! over the conceptual length `len + parts - 1` (every inner boundary counted
//! twice) by rounding the cumulative targets `total * i / parts`, so sizes
//! differ by at most one and rounding errors never accumulate.
//!
//! ```
//! use riemann_function::partition;
//!
//! let samples = [0, 1, 2, 3, 4, 5, 6];
//! let parts = partition(&samples, 3);
//! assert_eq!(parts, vec![&samples[0..3], &samples[2..5], &samples[4..7]]);
//! ```

/// Computes the size of each segment when splitting `len` samples into
/// `parts` segments that share their boundaries.
///
/// A part count of zero is treated as one and counts above `len` are
/// reduced to `len`. Returns an empty vector if there are no samples.
pub fn partition_sizes(len: usize, parts: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let parts = clamp_parts(parts, len);

    let total = (len + parts - 1) as f64;
    let mut previous = 0.0;
    let mut sizes = Vec::with_capacity(parts);
    for i in 1..=parts {
        let target = (total * i as f64 / parts as f64).round();
        sizes.push((target - previous) as usize);
        previous = target;
    }

    sizes
}

/// Splits `samples` into `parts` contiguous slices that share their boundary
/// elements.
///
/// A part count of zero is treated as one. Returns an empty vector if there
/// are no samples. There are never more slices than samples.
pub fn partition<T>(samples: &[T], parts: usize) -> Vec<&[T]> {
    let sizes = partition_sizes(samples.len(), parts);

    let mut result = Vec::with_capacity(sizes.len());
    let mut start = 0;
    for size in sizes {
        let end = (start + size).min(samples.len());
        result.push(&samples[start..end]);
        start += size.saturating_sub(1);
    }

    result
}

fn clamp_parts(parts: usize, len: usize) -> usize {
    if parts == 0 {
        log::warn!("Partitioning into zero parts, using a single part instead.");
        return 1;
    }

    if parts > len {
        log::debug!("Partitioning {} samples into {} parts, using {} parts instead.", len, parts, len);
        return len;
    }

    parts
}

#[test]
fn single_part() {
    let samples: Vec<u32> = (0..10).collect();
    let parts = partition(&samples, 1);
    assert_eq!(parts, vec![&samples[..]]);
}

#[test]
fn zero_parts() {
    let samples: Vec<u32> = (0..10).collect();
    let parts = partition(&samples, 0);
    assert_eq!(parts, vec![&samples[..]]);
}

#[test]
fn empty_samples() {
    let samples: [u32; 0] = [];
    assert!(partition(&samples, 4).is_empty());
    assert!(partition_sizes(0, 4).is_empty());
}

#[test]
fn even_split() {
    // 9 samples, 4 parts: conceptual total of 12, 3 samples per part.
    assert_eq!(partition_sizes(9, 4), vec![3, 3, 3, 3]);

    let samples: Vec<u32> = (0..9).collect();
    let parts = partition(&samples, 4);
    assert_eq!(parts[0], &[0, 1, 2]);
    assert_eq!(parts[1], &[2, 3, 4]);
    assert_eq!(parts[2], &[4, 5, 6]);
    assert_eq!(parts[3], &[6, 7, 8]);
}

#[test]
fn fewer_samples_than_parts() {
    let samples = [7u32];
    let parts = partition(&samples, 3);
    assert_eq!(parts, vec![&samples[..]]);

    let samples = [1u32, 2, 3];
    let parts = partition(&samples, 5);
    assert_eq!(parts, vec![&samples[0..1], &samples[1..2], &samples[2..3]]);
}

#[test]
fn huge_part_count() {
    let samples: Vec<u32> = (0..11).collect();
    assert_eq!(partition_sizes(11, usize::MAX), vec![1; 11]);

    let parts = partition(&samples, usize::MAX);
    assert_eq!(parts.len(), 11);
    assert_eq!(parts[10], &[10]);
}

#[test]
fn partition_properties() {
    for len in 1..120 {
        for parts in 1..=len.min(25) {
            let samples: Vec<usize> = (0..len).collect();
            let segments = partition(&samples, parts);
            assert_eq!(segments.len(), parts);

            let min = segments.iter().map(|s| s.len()).min().unwrap();
            let max = segments.iter().map(|s| s.len()).max().unwrap();
            assert!(max - min <= 1, "len {} parts {}: sizes {} and {}", len, parts, min, max);

            // Counting shared boundaries once gives back the input.
            let total: usize = segments.iter().map(|s| s.len()).sum::<usize>() - (parts - 1);
            assert_eq!(total, len);

            assert_eq!(segments[0][0], 0);
            assert_eq!(*segments[parts - 1].last().unwrap(), len - 1);
            for pair in segments.windows(2) {
                assert_eq!(pair[0].last(), pair[1].first());
            }
        }
    }
}
