//! Points per accepted word

/// Points for a normalized word of `len` letters
///
/// | length | points |
/// |--------|--------|
/// | 0-2    | 0      |
/// | 3-4    | 1      |
/// | 5      | 2      |
/// | 6      | 3      |
/// | 7      | 5      |
/// | 8+     | 11     |
#[must_use]
pub const fn points_for_length(len: usize) -> u32 {
    match len {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}
