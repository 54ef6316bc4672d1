/// Direction of a carousel step. `Right` shows the next image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Index reached by one step from `current` in a carousel of `total` images.
///
/// Wraps at both ends. `total` must be at least 1.
pub fn advance(direction: Direction, current: usize, total: usize) -> usize {
    debug_assert!(total >= 1, "carousel must hold at least one image");
    match direction {
        Direction::Right => (current + 1) % total,
        Direction::Left => (current + total - 1) % total,
    }
}

/// Normalizes `current + offset` into `[0, total)` for any signed offset.
pub fn wrap_offset(current: usize, offset: isize, total: usize) -> usize {
    debug_assert!(total >= 1, "carousel must hold at least one image");
    let total_i = total as isize;
    ((current as isize + offset) % total_i + total_i) as usize % total
}
