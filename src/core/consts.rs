/// Longest run of blocks one move may shove along.
pub const DEFAULT_MAX_PUSH_BUDGET: usize = 3;
pub const MIN_TEMPLATE_ROWS: usize = 6;
pub const MIN_TEMPLATE_COLS: usize = 6;
