/// Month in which an academic year begins (April)
pub const ACADEMIC_YEAR_START_MONTH: u32 = 4;

/// Offset of the campus civil timezone from UTC, in seconds (Asia/Tokyo, no DST)
pub const CIVIL_UTC_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Number of week rows in a month grid
pub const GRID_ROWS: usize = 6;
/// Number of day columns in a month grid (Monday through Sunday)
pub const GRID_COLUMNS: usize = 7;
/// Total cells in a month grid
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLUMNS;

/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';
