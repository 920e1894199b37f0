/// Column index or column count.
pub type Col = u8;

/// Row index or row count. Row 0 is the header, guess rows start at 1.
pub type Row = u8;

pub const MIN_COLUMNS: Col = 3;
pub const MAX_COLUMNS: Col = 10;
pub const MIN_ROWS: Row = 3;
pub const MAX_ROWS: Row = 12;

/// Place-value column labels for the numeric mode, left to right.
pub(crate) const PLACE_VALUE_LABELS: [&str; MAX_COLUMNS as usize] =
    ["M", "hth", "tth", "th", "h", "t", "o", "tth", "hth", "M"];

pub(crate) const ORDINAL_LABELS: [&str; MAX_COLUMNS as usize] = [
    "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th",
];
