/// Minimum supported Gregorian year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum supported Gregorian year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Months in both calendar systems
pub const MONTHS_PER_YEAR: usize = 12;

/// Columns in a rendered month grid
pub const DAYS_PER_WEEK: usize = 7;

/// Upper bound on cells in a month grid (six full weeks)
pub const MAX_GRID_CELLS: usize = 42;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February (1-indexed)
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Zero-based Gregorian month (April) in which the Bengali year turns over
pub const NEW_YEAR_MONTH0: u8 = 3;
/// Day of `NEW_YEAR_MONTH0` on which Pohela Boishakh falls
pub const NEW_YEAR_DAY: u8 = 14;

/// Bengali year = Gregorian year - this, before Pohela Boishakh
pub const EPOCH_OFFSET_BEFORE_NEW_YEAR: i32 = 594;
/// Bengali year = Gregorian year - this, from Pohela Boishakh onwards
pub const EPOCH_OFFSET_FROM_NEW_YEAR: i32 = 593;

/// Gregorian (month, day) on which each Bengali month begins, Boishakh first.
///
/// These are fixed epoch constants, not recomputed astronomically.
pub const MONTH_STARTS: [(u8, u8); MONTHS_PER_YEAR] = [
    (4, 14),  // Boishakh
    (5, 15),  // Jyoishtho
    (6, 15),  // Asharh
    (7, 16),  // Shrabon
    (8, 16),  // Bhadro
    (9, 16),  // Ashwin
    (10, 17), // Kartik
    (11, 16), // Ogrohayon
    (12, 16), // Poush
    (1, 15),  // Magh
    (2, 14),  // Falgun
    (3, 16),  // Choitro
];

/// Entries of `MONTH_STARTS` from this index on fall in the next Gregorian year
pub const FIRST_MONTH_IN_NEXT_YEAR: usize = 9;

/// Number of month starts kept in a lookup table (two Bengali years)
pub const MONTH_START_TABLE_LEN: usize = 2 * MONTHS_PER_YEAR;

/// Boishakh through Ashwin all have this many days
pub const LONG_MONTH_DAYS: u8 = 31;
/// Kartik through Choitro have this many days outside leap years
pub const SHORT_MONTH_DAYS: u8 = 30;
/// Months with index below this are long months
pub const LONG_MONTH_COUNT: usize = 6;
/// Falgun gains a day when its February is a leap February
pub const LEAP_EXTENDED_MONTH: usize = 10;

/// Days to step past a window's end when moving to the next Bengali month
pub const NEXT_MONTH_OVERSHOOT_DAYS: u64 = 2;
/// Days to step back from a window's start when moving to the previous Bengali month
pub const PREVIOUS_MONTH_BACKTRACK_DAYS: u64 = 5;

/// Bengali numerals, indexed by the ASCII digit they replace
pub const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Bengali month names in Bengali script, Boishakh first
pub const BENGALI_MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "বৈশাখ",
    "জ্যৈষ্ঠ",
    "আষাঢ়",
    "শ্রাবণ",
    "ভাদ্র",
    "আশ্বিন",
    "কার্তিক",
    "অগ্রহায়ণ",
    "পৌষ",
    "মাঘ",
    "ফাল্গুন",
    "চৈত্র",
];

/// Bengali month names in Latin transliteration
pub const BENGALI_MONTH_NAMES_LATIN: [&str; MONTHS_PER_YEAR] = [
    "Boishakh",
    "Jyoishtho",
    "Asharh",
    "Shrabon",
    "Bhadro",
    "Ashwin",
    "Kartik",
    "Ogrohayon",
    "Poush",
    "Magh",
    "Falgun",
    "Choitro",
];

/// Gregorian month names in English
pub const GREGORIAN_MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Gregorian month names as written in Bengali
pub const GREGORIAN_MONTH_NAMES_BENGALI: [&str; MONTHS_PER_YEAR] = [
    "জানুয়ারী",
    "ফেব্রুয়ারী",
    "মার্চ",
    "এপ্রিল",
    "মে",
    "জুন",
    "জুলাই",
    "আগস্ট",
    "সেপ্টেম্বর",
    "অক্টোবর",
    "নভেম্বর",
    "ডিসেম্বর",
];

/// Gregorian grid column headers, Sunday first
pub const GREGORIAN_WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Bengali grid column headers, Saturday first
pub const BENGALI_WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = ["শনি", "রবি", "সোম", "মঙ্গল", "বুধ", "বৃহ", "শুক্র"];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
