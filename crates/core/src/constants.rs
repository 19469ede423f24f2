use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Days per year used to convert annual mortality into a daily rate
pub const DAYS_PER_YEAR: Decimal = dec!(365);

/// Default expected progeny per breeder when data entry leaves it blank
pub const DEFAULT_CALVING_RATE: Decimal = dec!(0.85);

/// Default staleness window for cached portfolio summaries, in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
