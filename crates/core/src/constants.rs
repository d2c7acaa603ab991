use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fallback goal amount used before the user saves their first goal
pub const DEFAULT_TARGET_AMOUNT: Decimal = dec!(30000);

/// Fallback goal horizon, measured in years from "today" at first load
pub const DEFAULT_GOAL_HORIZON_YEARS: u32 = 2;

/// Average month length in days, used to turn a day count into the
/// recommended-monthly figure
pub const AVG_DAYS_PER_MONTH: Decimal = dec!(30.437);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
