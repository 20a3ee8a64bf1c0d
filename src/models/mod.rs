mod input;
mod period;
mod record;

pub use input::{parse_amount, parse_int};
pub use period::{month_name, Period, INVALID_MONTH};
pub use record::{NewRemittance, RemittanceRecord};
