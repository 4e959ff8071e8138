pub mod date;
pub mod errors;
pub mod page;
pub mod table;

pub use date::{format_date, month_key};
pub use errors::{extract_error_message, PricecastError};
pub use page::{WindowNavigator, WINDOW_SIZE};
pub use table::{points_table, Table};
