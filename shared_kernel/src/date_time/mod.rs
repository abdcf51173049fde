pub mod time_frame;
pub mod zoned_date_time;
