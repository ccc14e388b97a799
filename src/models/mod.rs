pub mod daily_record;
pub mod food_entry;
