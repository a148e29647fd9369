mod property_append;
mod utils;
