mod basic;
mod custom_table;
