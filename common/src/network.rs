pub mod address;
pub mod record;
