pub mod field_error;
pub mod form_data;
pub mod toast;
