// Widget state management

pub mod profile_widget;
