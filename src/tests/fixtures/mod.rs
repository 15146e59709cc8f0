pub mod absences;
pub mod app;
pub mod employees;
pub mod imports;
pub mod schedules;
