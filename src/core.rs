pub mod decision;
pub mod estimate;
pub mod timetable;
