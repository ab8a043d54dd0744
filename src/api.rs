pub mod givenergy;
pub mod openweathermap;
