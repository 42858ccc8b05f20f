pub mod a001_booking;
