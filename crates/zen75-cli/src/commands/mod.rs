pub mod check;
pub mod interactive;
pub mod morning;
pub mod reset;
pub mod review;
pub mod status;
