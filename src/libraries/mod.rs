pub mod proximity_check;
