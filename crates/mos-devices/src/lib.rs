pub mod square_law;
