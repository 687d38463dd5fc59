pub mod random_points;
