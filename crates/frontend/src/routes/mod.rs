pub mod routes;
pub mod screen;
