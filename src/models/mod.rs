pub mod department;
pub mod location;
