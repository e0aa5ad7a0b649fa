pub mod department;
pub mod fallback;
pub mod greeting;
pub mod location;
