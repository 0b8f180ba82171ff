//! Domain layer - The note record as ntkpr stores it

pub mod note;

pub use note::Note;
