pub mod health;
pub mod sugerencias;
