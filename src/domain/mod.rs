pub mod dimension;
pub mod song;
