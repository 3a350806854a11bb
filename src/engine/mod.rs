pub mod action;
pub mod direction;
pub mod game_loop;
pub mod session;
pub mod world;
