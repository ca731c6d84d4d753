mod cell;
mod codec;
mod error;
mod world;


pub use crate::{
    cell::Cell,
    error::{ParseError, WorldError},
    world::World,
};
