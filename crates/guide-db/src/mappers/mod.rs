//! Model -> entity mappers

mod availability;
mod booking;
mod complaint;
mod guide;
mod language;
