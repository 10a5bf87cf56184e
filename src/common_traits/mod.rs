mod clone;
mod debug;
mod default;
mod eq;
mod from;
mod from_iter;
mod into;
mod into_iter;
