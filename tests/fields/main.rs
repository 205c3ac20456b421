mod common;
mod display;
mod equality;
mod substitution;
mod visibility;
