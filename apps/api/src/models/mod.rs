pub mod career;
pub mod learning;
pub mod market;
pub mod skill;
