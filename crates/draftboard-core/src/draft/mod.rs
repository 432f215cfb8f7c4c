// Draft inputs: picks, positions and the caller's roster composition.

pub mod pick;
pub mod roster;
