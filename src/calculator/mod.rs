pub mod potential;
pub mod student;

pub use potential::{Coefficients, PotentialCalculator, PotentialScores};
pub use student::StudentPotential;
