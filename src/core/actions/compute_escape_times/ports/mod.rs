pub mod iteration_formula;
