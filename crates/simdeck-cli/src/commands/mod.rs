pub mod help;
pub mod print;
pub mod run;

#[cfg(test)]
mod print_tests;
#[cfg(test)]
mod run_tests;
