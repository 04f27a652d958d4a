pub mod hosting_steps;
