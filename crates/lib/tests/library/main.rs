
mod game_project_tests;
mod propagation_tests;
mod resolution_tests;
