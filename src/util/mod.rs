// Utility Module
// File helpers shared by the workflow and the menu

pub mod file_ops;
