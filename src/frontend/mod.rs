pub mod app;
pub mod components;
pub mod navigation;
pub mod pages;
