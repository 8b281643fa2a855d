pub mod menu_controller;
