pub mod menu_session;
