//! HTTP request handlers for the public listener.

pub mod redirect;

pub use redirect::redirect_handler;
